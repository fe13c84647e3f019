//! Business logic use cases
//!
//! Parameter input
//!   HandleInput → StyleSuggestions (memoized per SuggestionSession)
//!               → ListLibraries
//!
//! Run
//!   RunCommand → resolve + bind on selection
//!              → PublishLibrary / ToggleLibrary / RemoveLibrary

mod active_libraries;
pub mod library;
mod run_command;
pub mod suggestions;

pub use active_libraries::ActiveLibraries;
pub use run_command::{DispatchError, LibraryCommands, RunCommand, RunRequest};
