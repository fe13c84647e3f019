//! Library publication and bookkeeping.

mod list_libraries;
mod publish_library;
mod remove_library;
mod store;
mod toggle_library;

pub use list_libraries::{LibraryListMode, LibraryListing, ListLibraries};
pub use publish_library::{PublishError, PublishLibrary, PublishOutcome};
pub use remove_library::RemoveLibrary;
pub use store::{LibraryStore, StoredStats};
pub use toggle_library::ToggleLibrary;
