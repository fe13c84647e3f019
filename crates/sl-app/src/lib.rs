//! Library styles plugin application layer
//!
//! Use cases for publishing, toggling and removing libraries, building
//! suggestion lists and dispatching run commands.

mod app;
pub mod deps;
pub mod messages;
pub mod settings;
pub mod usecases;

#[cfg(test)]
mod test_support;

pub use app::App;
pub use deps::AppDeps;
pub use settings::PluginSettings;
pub use usecases::suggestions::SuggestionSession;
pub use usecases::{DispatchError, RunRequest};
