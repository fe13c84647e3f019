//! Suggestion list model and search.

mod record;
mod search;

pub use record::{display_name, SuggestionData, SuggestionRecord, SuggestionSource};
pub use search::fuzzy_filter;
