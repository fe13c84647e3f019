//! Parameter-input suggestions.

mod handle_input;
mod session;
mod style_suggestions;

pub use handle_input::HandleInput;
pub use session::{QueryTicket, SuggestionSession};
pub use style_suggestions::StyleSuggestions;
