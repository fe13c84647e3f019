//! Domain model for the library styles plugin: identifiers, the compact style
//! codec, library entries, preview glyphs, suggestions and host ports.

pub mod command;
pub mod ids;
pub mod library;
pub mod ports;
pub mod preview;
pub mod style;
pub mod suggestion;

pub use command::{Command, InvalidCommand, StyleField};
pub use ids::{LibraryId, LocalId, NodeId, RemoteKey, StyleRef};
pub use library::{ActiveLibrarySet, LibraryEntry, LibraryStats};
pub use style::{StyleCategory, StyleRecord};
pub use suggestion::{SuggestionData, SuggestionRecord};
