//! ID type wrappers for type safety.
//!
//! The host hands out two unrelated identifier spaces for styles and variables:
//! a session-local id that only resolves inside the open file, and a
//! content-addressed key that any file can import. They are separate types so
//! one can never be passed where the other is expected.

mod id_macro;
mod style_ref;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

pub use style_ref::StyleRef;

/// Session-local style or variable id, valid only within the current file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalId(String);

/// Globally resolvable style or variable key, used for remote import.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteKey(String);

/// Library identifier, conventionally the publishing file's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryId(String);

/// Host node handle from the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl_id!(LocalId, RemoteKey, LibraryId, NodeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_id_from_str() {
        let id: LibraryId = "Design System".into();
        assert_eq!(id.as_str(), "Design System");
        assert_eq!(id.to_string(), "Design System");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&RemoteKey::new("abc123")).unwrap();
        assert_eq!(json, "\"abc123\"");
        let back: RemoteKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "abc123");
    }
}
