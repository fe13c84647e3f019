use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::ids::LibraryId;

/// Libraries whose styles are merged into suggestions for one file.
///
/// Insertion ordered and free of duplicates. Persisted as a JSON array of ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveLibrarySet(IndexSet<LibraryId>);

impl ActiveLibrarySet {
    /// Parses the persisted form. An empty string is an empty set; duplicate
    /// ids in the input collapse to one.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> String {
        // A set of strings always serializes.
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: &LibraryId) -> bool {
        self.0.contains(id)
    }

    /// Flips membership and returns the new state.
    pub fn toggle(&mut self, id: LibraryId) -> bool {
        if self.0.shift_remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    /// Returns `true` if the id was not already present.
    pub fn insert(&mut self, id: LibraryId) -> bool {
        self.0.insert(id)
    }

    /// Returns `true` if the id was present.
    pub fn remove(&mut self, id: &LibraryId) -> bool {
        self.0.shift_remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LibraryId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<LibraryId> for ActiveLibrarySet {
    fn from_iter<T: IntoIterator<Item = LibraryId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> ActiveLibrarySet {
        ids.iter().map(|id| LibraryId::new(*id)).collect()
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        for start in [set(&[]), set(&["a"]), set(&["a", "b"]), set(&["b", "c"])] {
            let mut active = start.clone();
            let first = active.toggle(LibraryId::new("a"));
            let second = active.toggle(LibraryId::new("a"));
            assert_ne!(first, second);
            assert_eq!(
                active.contains(&LibraryId::new("a")),
                start.contains(&LibraryId::new("a"))
            );
            assert_eq!(active.len(), start.len());
        }
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut active = set(&["a"]);
        assert!(!active.insert(LibraryId::new("a")));
        assert!(active.insert(LibraryId::new("b")));
        assert_eq!(active.to_json(), r#"["a","b"]"#);
    }

    #[test]
    fn test_from_json_dedups_and_tolerates_empty() {
        assert!(ActiveLibrarySet::from_json("").unwrap().is_empty());
        let active = ActiveLibrarySet::from_json(r#"["a","b","a"]"#).unwrap();
        assert_eq!(active.len(), 2);
        assert!(ActiveLibrarySet::from_json("{").is_err());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut active = set(&["a", "b", "c"]);
        assert!(active.remove(&LibraryId::new("b")));
        assert!(!active.remove(&LibraryId::new("b")));
        assert_eq!(active.to_json(), r#"["a","c"]"#);
    }
}
