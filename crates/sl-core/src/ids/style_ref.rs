use super::{LocalId, RemoteKey};

/// Reference to a style or variable, tagged with the identifier space it lives in.
///
/// A `Local` reference resolves directly in the open file. A `Remote` reference
/// must be imported by key before it can be bound to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleRef {
    Local(LocalId),
    Remote(RemoteKey),
}

impl StyleRef {
    pub fn is_local(&self) -> bool {
        matches!(self, StyleRef::Local(_))
    }

    /// Raw identifier text, whichever space it belongs to.
    pub fn as_str(&self) -> &str {
        match self {
            StyleRef::Local(id) => id.as_str(),
            StyleRef::Remote(key) => key.as_str(),
        }
    }
}

impl std::fmt::Display for StyleRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleRef::Local(id) => write!(f, "local:{id}"),
            StyleRef::Remote(key) => write!(f, "remote:{key}"),
        }
    }
}
