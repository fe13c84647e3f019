use super::HostError;
use crate::command::StyleField;
use crate::ids::{LocalId, NodeId};

/// What a node field is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleBinding {
    Style(LocalId),
    /// Color variable bound through the field's paint.
    Variable(LocalId),
}

pub trait SelectionPort: Send + Sync {
    fn selection(&self) -> Vec<NodeId>;

    /// Assigns the field on one node. Returns `false` when the node has no
    /// such field.
    fn bind(&self, node: &NodeId, field: StyleField, binding: &StyleBinding) -> Result<bool, HostError>;
}
