use std::collections::HashMap;
use std::sync::RwLock;

use sl_core::ports::{HostError, SelectionPort, StyleBinding};
use sl_core::{NodeId, StyleField};

/// A selected node and the style fields it supports.
#[derive(Debug, Clone)]
pub struct SelectedNode {
    pub id: NodeId,
    pub fields: Vec<StyleField>,
}

impl SelectedNode {
    pub fn new(id: impl Into<NodeId>, fields: impl IntoIterator<Item = StyleField>) -> Self {
        Self {
            id: id.into(),
            fields: fields.into_iter().collect(),
        }
    }
}

/// Selection held in memory that records every binding made to it.
#[derive(Default)]
pub struct InMemorySelection {
    nodes: Vec<SelectedNode>,
    bindings: RwLock<HashMap<(NodeId, StyleField), StyleBinding>>,
}

impl InMemorySelection {
    pub fn new(nodes: Vec<SelectedNode>) -> Self {
        Self {
            nodes,
            bindings: RwLock::default(),
        }
    }

    pub fn binding(&self, node: &NodeId, field: StyleField) -> Option<StyleBinding> {
        self.bindings
            .read()
            .ok()?
            .get(&(node.clone(), field))
            .cloned()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.read().map(|bindings| bindings.len()).unwrap_or_default()
    }
}

impl SelectionPort for InMemorySelection {
    fn selection(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|node| node.id.clone()).collect()
    }

    fn bind(&self, node: &NodeId, field: StyleField, binding: &StyleBinding) -> Result<bool, HostError> {
        let Some(selected) = self.nodes.iter().find(|candidate| &candidate.id == node) else {
            return Err(HostError::NotFound(format!("node {node}")));
        };
        if !selected.fields.contains(&field) {
            return Ok(false);
        }
        self.bindings
            .write()
            .map_err(|_| HostError::Other("selection lock poisoned".to_string()))?
            .insert((node.clone(), field), binding.clone());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::LocalId;

    #[test]
    fn test_bind_skips_nodes_without_field() {
        let selection = InMemorySelection::new(vec![
            SelectedNode::new("1:1", [StyleField::Fill, StyleField::Stroke]),
            SelectedNode::new("1:2", [StyleField::Text]),
        ]);
        let binding = StyleBinding::Style(LocalId::new("S:1"));

        assert!(selection.bind(&"1:1".into(), StyleField::Fill, &binding).unwrap());
        assert!(!selection.bind(&"1:2".into(), StyleField::Fill, &binding).unwrap());
        assert_eq!(selection.binding(&"1:1".into(), StyleField::Fill), Some(binding));
        assert_eq!(selection.binding_count(), 1);
    }
}
