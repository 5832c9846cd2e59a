//! Tree to document mapping.
//!
//! A node becomes `{"value": v}` plus `left`/`right` keys only for children
//! that exist; there are no null placeholders. An empty tree becomes `null`.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tree::{Node, Tree};

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.left().is_some()) + usize::from(self.right().is_some());
        let mut state = serializer.serialize_struct("Node", len)?;
        state.serialize_field("value", &self.value())?;
        match self.left() {
            Some(left) => state.serialize_field("left", left)?,
            None => state.skip_field("left")?,
        }
        match self.right() {
            Some(right) => state.serialize_field("right", right)?,
            None => state.skip_field("right")?,
        }
        state.end()
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root().serialize(serializer)
    }
}

/// Structural document for `tree`; `Value::Null` when it is empty.
pub fn to_document(tree: &Tree) -> DomainResult<Value> {
    serde_json::to_value(tree).map_err(|e| DomainError::Serialization(e.to_string()))
}

/// Canonical JSON text for `tree`, pretty-printed or compact.
pub fn to_json(tree: &Tree, pretty: bool) -> DomainResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    };
    text.map_err(|e| DomainError::Serialization(e.to_string()))
}

/// Render `tree` for the terminal, children labelled `L:`/`R:`.
pub fn to_display_tree(tree: &Tree) -> termtree::Tree<String> {
    match tree.root() {
        Some(root) => display_node(root, None),
        None => termtree::Tree::new("(empty)".to_string()),
    }
}

fn display_node(node: &Node, side: Option<&str>) -> termtree::Tree<String> {
    let label = match side {
        Some(side) => format!("{side}: {}", node.value()),
        None => node.value().to_string(),
    };
    let mut rendered = termtree::Tree::new(label);
    if let Some(left) = node.left() {
        rendered.push(display_node(left, Some("L")));
    }
    if let Some(right) = node.right() {
        rendered.push(display_node(right, Some("R")));
    }
    rendered
}
