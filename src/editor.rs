use crate::model::{Node, NodeField, NodeId, ObligationElement};
use crate::parser::TextCodec;
use crate::tree;

/// Owns one obligation editing session: the forest and its serialized text.
///
/// `text` starts as the raw input so the original formatting survives
/// until the first edit; every mutation re-encodes it.
#[derive(Debug, Clone)]
pub struct TreeEditor {
    tree: Vec<Node>,
    text: String,
    codec: TextCodec,
}

impl TreeEditor {
    pub fn new(initial_text: Option<&str>, codec: TextCodec) -> Self {
        let text = initial_text.unwrap_or_default().to_string();
        Self {
            tree: codec.decode(&text),
            text,
            codec,
        }
    }

    pub fn tree(&self) -> &[Node] {
        &self.tree
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn codec(&self) -> &TextCodec {
        &self.codec
    }

    pub fn into_parts(self) -> (Vec<Node>, String) {
        (self.tree, self.text)
    }

    /// Replaces the whole forest, e.g. after loading another record.
    pub fn set_tree(&mut self, forest: Vec<Node>) {
        self.commit(forest);
    }

    /// Adds an empty node as the last child of `parent_id`, or as a new root.
    /// Returns the new node's id.
    pub fn add_child(&mut self, parent_id: Option<NodeId>) -> NodeId {
        let node = tree::new_node(parent_id);
        let id = node.id;
        tracing::debug!(node = %id, parent = ?parent_id, "add child");
        let forest = tree::insert_as_child(self.take(), parent_id, node);
        self.commit(forest);
        id
    }

    /// Adds an empty node at the end of `node_id`'s sibling list.
    pub fn add_sibling(&mut self, node_id: NodeId, parent_id: Option<NodeId>) -> NodeId {
        let node = tree::new_node(parent_id);
        let id = node.id;
        tracing::debug!(node = %id, sibling_of = %node_id, parent = ?parent_id, "add sibling");
        let forest = tree::insert_as_child(self.take(), parent_id, node);
        self.commit(forest);
        id
    }

    pub fn delete_node(&mut self, node_id: NodeId, parent_id: Option<NodeId>) {
        tracing::debug!(node = %node_id, parent = ?parent_id, "delete node");
        let forest = tree::remove_by_id(self.take(), node_id, parent_id);
        self.commit(forest);
    }

    pub fn update_node(&mut self, node_id: NodeId, field: NodeField, value: impl Into<String>) {
        tracing::debug!(node = %node_id, ?field, "update node");
        let forest = tree::update_field(self.take(), node_id, field, value.into());
        self.commit(forest);
    }

    pub fn update_node_element(&mut self, node_id: NodeId, element: &ObligationElement) {
        tracing::debug!(node = %node_id, element = %element.language_element, "import element");
        let forest = tree::update_element(self.take(), node_id, element);
        self.commit(forest);
    }

    fn take(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.tree)
    }

    fn commit(&mut self, forest: Vec<Node>) {
        self.text = self.codec.encode(&forest);
        self.tree = forest;
    }
}

impl Default for TreeEditor {
    fn default() -> Self {
        Self::new(None, TextCodec::default())
    }
}
