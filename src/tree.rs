//! Structural operations over an obligation forest.
//!
//! Every operation consumes the current forest and returns the next one.
//! Addressing an id that is not in the forest is never an error: the
//! forest comes back unchanged, since the UI may still hold stale ids.

use crate::model::{Node, NodeField, NodeId, ObligationElement, Payload};

/// A fresh, empty plain node.
pub fn new_node(parent_id: Option<NodeId>) -> Node {
    Node::new(Payload::default(), parent_id)
}

pub fn find<'a>(forest: &'a [Node], id: NodeId) -> Option<&'a Node> {
    forest.iter().find_map(|node| {
        if node.id == id {
            Some(node)
        } else {
            find(&node.children, id)
        }
    })
}

fn find_mut(forest: &mut [Node], id: NodeId) -> Option<&mut Node> {
    for node in forest.iter_mut() {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Appends `node` to the children of `parent_id`, or to the root list
/// when no parent is given.
pub fn insert_as_child(mut forest: Vec<Node>, parent_id: Option<NodeId>, node: Node) -> Vec<Node> {
    match parent_id {
        None => forest.push(node),
        Some(pid) => match find_mut(&mut forest, pid) {
            Some(parent) => parent.children.push(node),
            None => tracing::warn!(parent = %pid, "insert under unknown parent ignored"),
        },
    }
    forest
}

/// Removes `node_id` and its subtree.
///
/// Without a parent hint only the root list is filtered. With a hint the
/// id is stripped from every non-root level, so a stale hint still
/// removes the node wherever it actually lives.
pub fn remove_by_id(mut forest: Vec<Node>, node_id: NodeId, parent_id: Option<NodeId>) -> Vec<Node> {
    match parent_id {
        None => forest.retain(|node| node.id != node_id),
        Some(_) => {
            for root in forest.iter_mut() {
                strip(&mut root.children, node_id);
            }
        }
    }
    forest
}

fn strip(nodes: &mut Vec<Node>, node_id: NodeId) {
    nodes.retain(|node| node.id != node_id);
    for node in nodes.iter_mut() {
        strip(&mut node.children, node_id);
    }
}

pub fn update_field(mut forest: Vec<Node>, node_id: NodeId, field: NodeField, value: String) -> Vec<Node> {
    match find_mut(&mut forest, node_id) {
        Some(node) => node.set_field(field, value),
        None => tracing::warn!(node = %node_id, ?field, "update of unknown node ignored"),
    }
    forest
}

/// Replaces language element, action and object together.
pub fn update_element(mut forest: Vec<Node>, node_id: NodeId, element: &ObligationElement) -> Vec<Node> {
    match find_mut(&mut forest, node_id) {
        Some(node) => node.payload = element.to_payload(),
        None => tracing::warn!(node = %node_id, "element import into unknown node ignored"),
    }
    forest
}

/// Total number of nodes in the forest.
pub fn count(forest: &[Node]) -> usize {
    forest.iter().map(|node| 1 + count(&node.children)).sum()
}
