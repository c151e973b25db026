use obligation_tree::{Node, NodeId, Payload};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Compare two forests for structural equality, ignoring ids
#[allow(dead_code)]
pub fn forests_are_equal(forest1: &[Node], forest2: &[Node]) -> bool {
    forest1.len() == forest2.len()
        && forest1.iter().zip(forest2).all(|(a, b)| {
            a.payload == b.payload && forests_are_equal(&a.children, &b.children)
        })
}

/// Helper function to get fixture path
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

/// Serialized line of every node in pre-order
#[allow(dead_code)]
pub fn all_lines(forest: &[Node]) -> Vec<String> {
    fn collect(nodes: &[Node], out: &mut Vec<String>) {
        for node in nodes {
            out.push(node.payload.line());
            collect(&node.children, out);
        }
    }

    let mut out = Vec::new();
    collect(forest, &mut out);
    out
}

/// Find a node by its serialized line
#[allow(dead_code)]
pub fn find_node_by_line<'a>(forest: &'a [Node], line: &str) -> Option<&'a Node> {
    forest.iter().find_map(|node| {
        if node.payload.line() == line {
            Some(node)
        } else {
            find_node_by_line(&node.children, line)
        }
    })
}

/// Calculate the maximum depth of the forest (roots are depth 0)
#[allow(dead_code)]
pub fn calculate_forest_depth(forest: &[Node]) -> usize {
    forest
        .iter()
        .filter(|node| !node.children.is_empty())
        .map(|node| 1 + calculate_forest_depth(&node.children))
        .max()
        .unwrap_or(0)
}

/// Count nodes at a specific depth level
#[allow(dead_code)]
pub fn count_at_depth(forest: &[Node], target_depth: usize) -> usize {
    if target_depth == 0 {
        forest.len()
    } else {
        forest
            .iter()
            .map(|node| count_at_depth(&node.children, target_depth - 1))
            .sum()
    }
}

/// Verify ids are unique and parent_id back-references match nesting
#[allow(dead_code)]
pub fn verify_tree_integrity(forest: &[Node]) -> Result<(), String> {
    fn check(
        nodes: &[Node],
        parent: Option<NodeId>,
        seen: &mut HashSet<NodeId>,
    ) -> Result<(), String> {
        for node in nodes {
            if !seen.insert(node.id) {
                return Err(format!("Duplicate id {}", node.id));
            }
            if node.parent_id != parent {
                return Err(format!(
                    "Inconsistent parent for {:?}: expected {:?}, found {:?}",
                    node.payload.line(),
                    parent,
                    node.parent_id
                ));
            }
            check(&node.children, Some(node.id), seen)?;
        }
        Ok(())
    }

    check(forest, None, &mut HashSet::new())
}

/// Create a simple test forest:
///
/// Root node
///     Child node
///         Grandchild node
///     YOU MUST Provide License text
#[allow(dead_code)]
pub fn create_test_forest() -> Vec<Node> {
    let mut root = Node::new(Payload::plain("Root", "node"), None);
    let mut child = Node::new(Payload::plain("Child", "node"), Some(root.id));
    let grandchild = Node::new(Payload::plain("Grandchild", "node"), Some(child.id));
    let element = Node::new(
        Payload::element("YOU MUST", "Provide", "License text"),
        Some(root.id),
    );

    child.children.push(grandchild);
    root.children.push(child);
    root.children.push(element);

    vec![root]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forests_are_equal() {
        let forest1 = create_test_forest();
        let forest2 = create_test_forest();
        assert!(forests_are_equal(&forest1, &forest2));

        let mut modified = create_test_forest();
        let extra = Node::new(Payload::plain("Extra", "node"), Some(modified[0].id));
        modified[0].children.push(extra);
        assert!(!forests_are_equal(&forest1, &modified));
    }

    #[test]
    fn test_forest_depth() {
        assert_eq!(calculate_forest_depth(&create_test_forest()), 2);
        assert_eq!(calculate_forest_depth(&[]), 0);
    }

    #[test]
    fn test_count_at_depth() {
        let forest = create_test_forest();
        assert_eq!(count_at_depth(&forest, 0), 1);
        assert_eq!(count_at_depth(&forest, 1), 2);
        assert_eq!(count_at_depth(&forest, 2), 1);
        assert_eq!(count_at_depth(&forest, 3), 0);
    }

    #[test]
    fn test_tree_integrity() {
        assert!(verify_tree_integrity(&create_test_forest()).is_ok());
    }
}
