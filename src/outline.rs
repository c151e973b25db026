use crate::model::{Node, Payload};

/// Human-readable outline of a forest, two spaces per level.
pub fn render_outline(forest: &[Node], with_ids: bool) -> String {
    let mut output = String::new();
    for node in forest {
        render_node(node, 0, with_ids, &mut output);
    }
    output
}

fn render_node(node: &Node, depth: usize, with_ids: bool, output: &mut String) {
    output.push_str(&"  ".repeat(depth));
    output.push_str("- ");
    output.push_str(&label(&node.payload));
    if with_ids {
        output.push_str(&format!("  ({})", node.id));
    }
    output.push('\n');

    for child in &node.children {
        render_node(child, depth + 1, with_ids, output);
    }
}

fn label(payload: &Payload) -> String {
    match payload {
        Payload::Plain { kind, text } if kind.is_empty() => text.clone(),
        Payload::Plain { kind, text } => format!("{}: {}", kind, text),
        Payload::Element {
            language_element,
            action,
            object,
        } => format!("[{}] {} {}", language_element, action, object)
            .trim_end()
            .to_string(),
    }
}
