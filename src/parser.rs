use crate::model::{Node, NodeId, Payload, IMPERATIVES};
use anyhow::Result;
use indextree::{Arena, NodeId as ArenaId};
use std::fs;
use std::path::Path;

/// Columns a tab stands for when the wire format is tab-indented.
pub const TAB_WIDTH: usize = 4;

/// Indentation unit of the flat obligation text, used in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tabs,
    Spaces(usize),
}

impl Indent {
    /// Columns per nesting level.
    pub fn width(self) -> usize {
        match self {
            Indent::Tabs => TAB_WIDTH,
            Indent::Spaces(n) => n.max(1),
        }
    }

    fn prefix(self, depth: usize) -> String {
        match self {
            Indent::Tabs => "\t".repeat(depth),
            Indent::Spaces(_) => " ".repeat(self.width() * depth),
        }
    }

    /// Depth of a raw line. A tab counts as a full level, a space as one
    /// column; partial levels round up so any indented line is nested.
    pub fn depth_of(self, line: &str) -> usize {
        let width = self.width();
        let columns: usize = line
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| if c == '\t' { width } else { 1 })
            .sum();
        columns.div_ceil(width)
    }
}

/// Converts between an obligation forest and its flat indented text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextCodec {
    pub indent: Indent,
}

impl TextCodec {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    /// One line per node in pre-order, `\n`-separated, no trailing newline.
    pub fn encode(&self, forest: &[Node]) -> String {
        let mut lines = Vec::new();
        for node in forest {
            self.encode_node(node, 0, &mut lines);
        }
        lines.join("\n")
    }

    fn encode_node(&self, node: &Node, depth: usize, lines: &mut Vec<String>) {
        lines.push(format!("{}{}", self.indent.prefix(depth), node.payload.line()));
        for child in &node.children {
            self.encode_node(child, depth + 1, lines);
        }
    }

    /// Parses indented text into a forest. Never fails: blank lines are
    /// skipped and irregular indentation attaches to the nearest plausible
    /// parent.
    pub fn decode(&self, text: &str) -> Vec<Node> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut arena = Arena::new();
        // Synthetic parent of all roots; never materialized.
        let top = arena.new_node(Payload::default());

        // (node, depth + 1); the synthetic parent sits at 0.
        let mut level_stack: Vec<(ArenaId, usize)> = vec![(top, 0)];

        for line in text.split('\n') {
            let content = line.trim();
            if content.is_empty() {
                continue;
            }

            let level = self.indent.depth_of(line) + 1;
            while level_stack.len() > 1 && level_stack.last().is_some_and(|&(_, l)| l >= level) {
                level_stack.pop();
            }

            let mut parent = level_stack.last().map_or(top, |&(id, _)| id);
            if parent == top && level > 1 {
                // Indented but nothing shallower is open: fall back to the last root.
                match top.children(&arena).last() {
                    Some(last_root) => parent = last_root,
                    None => {
                        tracing::warn!(line = content, "indented line has no parent, kept as root")
                    }
                }
            }

            let node = arena.new_node(parse_line(content));
            parent.append(node, &mut arena);
            level_stack.push((node, level));
        }

        let forest: Vec<Node> = top
            .children(&arena)
            .map(|root| materialize(&arena, root, None))
            .collect();
        tracing::debug!(roots = forest.len(), "decoded obligation text");
        forest
    }
}

fn materialize(arena: &Arena<Payload>, id: ArenaId, parent_id: Option<NodeId>) -> Node {
    let payload = arena
        .get(id)
        .map(|entry| entry.get().clone())
        .unwrap_or_default();
    let mut node = Node::new(payload, parent_id);
    let own_id = node.id;
    node.children = id
        .children(arena)
        .map(|child| materialize(arena, child, Some(own_id)))
        .collect();
    node
}

/// Classifies one trimmed, non-empty line.
pub fn parse_line(content: &str) -> Payload {
    if content.split(' ').count() >= 3 {
        if let Some((imperative, rest)) = strip_imperative(content) {
            let rest = rest.trim();
            let (action, object) = rest.split_once(' ').unwrap_or((rest, ""));
            return Payload::element(imperative, action, object);
        }
    }

    match content.split_once(' ') {
        Some((kind, text)) => Payload::plain(kind, text),
        None => Payload::plain("", content),
    }
}

/// Matches a leading imperative case-insensitively, ending at a word
/// boundary. Returns the canonical phrase and the rest of the line.
fn strip_imperative(content: &str) -> Option<(&'static str, &str)> {
    IMPERATIVES.iter().find_map(|&imperative| {
        let head = content.get(..imperative.len())?;
        let rest = &content[imperative.len()..];
        let at_boundary = !rest.starts_with(|c: char| c.is_alphanumeric());
        (head.eq_ignore_ascii_case(imperative) && at_boundary).then_some((imperative, rest))
    })
}

pub fn load_file(path: &Path, codec: &TextCodec) -> Result<(Vec<Node>, String)> {
    let content = fs::read_to_string(path)?;
    Ok((codec.decode(&content), content))
}

pub fn save_file(forest: &[Node], path: &Path, codec: &TextCodec) -> Result<()> {
    fs::write(path, codec.encode(forest))?;
    Ok(())
}
