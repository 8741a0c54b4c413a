use serde::Serialize;
use tree_sitter::{Node, Point, Tree};

/// Serializable mirror of a parsed tree.
///
/// Node kinds and field names are passed through verbatim from the grammar;
/// this type encodes no PHP knowledge of its own. Only named nodes are kept,
/// so the output reads as an AST rather than a token-level concrete tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonNode {
    pub kind: String,
    /// Grammar field this node occupies in its parent, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub start: Position,
    pub end: Position,
    /// Source text, kept for leaves only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonNode>,
}

/// 0-based row and column, as reported by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl From<Point> for Position {
    fn from(point: Point) -> Self {
        Self {
            row: point.row,
            column: point.column,
        }
    }
}

impl JsonNode {
    pub fn from_tree(tree: &Tree, source: &str) -> Self {
        Self::from_node(tree.root_node(), None, source)
    }

    fn from_node(node: Node, field: Option<&str>, source: &str) -> Self {
        let mut children = Vec::new();
        let mut cursor = node.walk();
        if cursor.goto_first_child() {
            loop {
                let child = cursor.node();
                if child.is_named() {
                    children.push(Self::from_node(child, cursor.field_name(), source));
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }

        let text = if children.is_empty() {
            node.utf8_text(source.as_bytes()).ok().map(str::to_owned)
        } else {
            None
        };

        Self {
            kind: node.kind().to_owned(),
            field: field.map(str::to_owned),
            start: node.start_position().into(),
            end: node.end_position().into(),
            text,
            children,
        }
    }
}
