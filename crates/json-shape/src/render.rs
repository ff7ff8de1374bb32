//! Renders a [`DecodeError`] as a forest of indented diagnostic trees.

use json_shape_util::stringify::{quote, stringify};

use crate::error::{DecodeError, ErrorNode};

/// One labeled diagnostic tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub label: String,
    pub children: Vec<Tree>,
}

/// Convert a single failure node into a diagnostic tree.
pub fn to_tree(node: &ErrorNode) -> Tree {
    match node {
        ErrorNode::Leaf { actual, expected } => Tree {
            label: format!(
                "cannot decode {}, should be {}",
                stringify(actual.as_ref()),
                expected
            ),
            children: Vec::new(),
        },
        ErrorNode::Key { key, kind, cause } => Tree {
            label: format!("{kind} property {}", quote(key)),
            children: forest(cause),
        },
        ErrorNode::Index { index, kind, cause } => Tree {
            label: format!("{kind} index {index}"),
            children: forest(cause),
        },
    }
}

/// Flatten an error into its ordered list of diagnostic trees.
///
/// A merge contributes its sides in order and never becomes a tree node
/// itself, so the result depends only on left-to-right discovery order, not
/// on how merges were nested.
pub fn forest(error: &DecodeError) -> Vec<Tree> {
    error.nodes().map(to_tree).collect()
}

/// Render the full diagnostic forest as indented tree diagrams joined by
/// line breaks.
///
/// # Examples
///
/// ```
/// use json_shape::{draw, number, string, tuple};
/// use serde_json::json;
///
/// let err = tuple([string(), number()])
///     .decode_value(&json!(["a"]))
///     .unwrap_err();
/// assert_eq!(
///     draw(&err),
///     "required index 1\n└─ cannot decode undefined, should be number"
/// );
/// ```
pub fn draw(error: &DecodeError) -> String {
    forest(error)
        .iter()
        .map(draw_tree)
        .collect::<Vec<String>>()
        .join("\n")
}

fn draw_tree(tree: &Tree) -> String {
    let mut out = tree.label.clone();
    draw_children(&mut out, "", &tree.children);
    out
}

fn draw_children(out: &mut String, tab: &str, children: &[Tree]) {
    let Some(last) = children.len().checked_sub(1) else {
        return;
    };
    for (i, child) in children.iter().enumerate() {
        let is_last = i == last;
        out.push('\n');
        out.push_str(tab);
        out.push_str(if is_last { "└─ " } else { "├─ " });
        out.push_str(&child.label);
        let child_tab = format!("{tab}{}", if is_last { "   " } else { "│  " });
        draw_children(out, &child_tab, &child.children);
    }
}
