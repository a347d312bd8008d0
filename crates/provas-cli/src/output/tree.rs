//! Indented text rendering of a catalog tree.
//!
//! `depth` stands in for the expand/collapse state of an interactive tree:
//! groups at the last visible level are drawn collapsed with their child count.

use provas_core::tree::{CatalogTree, TreeNode};

const EXPANDED: &str = "▾";
const COLLAPSED: &str = "▸";
const LEAF: &str = "•";

/// Render `tree` under a `title` line. `None` expands everything.
#[must_use]
pub fn render_tree(title: &str, tree: &CatalogTree, depth: Option<usize>, color: bool) -> String {
    let mut lines = vec![if color {
        format!("\u{1b}[1m{title}\u{1b}[0m")
    } else {
        title.to_string()
    }];

    if tree.is_empty() {
        lines.push(String::from("(no rows)"));
    }

    for root in &tree.roots {
        render_node(root, 0, depth, color, &mut lines);
    }
    lines.join("\n")
}

fn render_node(
    node: &TreeNode,
    level: usize,
    depth: Option<usize>,
    color: bool,
    lines: &mut Vec<String>,
) {
    let indent = "  ".repeat(level);

    if node.is_placeholder() {
        let label = if color {
            format!("\u{1b}[2m{}\u{1b}[0m", node.label)
        } else {
            node.label.clone()
        };
        lines.push(format!("{indent}  {label}"));
        return;
    }

    if node.children.is_empty() {
        match &node.link {
            Some(link) => lines.push(format!("{indent}{LEAF} {}  {link}", node.label)),
            None => lines.push(format!("{indent}{LEAF} {}", node.label)),
        }
        return;
    }

    let expanded = depth.is_none_or(|depth| level + 1 < depth);
    if !expanded {
        lines.push(format!(
            "{indent}{COLLAPSED} {} ({})",
            node.label, node.child_count
        ));
        return;
    }

    lines.push(format!("{indent}{EXPANDED} {}", node.label));
    for child in &node.children {
        render_node(child, level + 1, depth, color, lines);
    }
}
