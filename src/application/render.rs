//! Text formatting of the team structure.

use crate::config::{DisplayConfig, DisplayStyle};
use crate::domain::TeamTree;

/// Format the tree as output lines according to the display settings.
///
/// Indent style: `depth` indent units, the bullet, a space, the name.
/// An empty tree yields the single empty marker line in either style.
pub fn format_tree(tree: &TeamTree, display: &DisplayConfig) -> Vec<String> {
    if tree.is_empty() {
        return vec![display.empty_marker.clone()];
    }
    match display.style {
        DisplayStyle::Indent => tree
            .render()
            .into_iter()
            .map(|(depth, name)| format!("{}{} {}", display.indent.repeat(depth), display.bullet, name))
            .collect(),
        DisplayStyle::Tree => tree
            .to_tree_string(&display.empty_marker)
            .to_string()
            .lines()
            .map(str::to_string)
            .collect(),
    }
}
