//! What the next line should start with, given the current one.

use crate::editor::IndentPolicy;

use super::marker::{MarkerShape, classify, leading_whitespace};

/// Compute the marker text that should prefix the line following `line`.
///
/// Returns `None` for non-list lines, meaning the caller should fall back
/// to its own default indent computation. Checkboxes always continue
/// unchecked; ordered items continue with the next numeral.
pub fn next_line_prefix(line: &str) -> Option<String> {
    let shape = classify(line)?;
    let indent = leading_whitespace(line);
    let prefix = match shape {
        MarkerShape::Checkbox { .. } => format!("{indent}- [ ] "),
        MarkerShape::Bullet => format!("{indent}- "),
        MarkerShape::Star => format!("{indent}* "),
        MarkerShape::Ordered(n) => format!("{indent}{}. ", n.saturating_add(1)),
    };
    Some(prefix)
}

/// The markdown indent strategy installed on the editing surface.
///
/// Injected at surface construction instead of patched onto shared mode
/// state, so the surface stays usable without any markdown behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownIndent;

impl IndentPolicy for MarkdownIndent {
    fn next_line_prefix(&self, line: &str) -> Option<String> {
        next_line_prefix(line)
    }
}
