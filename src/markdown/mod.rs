//! Markdown list rules: marker classification, continuation, renumbering,
//! and the Enter/Tab/Shift+Tab commands built on them.

mod commands;
mod continuation;
mod marker;
mod renumber;

pub use commands::{enter, indent, outdent};
pub use continuation::{MarkdownIndent, next_line_prefix};
pub use marker::{MarkerShape, classify, leading_whitespace, ordered_number};
pub use renumber::find_preceding_ordinal;
