//! The text-editing surface: rope-backed buffer, multi-cursor selections,
//! line tokens, and default editing behaviors. List-aware commands sit on
//! top of this module and fall back to its defaults.

mod buffer;
mod selection;
mod surface;
mod tokens;

pub use buffer::TextBuffer;
pub use selection::{Position, SelRange};
pub use surface::{DefaultIndent, Edit, EditBatch, IndentPolicy, Surface};
pub use tokens::{Token, TokenKind, tokenize};
