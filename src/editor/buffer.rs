use ropey::Rope;

use super::selection::{Position, SelRange};

/// A text buffer backed by a rope data structure.
///
/// Stores the document and answers line-oriented reads; it knows nothing
/// about cursors or selections, which live on the surface. Columns are byte
/// offsets within a line and are converted to rope char indices internally,
/// so multi-byte content is safe.
pub struct TextBuffer {
    rope: Rope,
    dirty: bool,
}

impl TextBuffer {
    /// Create a buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(row).to_string();
        Some(
            line.trim_end_matches('\n')
                .trim_end_matches('\r')
                .to_string(),
        )
    }

    /// Length of a line in bytes (without trailing newline).
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).map_or(0, |s| s.len())
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace a span of the buffer with new text.
    ///
    /// The span's positions are clamped to line content, so a column past
    /// the end of a line lands at the end of that line.
    pub fn replace(&mut self, span: SelRange, text: &str) {
        let start = self.char_idx(span.start);
        let end = self.char_idx(span.end);
        self.rope.remove(start.min(end)..start.max(end));
        self.rope.insert(start.min(end), text);
        self.dirty = true;
    }

    /// Convert a row/byte-column position to a rope char index.
    fn char_idx(&self, pos: Position) -> usize {
        let row = pos.row.min(self.rope.len_lines().saturating_sub(1));
        let line_start = self.rope.line_to_char(row);
        let line = self.rope.line(row).to_string();
        let content = line.trim_end_matches('\n').trim_end_matches('\r');
        let byte = pos.col.min(content.len());
        line_start + content[..byte].chars().count()
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("dirty", &self.dirty)
            .finish()
    }
}
