//! Positions and selection ranges.

/// A row/column position in the buffer. Columns are byte offsets.
///
/// Ordering is document order: by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based byte column within the line.
    pub col: usize,
}

impl Position {
    /// Create a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A selection range; empty when `start == end` (a pure cursor).
///
/// Several ranges can be active at once (multi-cursor editing); the
/// surface holds them as an ordered set with the first as primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelRange {
    pub start: Position,
    pub end: Position,
}

impl SelRange {
    /// Create a range between two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-width range (cursor) at the given position.
    pub const fn cursor(row: usize, col: usize) -> Self {
        let pos = Position::new(row, col);
        Self {
            start: pos,
            end: pos,
        }
    }

    /// A zero-width range at `pos`.
    pub const fn cursor_at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Whether the range selects no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The inclusive row span the range touches, lowest first.
    pub fn row_span(&self) -> (usize, usize) {
        let (a, b) = (self.start.row, self.end.row);
        (a.min(b), a.max(b))
    }

    /// The same range with `start <= end`.
    pub fn normalized(&self) -> Self {
        if self.start <= self.end {
            *self
        } else {
            Self::new(self.end, self.start)
        }
    }
}
