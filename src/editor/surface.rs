//! The editing surface: buffer + selections + default behaviors.
//!
//! Commands read lines and tokens from the surface, compute [`Edit`]s
//! against the current buffer state, and commit them through an
//! [`EditBatch`] so that multi-cursor edits cannot invalidate each other's
//! coordinates. The surface also supplies the default behaviors commands
//! fall back to when their preconditions do not hold: plain newline
//! insertion with auto-indent, tab insertion, row indent, and block
//! outdent.

use super::buffer::TextBuffer;
use super::selection::{Position, SelRange};
use super::tokens::{Token, TokenKind, tokenize};

/// Strategy deciding what the line after `line` should start with.
///
/// Installed on the surface at construction. Returning `None` defers to
/// the surface's own default indent (copy the line's leading whitespace).
pub trait IndentPolicy {
    fn next_line_prefix(&self, line: &str) -> Option<String>;
}

/// The built-in policy: always defer to leading-whitespace copying.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIndent;

impl IndentPolicy for DefaultIndent {
    fn next_line_prefix(&self, _line: &str) -> Option<String> {
        None
    }
}

/// A single buffer replacement, expressed in pre-edit coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: SelRange,
    pub text: String,
}

impl Edit {
    /// Replace `span` with `text`.
    pub fn new(span: SelRange, text: impl Into<String>) -> Self {
        Self {
            span: span.normalized(),
            text: text.into(),
        }
    }

    /// Insert `text` at a position.
    pub fn insert(pos: Position, text: impl Into<String>) -> Self {
        Self::new(SelRange::cursor_at(pos), text)
    }

    /// Where a position at or after this edit lands once it is applied.
    ///
    /// Positions strictly before the span are untouched; positions inside
    /// the replaced span collapse to the end of the inserted text.
    fn transform(&self, pos: Position) -> Position {
        if pos < self.span.start {
            return pos;
        }
        let end = self.span.end;
        let pos = if pos < end { end } else { pos };
        let inserted = self.newline_count();
        let removed = end.row - self.span.start.row;
        if pos.row == end.row {
            let base = if inserted > 0 {
                self.last_line_len()
            } else {
                self.span.start.col + self.last_line_len()
            };
            Position::new(self.span.start.row + inserted, base + (pos.col - end.col))
        } else {
            Position::new(pos.row - removed + inserted, pos.col)
        }
    }

    /// The position of the end of the inserted text, given where the edit
    /// starts in post-edit coordinates.
    fn end_position(&self, start: Position) -> Position {
        let newlines = self.newline_count();
        if newlines == 0 {
            Position::new(start.row, start.col + self.text.len())
        } else {
            Position::new(start.row + newlines, self.last_line_len())
        }
    }

    fn newline_count(&self) -> usize {
        self.text.matches('\n').count()
    }

    fn last_line_len(&self) -> usize {
        self.text.rsplit('\n').next().unwrap_or("").len()
    }
}

/// Edits collected from one command invocation, committed as a unit.
#[derive(Debug, Default)]
pub struct EditBatch {
    edits: Vec<Edit>,
}

impl EditBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    fn into_edits(self) -> Vec<Edit> {
        self.edits
    }
}

/// A text-editing surface with multi-cursor selections and an injected
/// indent policy.
pub struct Surface {
    buffer: TextBuffer,
    selections: Vec<SelRange>,
    policy: Box<dyn IndentPolicy>,
    scroll_requested: bool,
}

impl Surface {
    /// Create a surface over `text` with the default indent policy and a
    /// single cursor at the origin.
    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            selections: vec![SelRange::cursor(0, 0)],
            policy: Box::new(DefaultIndent),
            scroll_requested: false,
        }
    }

    /// Install an indent policy, replacing the default.
    #[must_use]
    pub fn with_policy(mut self, policy: impl IndentPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    // --- Reads ---

    pub fn line(&self, row: usize) -> Option<String> {
        self.buffer.line(row)
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Tokens of a line; empty for a missing or empty line.
    pub fn tokens(&self, row: usize) -> Vec<Token> {
        self.line(row).map_or_else(Vec::new, |l| tokenize(&l))
    }

    /// Tokens of a line, but only when it opens with a list marker.
    pub fn list_tokens(&self, row: usize) -> Option<Vec<Token>> {
        let tokens = self.tokens(row);
        match tokens.first() {
            Some(first) if first.kind == TokenKind::ListMarker => Some(tokens),
            _ => None,
        }
    }

    // --- Selections ---

    pub fn selections(&self) -> &[SelRange] {
        &self.selections
    }

    /// The first active range.
    pub fn primary_selection(&self) -> SelRange {
        self.selections[0]
    }

    /// Replace the active selection set. An empty set collapses to a
    /// single cursor at the origin.
    pub fn set_selections(&mut self, ranges: Vec<SelRange>) {
        self.selections = if ranges.is_empty() {
            vec![SelRange::cursor(0, 0)]
        } else {
            ranges.into_iter().map(|r| r.normalized()).collect()
        };
    }

    /// Collapse to a single cursor at the given position.
    pub fn move_primary_to(&mut self, row: usize, col: usize) {
        self.selections = vec![SelRange::cursor(row, col)];
    }

    // --- Edits ---

    /// Apply a single replacement and shift the selections through it.
    pub fn replace(&mut self, span: SelRange, text: &str) {
        let edit = Edit::new(span, text);
        self.buffer.replace(edit.span, &edit.text);
        for sel in &mut self.selections {
            *sel = SelRange::new(edit.transform(sel.start), edit.transform(sel.end));
        }
    }

    /// Commit a batch of edits atomically.
    ///
    /// Edits are deduplicated on identical spans, applied to the buffer in
    /// reverse document order (so pre-command coordinates stay valid), and
    /// the selection set is rebuilt with one cursor at the end of each
    /// edit's inserted text.
    pub fn apply(&mut self, batch: EditBatch) {
        let mut edits = batch.into_edits();
        if edits.is_empty() {
            return;
        }
        edits.sort_by_key(|e| (e.span.start, e.span.end));
        edits.dedup_by(|a, b| a.span == b.span);
        // Overlapping spans cannot be applied coherently; first one wins.
        let mut disjoint: Vec<Edit> = Vec::with_capacity(edits.len());
        for edit in edits {
            if disjoint
                .last()
                .is_none_or(|prev| prev.span.end <= edit.span.start)
            {
                disjoint.push(edit);
            }
        }
        let edits = disjoint;

        for edit in edits.iter().rev() {
            self.buffer.replace(edit.span, &edit.text);
        }

        // Walk forward accumulating the position shift each edit causes,
        // to find where every edit's cursor lands in the final buffer.
        let mut selections = Vec::with_capacity(edits.len());
        let mut prev_end = Position::new(0, 0);
        let mut prev_end_post = Position::new(0, 0);
        for edit in &edits {
            let start = edit.span.start;
            let shifted = if start.row == prev_end.row {
                Position::new(
                    prev_end_post.row,
                    prev_end_post.col + (start.col - prev_end.col),
                )
            } else {
                Position::new(start.row + prev_end_post.row - prev_end.row, start.col)
            };
            let cursor = edit.end_position(shifted);
            selections.push(SelRange::cursor_at(cursor));
            prev_end = edit.span.end;
            prev_end_post = cursor;
        }
        self.selections = selections;
    }

    // --- Default behaviors ---

    /// The indent/prefix the line after `line` should get: the installed
    /// policy's answer, or the line's own leading whitespace when the
    /// policy defers.
    pub fn next_line_indent(&self, line: &str) -> String {
        self.policy
            .next_line_prefix(line)
            .unwrap_or_else(|| indent_of(line).to_string())
    }

    /// The default Enter edit for one range: replace it with a newline
    /// followed by the next line's computed prefix.
    pub fn default_newline_edit(&self, range: SelRange) -> Edit {
        let range = range.normalized();
        let line = self.line(range.start.row).unwrap_or_default();
        let col = range.start.col.min(line.len());
        let prefix = self.next_line_indent(&line[..col]);
        Edit::new(range, format!("\n{prefix}"))
    }

    /// Default Tab behavior: insert a tab at an empty primary selection,
    /// or indent every row a non-empty one touches.
    pub fn default_indent(&mut self) {
        let range = self.primary_selection();
        if range.is_empty() {
            self.replace(range, "\t");
        } else {
            let (first, last) = range.row_span();
            self.indent_rows(first, last);
        }
    }

    /// Shift rows `first..=last` right by one indent unit.
    pub fn indent_rows(&mut self, first: usize, last: usize) {
        for row in (first..=last.min(self.line_count().saturating_sub(1))).rev() {
            self.replace(SelRange::cursor(row, 0), "\t");
        }
    }

    /// Remove one leading indent unit from rows `first..=last`.
    pub fn block_outdent(&mut self, first: usize, last: usize) {
        for row in (first..=last.min(self.line_count().saturating_sub(1))).rev() {
            if self.line(row).is_some_and(|l| l.starts_with('\t')) {
                self.replace(
                    SelRange::new(Position::new(row, 0), Position::new(row, 1)),
                    "",
                );
            }
        }
    }

    // --- Scrolling ---

    /// Ask the embedding view to bring the cursor back into view.
    pub const fn scroll_cursor_into_view(&mut self) {
        self.scroll_requested = true;
    }

    /// Consume a pending scroll request.
    pub const fn take_scroll_request(&mut self) -> bool {
        let requested = self.scroll_requested;
        self.scroll_requested = false;
        requested
    }
}

/// Leading spaces and tabs of a line, the default "next indent" answer.
fn indent_of(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("buffer", &self.buffer)
            .field("selections", &self.selections)
            .field("scroll_requested", &self.scroll_requested)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Single replacement and selection shifting ---

    #[test]
    fn test_replace_shifts_following_cursor_on_same_row() {
        let mut s = Surface::from_text("22. bar");
        s.set_selections(vec![SelRange::cursor(0, 7)]);
        s.replace(
            SelRange::new(Position::new(0, 0), Position::new(0, 4)),
            "1. ",
        );
        assert_eq!(s.text(), "1. bar");
        assert_eq!(s.primary_selection(), SelRange::cursor(0, 6));
    }

    #[test]
    fn test_replace_leaves_earlier_cursor_alone() {
        let mut s = Surface::from_text("abcdef");
        s.set_selections(vec![SelRange::cursor(0, 1)]);
        s.replace(
            SelRange::new(Position::new(0, 3), Position::new(0, 5)),
            "XY",
        );
        assert_eq!(s.primary_selection(), SelRange::cursor(0, 1));
    }

    #[test]
    fn test_insert_at_cursor_moves_cursor_past_text() {
        let mut s = Surface::from_text("ab");
        s.set_selections(vec![SelRange::cursor(0, 1)]);
        s.replace(SelRange::cursor(0, 1), "\t");
        assert_eq!(s.text(), "a\tb");
        assert_eq!(s.primary_selection(), SelRange::cursor(0, 2));
    }

    #[test]
    fn test_cursor_inside_replaced_span_collapses_to_insert_end() {
        let mut s = Surface::from_text("hello");
        s.set_selections(vec![SelRange::cursor(0, 2)]);
        s.replace(
            SelRange::new(Position::new(0, 0), Position::new(0, 5)),
            "hi",
        );
        assert_eq!(s.primary_selection(), SelRange::cursor(0, 2));
    }

    // --- Indent / outdent defaults ---

    #[test]
    fn test_indent_rows_prepends_tab_and_shifts_cursor() {
        let mut s = Surface::from_text("* list");
        s.set_selections(vec![SelRange::cursor(0, 2)]);
        s.indent_rows(0, 0);
        assert_eq!(s.text(), "\t* list");
        assert_eq!(s.primary_selection(), SelRange::cursor(0, 3));
    }

    #[test]
    fn test_block_outdent_removes_one_tab_only() {
        let mut s = Surface::from_text("\t\ta\nb\n\tc");
        s.block_outdent(0, 2);
        assert_eq!(s.text(), "\ta\nb\nc");
    }

    #[test]
    fn test_default_indent_inserts_tab_at_empty_selection() {
        let mut s = Surface::from_text("word");
        s.set_selections(vec![SelRange::cursor(0, 2)]);
        s.default_indent();
        assert_eq!(s.text(), "wo\trd");
    }

    #[test]
    fn test_default_indent_indents_rows_of_live_selection() {
        let mut s = Surface::from_text("a\nb\nc");
        s.set_selections(vec![SelRange::new(
            Position::new(0, 0),
            Position::new(1, 1),
        )]);
        s.default_indent();
        assert_eq!(s.text(), "\ta\n\tb\nc");
    }

    // --- Default newline edit ---

    #[test]
    fn test_default_newline_copies_leading_whitespace() {
        let s = Surface::from_text("\t  hello");
        let edit = s.default_newline_edit(SelRange::cursor(0, 8));
        assert_eq!(edit.text, "\n\t  ");
    }

    #[test]
    fn test_default_newline_uses_text_before_cursor() {
        let s = Surface::from_text("  hello");
        // Cursor inside the indent: only what precedes it carries over.
        let edit = s.default_newline_edit(SelRange::cursor(0, 1));
        assert_eq!(edit.text, "\n ");
    }

    // --- Batch commit ---

    #[test]
    fn test_apply_empty_batch_keeps_selections() {
        let mut s = Surface::from_text("x");
        s.set_selections(vec![SelRange::cursor(0, 1)]);
        s.apply(EditBatch::new());
        assert_eq!(s.primary_selection(), SelRange::cursor(0, 1));
    }

    #[test]
    fn test_apply_two_inserts_on_one_row() {
        let mut s = Surface::from_text("* foo");
        let mut batch = EditBatch::new();
        batch.push(Edit::insert(Position::new(0, 3), "\n* "));
        batch.push(Edit::insert(Position::new(0, 4), "\n* "));
        s.apply(batch);
        assert_eq!(s.text(), "* f\n* o\n* o");
        assert_eq!(
            s.selections(),
            &[SelRange::cursor(1, 2), SelRange::cursor(2, 2)]
        );
    }

    #[test]
    fn test_apply_deduplicates_identical_spans() {
        let mut s = Surface::from_text("* ");
        let span = SelRange::new(Position::new(0, 0), Position::new(0, 2));
        let mut batch = EditBatch::new();
        batch.push(Edit::new(span, ""));
        batch.push(Edit::new(span, ""));
        s.apply(batch);
        assert_eq!(s.text(), "");
        assert_eq!(s.selections(), &[SelRange::cursor(0, 0)]);
    }

    #[test]
    fn test_apply_edits_across_rows_shift_later_cursors() {
        let mut s = Surface::from_text("a\nb\nc");
        let mut batch = EditBatch::new();
        batch.push(Edit::insert(Position::new(0, 1), "\n"));
        batch.push(Edit::insert(Position::new(2, 1), "\n"));
        s.apply(batch);
        assert_eq!(s.text(), "a\n\nb\nc\n");
        assert_eq!(
            s.selections(),
            &[SelRange::cursor(1, 0), SelRange::cursor(4, 0)]
        );
    }

    #[test]
    fn test_apply_batch_order_does_not_matter() {
        let mut s = Surface::from_text("a\nb\nc");
        let mut batch = EditBatch::new();
        batch.push(Edit::insert(Position::new(2, 1), "!"));
        batch.push(Edit::insert(Position::new(0, 1), "!"));
        s.apply(batch);
        assert_eq!(s.text(), "a!\nb\nc!");
    }

    // --- Tokens through the surface ---

    #[test]
    fn test_list_tokens_only_for_marker_lines() {
        let s = Surface::from_text("- foo\nplain");
        assert!(s.list_tokens(0).is_some());
        assert!(s.list_tokens(1).is_none());
        assert!(s.list_tokens(99).is_none());
    }

    // --- Scroll requests ---

    #[test]
    fn test_scroll_request_is_consumed_once() {
        let mut s = Surface::from_text("");
        assert!(!s.take_scroll_request());
        s.scroll_cursor_into_view();
        assert!(s.take_scroll_request());
        assert!(!s.take_scroll_request());
    }
}
