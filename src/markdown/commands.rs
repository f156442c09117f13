//! Enter, Tab, and Shift+Tab behavior for markdown lists.
//!
//! Each command reads the surface, decides whether list rules apply, and
//! otherwise falls back to the surface's default behavior. Enter runs once
//! per active selection range and commits everything as one batch.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::editor::{Edit, EditBatch, Position, SelRange, Surface, Token};

use super::renumber::find_preceding_ordinal;

/// First ordered numeral inside a marker literal.
static NUMERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.").expect("valid regex"));

/// A tab-indented ordered marker literal; group 1 is the indent run.
static INDENTED_NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\t+)\d+\.").expect("valid regex"));

/// Handle Enter.
///
/// For each active range: a live selection, a non-list line, or a list
/// item carrying content all get a plain newline with the continuation
/// prefix. A bare marker ("empty" item) instead has its marker cleared,
/// dropping one indent level when the continuation would keep one, so
/// pressing Enter on a stray marker steps out of the list.
pub fn enter(surface: &mut Surface) {
    let ranges = surface.selections().to_vec();
    let mut batch = EditBatch::new();
    let mut inserted_newline = false;

    for range in ranges {
        let tokens = surface.list_tokens(range.start.row).unwrap_or_default();
        if !range.is_empty() || !(empty_list_item(&tokens) || empty_checkbox_item(&tokens)) {
            batch.push(surface.default_newline_edit(range));
            inserted_newline = true;
            continue;
        }

        let row = range.start.row;
        let line = surface.line(row).unwrap_or_default();
        let prefix = surface.next_line_indent(&line);
        let reduced = prefix.strip_prefix('\t').unwrap_or("").to_string();
        debug!(row, "clearing empty list marker");
        batch.push(Edit::new(
            SelRange::new(Position::new(row, 0), Position::new(row, line.len())),
            reduced,
        ));
    }

    surface.apply(batch);
    if inserted_newline {
        // The cursor can leave the view after a newline.
        surface.scroll_cursor_into_view();
    }
}

/// Handle Tab.
///
/// With an empty primary selection on a list line, the whole item is
/// indented one unit instead of inserting a tab at the cursor; an ordered
/// item is renumbered first to follow its new deeper siblings. Anything
/// else defers to the default indent.
pub fn indent(surface: &mut Surface) {
    let range = surface.primary_selection();
    if range.is_empty() {
        let row = range.start.row;
        if let Some(tokens) = surface.list_tokens(row) {
            let marker = tokens[0].text.clone();
            if NUMERAL.is_match(&marker) {
                let line = surface.line(row).unwrap_or_default();
                let depth = line.chars().take_while(|&c| c == '\t').count();
                let n = find_preceding_ordinal(surface.buffer(), row, depth + 1) + 1;
                debug!(row, depth, n, "renumbering on indent");
                rewrite_marker(surface, row, &marker, n);
            }
            surface.indent_rows(row, row);
            return;
        }
    }
    surface.default_indent();
}

/// Handle Shift+Tab.
///
/// Every ordered line the selection touches is renumbered to follow its
/// new shallower siblings, then loses one indent unit via the default
/// block outdent. Rows are finished top to bottom so each renumbering
/// sees the rows above it already at their final depth, keeping sibling
/// sequences strictly increasing across a multi-line outdent.
pub fn outdent(surface: &mut Surface) {
    let range = surface.primary_selection();
    let (first, last) = range.row_span();
    for row in first..=last {
        if let Some(tokens) = surface.list_tokens(row) {
            let marker = tokens[0].text.clone();
            if let Some(captures) = INDENTED_NUMERAL.captures(&marker) {
                let depth = captures[1].len();
                let n = find_preceding_ordinal(surface.buffer(), row, depth - 1) + 1;
                debug!(row, depth, n, "renumbering on outdent");
                rewrite_marker(surface, row, &marker, n);
            }
        }
        surface.block_outdent(row, row);
    }
}

/// Replace the numeral portion of a marker literal in place.
fn rewrite_marker(surface: &mut Surface, row: usize, marker: &str, n: u32) {
    let renumbered = NUMERAL.replace(marker, format!("{n}.")).into_owned();
    surface.replace(
        SelRange::new(Position::new(row, 0), Position::new(row, marker.len())),
        &renumbered,
    );
}

/// A list item whose line holds nothing but the marker.
fn empty_list_item(tokens: &[Token]) -> bool {
    tokens.len() == 1
}

/// A checkbox item with an empty body: marker, box, one space, nothing
/// else. Only the `[ ]` and `[x]` literals count; `[X]` falls through to
/// the default newline.
fn empty_checkbox_item(tokens: &[Token]) -> bool {
    tokens.len() == 3
        && matches!(tokens[1].text.as_str(), "[ ]" | "[x]")
        && tokens[2].text == " "
}
