//! Sibling ordinal lookup for renumbering ordered items.

use crate::editor::TextBuffer;

use super::marker::ordered_number;

/// Find the ordinal of the nearest ordered item above `row` sitting at
/// exactly `depth` leading tabs, or 0 when there is none.
///
/// The scan walks upward one line at a time. A line that does not retain
/// `depth` leading tabs ends the scan: the list at this depth cannot
/// continue across a shallower line. Lines that keep the prefix but do not
/// parse as an ordered item after stripping it (bullets, blanks, deeper
/// children) are skipped, so interleaved content never hides a sibling.
pub fn find_preceding_ordinal(buffer: &TextBuffer, row: usize, depth: usize) -> u32 {
    let indent = "\t".repeat(depth);
    let mut row = row;
    while row > 0 {
        row -= 1;
        let Some(line) = buffer.line(row) else {
            break;
        };
        if !line.starts_with(&indent) {
            break;
        }
        if let Some(n) = ordered_number(&line[indent.len()..]) {
            return n;
        }
    }
    0
}
