use tracing::{debug, warn};

use crate::app::Model;
use crate::editor::{Position, SelRange};
use crate::markdown;

/// All events and actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Enter: continue, clear, or plainly break the current line
    ListEnter,
    /// Tab: indent the current list item (or insert a tab)
    ListIndent,
    /// Shift+Tab: outdent the selected lines
    ListOutdent,
    /// Type a character at the cursor
    InsertChar(char),
    /// Delete the character before the cursor (Backspace)
    DeleteBack,
    /// Delete the character at the cursor (Delete)
    DeleteForward,
    /// Move the cursor one step
    MoveCursor(Direction),
    /// Move to the beginning of the line (Home)
    MoveHome,
    /// Move to the end of the line (End)
    MoveEnd,
    /// Write the buffer back to its file
    Save,
    /// Leave the application
    Quit,
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Apply a message to the model.
pub fn update(model: &mut Model, message: Message) {
    if model.read_only && mutates(message) {
        model.status = "read-only".to_string();
        return;
    }
    match message {
        Message::ListEnter => markdown::enter(&mut model.surface),
        Message::ListIndent => markdown::indent(&mut model.surface),
        Message::ListOutdent => markdown::outdent(&mut model.surface),
        Message::InsertChar(ch) => {
            let range = model.surface.primary_selection();
            model.surface.replace(range, &ch.to_string());
        }
        Message::DeleteBack => delete_back(model),
        Message::DeleteForward => delete_forward(model),
        Message::MoveCursor(direction) => move_cursor(model, direction),
        Message::MoveHome => {
            let row = model.surface.primary_selection().start.row;
            model.surface.move_primary_to(row, 0);
        }
        Message::MoveEnd => {
            let row = model.surface.primary_selection().start.row;
            let len = model.surface.line(row).map_or(0, |l| l.len());
            model.surface.move_primary_to(row, len);
        }
        Message::Save => save(model),
        Message::Quit => model.quit = true,
    }
}

const fn mutates(message: Message) -> bool {
    matches!(
        message,
        Message::ListEnter
            | Message::ListIndent
            | Message::ListOutdent
            | Message::InsertChar(_)
            | Message::DeleteBack
            | Message::DeleteForward
    )
}

fn delete_back(model: &mut Model) {
    let pos = model.surface.primary_selection().normalized().start;
    if pos.col > 0 {
        let line = model.surface.line(pos.row).unwrap_or_default();
        let prev_len = line[..pos.col]
            .chars()
            .next_back()
            .map_or(1, char::len_utf8);
        model.surface.replace(
            SelRange::new(Position::new(pos.row, pos.col - prev_len), pos),
            "",
        );
    } else if pos.row > 0 {
        // Join with the previous line.
        let prev_len = model.surface.line(pos.row - 1).map_or(0, |l| l.len());
        model.surface.replace(
            SelRange::new(Position::new(pos.row - 1, prev_len), pos),
            "",
        );
    }
}

fn delete_forward(model: &mut Model) {
    let pos = model.surface.primary_selection().normalized().start;
    let line = model.surface.line(pos.row).unwrap_or_default();
    if pos.col < line.len() {
        let next_len = line[pos.col..].chars().next().map_or(1, char::len_utf8);
        model.surface.replace(
            SelRange::new(pos, Position::new(pos.row, pos.col + next_len)),
            "",
        );
    } else if pos.row + 1 < model.surface.line_count() {
        model
            .surface
            .replace(SelRange::new(pos, Position::new(pos.row + 1, 0)), "");
    }
}

fn move_cursor(model: &mut Model, direction: Direction) {
    let pos = model.surface.primary_selection().normalized().start;
    let line = model.surface.line(pos.row).unwrap_or_default();
    let (row, col) = match direction {
        Direction::Left => {
            if pos.col > 0 {
                let step = line[..pos.col]
                    .chars()
                    .next_back()
                    .map_or(1, char::len_utf8);
                (pos.row, pos.col - step)
            } else if pos.row > 0 {
                let prev = model.surface.line(pos.row - 1).unwrap_or_default();
                (pos.row - 1, prev.len())
            } else {
                (pos.row, pos.col)
            }
        }
        Direction::Right => {
            if pos.col < line.len() {
                let step = line[pos.col..].chars().next().map_or(1, char::len_utf8);
                (pos.row, pos.col + step)
            } else if pos.row + 1 < model.surface.line_count() {
                (pos.row + 1, 0)
            } else {
                (pos.row, pos.col)
            }
        }
        Direction::Up => {
            if pos.row > 0 {
                let above = model.surface.line(pos.row - 1).unwrap_or_default();
                (pos.row - 1, pos.col.min(above.len()))
            } else {
                (pos.row, pos.col)
            }
        }
        Direction::Down => {
            if pos.row + 1 < model.surface.line_count() {
                let below = model.surface.line(pos.row + 1).unwrap_or_default();
                (pos.row + 1, pos.col.min(below.len()))
            } else {
                (pos.row, pos.col)
            }
        }
    };
    model.surface.move_primary_to(row, col);
}

fn save(model: &mut Model) {
    let Some(path) = model.path.clone() else {
        model.status = "no file to save to".to_string();
        return;
    };
    match std::fs::write(&path, model.surface.text()) {
        Ok(()) => {
            model.surface.buffer_mut().mark_clean();
            model.status = format!("wrote {}", path.display());
            debug!(path = %path.display(), "saved buffer");
        }
        Err(err) => {
            model.status = format!("save failed: {err}");
            warn!(path = %path.display(), %err, "save failed");
        }
    }
}
