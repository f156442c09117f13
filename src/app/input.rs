use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::update::{Direction, Message};

/// Map a key event to a message, or `None` to ignore it.
pub fn handle_key(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => Some(Message::ListEnter),
        KeyCode::Tab => Some(Message::ListIndent),
        KeyCode::BackTab => Some(Message::ListOutdent),
        KeyCode::Backspace => Some(Message::DeleteBack),
        KeyCode::Delete => Some(Message::DeleteForward),
        KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
        KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
        KeyCode::Home => Some(Message::MoveHome),
        KeyCode::End => Some(Message::MoveEnd),
        KeyCode::Char('s') if ctrl => Some(Message::Save),
        KeyCode::Char('q') if ctrl => Some(Message::Quit),
        KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char(ch) if !ctrl => Some(Message::InsertChar(ch)),
        _ => None,
    }
}
