use std::path::PathBuf;

use crate::editor::Surface;

/// The complete application state.
pub struct Model {
    /// The editing surface holding the document and cursor.
    pub surface: Surface,
    /// File backing the buffer, when opened from disk.
    pub path: Option<PathBuf>,
    /// One-line status shown at the bottom of the screen.
    pub status: String,
    /// Display width of a tab stop.
    pub tab_width: u8,
    /// Whether edits are rejected.
    pub read_only: bool,
    /// First visible buffer row.
    pub scroll: usize,
    /// Set when the event loop should exit.
    pub quit: bool,
}

impl Model {
    pub fn new(surface: Surface, path: Option<PathBuf>) -> Self {
        Self {
            surface,
            path,
            status: String::new(),
            tab_width: 4,
            read_only: false,
            scroll: 0,
            quit: false,
        }
    }

    /// Keep the cursor row inside a viewport of `height` rows.
    pub fn ensure_cursor_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        let row = self.surface.primary_selection().start.row;
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
    }
}
