//! Terminal application: a minimal editor view over the surface.
//!
//! The shim follows The Elm Architecture (TEA):
//! - [`Model`]: the complete application state
//! - [`Message`]: all possible events and actions
//! - [`update`]: state transitions
//! - [`App::run`]: event loop with rendering
//!
//! All list behavior lives in [`crate::markdown`]; this module only maps
//! keys to messages and paints the buffer.

mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Direction, Message, update};

use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tracing::debug;
use unicode_width::UnicodeWidthChar;

use crate::editor::Surface;
use crate::markdown::MarkdownIndent;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    path: Option<PathBuf>,
    tab_width: u8,
    read_only: bool,
}

impl App {
    /// Create a new application, optionally opening a file.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            tab_width: 4,
            read_only: false,
        }
    }

    /// Set the display width of a tab stop.
    #[must_use]
    pub const fn with_tab_width(mut self, width: u8) -> Self {
        self.tab_width = width;
        self
    }

    /// Reject edits, keeping navigation available.
    #[must_use]
    pub const fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the terminal fails.
    pub fn run(&self) -> Result<()> {
        let text = match &self.path {
            Some(path) if path.exists() => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            _ => String::new(),
        };
        debug!(lines = text.lines().count(), "loaded buffer");

        let surface = Surface::from_text(&text).with_policy(MarkdownIndent);
        let mut model = Model::new(surface, self.path.clone());
        model.tab_width = self.tab_width;
        model.read_only = self.read_only;

        let mut terminal = ratatui::init();
        let result = event_loop(&mut terminal, &mut model);
        ratatui::restore();
        result
    }
}

fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
    while !model.quit {
        let height = terminal.size()?.height.saturating_sub(1) as usize;
        model.ensure_cursor_visible(height);
        terminal.draw(|frame| draw(frame, model))?;

        match event::read().context("terminal event read")? {
            Event::Key(key) => {
                if let Some(message) = input::handle_key(key) {
                    update(model, message);
                    if model.surface.take_scroll_request() {
                        model.ensure_cursor_visible(height);
                    }
                }
            }
            Event::Resize(..) => {}
            _ => {}
        }
    }
    Ok(())
}

fn draw(frame: &mut ratatui::Frame<'_>, model: &Model) {
    let [text_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let tab_width = usize::from(model.tab_width);
    let height = text_area.height as usize;
    let lines: Vec<Line<'_>> = (model.scroll..model.scroll + height)
        .map(|row| {
            model
                .surface
                .line(row)
                .map_or_else(Line::default, |l| Line::from(expand_tabs(&l, tab_width)))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), text_area);

    let cursor = model.surface.primary_selection().start;
    if cursor.row >= model.scroll && cursor.row < model.scroll + height {
        let line = model.surface.line(cursor.row).unwrap_or_default();
        let x = display_col(&line, cursor.col, tab_width);
        let x = u16::try_from(x).unwrap_or(u16::MAX);
        frame.set_cursor_position((
            text_area.x + x.min(text_area.width.saturating_sub(1)),
            text_area.y + u16::try_from(cursor.row - model.scroll).unwrap_or(0),
        ));
    }

    let name = model
        .path
        .as_ref()
        .map_or_else(|| "[scratch]".to_string(), |p| p.display().to_string());
    let dirty = if model.surface.buffer().is_dirty() {
        " [+]"
    } else {
        ""
    };
    let status = if model.status.is_empty() {
        format!(" {name}{dirty}")
    } else {
        format!(" {name}{dirty} | {}", model.status)
    };
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::Gray)),
        status_area,
    );
}

/// Expand tabs to spaces at `tab_width` stops.
fn expand_tabs(line: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = tab_width - (col % tab_width);
            out.push_str(&" ".repeat(pad));
            col += pad;
        } else {
            out.push(ch);
            col += UnicodeWidthChar::width(ch).unwrap_or(0);
        }
    }
    out
}

/// Display column of byte offset `col` in `line`, after tab expansion.
fn display_col(line: &str, col: usize, tab_width: usize) -> usize {
    let prefix = &line[..col.min(line.len())];
    let mut x = 0;
    for ch in prefix.chars() {
        if ch == '\t' {
            x += tab_width - (x % tab_width);
        } else {
            x += UnicodeWidthChar::width(ch).unwrap_or(0);
        }
    }
    x
}
