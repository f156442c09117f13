// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference
    clippy::module_name_repetitions
)]

//! # Listless
//!
//! Markdown-list-aware editing for the terminal.
//!
//! Listless layers list behavior over a plain text-editing surface:
//! - Enter continues bullets, checkboxes, and ordered items, and clears a
//!   marker left alone on its line
//! - Tab indents a list item in place, renumbering ordered items to match
//!   their new siblings
//! - Shift+Tab outdents and renumbers the other way
//!
//! ## Modules
//!
//! - [`markdown`]: marker classification, continuation, renumbering, and
//!   the three commands
//! - [`editor`]: the editing surface (buffer, selections, tokens, default
//!   behaviors)
//! - [`app`]: terminal application wiring the commands to key presses
//! - [`config`]: rc-file and command-line flag handling

pub mod app;
pub mod config;
pub mod editor;
pub mod markdown;
