//! Listless - markdown-list-aware editing for the terminal.
//!
//! # Usage
//!
//! ```bash
//! listless notes.md
//! listless --tab-width 2 notes.md
//! listless --read-only notes.md
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use listless::app::App;
use listless::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};

/// Markdown-list-aware editing for the terminal
#[derive(Parser, Debug)]
#[command(name = "listless", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit (omit for a scratch buffer)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Display width of a tab stop
    #[arg(long, value_name = "COLS")]
    tab_width: Option<u8>,

    /// Open without allowing edits
    #[arg(long)]
    read_only: bool,

    /// Save current command-line flags as defaults in .listlessrc
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in .listlessrc
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path).context("clearing saved defaults")?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags).context("saving defaults")?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path).context("reading global config")?;
        let local_flags = load_config_flags(&local_path).context("reading local config")?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let app = App::new(cli.file)
        .with_tab_width(effective.tab_width.unwrap_or(4))
        .with_read_only(effective.read_only);

    app.run().context("Application error")
}
