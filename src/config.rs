//! Saved defaults: a small rc file of command-line flags.
//!
//! Flags can live in a global `.listlessrc` (next to the user's config
//! dir) or a local one in the working directory; the local file and the
//! command line override the global file.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Flags understood by both the rc file and the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    /// Display width of a tab stop.
    pub tab_width: Option<u8>,
    /// Open files without allowing edits.
    pub read_only: bool,
}

impl ConfigFlags {
    /// Merge `other` on top of `self`: booleans or, values from `other`
    /// win when present.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            tab_width: other.tab_width.or(self.tab_width),
            read_only: self.read_only || other.read_only,
        }
    }
}

/// Failures reading or interpreting an rc file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
}

/// Path of the global rc file.
pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("listless").join("config");
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".listlessrc");
    }
    PathBuf::from(".listlessrc")
}

/// Path of the working-directory override file.
pub fn local_override_path() -> PathBuf {
    PathBuf::from(".listlessrc")
}

/// Load flags from an rc file. A missing file is an empty set of flags.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags, ConfigError> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tokens: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(str::to_string))
        .collect();
    parse_tokens(&tokens)
}

/// Interpret command-line tokens as flags, skipping the program name and
/// anything unrecognized (clap owns full CLI validation).
pub fn parse_flag_tokens(args: &[String]) -> ConfigFlags {
    let tokens = args.get(1..).unwrap_or_default();
    parse_tokens(tokens).unwrap_or_default()
}

fn parse_tokens(tokens: &[String]) -> Result<ConfigFlags, ConfigError> {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--read-only" {
            flags.read_only = true;
        } else if let Some(value) = token.strip_prefix("--tab-width=") {
            flags.tab_width = Some(parse_tab_width(value)?);
        } else if token == "--tab-width" {
            i += 1;
            let value = tokens.get(i).map(String::as_str).unwrap_or_default();
            flags.tab_width = Some(parse_tab_width(value)?);
        }
        i += 1;
    }
    Ok(flags)
}

fn parse_tab_width(value: &str) -> Result<u8, ConfigError> {
    match value.parse::<u8>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(ConfigError::InvalidValue {
            flag: "--tab-width".to_string(),
            value: value.to_string(),
        }),
    }
}

/// Persist flags as rc-file lines.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<(), ConfigError> {
    let mut lines = Vec::new();
    if let Some(width) = flags.tab_width {
        lines.push(format!("--tab-width={width}"));
    }
    if flags.read_only {
        lines.push("--read-only".to_string());
    }
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Remove any saved defaults.
pub fn clear_config_flags(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        fs::remove_file(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
