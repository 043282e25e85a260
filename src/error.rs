//! Error types for `espcolor`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a color theme file could not be applied.
///
/// Every variant is recoverable: [`resolve_config`](crate::config::resolve_config)
/// logs the cause and falls back to the built-in defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No file at the configured path.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, or JSON of the wrong shape.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML, or TOML of the wrong shape.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file has no `theme` selector (or no `themes` table to select from).
    #[error("config file does not select a theme")]
    NoThemeSelected,

    /// The selected theme is not defined under `themes`.
    #[error("theme '{0}' is not defined")]
    UnknownTheme(String),
}

/// Errors that stop the `espcolor` driver.
///
/// Maps to exit code 2.
#[derive(Debug, Error)]
pub enum Error {
    /// The `--input` device or file could not be opened.
    #[error("cannot open input {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
