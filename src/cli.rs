//! Command-line argument definitions for `espcolor`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

/// Default read size, matching the serial monitor's own read granularity.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Largest accepted read size (1 MiB).
pub const MAX_CHUNK_SIZE: usize = 1024 * 1024;

/// Colorize ESP32 logger output from a serial monitor.
///
/// Reads raw text from stdin (or a device given with `--input`) in arbitrary
/// chunks, and writes each completed line to stdout with its timestamp,
/// level, source location, function and message colorized. Unrecognized
/// lines are passed through.
#[derive(Debug, Parser)]
#[command(name = "espcolor", version, about, long_about = None)]
pub struct Cli {
    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Path to the color theme file (JSON, or TOML with a `.toml` extension).
    ///
    /// Defaults to `.platformio/monitor_colors.json` in the working directory.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Theme to use, overriding the `theme` selector in the config file.
    #[arg(short = 't', long)]
    pub theme: Option<String>,

    /// Read from this file or serial device instead of stdin.
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Number of bytes to read per chunk.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,

    /// Log configuration and colorization diagnostics to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

fn parse_chunk_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("chunk size must be at least 1 byte".to_string()),
        Ok(n) if n > MAX_CHUNK_SIZE => Err(format!(
            "chunk size must be at most {MAX_CHUNK_SIZE} bytes, got {n}"
        )),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid chunk size '{s}': {e}")),
    }
}
