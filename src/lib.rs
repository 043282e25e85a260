//! `espcolor` — Colorize ESP32 serial monitor log lines.
//!
//! This library provides the line reassembly and colorization engine behind
//! the `espcolor` CLI. Text arrives in arbitrary chunks; complete lines are
//! matched against the firmware logger's bracketed format
//! (`[timestamp][LEVEL][file:line][function] message`) and rendered with
//! ANSI colors from a [`ColorConfig`]. Unrecognized lines and monitor control
//! lines pass through.
//!
//! # Example
//!
//! ```
//! use espcolor::{ColorConfig, StreamBuffer};
//!
//! let mut stream = StreamBuffer::new(ColorConfig::default());
//!
//! assert_eq!(stream.process_chunk("[123][INFO ][main.cpp:45][lo"), "");
//! let out = stream.process_chunk("op] hello\n");
//! assert!(out.contains("main.cpp:45"));
//! assert!(out.ends_with("hello\x1b[0m\n"));
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod decode;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod parser;
pub mod stream;

// Re-export primary API types for convenience.
pub use color::ColorCode;
pub use config::{ColorConfig, Component, Theme, resolve_config};
pub use decode::Utf8ChunkDecoder;
pub use error::{ConfigError, Error};
pub use filter::MonitorFilter;
pub use formatter::{colorize_line, colorize_line_into};
pub use parser::{LineKind, LogRecord, parse_line};
pub use stream::{CONTROL_PREFIX, StreamBuffer};
