//! Structural classification of ESP32 logger lines.
//!
//! Recognizes the bracketed format written by the firmware logger,
//! `[timestamp][LEVEL][file:line][function] message`, a variant with
//! whitespace between the leading brackets, and the short `[LEVEL] message`
//! form. Patterns are tried in a fixed order and the first match wins, since
//! every bracketed line also looks like a short-form line.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `[123][INFO ][main.cpp:45][loop] message`
static TIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(?<ts>\d+)\]\[(?<level>\w+)\s*\]\[(?<file>[^:]+):(?<line>\d+)\]\[(?<func>[^\]]+)\]\s*(?<msg>.*)",
    )
    .expect("tight pattern is valid")
});

/// `[123]  [INFO ]  [main.cpp:45][loop] message`
static SPACED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(?<ts>\d+)\]\s+\[(?<level>\w+)\s*\]\s*\[(?<file>[^:]+):(?<line>\d+)\]\[(?<func>[^\]]+)\]\s*(?<msg>.*)",
    )
    .expect("spaced pattern is valid")
});

/// `[INFO] message`
static SIMPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?<level>\w+)\]\s*(?<msg>.*)").expect("simple pattern is valid")
});

/// The structural classification of a trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Full logger record with the brackets packed together.
    Tight(LogRecord<'a>),
    /// Full logger record with whitespace after the timestamp bracket.
    Spaced(LogRecord<'a>),
    /// `[LEVEL] message`.
    Simple { level: &'a str, message: &'a str },
    /// Unstructured text, passed through as-is.
    Raw,
}

/// Fields of a full logger record, borrowed from the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub timestamp: &'a str,
    /// Level name without the logger's alignment padding.
    pub level: &'a str,
    pub file: &'a str,
    pub line: &'a str,
    pub function: &'a str,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        let field = |name| caps.name(name).map_or("", |m| m.as_str());
        Self {
            timestamp: field("ts"),
            level: field("level"),
            file: field("file"),
            line: field("line"),
            function: field("func"),
            message: field("msg"),
        }
    }
}

/// Classify a line that has already been trimmed.
///
/// Precedence: tight → spaced → simple → raw.
pub fn parse_line(line: &str) -> LineKind<'_> {
    if let Some(caps) = TIGHT.captures(line) {
        return LineKind::Tight(LogRecord::from_captures(&caps));
    }
    if let Some(caps) = SPACED.captures(line) {
        return LineKind::Spaced(LogRecord::from_captures(&caps));
    }
    if let Some(caps) = SIMPLE.captures(line) {
        let field = |name| caps.name(name).map_or("", |m| m.as_str());
        return LineKind::Simple {
            level: field("level"),
            message: field("msg"),
        };
    }
    LineKind::Raw
}
