//! Colorized rendering of a single log line.
//!
//! Each bracketed field is wrapped as
//! `brackets [ field-color content brackets ] reset` and the message is
//! painted in the level color:
//!
//! ```text
//! [123][INFO][main.cpp:45][loop] message
//! ```
//!
//! The line's trailing whitespace (including its terminator) is reproduced
//! byte for byte after the rendered content, so `\n` and `\r\n` endings
//! survive colorization. Lines that match no pattern are emitted trimmed but
//! otherwise untouched.

use std::fmt::Write;

use crate::color::ColorCode;
use crate::config::{ColorConfig, Component};
use crate::parser::{self, LineKind, LogRecord};

/// Colorize one line, returning a new string.
///
/// `line` may carry its terminator; an unterminated final fragment is fine
/// too.
pub fn colorize_line(line: &str, config: &ColorConfig) -> String {
    let mut out = String::with_capacity(line.len() + 64);
    colorize_line_into(line, config, &mut out);
    out
}

/// Colorize one line, appending the result to `out`.
pub fn colorize_line_into(line: &str, config: &ColorConfig, out: &mut String) {
    let (core, ending) = split_ending(line);
    if core.is_empty() {
        out.push_str(ending);
        return;
    }

    match parser::parse_line(core) {
        LineKind::Tight(record) => format_record(&record, "", config, out),
        LineKind::Spaced(record) => format_record(&record, " ", config, out),
        LineKind::Simple { level, message } => {
            let level_color = config.level_color(level);
            push_group(out, config, level_color, level);
            push_message(out, config, level_color, message);
        }
        LineKind::Raw => out.push_str(core),
    }
    out.push_str(ending);
}

/// Split a line into its trimmed content and the trailing whitespace that
/// follows it.
///
/// Leading whitespace is discarded. A whitespace-only line yields empty
/// content and the whole line as its ending.
fn split_ending(line: &str) -> (&str, &str) {
    let without_ending = line.trim_end();
    let ending = &line[without_ending.len()..];
    (without_ending.trim_start(), ending)
}

/// Render a full logger record. `gap` goes between the timestamp and level
/// groups.
fn format_record(record: &LogRecord<'_>, gap: &str, config: &ColorConfig, out: &mut String) {
    let level_color = config.level_color(record.level);

    push_group(
        out,
        config,
        config.component_color(Component::Timestamp),
        record.timestamp,
    );
    out.push_str(gap);
    push_group(out, config, level_color, record.level);

    let brackets = config.component_color(Component::Brackets);
    let file_color = config.component_color(Component::Filename);
    let reset = config.reset();
    let _ = write!(
        out,
        "{brackets}[{file_color}{}:{}{brackets}]{reset}",
        record.file, record.line
    );

    push_group(
        out,
        config,
        config.component_color(Component::Function),
        record.function,
    );
    push_message(out, config, level_color, record.message);
}

fn push_group(out: &mut String, config: &ColorConfig, color: &ColorCode, content: &str) {
    let brackets = config.component_color(Component::Brackets);
    let reset = config.reset();
    let _ = write!(out, "{brackets}[{color}{content}{brackets}]{reset}");
}

fn push_message(out: &mut String, config: &ColorConfig, color: &ColorCode, message: &str) {
    let reset = config.reset();
    let _ = write!(out, " {color}{message}{reset}");
}
