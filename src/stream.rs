//! Line reassembly for chunked serial input.
//!
//! Serial reads hand over whatever bytes happen to be available, so a chunk
//! can end mid-line or carry several lines at once. [`StreamBuffer`] keeps the
//! unterminated tail between calls and only colorizes lines once their `\n`
//! has arrived. Chunk boundaries never change the output, only when it
//! becomes available.
//!
//! One buffer serves one stream. Callers watching several devices need one
//! [`StreamBuffer`] each; the resolved [`ColorConfig`] can be shared between
//! them.

use std::sync::Arc;

use crate::config::ColorConfig;
use crate::formatter::colorize_line_into;

/// Prefix of monitor control lines (`--- Terminal on /dev/ttyUSB0 ...`),
/// which are always passed through untouched.
pub const CONTROL_PREFIX: &str = "---";

/// Buffered line colorizer for one logical stream.
#[derive(Debug, Clone)]
pub struct StreamBuffer {
    config: Arc<ColorConfig>,
    buffer: String,
}

impl Default for StreamBuffer {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

impl StreamBuffer {
    pub fn new(config: impl Into<Arc<ColorConfig>>) -> Self {
        Self {
            config: config.into(),
            buffer: String::new(),
        }
    }

    pub fn config(&self) -> &ColorConfig {
        &self.config
    }

    /// Input received so far that is not yet terminated by `\n`.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Accept a chunk and return every line it completes, colorized.
    ///
    /// An empty chunk returns an empty string without touching the buffer.
    pub fn process_chunk(&mut self, chunk: &str) -> String {
        let mut out = String::new();
        self.process_chunk_into(chunk, &mut out);
        out
    }

    /// Like [`process_chunk`](Self::process_chunk), appending to `out`.
    pub fn process_chunk_into(&mut self, chunk: &str, out: &mut String) {
        if chunk.is_empty() {
            return;
        }

        // Only the new chunk can contain the last terminator.
        let Some(newline) = chunk.rfind('\n') else {
            self.buffer.push_str(chunk);
            return;
        };
        let split_at = self.buffer.len() + newline + 1;
        self.buffer.push_str(chunk);

        let remainder = self.buffer.split_off(split_at);
        let complete = std::mem::replace(&mut self.buffer, remainder);

        let mut lines = 0usize;
        for line in complete.split_inclusive('\n') {
            self.emit_line(line, out);
            lines += 1;
        }
        tracing::trace!(lines, pending = self.buffer.len(), "processed chunk");
    }

    /// Emit whatever is buffered as one final line, without adding a
    /// terminator. Returns an empty string when nothing is pending, so
    /// repeated calls are harmless.
    pub fn flush(&mut self) -> String {
        if self.buffer.is_empty() {
            return String::new();
        }
        let remaining = std::mem::take(&mut self.buffer);
        let mut out = String::with_capacity(remaining.len() + 64);
        self.emit_line(&remaining, &mut out);
        out
    }

    /// Drop buffered input without emitting it.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    fn emit_line(&self, line: &str, out: &mut String) {
        if line.starts_with(CONTROL_PREFIX) {
            out.push_str(line);
        } else {
            colorize_line_into(line, &self.config, out);
        }
    }
}
