//! Device-monitor filter boundary.
//!
//! A monitor host opens the filter once per session, pushes received text
//! through [`MonitorFilter::rx`], and closes it when the session ends.
//! Colorization is cosmetic, so nothing raised while colorizing may reach
//! the host: a panic is caught here and the received text is handed back
//! uncolored.

use std::panic::{self, AssertUnwindSafe};

use crate::config::ColorConfig;
use crate::stream::StreamBuffer;

/// Session-scoped colorizing filter.
#[derive(Debug)]
pub struct MonitorFilter {
    colorizer: StreamBuffer,
}

impl MonitorFilter {
    /// Name the filter is registered under in the monitor.
    pub const NAME: &'static str = "espcolorize";

    pub fn open(config: ColorConfig) -> Self {
        tracing::debug!(filter = Self::NAME, "filter opened");
        Self {
            colorizer: StreamBuffer::new(config),
        }
    }

    /// Text received from the device. Returns the lines it completes,
    /// colorized; a trailing partial line is held back until its terminator
    /// or [`close`](Self::close).
    pub fn rx(&mut self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.contain(text, |colorizer| colorizer.process_chunk(text))
    }

    /// Run `f` against the colorizer. If it panics, hand back everything the
    /// colorizer was holding plus `text`, uncolored, and start over with an
    /// empty buffer so nothing is emitted twice.
    fn contain(&mut self, text: &str, f: impl FnOnce(&mut StreamBuffer) -> String) -> String {
        let pending_before = self.colorizer.pending().to_string();
        let colorizer = &mut self.colorizer;
        match panic::catch_unwind(AssertUnwindSafe(|| f(colorizer))) {
            Ok(out) => out,
            Err(_) => {
                tracing::warn!(
                    bytes = pending_before.len() + text.len(),
                    "colorization failed, passing text through uncolored"
                );
                self.colorizer.clear();
                pending_before + text
            }
        }
    }

    /// Text sent to the device, passed through unchanged.
    pub fn tx(&self, text: &str) -> String {
        text.to_string()
    }

    /// End the session, returning any buffered partial line.
    pub fn close(mut self) -> String {
        let remaining = self.colorizer.flush();
        tracing::debug!(
            filter = Self::NAME,
            flushed = remaining.len(),
            "filter closed"
        );
        remaining
    }
}
