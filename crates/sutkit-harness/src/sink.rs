// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Output sinks for emitted log blocks.
//!
//! Each harness style exposes some line-oriented output channel; the
//! adapters write at most one multi-line block per test through an
//! [`OutputSink`]. [`StdoutSink`] targets standard output, which the
//! default test runner captures and attaches to the owning test.
//! [`BufferSink`] keeps lines in memory so the adapters themselves can be
//! tested.

use std::sync::Arc;

use parking_lot::Mutex;

// =============================================================================
// OutputSink
// =============================================================================

/// Line-oriented output channel of a harness style.
pub trait OutputSink: Send + Sync {
    /// Writes one line (possibly containing embedded newlines, for block
    /// output) to the channel.
    fn write_line(&self, line: &str);
}

// =============================================================================
// StdoutSink
// =============================================================================

/// Sink writing to standard output.
///
/// The default test runner captures per-test stdout and shows it alongside
/// failures (or with `--nocapture`), which makes this the natural output
/// channel for emitted log blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

// =============================================================================
// BufferSink
// =============================================================================

/// In-memory sink recording written lines for later inspection.
///
/// Cloning returns a handle onto the same buffer, so a test can keep one
/// handle while the context owns the other.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    /// Creates an empty buffer sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Returns `true` when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl OutputSink for BufferSink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_records_lines_in_order() {
        let sink = BufferSink::new();
        sink.write_line("first");
        sink.write_line("second");

        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_buffer_sink_clones_share_the_buffer() {
        let sink = BufferSink::new();
        let handle = sink.clone();

        handle.write_line("via handle");

        assert_eq!(sink.lines(), vec!["via handle"]);
        assert!(!sink.is_empty());
    }
}
