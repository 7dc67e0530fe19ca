//! Progress events for copies, skips and errors.
//!
//! The core never prints. It hands each event to an [`EventSink`]; the
//! binary plugs in a [`ConsoleSink`] and tests plug in a recorder.

use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::collectors::scanner::TraversalError;
use crate::constants::BYTES_PER_MB;
use crate::models::{CopyOutcome, CopyResult, EntryKind};

/// Receiver for everything the collector wants the user to see
pub trait EventSink {
    fn file_copied(&mut self, source: &Path, destination: &Path);
    fn folder_copied(&mut self, source: &Path, destination: &Path);
    fn skipped_too_large(&mut self, source: &Path, size_bytes: u64, limit_bytes: u64);
    fn copy_failed(&mut self, source: &Path, reason: &str);
    fn traversal_error(&mut self, path: &Path, reason: &str);
}

/// Route a copy result to the sink method for its outcome
pub fn report_copy(sink: &mut dyn EventSink, result: &CopyResult) {
    match (&result.outcome, &result.destination) {
        (CopyOutcome::Copied { .. }, Some(dest)) => match result.kind {
            EntryKind::File => sink.file_copied(&result.source, dest),
            EntryKind::Directory => sink.folder_copied(&result.source, dest),
        },
        (CopyOutcome::Copied { .. }, None) => {
            sink.copy_failed(&result.source, "copied without a destination")
        }
        (CopyOutcome::SkippedTooLarge { size_bytes, limit_bytes }, _) => {
            sink.skipped_too_large(&result.source, *size_bytes, *limit_bytes)
        }
        (CopyOutcome::Failed { reason, .. }, _) => sink.copy_failed(&result.source, reason),
    }
}

pub fn report_traversal_error(sink: &mut dyn EventSink, error: &TraversalError) {
    sink.traversal_error(&error.path, &error.reason);
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Writes the tagged, line-oriented progress stream
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleSink { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        ConsoleSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, line: String) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            debug!("Failed to write progress line: {}", e);
        }
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn file_copied(&mut self, source: &Path, destination: &Path) {
        self.line(format!("[FILE] {} → {}", source.display(), destination.display()));
    }

    fn folder_copied(&mut self, source: &Path, destination: &Path) {
        self.line(format!("[FOLDER] {} → {}", source.display(), destination.display()));
    }

    fn skipped_too_large(&mut self, source: &Path, size_bytes: u64, limit_bytes: u64) {
        self.line(format!(
            "[SKIP] {}  ({:.1} MB > {:.1} MB)",
            source.display(),
            bytes_to_mb(size_bytes),
            bytes_to_mb(limit_bytes)
        ));
    }

    fn copy_failed(&mut self, source: &Path, reason: &str) {
        self.line(format!("[ERROR] {}: {}", source.display(), reason));
    }

    fn traversal_error(&mut self, path: &Path, reason: &str) {
        self.line(format!("[ERROR] {}: {}", path.display(), reason));
    }
}
