//! Test utilities for wallet-collector
//!
//! Shared fixtures and a recording event sink for unit tests.

#![cfg(test)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::reporter::EventSink;

/// One event as seen by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent {
    File(PathBuf, PathBuf),
    Folder(PathBuf, PathBuf),
    Skip(PathBuf, u64, u64),
    CopyError(PathBuf, String),
    TraversalError(PathBuf, String),
}

/// Sink that keeps every event in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<RecordedEvent>,
}

impl EventSink for RecordingSink {
    fn file_copied(&mut self, source: &Path, destination: &Path) {
        self.events
            .push(RecordedEvent::File(source.to_path_buf(), destination.to_path_buf()));
    }

    fn folder_copied(&mut self, source: &Path, destination: &Path) {
        self.events
            .push(RecordedEvent::Folder(source.to_path_buf(), destination.to_path_buf()));
    }

    fn skipped_too_large(&mut self, source: &Path, size_bytes: u64, limit_bytes: u64) {
        self.events
            .push(RecordedEvent::Skip(source.to_path_buf(), size_bytes, limit_bytes));
    }

    fn copy_failed(&mut self, source: &Path, reason: &str) {
        self.events
            .push(RecordedEvent::CopyError(source.to_path_buf(), reason.to_string()));
    }

    fn traversal_error(&mut self, path: &Path, reason: &str) {
        self.events
            .push(RecordedEvent::TraversalError(path.to_path_buf(), reason.to_string()));
    }
}

/// Creates a small home-directory-like tree in a temporary directory
pub fn create_test_file_structure() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let base_path = temp_dir.path();

    fs::create_dir_all(base_path.join("Documents/old"))?;
    fs::create_dir_all(base_path.join("AppData/Bitcoin/wallets"))?;

    fs::write(base_path.join("Documents/seed.txt"), b"first seed")?;
    fs::write(base_path.join("Documents/old/seed.txt"), b"second seed")?;
    fs::write(base_path.join("Documents/photo.jpg"), b"jpeg")?;
    fs::write(base_path.join("AppData/Bitcoin/wallets/wallet.dat"), b"wallet")?;
    fs::write(base_path.join("AppData/Bitcoin/debug.txt"), b"log")?;

    Ok(temp_dir)
}
