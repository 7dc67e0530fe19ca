use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::config::RunConfig;
use crate::models::{CopyOutcome, CopyResult, EntryKind};

/// Counters and identity for one collection run.
///
/// Only totals are kept; individual copy results are reported as they happen
/// and then dropped.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub collection_id: String,
    pub hostname: Option<String>,
    pub collector_version: String,
    pub os: String,
    pub started_at: String,
    pub finished_at: Option<String>,
    pub config: RunConfig,
    pub files_copied: u64,
    pub folders_copied: u64,
    pub files_skipped: u64,
    pub copies_failed: u64,
    pub traversal_errors: u64,
    pub bytes_copied: u64,
    pub permission_denied: u64,
}

impl RunSummary {
    /// Start a summary for a run about to use `config`
    pub fn begin(config: &RunConfig) -> Self {
        let hostname = hostname::get()
            .ok()
            .map(|name| name.to_string_lossy().to_string());

        RunSummary {
            collection_id: Uuid::new_v4().to_string(),
            hostname,
            collector_version: env!("CARGO_PKG_VERSION").to_string(),
            os: std::env::consts::OS.to_string(),
            started_at: Utc::now().to_rfc3339(),
            finished_at: None,
            config: config.clone(),
            files_copied: 0,
            folders_copied: 0,
            files_skipped: 0,
            copies_failed: 0,
            traversal_errors: 0,
            bytes_copied: 0,
            permission_denied: 0,
        }
    }

    pub fn record_copy(&mut self, result: &CopyResult) {
        match &result.outcome {
            CopyOutcome::Copied { bytes } => {
                match result.kind {
                    EntryKind::File => self.files_copied += 1,
                    EntryKind::Directory => self.folders_copied += 1,
                }
                self.bytes_copied += bytes;
            }
            CopyOutcome::SkippedTooLarge { .. } => self.files_skipped += 1,
            CopyOutcome::Failed { .. } => self.copies_failed += 1,
        }
    }

    pub fn record_traversal_error(&mut self) {
        self.traversal_errors += 1;
    }

    pub fn set_permission_denied(&mut self, count: usize) {
        self.permission_denied = count as u64;
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now().to_rfc3339());
        self
    }

    /// Number of errors of any kind
    pub fn error_count(&self) -> u64 {
        self.copies_failed + self.traversal_errors
    }

    /// Human-readable one-line summary
    pub fn format_line(&self) -> String {
        format!(
            "files={} folders={} skipped={} failed={} traversal_errors={} bytes={}",
            self.files_copied,
            self.folders_copied,
            self.files_skipped,
            self.copies_failed,
            self.traversal_errors,
            self.bytes_copied
        )
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize run summary to JSON")
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .context(format!("Failed to write summary to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_summary() -> RunSummary {
        let mut summary = RunSummary::begin(&RunConfig::new().with_target_dir("/tmp/out"));
        summary.record_copy(&CopyResult::copied(
            Path::new("/a/wallet.dat"),
            PathBuf::from("/tmp/out/Findings/wallet.dat"),
            EntryKind::File,
            100,
        ));
        summary.record_copy(&CopyResult::copied(
            Path::new("/a/Bitcoin"),
            PathBuf::from("/tmp/out/Findings/Bitcoin"),
            EntryKind::Directory,
            50,
        ));
        summary.record_copy(&CopyResult::skipped(Path::new("/a/big.bak"), 11, 10));
        summary.record_copy(&CopyResult::failed(
            Path::new("/a/x.db"),
            None,
            EntryKind::File,
            "boom",
        ));
        summary.record_traversal_error();
        summary
    }

    #[test]
    fn test_counters() {
        let summary = sample_summary();
        assert_eq!(summary.files_copied, 1);
        assert_eq!(summary.folders_copied, 1);
        assert_eq!(summary.files_skipped, 1);
        assert_eq!(summary.copies_failed, 1);
        assert_eq!(summary.traversal_errors, 1);
        assert_eq!(summary.bytes_copied, 150);
        assert_eq!(summary.error_count(), 2);
        assert_eq!(
            summary.format_line(),
            "files=1 folders=1 skipped=1 failed=1 traversal_errors=1 bytes=150"
        );
    }

    #[test]
    fn test_json_fields() {
        let summary = sample_summary().finish();
        let json: Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();

        assert!(json["collection_id"].is_string());
        assert!(json["finished_at"].is_string());
        assert_eq!(json["files_copied"], 1);
        assert_eq!(json["config"]["max_size_bytes"], 100 * 1024 * 1024);
        assert_eq!(json["config"]["access_denied"], "continue");
    }

    #[test]
    fn test_unique_collection_ids() {
        let config = RunConfig::new();
        assert_ne!(
            RunSummary::begin(&config).collection_id,
            RunSummary::begin(&config).collection_id
        );
    }

    #[test]
    fn test_write_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("summary.json");
        sample_summary().finish().write_json(&path).unwrap();

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["bytes_copied"], 150);
    }
}
