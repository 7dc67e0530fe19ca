use std::io;
use std::path::PathBuf;

use log::{debug, warn};

use crate::collectors::collision::resolve_collision;
use crate::collectors::copy::{copy_file_with_metadata, copy_tree};
use crate::config::RunConfig;
use crate::models::{Classification, CopyResult, Entry, EntryKind};

/// First I/O error kind in the cause chain, looking inside walkdir errors too
fn io_error_kind(err: &anyhow::Error) -> Option<io::ErrorKind> {
    err.chain().find_map(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .or_else(|| {
                cause
                    .downcast_ref::<walkdir::Error>()
                    .and_then(walkdir::Error::io_error)
            })
            .map(io::Error::kind)
    })
}

/// Copies matches into the flat findings directory.
///
/// Destination names go through [`resolve_collision`], so nothing already in
/// the findings directory is ever replaced. This holds only while the
/// collector is the sole writer of that directory.
#[derive(Debug, Clone)]
pub struct Collector {
    findings_dir: PathBuf,
    max_size_bytes: u64,
    follow_links: bool,
}

impl Collector {
    pub fn new(findings_dir: impl Into<PathBuf>, max_size_bytes: u64, follow_links: bool) -> Self {
        Collector {
            findings_dir: findings_dir.into(),
            max_size_bytes,
            follow_links,
        }
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(
            config.findings_dir(),
            config.max_size_bytes(),
            config.follow_symlinks(),
        )
    }

    /// Collision-free destination for `entry` directly under the findings directory
    fn destination_for(&self, entry: &Entry) -> Option<PathBuf> {
        let name = entry.path().file_name()?;
        Some(resolve_collision(&self.findings_dir.join(name)))
    }

    /// Copy one matched file unless it is larger than the ceiling
    pub fn collect_file(&self, entry: &Entry) -> CopyResult {
        let source = entry.path();

        let size = match entry.size_bytes() {
            Ok(size) => size,
            Err(e) => {
                warn!("Failed to read size of {}: {}", source.display(), e);
                return CopyResult::failed(source, None, EntryKind::File, e.to_string())
                    .with_error_kind(Some(e.kind()));
            }
        };

        if size > self.max_size_bytes {
            debug!(
                "Skipping {} ({} bytes > {} bytes)",
                source.display(),
                size,
                self.max_size_bytes
            );
            return CopyResult::skipped(source, size, self.max_size_bytes);
        }

        let Some(dest) = self.destination_for(entry) else {
            return CopyResult::failed(source, None, EntryKind::File, "path has no file name");
        };

        match copy_file_with_metadata(source, &dest) {
            Ok(bytes) => CopyResult::copied(source, dest, EntryKind::File, bytes),
            Err(e) => {
                warn!("Failed to collect {}: {:#}", source.display(), e);
                CopyResult::failed(source, Some(dest), EntryKind::File, format!("{:#}", e))
                    .with_error_kind(io_error_kind(&e))
            }
        }
    }

    /// Copy a matched folder and everything below it as one unit.
    ///
    /// Only the top-level name is made collision-free; no size limit applies
    /// inside. A failure part way leaves the partial copy in place.
    pub fn collect_folder(&self, entry: &Entry) -> CopyResult {
        let source = entry.path();

        let Some(dest) = self.destination_for(entry) else {
            return CopyResult::failed(
                source,
                None,
                EntryKind::Directory,
                "path has no folder name",
            );
        };

        match copy_tree(source, &dest, self.follow_links) {
            Ok(stats) => {
                debug!(
                    "Copied {} files, {} directories, {} symlinks from {}",
                    stats.files,
                    stats.directories,
                    stats.symlinks,
                    source.display()
                );
                CopyResult::copied(source, dest, EntryKind::Directory, stats.bytes)
            }
            Err(e) => {
                warn!("Failed to collect folder {}: {:#}", source.display(), e);
                CopyResult::failed(source, Some(dest), EntryKind::Directory, format!("{:#}", e))
                    .with_error_kind(io_error_kind(&e))
            }
        }
    }

    /// Dispatch a classification to the matching copy routine
    pub fn collect(&self, classification: &Classification) -> Option<CopyResult> {
        match classification {
            Classification::FileMatch(entry) => Some(self.collect_file(entry)),
            Classification::FolderMatch(entry) => Some(self.collect_folder(entry)),
            Classification::NoMatch => None,
        }
    }
}
