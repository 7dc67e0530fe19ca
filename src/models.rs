use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kind of filesystem object visited during traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One filesystem object seen by the scanner.
///
/// The size is not captured at visit time; [`Entry::size_bytes`] reads it on
/// demand so directories and unmatched files never pay for a stat call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    kind: EntryKind,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Entry {
            path: path.into(),
            kind,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::Directory)
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::File)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Final path component, lossily decoded. Empty for paths like `/` or `..`.
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Current size in bytes, following symlinks
    pub fn size_bytes(&self) -> io::Result<u64> {
        fs::metadata(&self.path).map(|meta| meta.len())
    }
}

/// Result of matching one entry against the rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    FolderMatch(Entry),
    FileMatch(Entry),
    NoMatch,
}

impl Classification {
    pub fn is_match(&self) -> bool {
        !matches!(self, Classification::NoMatch)
    }
}

/// How a single copy attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Data is at the destination; `bytes` counts file content written
    Copied { bytes: u64 },
    /// File exceeded the ceiling and was not copied
    SkippedTooLarge { size_bytes: u64, limit_bytes: u64 },
    Failed {
        reason: String,
        /// Underlying I/O error kind, when the failure came from the filesystem
        error_kind: Option<io::ErrorKind>,
    },
}

/// One attempted copy, handed to the reporter and then dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub source: PathBuf,
    /// Resolved destination. `None` when the copy never got as far as naming one.
    pub destination: Option<PathBuf>,
    pub kind: EntryKind,
    pub outcome: CopyOutcome,
}

impl CopyResult {
    pub fn copied(source: &Path, destination: PathBuf, kind: EntryKind, bytes: u64) -> Self {
        CopyResult {
            source: source.to_path_buf(),
            destination: Some(destination),
            kind,
            outcome: CopyOutcome::Copied { bytes },
        }
    }

    pub fn skipped(source: &Path, size_bytes: u64, limit_bytes: u64) -> Self {
        CopyResult {
            source: source.to_path_buf(),
            destination: None,
            kind: EntryKind::File,
            outcome: CopyOutcome::SkippedTooLarge {
                size_bytes,
                limit_bytes,
            },
        }
    }

    pub fn failed(
        source: &Path,
        destination: Option<PathBuf>,
        kind: EntryKind,
        reason: impl Into<String>,
    ) -> Self {
        CopyResult {
            source: source.to_path_buf(),
            destination,
            kind,
            outcome: CopyOutcome::Failed {
                reason: reason.into(),
                error_kind: None,
            },
        }
    }

    /// Attach the I/O error kind to a failed result; no effect on other outcomes
    pub fn with_error_kind(mut self, kind: Option<io::ErrorKind>) -> Self {
        if let CopyOutcome::Failed { error_kind, .. } = &mut self.outcome {
            *error_kind = kind;
        }
        self
    }

    /// True if the copy failed because access was denied
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self.outcome,
            CopyOutcome::Failed {
                error_kind: Some(io::ErrorKind::PermissionDenied),
                ..
            }
        )
    }

    pub fn is_copied(&self) -> bool {
        matches!(self.outcome, CopyOutcome::Copied { .. })
    }
}
