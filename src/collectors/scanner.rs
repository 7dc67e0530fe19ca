use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::collectors::classifier::classify;
use crate::config::RuleSet;
use crate::models::{Classification, Entry, EntryKind};

/// Outcome of visiting one entry: what it is and whether to walk into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkStep {
    pub classification: Classification,
    /// Only meaningful for directories. False once the directory is collected whole.
    pub descend: bool,
}

/// Classify `entry` and decide whether the walk continues below it
pub fn step(entry: &Entry, rules: &RuleSet) -> WalkStep {
    let classification = classify(entry, rules);
    let descend = !matches!(classification, Classification::FolderMatch(_));
    WalkStep {
        classification,
        descend,
    }
}

/// A directory or root that could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalError {
    pub path: PathBuf,
    pub reason: String,
    pub kind: Option<io::ErrorKind>,
    /// 0 means the root itself could not be opened or listed
    pub depth: usize,
}

impl TraversalError {
    fn from_walkdir(err: &walkdir::Error, fallback_path: &Path) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback_path.to_path_buf());
        let reason = match (err.loop_ancestor(), err.io_error()) {
            (Some(ancestor), _) => format!("symlink loop back to {}", ancestor.display()),
            (None, Some(io_err)) => io_err.to_string(),
            (None, None) => err.to_string(),
        };
        TraversalError {
            path,
            reason,
            kind: err.io_error().map(io::Error::kind),
            depth: err.depth(),
        }
    }

    pub fn is_access_denied(&self) -> bool {
        self.kind == Some(io::ErrorKind::PermissionDenied)
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// What the scanner surfaces. Unmatched entries never appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Always a `FileMatch` or `FolderMatch`
    Matched(Classification),
    TraversalError(TraversalError),
}

/// Files before subdirectories, each group by name
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Lazy depth-first, pre-order walk over several roots.
///
/// Roots are walked in the order given with no de-duplication. When a
/// directory is a folder match the walk does not enter it, so nothing inside
/// is reported separately. Read errors are surfaced as events and the walk
/// moves on to the next sibling.
///
/// Symlinks are not followed unless `follow_links` is set. Unfollowed links
/// to directories are never descended into. Links to files, dangling links
/// included, are classified like the files they stand for; a dangling match
/// then fails at copy time.
pub struct Scanner<'a> {
    rules: &'a RuleSet,
    roots: std::vec::IntoIter<PathBuf>,
    current_root: PathBuf,
    walker: Option<walkdir::IntoIter>,
    follow_links: bool,
    excluded: Vec<PathBuf>,
}

impl<'a> Scanner<'a> {
    pub fn new(roots: &[PathBuf], rules: &'a RuleSet, follow_links: bool) -> Self {
        Scanner {
            rules,
            roots: roots.to_vec().into_iter(),
            current_root: PathBuf::new(),
            walker: None,
            follow_links,
            excluded: Vec::new(),
        }
    }

    /// Never walk into `dir`, typically the output directory.
    ///
    /// Compared by canonical path, so the exclusion holds however a root
    /// spells its way there.
    pub fn exclude(mut self, dir: &Path) -> Self {
        let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        self.excluded.push(canonical);
        self
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excluded.iter().any(|excluded| {
            excluded.file_name() == path.file_name()
                && path
                    .canonicalize()
                    .map(|canonical| &canonical == excluded)
                    .unwrap_or(false)
        })
    }

    fn next_walker(&mut self) -> bool {
        match self.roots.next() {
            Some(root) => {
                debug!("Scanning root {}", root.display());
                let walker = WalkDir::new(&root)
                    .follow_links(self.follow_links)
                    .sort_by(files_first)
                    .into_iter();
                self.current_root = root;
                self.walker = Some(walker);
                true
            }
            None => false,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        loop {
            if self.walker.is_none() && !self.next_walker() {
                return None;
            }

            let next = self.walker.as_mut().and_then(Iterator::next);
            let dir_entry = match next {
                None => {
                    self.walker = None;
                    continue;
                }
                Some(Err(err)) => {
                    let error = TraversalError::from_walkdir(&err, &self.current_root);
                    debug!("Traversal error: {}", error);
                    return Some(ScanEvent::TraversalError(error));
                }
                Some(Ok(dir_entry)) => dir_entry,
            };

            let file_type = dir_entry.file_type();
            let entry = if file_type.is_dir() {
                if self.is_excluded(dir_entry.path()) {
                    debug!("Skipping excluded directory {}", dir_entry.path().display());
                    if let Some(walker) = self.walker.as_mut() {
                        walker.skip_current_dir();
                    }
                    continue;
                }
                Entry::directory(dir_entry.into_path())
            } else if file_type.is_file() {
                Entry::file(dir_entry.into_path())
            } else if file_type.is_symlink() {
                match fs::metadata(dir_entry.path()) {
                    Ok(target) if target.is_dir() => {
                        debug!("Not following {}", dir_entry.path().display());
                        continue;
                    }
                    Ok(target) if !target.is_file() => {
                        debug!("Skipping link to special file {}", dir_entry.path().display());
                        continue;
                    }
                    _ => Entry::file(dir_entry.into_path()),
                }
            } else {
                debug!("Skipping special file {}", dir_entry.path().display());
                continue;
            };

            let WalkStep {
                classification,
                descend,
            } = step(&entry, self.rules);

            if entry.kind() == EntryKind::Directory && !descend {
                if let Some(walker) = self.walker.as_mut() {
                    walker.skip_current_dir();
                }
            }

            if classification.is_match() {
                return Some(ScanEvent::Matched(classification));
            }
        }
    }
}
