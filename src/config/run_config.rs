use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{
    DEFAULT_MAX_FILE_SIZE, DEFAULT_ROOT, DEFAULT_TARGET_DIR_NAME, FINDINGS_DIR_NAME,
};

/// What to do when traversal hits an access-denied directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDeniedPolicy {
    /// Report the directory and keep walking its siblings
    #[default]
    Continue,
    /// Stop the whole run with a distinguished exit status
    Abort,
}

/// Resolved configuration for one collection run.
///
/// Built once from defaults plus overrides and only read afterwards. The
/// collision resolver assumes nothing else writes into [`findings_dir`]
/// while the run is in progress.
///
/// [`findings_dir`]: RunConfig::findings_dir
#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    roots: Vec<PathBuf>,
    target_dir: PathBuf,
    max_size_bytes: u64,
    follow_symlinks: bool,
    access_denied: AccessDeniedPolicy,
}

impl RunConfig {
    /// Configuration with every field at its default
    pub fn new() -> Self {
        RunConfig {
            roots: vec![PathBuf::from(DEFAULT_ROOT)],
            target_dir: std::env::temp_dir().join(DEFAULT_TARGET_DIR_NAME),
            max_size_bytes: DEFAULT_MAX_FILE_SIZE,
            follow_symlinks: false,
            access_denied: AccessDeniedPolicy::Continue,
        }
    }

    /// Replace the default roots. An empty list keeps the defaults.
    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots: Vec<PathBuf> = roots.into_iter().map(Into::into).collect();
        if !roots.is_empty() {
            self.roots = roots;
        }
        self
    }

    pub fn with_target_dir(mut self, target_dir: impl Into<PathBuf>) -> Self {
        self.target_dir = target_dir.into();
        self
    }

    pub fn with_max_size_bytes(mut self, max_size_bytes: u64) -> Self {
        self.max_size_bytes = max_size_bytes;
        self
    }

    pub fn with_follow_symlinks(mut self, follow_symlinks: bool) -> Self {
        self.follow_symlinks = follow_symlinks;
        self
    }

    pub fn with_access_denied(mut self, policy: AccessDeniedPolicy) -> Self {
        self.access_denied = policy;
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Base output directory supplied by the user
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Flat directory that receives every collected artifact
    pub fn findings_dir(&self) -> PathBuf {
        self.target_dir.join(FINDINGS_DIR_NAME)
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    pub fn follow_symlinks(&self) -> bool {
        self.follow_symlinks
    }

    pub fn access_denied(&self) -> AccessDeniedPolicy {
        self.access_denied
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new();
        assert_eq!(config.roots(), &[PathBuf::from(".")]);
        assert_eq!(config.max_size_bytes(), 100 * 1024 * 1024);
        assert!(!config.follow_symlinks());
        assert_eq!(config.access_denied(), AccessDeniedPolicy::Continue);
        assert!(config.target_dir().ends_with("wallet-collector"));
    }

    #[test]
    fn test_findings_dir_is_under_target() {
        let config = RunConfig::new().with_target_dir("/tmp/out");
        assert_eq!(config.findings_dir(), PathBuf::from("/tmp/out/Findings"));
    }

    #[test]
    fn test_overrides() {
        let config = RunConfig::new()
            .with_roots(["/a", "/b"])
            .with_max_size_bytes(42)
            .with_follow_symlinks(true)
            .with_access_denied(AccessDeniedPolicy::Abort);

        assert_eq!(config.roots(), &[PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(config.max_size_bytes(), 42);
        assert!(config.follow_symlinks());
        assert_eq!(config.access_denied(), AccessDeniedPolicy::Abort);
    }

    #[test]
    fn test_empty_roots_keep_defaults() {
        let config = RunConfig::new().with_roots(Vec::<PathBuf>::new());
        assert_eq!(config.roots(), &[PathBuf::from(".")]);
    }

    #[test]
    fn test_serializes_policy_in_snake_case() {
        let config = RunConfig::new().with_access_denied(AccessDeniedPolicy::Abort);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"access_denied\":\"abort\""));
    }
}
