//! Permission error tracking and reporting
//!
//! Collects the paths that could not be read or copied because of access
//! restrictions and prints guidance about running with elevated privileges
//! once the run is over.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::warn;

use crate::privileges::get_elevation_instructions;

/// Tracks paths that failed due to permission errors
#[derive(Debug, Clone, Default)]
pub struct PermissionTracker {
    failed_paths: BTreeSet<PathBuf>,
}

impl PermissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a permission failure for a path
    pub fn record_permission_failure(&mut self, path: &Path) {
        self.failed_paths.insert(path.to_path_buf());
    }

    pub fn failure_count(&self) -> usize {
        self.failed_paths.len()
    }

    /// Report permission failures and provide guidance
    pub fn report_failures(&self) {
        if !self.should_suggest_elevation() {
            return;
        }

        warn!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        warn!("Permission Issues Summary");
        warn!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        warn!(
            "The following {} path(s) could not be read due to insufficient permissions:",
            self.failed_paths.len()
        );

        for path in &self.failed_paths {
            warn!("  • {}", path.display());
        }

        warn!("");
        warn!("To include them, {}", get_elevation_instructions());
        warn!("Note: collection continued for accessible paths.");
        warn!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    /// Check if we should suggest running with elevated privileges
    pub fn should_suggest_elevation(&self) -> bool {
        !self.failed_paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_tracker() {
        let mut tracker = PermissionTracker::new();

        assert_eq!(tracker.failure_count(), 0);
        assert!(!tracker.should_suggest_elevation());

        tracker.record_permission_failure(Path::new("/root"));
        assert_eq!(tracker.failure_count(), 1);
        assert!(tracker.should_suggest_elevation());

        // Duplicate failures only counted once
        tracker.record_permission_failure(Path::new("/root"));
        assert_eq!(tracker.failure_count(), 1);

        tracker.record_permission_failure(Path::new("/var/lib/private"));
        assert_eq!(tracker.failure_count(), 2);
    }
}
