use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::collectors::collector::Collector;
use crate::collectors::permission_tracker::PermissionTracker;
use crate::collectors::scanner::{ScanEvent, Scanner};
use crate::config::{AccessDeniedPolicy, RuleSet, RunConfig};
use crate::errors::CollectError;
use crate::models::CopyOutcome;
use crate::reporter::{report_copy, report_traversal_error, EventSink};
use crate::utils::summary::RunSummary;

/// Walk every root, copy what matches and report each outcome to `sink`.
///
/// Runs sequentially: one entry is fully collected before the next is
/// visited. Per-entry problems are reported and skipped. The run only fails
/// when the findings directory cannot be created, when no root can be
/// opened, or when access is denied under [`AccessDeniedPolicy::Abort`].
///
/// Nothing else may write into the findings directory while this runs.
pub fn run_collection(
    config: &RunConfig,
    rules: &RuleSet,
    sink: &mut dyn EventSink,
) -> Result<RunSummary, CollectError> {
    let findings_dir = config.findings_dir();
    fs::create_dir_all(&findings_dir).map_err(|source| CollectError::TargetDir {
        path: findings_dir.clone(),
        source,
    })?;
    debug!("Findings directory ready at {}", findings_dir.display());

    let collector = Collector::from_config(config);
    let mut tracker = PermissionTracker::new();
    let mut summary = RunSummary::begin(config);
    let mut failed_roots: HashSet<PathBuf> = HashSet::new();

    let scanner = Scanner::new(config.roots(), rules, config.follow_symlinks())
        .exclude(&findings_dir);

    for event in scanner {
        match event {
            ScanEvent::Matched(classification) => {
                let Some(result) = collector.collect(&classification) else {
                    continue;
                };
                summary.record_copy(&result);
                report_copy(sink, &result);

                if result.is_access_denied() {
                    tracker.record_permission_failure(&result.source);
                }
                if let CopyOutcome::Failed { reason, .. } = &result.outcome {
                    if result.is_access_denied()
                        && config.access_denied() == AccessDeniedPolicy::Abort
                    {
                        warn!("Aborting on access denied at {}", result.source.display());
                        return Err(CollectError::AccessDenied {
                            path: result.source.clone(),
                            reason: reason.clone(),
                        });
                    }
                }
            }
            ScanEvent::TraversalError(error) => {
                summary.record_traversal_error();
                report_traversal_error(sink, &error);

                if error.is_root() {
                    failed_roots.insert(error.path.clone());
                }
                if error.is_access_denied() {
                    tracker.record_permission_failure(&error.path);
                    if config.access_denied() == AccessDeniedPolicy::Abort {
                        warn!("Aborting on access denied at {}", error.path.display());
                        return Err(CollectError::AccessDenied {
                            path: error.path,
                            reason: error.reason,
                        });
                    }
                }
            }
        }
    }

    tracker.report_failures();
    summary.set_permission_denied(tracker.failure_count());

    let unique_roots: HashSet<&PathBuf> = config.roots().iter().collect();
    let all_roots_failed = unique_roots.iter().all(|root| failed_roots.contains(*root));
    if !unique_roots.is_empty() && all_roots_failed {
        return Err(CollectError::NoAccessibleRoots(unique_roots.len()));
    }

    let summary = summary.finish();
    info!(
        "Collection finished with {} error(s): {}",
        summary.error_count(),
        summary.format_line()
    );
    Ok(summary)
}
