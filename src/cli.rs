use clap::Parser;
use std::path::PathBuf;

use crate::config::{AccessDeniedPolicy, RunConfig};
use crate::constants::DEFAULT_MAX_FILE_SIZE;

/// Command-line arguments for wallet-collector.
///
/// Every option maps onto one [`RunConfig`] field; anything left out keeps
/// the configuration default.
#[derive(Parser, Debug)]
#[clap(
    name = "wallet-collector",
    version,
    about = "Find wallet files and folders and copy them into a Findings directory"
)]
pub struct Args {
    /// Root paths to scan (default: current directory)
    pub roots: Vec<PathBuf>,

    /// Base target directory; a Findings subdirectory is created inside it
    /// (default: %TEMP%/wallet-collector or /tmp/wallet-collector)
    #[clap(short, long)]
    pub target: Option<PathBuf>,

    /// Skip individually matched files larger than this many bytes
    #[clap(short, long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_size: u64,

    /// Follow symlinks while scanning and copy link targets inside folders
    #[clap(long)]
    pub follow_symlinks: bool,

    /// Stop the whole run on the first access-denied directory
    #[clap(long)]
    pub abort_on_access_denied: bool,

    /// Write a JSON summary of the run to this path
    #[clap(long)]
    pub summary: Option<PathBuf>,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolve defaults plus command-line overrides into a run configuration
    pub fn to_run_config(&self) -> RunConfig {
        let policy = if self.abort_on_access_denied {
            AccessDeniedPolicy::Abort
        } else {
            AccessDeniedPolicy::Continue
        };

        let mut config = RunConfig::new()
            .with_roots(self.roots.iter().cloned())
            .with_max_size_bytes(self.max_size)
            .with_follow_symlinks(self.follow_symlinks)
            .with_access_denied(policy);

        if let Some(target) = &self.target {
            config = config.with_target_dir(target);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["wallet-collector"]).unwrap();
        let config = args.to_run_config();

        assert_eq!(config.roots(), &[PathBuf::from(".")]);
        assert_eq!(config.max_size_bytes(), DEFAULT_MAX_FILE_SIZE);
        assert_eq!(config.access_denied(), AccessDeniedPolicy::Continue);
        assert!(!config.follow_symlinks());
        assert!(args.summary.is_none());
    }

    #[test]
    fn test_short_flags_and_roots() {
        let args = Args::try_parse_from([
            "wallet-collector",
            "/mnt/e",
            "/home/user",
            "-t",
            "/cases/42",
            "-m",
            "1024",
        ])
        .unwrap();
        let config = args.to_run_config();

        assert_eq!(
            config.roots(),
            &[PathBuf::from("/mnt/e"), PathBuf::from("/home/user")]
        );
        assert_eq!(config.findings_dir(), PathBuf::from("/cases/42/Findings"));
        assert_eq!(config.max_size_bytes(), 1024);
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "wallet-collector",
            "--target",
            "/out",
            "--max-size",
            "5",
            "--follow-symlinks",
            "--abort-on-access-denied",
            "--summary",
            "/out/summary.json",
            "--verbose",
        ])
        .unwrap();
        let config = args.to_run_config();

        assert!(config.follow_symlinks());
        assert_eq!(config.access_denied(), AccessDeniedPolicy::Abort);
        assert_eq!(args.summary, Some(PathBuf::from("/out/summary.json")));
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_non_numeric_size() {
        assert!(Args::try_parse_from(["wallet-collector", "-m", "100MB"]).is_err());
    }
}
