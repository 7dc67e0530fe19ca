//! # wallet-collector
//!
//! Finds cryptocurrency wallet files and folders under one or more root
//! directories and copies them into a single flat `Findings` directory.
//!
//! ## Overview
//!
//! Each root is walked depth-first. Directories whose name is a known wallet
//! folder (`Bitcoin`, `.electrum`, `Exodus`, ...) are copied whole and not
//! walked any further. Files whose name ends in a known suffix (`.dat`,
//! `.wallet`, `.seed`, ...) are copied one by one, unless they are larger
//! than the configured ceiling. Destination names never overwrite: a second
//! `seed.txt` lands as `seed_1.txt`.
//!
//! ## Usage
//!
//! ```no_run
//! use wallet_collector::config::{RuleSet, RunConfig};
//! use wallet_collector::reporter::ConsoleSink;
//! use wallet_collector::run::run_collection;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = RunConfig::new()
//!     .with_roots(["/mnt/old-drive"])
//!     .with_target_dir("/cases/42");
//!
//! let summary = run_collection(&config, &RuleSet::default(), &mut ConsoleSink::stdout())?;
//! println!("Copied {} files", summary.files_copied);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Rule set and run configuration
//! - [`models`]: Entries, classifications and copy results
//! - [`collectors`]: Classification, scanning, collision handling and copying
//! - [`reporter`]: Progress event sink
//! - [`run`]: Top-level collection driver
//! - [`errors`]: Fatal error taxonomy
//! - [`utils`]: Run summary
//! - [`privileges`]: Elevation checks
//! - [`constants`]: Defaults and exit codes

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models
pub mod models;

/// Classifier, scanner, collector and their helpers
pub mod collectors;

/// Rule set and immutable run configuration
pub mod config;

/// Fatal errors and exit-code mapping
pub mod errors;

/// Structured progress events
pub mod reporter;

/// Top-level collection run
pub mod run;

/// Run summary generation
pub mod utils;

/// Platform-specific privilege checks
pub mod privileges;

/// Application constants and configuration values
pub mod constants;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
