use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use wallet_collector::cli::Args;
use wallet_collector::config::RuleSet;
use wallet_collector::constants::{BYTES_PER_MB, EXIT_FAILURE, EXIT_OK};
use wallet_collector::errors::CollectError;
use wallet_collector::privileges::warn_if_not_elevated;
use wallet_collector::reporter::ConsoleSink;
use wallet_collector::run::run_collection;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(err) => {
            error!("{:#}", err);
            let code = err
                .downcast_ref::<CollectError>()
                .map(CollectError::exit_code)
                .unwrap_or(EXIT_FAILURE);
            ExitCode::from(code)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    initialize_logging(args.verbose)?;

    let config = args.to_run_config();
    let rules = RuleSet::default();

    warn_if_not_elevated();
    info!(
        "Scanning {} root(s) into {} (file ceiling {:.1} MB)",
        config.roots().len(),
        config.findings_dir().display(),
        config.max_size_bytes() as f64 / BYTES_PER_MB
    );
    for root in config.roots() {
        info!("  root: {}", root.display());
    }
    info!(
        "Matching {} file suffixes and {} folder names",
        rules.extension_count(),
        rules.folder_count()
    );

    let mut sink = ConsoleSink::stdout();
    let summary = run_collection(&config, &rules, &mut sink)?;

    if let Some(path) = &args.summary {
        summary.write_json(path)?;
        info!("Summary written to {}", path.display());
    }

    info!("Scan complete.");
    Ok(())
}

/// Initialize logging
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}
