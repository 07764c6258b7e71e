mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use sigbreak_check::{Analysis, GitCli};
use sigbreak_core::Config;
use std::process::ExitCode;

const EXIT_BREAKS: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match sigbreak_core::init_logging(&cli.log_level, cli.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match run(cli) {
        Ok(true) => ExitCode::from(EXIT_BREAKS),
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Returns whether any break was found
fn run(cli: Cli) -> Result<bool> {
    let repo = GitCli::new(&cli.path);
    let global = if cli.global_config {
        Config::global_config_path()
    } else {
        None
    };
    let analysis = Analysis::init(
        repo,
        &cli.path,
        &cli.start,
        &cli.end,
        &cli.config,
        global.as_deref(),
    )
    .context("Failed to initialise analysis")?;
    if !analysis.has_configuration() {
        tracing::debug!(config = %cli.config, "no configuration found, nothing excluded");
    }

    let report = analysis.run().context("Failed to analyse changes")?;

    if cli.json {
        println!("{}", report::format_json(&report)?);
    } else {
        print!("{}", report::format_text(&report));
    }

    Ok(report.has_breaks())
}
