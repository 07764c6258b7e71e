use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sigbreak",
    version,
    about = "Report probable backward-compatibility breaks in public method signatures"
)]
pub struct Cli {
    /// Start reference (commit, tag or branch)
    pub start: String,

    /// End reference (commit, tag or branch)
    pub end: String,

    /// Working tree of the repository to analyse
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Configuration file, relative to the working tree
    #[arg(long, env = "SIGBREAK_CONFIG", default_value = sigbreak_core::DEFAULT_CONFIG_FILENAME)]
    pub config: String,

    /// Also read the user-wide config.toml (overridden by the repo config)
    #[arg(long, env = "SIGBREAK_GLOBAL_CONFIG")]
    pub global_config: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level
    #[arg(long, env = "SIGBREAK_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Write logs to this directory instead of stderr
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}
