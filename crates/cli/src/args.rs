//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// requote: quote a user's top-scoring recent post with a short comment
#[derive(Parser, Debug)]
#[command(name = "requote")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute one pipeline invocation: fetch, score, and quote the winner
    Run(RunArgs),

    /// One-shot offline scoring of posts from a JSON file
    Score(ScoreArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Validate configuration and show status
    Doctor(DoctorArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Username whose posts are scanned (the trigger payload's source field)
    #[arg(long)]
    pub source: Option<String>,

    /// Select and compose but do not publish
    #[arg(long)]
    pub dry_run: bool,

    /// Print the response object as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File containing a JSON array of posts (use - for stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Also perform a live user lookup against the X API
    #[arg(long)]
    pub live: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
