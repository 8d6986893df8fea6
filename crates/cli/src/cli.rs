//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::config::Config;

/// A merge gate that fails when sources contain forbidden marker text
#[derive(Parser)]
#[command(name = "mergeguard")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "MERGEGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a local directory tree for forbidden patterns
    Check(CheckArgs),
    /// Scan a pull request's changed files and description
    Pr(PrArgs),
    /// Initialize mergeguard configuration
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Directory to scan
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Also check this text as a description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct PrArgs {
    /// Pull request number
    #[arg(value_name = "NUMBER")]
    pub number: u64,

    /// Repository in OWNER/NAME form
    #[arg(long, env = "GITHUB_REPOSITORY", value_name = "OWNER/NAME")]
    pub repo: String,

    /// API token for private repositories and rate limits
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API root (set by Actions for enterprise installs)
    #[arg(
        long,
        env = "GITHUB_API_URL",
        default_value = "https://api.github.com",
        hide = true
    )]
    pub api_url: String,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Scan options shared by the local and pull-request modes.
#[derive(clap::Args)]
pub struct ScanArgs {
    /// Forbidden pattern (repeatable; replaces the configured list)
    #[arg(long = "pattern", value_name = "TEXT")]
    pub patterns: Vec<String>,

    /// Match patterns case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Ignore rule (repeatable; adds to the configured list)
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,
}

impl ScanArgs {
    /// Merge command-line overrides into the loaded config. Patterns given
    /// on the command line replace the configured list; ignore rules add to
    /// it; `--case-sensitive` can only tighten.
    pub fn merge(&self, config: Config) -> ScanSettings {
        let patterns = if self.patterns.is_empty() {
            config.patterns.into_vec()
        } else {
            self.patterns.clone()
        };
        let mut ignore = self.ignore.clone();
        ignore.extend(config.ignore);
        ScanSettings {
            patterns,
            case_sensitive: self.case_sensitive || config.case_sensitive,
            ignore,
        }
    }
}

/// Effective scan settings after merging CLI overrides into config.
pub struct ScanSettings {
    pub patterns: Vec<String>,
    pub case_sensitive: bool,
    pub ignore: Vec<String>,
}

#[derive(clap::Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
