// SPDX-License-Identifier: MIT

//! mergeguard: fail merges whose sources contain forbidden marker text.

use std::process::ExitCode;

use clap::{CommandFactory as _, Parser as _};

mod cli;
mod cmd_check;
mod cmd_init;
mod cmd_pr;
mod color;
mod config;
mod exclude;
mod file_reader;
mod github;
mod output;
mod pattern;
mod scan;
mod verdict;

#[cfg(test)]
mod test_utils;

use cli::{Cli, Command};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Command::Check(args) => cmd_check::run(&cli, args).map(|result| result.passed),
        Command::Pr(args) => cmd_pr::run(&cli, args).map(|result| result.passed),
        Command::Init(args) => cmd_init::run(args.force).map(|()| true),
        Command::Completions(args) => {
            let mut command = Cli::command();
            clap_complete::generate(args.shell, &mut command, "mergeguard", &mut std::io::stdout());
            Ok(true)
        }
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        // A failed gate is a clean run with a negative answer.
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout stays parseable; RUST_LOG overrides
/// the default warning level.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
