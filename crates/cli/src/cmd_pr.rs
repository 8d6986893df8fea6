// SPDX-License-Identifier: MIT

//! The `pr` command: gate a pull request's changed files and description.

use anyhow::Context as _;

use crate::cli::{Cli, PrArgs};
use crate::config;
use crate::exclude::IgnoreRules;
use crate::github::GithubClient;
use crate::output;
use crate::pattern::PatternSet;
use crate::scan::remote::scan_changed;
use crate::verdict::{self, RunResult};

pub fn run(cli: &Cli, args: &PrArgs) -> anyhow::Result<RunResult> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = config::load(cli.config.as_deref(), &cwd);
    let settings = args.scan.merge(config);

    let patterns = PatternSet::new(&settings.patterns, settings.case_sensitive);
    let rules = IgnoreRules::new(&settings.ignore);

    let client = GithubClient::new(&args.api_url, &args.repo, args.token.clone())
        .context("cannot build API client")?;
    let pr = client
        .pull_request(args.number)
        .with_context(|| format!("cannot fetch pull request #{}", args.number))?;
    let reports = scan_changed(&pr, &patterns, &rules)
        .with_context(|| format!("cannot scan pull request #{}", args.number))?;
    let result = verdict::evaluate(pr.description.as_deref(), &patterns, reports);

    output::emit(&result, args.output.output, args.output.color.choice(args.output.no_color))?;
    Ok(result)
}
