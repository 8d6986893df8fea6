// SPDX-License-Identifier: MIT

//! The `check` command: gate a local directory tree.

use anyhow::Context as _;

use crate::cli::{CheckArgs, Cli};
use crate::config;
use crate::exclude::IgnoreRules;
use crate::output;
use crate::pattern::PatternSet;
use crate::scan::local::scan_tree;
use crate::verdict::{self, RunResult};

/// Run the local gate and print its verdict. A failing verdict is a normal
/// return; only being unable to scan at all is an error.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<RunResult> {
    let config = config::load(cli.config.as_deref(), &args.path);
    let settings = args.scan.merge(config);

    let patterns = PatternSet::new(&settings.patterns, settings.case_sensitive);
    let rules = IgnoreRules::new(&settings.ignore);

    let reports = scan_tree(&args.path, &patterns, &rules)
        .with_context(|| format!("cannot scan {}", args.path.display()))?;
    let result = verdict::evaluate(args.description.as_deref(), &patterns, reports);

    output::emit(&result, args.output.output, args.output.color.choice(args.output.no_color))?;
    Ok(result)
}
