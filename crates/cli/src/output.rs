// SPDX-License-Identifier: MIT

//! Verdict presentation: plain-text summary or JSON on stdout.

use std::io::Write as _;

use termcolor::{ColorChoice, StandardStream, WriteColor as _};

use crate::cli::OutputFormat;
use crate::color::scheme;
use crate::verdict::RunResult;

/// Print the run result in the requested format.
pub fn emit(result: &RunResult, format: OutputFormat, color: ColorChoice) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
            Ok(())
        }
        OutputFormat::Text => print_summary(result, color),
    }
}

/// The headline carries the verdict color; detail lines stay plain so
/// paths remain copy-pasteable.
fn print_summary(result: &RunResult, color: ColorChoice) -> anyhow::Result<()> {
    let mut stdout = StandardStream::stdout(color);
    let headline = if result.passed { scheme::pass() } else { scheme::fail() };

    let mut lines = result.summary.lines();
    if let Some(first) = lines.next() {
        stdout.set_color(&headline)?;
        write!(stdout, "{first}")?;
        stdout.reset()?;
        writeln!(stdout)?;
    }
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}
