// SPDX-License-Identifier: MIT

//! Terminal color policy and verdict color scheme.

use std::io::IsTerminal as _;

use termcolor::ColorChoice;

/// Color output mode from the command line.
#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Combine the mode with the `--no-color` shorthand.
    pub fn choice(self, no_color: bool) -> ColorChoice {
        resolve_color(self == ColorMode::Always, no_color || self == ColorMode::Never)
    }
}

/// Resolve the effective color choice. `no_color` wins over everything;
/// without either override, color follows whether stdout is a terminal.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Color specs for verdict rendering.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Red bold for the failing headline.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Green bold for the passing headline.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
