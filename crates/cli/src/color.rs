// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling for text output.

use std::io::IsTerminal;

use termcolor::{ColorChoice, ColorSpec};

/// `--color` flag values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against the environment: `NO_COLOR`, and whether stdout is a
    /// terminal in auto mode.
    pub fn choice(self) -> ColorChoice {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        match self {
            ColorMode::Always => resolve_color(true, no_color),
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => resolve_color(std::io::stdout().is_terminal(), no_color),
        }
    }
}

/// `NO_COLOR` always wins; otherwise color when forced or on a terminal.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

/// Color specs used by the text report.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Input name (file path or `<stdin>`).
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Magenta));
        spec
    }

    /// Character offset and length.
    pub fn position() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// The matched banned word.
    pub fn word() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Summary line.
    pub fn summary() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

/// Plain spec, for resetting.
pub fn plain() -> ColorSpec {
    ColorSpec::new()
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
