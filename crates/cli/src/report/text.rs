// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! One line per match, `path:offset:length: word`, followed by a summary.

use std::io::Write;

use termcolor::WriteColor;

use crate::color::{plain, scheme};

use super::{InputReport, ReportFormatter, Summary, plural};

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write(&self, out: &mut dyn WriteColor, reports: &[InputReport]) -> anyhow::Result<()> {
        for report in reports {
            for m in &report.matches {
                out.set_color(&scheme::path())?;
                write!(out, "{}", report.path)?;
                out.set_color(&plain())?;
                write!(out, ":")?;
                out.set_color(&scheme::position())?;
                write!(out, "{}:{}", m.offset, m.length)?;
                out.set_color(&plain())?;
                write!(out, ": ")?;
                out.set_color(&scheme::word())?;
                write!(out, "{}", m.word)?;
                out.reset()?;
                writeln!(out)?;
            }
        }

        let summary = Summary::of(reports);
        out.set_color(&scheme::summary())?;
        write!(
            out,
            "{} in {} of {}",
            plural(summary.matches, "match", "matches"),
            summary.inputs_with_matches,
            plural(summary.inputs, "input", "inputs"),
        )?;
        out.reset()?;
        writeln!(out)?;
        Ok(())
    }
}
