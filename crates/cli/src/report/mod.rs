// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Detection report output.
//!
//! Turns scanner matches into [`Occurrence`]s and renders them as text or
//! JSON.

mod json;
mod text;

use serde::Serialize;
use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::scanner::Matches;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// One banned word found in an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// Character offset of the first character.
    pub offset: usize,
    /// Length in characters.
    pub length: usize,
    /// The matched text.
    pub word: String,
}

impl Occurrence {
    /// Resolve `matches` against the text they were found in.
    pub fn collect(text: &str, matches: &Matches) -> Vec<Self> {
        if matches.is_empty() {
            return Vec::new();
        }
        let chars: Vec<char> = text.chars().collect();
        matches
            .iter()
            .filter_map(|(&offset, &length)| {
                let span = chars.get(offset..offset.checked_add(length)?)?;
                Some(Occurrence { offset, length, word: span.iter().collect() })
            })
            .collect()
    }
}

/// Everything found in one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputReport {
    /// File path, or `<stdin>`.
    pub path: String,
    pub matches: Vec<Occurrence>,
}

/// Totals across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub inputs: usize,
    pub inputs_with_matches: usize,
    pub matches: usize,
}

impl Summary {
    pub fn of(reports: &[InputReport]) -> Self {
        Self {
            inputs: reports.len(),
            inputs_with_matches: reports.iter().filter(|r| !r.matches.is_empty()).count(),
            matches: reports.iter().map(|r| r.matches.len()).sum(),
        }
    }
}

/// Trait for rendering detection reports.
pub trait ReportFormatter {
    /// Write all reports to `out`.
    fn write(&self, out: &mut dyn WriteColor, reports: &[InputReport]) -> anyhow::Result<()>;
}

/// Write `reports` in the requested format.
pub fn write_report(
    out: &mut dyn WriteColor,
    format: OutputFormat,
    reports: &[InputReport],
) -> anyhow::Result<()> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.write(out, reports)
}

/// "1 match" / "2 matches".
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 { format!("{count} {singular}") } else { format!("{count} {plural}") }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
