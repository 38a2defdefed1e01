// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::Write;

use serde_json::json;
use termcolor::WriteColor;

use super::{InputReport, ReportFormatter, Summary};

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write(&self, out: &mut dyn WriteColor, reports: &[InputReport]) -> anyhow::Result<()> {
        let summary = Summary::of(reports);
        let value = json!({
            "inputs": reports,
            "total": summary.matches,
        });
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
        Ok(())
    }
}
