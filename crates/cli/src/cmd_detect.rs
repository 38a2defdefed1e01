// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wordsift detect` command implementation.

use std::io::Write;

use termcolor::StandardStream;

use wordsift::PatternIndex;
use wordsift::cli::DetectArgs;
use wordsift::error::ExitCode;
use wordsift::file_reader::InputSource;
use wordsift::report::{self, InputReport, Occurrence};
use wordsift::runner::ScanRunner;

/// Run the `wordsift detect` command.
pub fn run(index: &PatternIndex, args: &DetectArgs) -> anyhow::Result<ExitCode> {
    let sources = InputSource::from_args(&args.input.paths);
    let outcomes = ScanRunner::new(index)
        .run(sources, |index, text| Ok(Occurrence::collect(text, &index.detect(text)?)));

    let mut reports = Vec::with_capacity(outcomes.len());
    let mut failed = false;
    for outcome in outcomes {
        match outcome.result {
            Ok(matches) => reports.push(InputReport { path: outcome.source.to_string(), matches }),
            Err(e) => {
                failed = true;
                eprintln!("wordsift: {e:#}");
            }
        }
    }

    let mut stdout = StandardStream::stdout(args.color_mode().choice());
    report::write_report(&mut stdout, args.output, &reports)?;
    stdout.flush()?;

    let found = reports.iter().any(|r| !r.matches.is_empty());
    Ok(if failed {
        ExitCode::InternalError
    } else if found {
        ExitCode::Found
    } else {
        ExitCode::Success
    })
}
