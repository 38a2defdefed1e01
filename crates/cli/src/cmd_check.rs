// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wordsift check` command implementation.
//!
//! Existence check per input: prints each input that contains a banned word
//! and exits with [`ExitCode::Found`] if any does.

use wordsift::PatternIndex;
use wordsift::cli::CheckArgs;
use wordsift::error::ExitCode;
use wordsift::file_reader::InputSource;
use wordsift::runner::ScanRunner;

/// Run the `wordsift check` command.
pub fn run(index: &PatternIndex, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let sources = InputSource::from_args(&args.input.paths);
    let outcomes = ScanRunner::new(index).run(sources, |index, text| index.exists(text));

    let mut found = false;
    let mut failed = false;
    for outcome in outcomes {
        match outcome.result {
            Ok(true) => {
                found = true;
                if !args.quiet {
                    println!("{}: contains banned words", outcome.source);
                }
            }
            Ok(false) => {}
            Err(e) => {
                failed = true;
                eprintln!("wordsift: {e:#}");
            }
        }
    }

    Ok(if failed {
        ExitCode::InternalError
    } else if found {
        ExitCode::Found
    } else {
        ExitCode::Success
    })
}
