// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wordsift filter` command implementation.
//!
//! Writes each input to stdout, in order, with banned words masked. Inputs
//! are written byte-for-byte otherwise; no separators are added.

use std::borrow::Cow;
use std::io::Write;

use wordsift::PatternIndex;
use wordsift::cli::FilterArgs;
use wordsift::config::Config;
use wordsift::error::ExitCode;
use wordsift::file_reader::InputSource;
use wordsift::filter::mask_char;
use wordsift::runner::ScanRunner;

/// Run the `wordsift filter` command.
pub fn run(index: &PatternIndex, config: &Config, args: &FilterArgs) -> anyhow::Result<ExitCode> {
    let mask = args.mask.as_deref().unwrap_or(&config.filter.mask);
    if let Err(e) = mask_char(mask) {
        eprintln!("wordsift: --mask: {e}");
        return Ok(ExitCode::ConfigError);
    }

    let sources = InputSource::from_args(&args.input.paths);
    let outcomes = ScanRunner::new(index)
        .run(sources, |index, text| index.filter(text, mask).map(Cow::into_owned));

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let mut failed = false;
    for outcome in outcomes {
        match outcome.result {
            Ok(masked) => handle.write_all(masked.as_bytes())?,
            Err(e) => {
                failed = true;
                eprintln!("wordsift: {e:#}");
            }
        }
    }
    handle.flush()?;

    Ok(if failed { ExitCode::InternalError } else { ExitCode::Success })
}
