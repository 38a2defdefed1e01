// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel input scanning with error isolation.
//!
//! Inputs are scanned in parallel using rayon against one shared, read-only
//! index. Errors are isolated: an unreadable or unscannable input yields an
//! error outcome for that input only.

use std::path::PathBuf;

use anyhow::Context;
use rayon::prelude::*;

use crate::config::Config;
use crate::file_reader::InputSource;
use crate::index::PatternIndex;
use crate::wordlist;

/// Compile the index from every configured word source.
///
/// Order: config inline words, config word files, `files`, then `words`.
pub fn load_index(
    config: &Config,
    files: &[PathBuf],
    words: &[String],
) -> anyhow::Result<PatternIndex> {
    let mut all = config.words.inline.clone();
    all.extend(wordlist::load_all(&config.words.files)?);
    all.extend(wordlist::load_all(files)?);
    all.extend(words.iter().cloned());

    let index = PatternIndex::build(&all).context("failed to compile word list")?;
    if index.is_empty() {
        tracing::warn!("no banned words configured; nothing will match");
    } else {
        tracing::debug!("compiled {} banned words", index.len());
    }
    Ok(index)
}

/// Result of scanning one input.
pub struct InputOutcome<T> {
    pub source: InputSource,
    pub result: anyhow::Result<T>,
}

/// Scans many inputs against one index.
pub struct ScanRunner<'a> {
    index: &'a PatternIndex,
}

impl<'a> ScanRunner<'a> {
    pub fn new(index: &'a PatternIndex) -> Self {
        Self { index }
    }

    /// Read each input and apply `scan` to its text.
    ///
    /// Inputs run in parallel; outcomes come back in input order.
    pub fn run<T, F>(&self, sources: Vec<InputSource>, scan: F) -> Vec<InputOutcome<T>>
    where
        T: Send,
        F: Fn(&PatternIndex, &str) -> crate::Result<T> + Sync,
    {
        sources
            .into_par_iter()
            .map(|source| {
                let result = self.scan_one(&source, &scan);
                InputOutcome { source, result }
            })
            .collect()
    }

    fn scan_one<T, F>(&self, source: &InputSource, scan: &F) -> anyhow::Result<T>
    where
        F: Fn(&PatternIndex, &str) -> crate::Result<T>,
    {
        let content = source.read().with_context(|| format!("failed to read {source}"))?;
        let text = content.as_str().with_context(|| format!("{source} is not valid UTF-8"))?;
        let outcome = scan(self.index, text).with_context(|| format!("failed to scan {source}"))?;
        tracing::debug!("scanned {} ({} chars)", source, text.chars().count());
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
