// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Banned-word detection and masking.
//!
//! A word list is compiled once into a [`PatternIndex`]: four small
//! per-character tables plus the exact word set. Scans use the tables to skip
//! most positions cheaply and only hash the substrings that could be a banned
//! word.
//!
//! ```
//! let index = wordsift::build(["bad", "badword"])?;
//! assert!(wordsift::exists(&index, "thisisbadword")?);
//! assert_eq!(wordsift::detect(&index, "thisisbadword")?.get(&6), Some(&7));
//! assert_eq!(wordsift::filter(&index, "this is bad", "#")?, "this is ###");
//! # Ok::<(), wordsift::Error>(())
//! ```
//!
//! Offsets and lengths count characters. Only characters in
//! `U+0000..U+FFFE` can be indexed or scanned; see [`domain`].

use std::borrow::Cow;

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod error;
pub mod file_reader;
pub mod filter;
pub mod index;
pub mod report;
pub mod runner;
pub mod scanner;
pub mod wordlist;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
pub use filter::DEFAULT_MASK;
pub use index::PatternIndex;
pub use scanner::{Matches, ScanMode, Scanner};

/// Compile a fresh index from `words`.
pub fn build<I>(words: I) -> Result<PatternIndex>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    PatternIndex::build(words)
}

/// Merge `words` into `index`, keeping its existing words.
pub fn extend<I>(mut index: PatternIndex, words: I) -> Result<PatternIndex>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    index.extend(words)?;
    Ok(index)
}

/// Whether `text` contains any banned word.
pub fn exists(index: &PatternIndex, text: &str) -> Result<bool> {
    index.exists(text)
}

/// Start offset -> length of every banned word in `text`.
pub fn detect(index: &PatternIndex, text: &str) -> Result<Matches> {
    index.detect(text)
}

/// `text` with every banned word replaced by the first character of `mask`.
pub fn filter<'t>(index: &PatternIndex, text: &'t str, mask: &str) -> Result<Cow<'t, str>> {
    index.filter(text, mask)
}
