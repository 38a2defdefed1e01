// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Banned-word scanner.
//!
//! One left-to-right pass over the text. At each position the scanner:
//! 1. seeks forward to a character that starts some banned word,
//! 2. records a length-1 word if one starts there,
//! 3. extends the candidate one character at a time while the position,
//!    length and word-end tables allow it, confirming each plausible end
//!    against the exact word set.
//!
//! Existence checks and full enumeration share this routine; [`ScanMode`]
//! only decides whether the first confirmed match ends the scan.
//!
//! Offsets and lengths are counted in characters.

use std::collections::BTreeMap;

use crate::domain::{self, Code};
use crate::error::Result;
use crate::index::PatternIndex;

/// Confirmed matches: start offset -> match length, ascending by start.
///
/// At most one entry per start. When several banned words start at the same
/// offset, the longest one is kept.
pub type Matches = BTreeMap<usize, usize>;

/// How far a scan goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Stop at the first confirmed match.
    ExistenceCheck,
    /// Report every start offset with a confirmed match.
    FullEnumerate,
}

/// Read-only view of an index that scans encoded text.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    index: &'a PatternIndex,
}

impl<'a> Scanner<'a> {
    pub fn new(index: &'a PatternIndex) -> Self {
        Self { index }
    }

    /// Scan already-encoded text.
    ///
    /// In [`ScanMode::ExistenceCheck`] the result holds at most one match,
    /// the first one confirmed.
    pub fn scan(&self, text: &[Code], mode: ScanMode) -> Matches {
        let mut matches = Matches::new();
        let tables = self.index.tables();
        let n = text.len();
        let mut i = 0;

        while i < n {
            // Seeking. The last character is left for the single-character
            // check even if it starts nothing.
            while i + 1 < n && !tables.starts_word(text[i]) {
                i += 1;
            }

            let first = text[i];
            let max_start = tables.max_start(first);

            if tables.is_single(first) {
                matches.insert(i, 1);
                if mode == ScanMode::ExistenceCheck {
                    return matches;
                }
            }

            // Extending.
            for k in 1..n - i {
                let code = text[i + k];
                if !tables.occurs_at(code, k) {
                    break;
                }

                if tables.admits_length(first, k + 1) && tables.is_word_end(code) {
                    if self.index.contains_codes(&text[i..=i + k]) {
                        matches.insert(i, k + 1);
                        if mode == ScanMode::ExistenceCheck {
                            return matches;
                        }
                    }
                } else if max_start.exceeded_by(k) {
                    break;
                }
            }

            i += 1;
        }

        matches
    }
}

impl PatternIndex {
    /// Whether `text` contains any banned word.
    pub fn exists(&self, text: &str) -> Result<bool> {
        if text.is_empty() {
            return Ok(false);
        }
        let codes = domain::encode(text)?;
        Ok(!Scanner::new(self).scan(&codes, ScanMode::ExistenceCheck).is_empty())
    }

    /// Every banned-word occurrence in `text`, keyed by start offset.
    pub fn detect(&self, text: &str) -> Result<Matches> {
        if text.is_empty() {
            return Ok(Matches::new());
        }
        let codes = domain::encode(text)?;
        Ok(Scanner::new(self).scan(&codes, ScanMode::FullEnumerate))
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
