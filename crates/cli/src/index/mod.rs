// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled banned-word index.
//!
//! A [`PatternIndex`] pairs the per-character [`Tables`] with the exact set of
//! banned words. The tables are a pure function of the word set: every word
//! in the set has been folded into them, and nothing else has.
//!
//! [`PatternIndex::build`] starts from scratch; [`PatternIndex::extend`]
//! merges into an existing index. Both take `&mut`/ownership, so an index can
//! never be mutated while a scan holds a shared reference to it.

pub mod tables;

use std::collections::HashSet;
use std::fmt;

use crate::domain::{self, Code};
use crate::error::{Error, Result};

pub use tables::{StartLength, Tables};

/// Banned words compiled for scanning.
#[derive(Clone, Default)]
pub struct PatternIndex {
    tables: Tables,
    words: HashSet<Box<[Code]>>,
}

impl PatternIndex {
    /// An empty index that never matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a fresh index from `words`.
    ///
    /// Empty strings and duplicates are skipped. An empty list yields an empty
    /// index.
    pub fn build<I>(words: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut index = Self::new();
        index.extend(words)?;
        Ok(index)
    }

    /// Merge `words` into this index, keeping everything already indexed.
    ///
    /// All words are validated before any is inserted, so on error the index
    /// is left unchanged.
    pub fn extend<I>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let encoded = encode_words(words)?;
        let before = self.words.len();

        for word in encoded {
            self.insert(word);
        }

        tracing::debug!(
            added = self.words.len() - before,
            total = self.words.len(),
            "extended pattern index"
        );
        Ok(())
    }

    /// Number of distinct banned words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is one of the banned words.
    ///
    /// Words outside the character domain are never banned.
    pub fn contains(&self, word: &str) -> bool {
        domain::encode(word).is_ok_and(|codes| self.contains_codes(&codes))
    }

    pub(crate) fn contains_codes(&self, word: &[Code]) -> bool {
        self.words.contains(word)
    }

    pub(crate) fn tables(&self) -> &Tables {
        &self.tables
    }

    fn insert(&mut self, word: Vec<Code>) {
        if word.is_empty() || self.words.contains(word.as_slice()) {
            return;
        }
        self.tables.record(&word);
        self.words.insert(word.into_boxed_slice());
    }
}

impl fmt::Debug for PatternIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternIndex").field("words", &self.words.len()).finish_non_exhaustive()
    }
}

/// Encode every non-empty word, failing on the first unsupported character.
fn encode_words<I>(words: I) -> Result<Vec<Vec<Code>>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut encoded = Vec::new();
    for word in words {
        let word = word.as_ref();
        if word.is_empty() {
            continue;
        }
        match domain::encode(word) {
            Ok(codes) => encoded.push(codes),
            Err(Error::UnsupportedChar { ch, offset }) => {
                return Err(Error::UnsupportedWordChar { word: word.to_string(), ch, offset });
            }
            Err(e) => return Err(e),
        }
    }
    Ok(encoded)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
