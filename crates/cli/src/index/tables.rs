// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-character lookup tables.
//!
//! Four tables, each with one slot per [`Code`]:
//! - position bitmap: bit `i` (0-6) = the character occurs at offset `i` of
//!   some word, bit 7 = it occurs at some offset >= 7
//! - length bitmap: for start characters, bit `L-1` = a word of capped
//!   length `L` (at most 8) starts here
//! - max start length: see [`StartLength`]
//! - word end: the character ends some word
//!
//! The tables can only over-approximate the word set. The scanner uses them
//! to reject positions cheaply and confirms survivors against the exact set.

use crate::domain::{Code, DOMAIN_SIZE};

/// Highest bit of the 8-bit position and length masks (the overflow bucket).
pub const OVERFLOW_BIT: usize = 7;

/// Longest word length that the length bitmap can represent exactly.
pub const MAX_EXACT_LENGTH: usize = 8;

/// Longest banned word starting with a given character.
///
/// Ordered so that `max` merges two observations: `NotStart < Exact(_) <
/// AtLeastEight`, and `Exact` values compare by length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum StartLength {
    /// No banned word starts with this character.
    #[default]
    NotStart,
    /// The longest word starting here has exactly this many characters (1-8).
    Exact(u8),
    /// Some word starting here is longer than eight characters.
    AtLeastEight,
}

impl StartLength {
    /// Classify a word by its uncapped length.
    pub fn for_word_len(len: usize) -> Self {
        match u8::try_from(len) {
            Ok(0) => StartLength::NotStart,
            Ok(n) if usize::from(n) <= MAX_EXACT_LENGTH => StartLength::Exact(n),
            _ => StartLength::AtLeastEight,
        }
    }

    pub fn is_start(self) -> bool {
        self != StartLength::NotStart
    }

    /// Whether extending a candidate to offset `k` is already past every word
    /// that starts with this character.
    pub fn exceeded_by(self, k: usize) -> bool {
        match self {
            StartLength::NotStart => true,
            StartLength::Exact(max) => k > usize::from(max),
            StartLength::AtLeastEight => false,
        }
    }
}

/// Fixed-size bitset over the character domain.
#[derive(Clone)]
struct CodeSet {
    bits: Box<[u64]>,
}

impl CodeSet {
    fn new() -> Self {
        Self { bits: vec![0u64; DOMAIN_SIZE.div_ceil(64)].into_boxed_slice() }
    }

    fn insert(&mut self, code: Code) {
        let code = usize::from(code);
        self.bits[code / 64] |= 1u64 << (code % 64);
    }

    fn contains(&self, code: Code) -> bool {
        let code = usize::from(code);
        self.bits[code / 64] & (1u64 << (code % 64)) != 0
    }
}

/// The four per-character tables of a pattern index.
#[derive(Clone)]
pub struct Tables {
    position: Box<[u8]>,
    length: Box<[u8]>,
    max_start: Box<[StartLength]>,
    word_end: CodeSet,
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

impl Tables {
    /// Empty tables: every lookup rejects.
    pub fn new() -> Self {
        Self {
            position: vec![0u8; DOMAIN_SIZE].into_boxed_slice(),
            length: vec![0u8; DOMAIN_SIZE].into_boxed_slice(),
            max_start: vec![StartLength::NotStart; DOMAIN_SIZE].into_boxed_slice(),
            word_end: CodeSet::new(),
        }
    }

    /// Fold one non-empty word into the tables.
    pub fn record(&mut self, word: &[Code]) {
        let (Some(&first), Some(&last)) = (word.first(), word.last()) else {
            return;
        };

        for (offset, &code) in word.iter().enumerate() {
            self.position[usize::from(code)] |= offset_bit(offset);
        }

        let capped = word.len().min(MAX_EXACT_LENGTH);
        let start = usize::from(first);
        self.length[start] |= 1u8 << (capped - 1);
        self.max_start[start] = self.max_start[start].max(StartLength::for_word_len(word.len()));

        self.word_end.insert(last);
    }

    /// Raw position bitmap for `code`.
    pub fn position(&self, code: Code) -> u8 {
        self.position[usize::from(code)]
    }

    /// Raw length bitmap for `code`.
    pub fn length(&self, code: Code) -> u8 {
        self.length[usize::from(code)]
    }

    pub fn max_start(&self, code: Code) -> StartLength {
        self.max_start[usize::from(code)]
    }

    pub fn is_word_end(&self, code: Code) -> bool {
        self.word_end.contains(code)
    }

    /// Whether `code` occurs at `offset` of some word (offsets >= 7 share
    /// the overflow bit).
    pub fn occurs_at(&self, code: Code, offset: usize) -> bool {
        self.position(code) & offset_bit(offset) != 0
    }

    /// Whether `code` starts some word.
    pub fn starts_word(&self, code: Code) -> bool {
        self.occurs_at(code, 0)
    }

    /// Whether a length-1 word consists of `code`.
    pub fn is_single(&self, code: Code) -> bool {
        self.max_start(code).is_start() && self.length(code) & 1 != 0
    }

    /// Whether some word starting with `code` has a capped length of at
    /// least `len`.
    pub fn admits_length(&self, code: Code, len: usize) -> bool {
        let Some(shift) = len.checked_sub(1) else {
            return self.length(code) != 0;
        };
        self.length(code) >> shift.min(OVERFLOW_BIT) != 0
    }
}

fn offset_bit(offset: usize) -> u8 {
    1 << offset.min(OVERFLOW_BIT)
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tests;
