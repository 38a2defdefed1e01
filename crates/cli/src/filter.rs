// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Masking of banned words.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::index::PatternIndex;
use crate::scanner::Matches;

/// Mask used when none is configured.
pub const DEFAULT_MASK: &str = "*";

/// First character of `mask`, the only one used for masking.
pub fn mask_char(mask: &str) -> Result<char> {
    mask.chars().next().ok_or(Error::EmptyMask)
}

/// Replace every span in `matches` with `mask`, one mask per character.
///
/// Spans are applied in ascending start order. Spans past the end of `text`
/// are clipped. The result always has as many characters as `text`.
pub fn apply_mask(text: &str, matches: &Matches, mask: char) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for (&start, &len) in matches {
        let end = start.saturating_add(len).min(chars.len());
        if let Some(span) = chars.get_mut(start..end) {
            span.fill(mask);
        }
    }
    chars.into_iter().collect()
}

impl PatternIndex {
    /// Copy of `text` with every banned word masked.
    ///
    /// Returns `text` itself, borrowed, when nothing matches. Only the first
    /// character of `mask` is used; an empty mask is an error.
    pub fn filter<'t>(&self, text: &'t str, mask: &str) -> Result<Cow<'t, str>> {
        let mask = mask_char(mask)?;
        let matches = self.detect(text)?;
        if matches.is_empty() {
            return Ok(Cow::Borrowed(text));
        }
        Ok(Cow::Owned(apply_mask(text, &matches, mask)))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
