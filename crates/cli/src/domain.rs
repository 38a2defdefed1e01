// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character domain for the per-character tables.
//!
//! Every table in [`crate::index`] has one slot per code point in
//! `U+0000..U+FFFF`. `U+FFFF` itself is reserved and has no slot; anything
//! beyond the Basic Multilingual Plane is rejected as well. Text is converted
//! to table codes once, up front, so the scanner never has to bounds-check.

use crate::error::{Error, Result};

/// Number of slots in each per-character table.
pub const DOMAIN_SIZE: usize = 0xFFFF;

/// A character's slot in the per-character tables.
pub type Code = u16;

/// Returns the table slot for `ch`, or `None` if it is outside the domain.
pub fn code_of(ch: char) -> Option<Code> {
    let cp = u32::from(ch);
    if (cp as usize) < DOMAIN_SIZE { Code::try_from(cp).ok() } else { None }
}

/// Whether `ch` has a slot in the tables.
pub fn is_supported(ch: char) -> bool {
    code_of(ch).is_some()
}

/// Convert `text` into table codes, one per character.
///
/// Fails on the first unsupported character, reporting its character offset.
pub fn encode(text: &str) -> Result<Vec<Code>> {
    let mut codes = Vec::with_capacity(text.len());
    for (offset, ch) in text.chars().enumerate() {
        match code_of(ch) {
            Some(code) => codes.push(code),
            None => return Err(Error::UnsupportedChar { ch, offset }),
        }
    }
    Ok(codes)
}

#[cfg(test)]
#[path = "domain_tests.rs"]
mod tests;
