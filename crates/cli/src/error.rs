// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

/// Errors raised by index construction, scanning and filtering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A character has no slot in the per-character tables.
    #[error("unsupported character {ch:?} at offset {offset} (supported range is U+0000..U+FFFE)")]
    UnsupportedChar { ch: char, offset: usize },

    /// A banned word contains a character without a table slot.
    #[error("banned word {word:?} has unsupported character {ch:?} at offset {offset}")]
    UnsupportedWordChar { word: String, ch: char, offset: usize },

    /// The filter mask contained no characters.
    #[error("mask must contain at least one character")]
    EmptyMask,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes returned by the `wordsift` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Completed; no banned words reported.
    Success = 0,
    /// At least one banned word was found (`check`, `detect`).
    Found = 1,
    /// Invalid configuration or arguments.
    ConfigError = 2,
    /// I/O failure or unscannable input.
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
