// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word-list files.
//!
//! One banned word per line. Blank lines and lines starting with `#` are
//! skipped; everything else, including inner and surrounding spaces, is kept
//! verbatim. Files ending in `.gz` are decompressed on the fly.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use flate2::read::GzDecoder;

use crate::file_reader::FileContent;

/// Extract words from word-list text.
pub fn parse_words(content: &str) -> impl Iterator<Item = &str> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    content.lines().filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Load every word from one word-list file.
pub fn load(path: &Path) -> anyhow::Result<Vec<String>> {
    let words: Vec<String> = if is_gzip(path) {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let mut content = String::new();
        GzDecoder::new(file)
            .read_to_string(&mut content)
            .with_context(|| format!("failed to decompress {}", path.display()))?;
        parse_words(&content).map(String::from).collect()
    } else {
        let content = FileContent::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let text = content
            .as_str()
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
        parse_words(text).map(String::from).collect()
    };

    tracing::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load and concatenate several word lists, in order.
pub fn load_all(paths: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    for path in paths {
        words.extend(load(path)?);
    }
    Ok(words)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
#[path = "wordlist_tests.rs"]
mod tests;
