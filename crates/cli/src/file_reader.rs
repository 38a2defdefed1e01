// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized input reading with size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification is acceptable for scanning
#![allow(unsafe_code)]
//!
//! - < 64KB: Direct read into buffer
//! - >= 64KB: Memory-mapped I/O
//! - stdin: always read into a buffer

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::config::defaults::MMAP_THRESHOLD;

/// Where a piece of text to scan comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin; anything else is a file path.
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") { InputSource::Stdin } else { InputSource::File(path.to_path_buf()) }
    }

    /// Stdin when no paths are given, otherwise one source per path.
    pub fn from_args(paths: &[PathBuf]) -> Vec<Self> {
        if paths.is_empty() {
            vec![InputSource::Stdin]
        } else {
            paths.iter().map(|p| Self::from_arg(p)).collect()
        }
    }

    pub fn read(&self) -> io::Result<FileContent> {
        match self {
            InputSource::Stdin => FileContent::read_stdin(),
            InputSource::File(path) => FileContent::read(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Content of an input, either owned or memory-mapped.
pub enum FileContent {
    /// Small file or stdin read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(MappedContent),
}

/// Memory-mapped file content with UTF-8 validation.
pub struct MappedContent {
    mmap: Mmap,
}

impl MappedContent {
    /// Get content as string slice.
    /// Returns None if content is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.mmap).ok()
    }
}

impl FileContent {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;
        let size = meta.len();

        if size < MMAP_THRESHOLD {
            Ok(FileContent::Owned(fs::read(path)?))
        } else {
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the mapped memory,
            // and stale data on concurrent modification is acceptable for scanning.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(FileContent::Mapped(MappedContent { mmap }))
        }
    }

    /// Read all of stdin.
    pub fn read_stdin() -> io::Result<Self> {
        let mut content = Vec::new();
        io::stdin().lock().read_to_end(&mut content)?;
        Ok(FileContent::Owned(content))
    }

    /// Get content as string slice.
    /// Returns None if content is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FileContent::Owned(bytes) => std::str::from_utf8(bytes).ok(),
            FileContent::Mapped(m) => m.as_str(),
        }
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
