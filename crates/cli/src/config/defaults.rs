// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Config structs refer to these through `#[serde(default = ...)]`.

/// Config file name searched for by discovery.
pub const CONFIG_FILE: &str = "wordsift.toml";

/// The only config schema version understood.
pub const CONFIG_VERSION: u32 = 1;

/// Files at least this large are memory-mapped instead of read (64KB).
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "WORDSIFT_LOG";

/// Default filter settings.
pub mod filter {
    /// Default mask for `wordsift filter` (same as the library default).
    pub fn mask() -> String {
        crate::filter::DEFAULT_MASK.to_string()
    }
}
