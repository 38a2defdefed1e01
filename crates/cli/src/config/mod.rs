// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wordsift.toml` configuration.
//!
//! ```toml
//! version = 1
//!
//! [words]
//! files = ["banned.txt", "extra.txt.gz"]
//! inline = ["foo"]
//!
//! [filter]
//! mask = "#"
//! ```
//!
//! Word-list paths are relative to the directory holding the config file.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("invalid config {}: {source}", .path.display())]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("unsupported config version {version} in {} (expected {expected})", .path.display(), expected = defaults::CONFIG_VERSION)]
    UnsupportedVersion { path: PathBuf, version: u32 },

    #[error("filter.mask in {} must not be empty", .path.display())]
    EmptyMask { path: PathBuf },
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version; must be 1.
    pub version: u32,

    /// Banned word sources.
    #[serde(default)]
    pub words: WordsConfig,

    /// Masking settings.
    #[serde(default)]
    pub filter: FilterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::CONFIG_VERSION,
            words: WordsConfig::default(),
            filter: FilterConfig::default(),
        }
    }
}

/// Where banned words come from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordsConfig {
    /// Word-list files (plain or `.gz`), one word per line.
    #[serde(default)]
    pub files: Vec<PathBuf>,

    /// Words listed directly in the config.
    #[serde(default)]
    pub inline: Vec<String>,
}

/// Settings for `wordsift filter`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Mask string; only its first character is used.
    #[serde(default = "defaults::filter::mask")]
    pub mask: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { mask: defaults::filter::mask() }
    }
}

/// Parse and validate config text. Relative word-list paths are resolved
/// against `base_dir`.
pub fn parse(content: &str, path: &Path, base_dir: &Path) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

    if config.version != defaults::CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            path: path.to_path_buf(),
            version: config.version,
        });
    }

    if config.filter.mask.is_empty() {
        return Err(ConfigError::EmptyMask { path: path.to_path_buf() });
    }

    config.words.files = config.words.files.iter().map(|f| base_dir.join(f)).collect();
    Ok(config)
}

/// Load a config file from disk.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let config = parse(&content, path, base_dir)?;

    tracing::debug!(
        "loaded config {} ({} word files, {} inline words)",
        path.display(),
        config.words.files.len(),
        config.words.inline.len()
    );
    Ok(config)
}

/// Load the explicit config if given, else the one discovered from `cwd`,
/// else the defaults.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load(path);
    }
    match crate::discovery::find_config(cwd) {
        Some(path) => load(&path),
        None => {
            tracing::debug!("no {} found, using defaults", defaults::CONFIG_FILE);
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
