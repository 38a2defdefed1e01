// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Fast banned-word detection and masking
#[derive(Parser)]
#[command(name = "wordsift")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "WORDSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Word-list file to load (repeatable, adds to configured lists)
    #[arg(short = 'w', long = "words", value_name = "FILE", global = true)]
    pub words: Vec<PathBuf>,

    /// Banned word given inline (repeatable)
    #[arg(long = "word", value_name = "WORD", global = true)]
    pub word: Vec<String>,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Exit non-zero if any input contains a banned word
    Check(CheckArgs),
    /// List banned-word occurrences
    Detect(DetectArgs),
    /// Write inputs with banned words masked
    Filter(FilterArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Inputs shared by the scanning commands.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Files to scan (`-` or nothing for stdin)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print nothing; report only through the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Args)]
pub struct DetectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

impl DetectArgs {
    /// `--no-color` overrides `--color`.
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color { ColorMode::Never } else { self.color }
    }
}

#[derive(clap::Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Mask string (first character is used; default from config or "*")
    #[arg(short, long)]
    pub mask: Option<String>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
