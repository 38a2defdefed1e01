// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use wordsift::PatternIndex;
use wordsift::cli::{Cli, Command};
use wordsift::config::{self, Config, defaults};
use wordsift::error::ExitCode;
use wordsift::runner;

mod cmd_check;
mod cmd_detect;
mod cmd_filter;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("wordsift: {e:#}");
            ExitCode::InternalError.into()
        }
    }
}

/// Log to stderr. `WORDSIFT_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(defaults::LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(args.shell, &mut Cli::command(), "wordsift", &mut io::stdout());
        return Ok(ExitCode::Success);
    }

    let (config, index) = match setup(cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("wordsift: {e:#}");
            return Ok(ExitCode::ConfigError);
        }
    };

    match &cli.command {
        Command::Check(args) => cmd_check::run(&index, args),
        Command::Detect(args) => cmd_detect::run(&index, args),
        Command::Filter(args) => cmd_filter::run(&index, &config, args),
        Command::Completions(_) => Ok(ExitCode::Success),
    }
}

/// Load config and compile the banned-word index.
fn setup(cli: &Cli) -> anyhow::Result<(Config, PatternIndex)> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;
    let index = runner::load_index(&config, &cli.words, &cli.word)?;
    Ok((config, index))
}
