//! Behavioral specs for config and word-list loading.
//!
//! Tests that wordsift correctly handles:
//! - Unknown config keys (errors)
//! - Unsupported versions (errors)
//! - Word lists from files, inline, and flags
//! - Bad word lists (errors, exit 2)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// CONFIG VALIDATION SPECS
// =============================================================================

/// > Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let project = Project::with_config("version = 1\nunknown_key = true\n");
    project
        .cmd()
        .arg("check")
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Only version 1 is supported
#[test]
fn unsupported_version_fails() {
    let project = Project::with_config("version = 7\n");
    project
        .cmd()
        .arg("check")
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 7"));
}

/// > Empty config mask is an error
#[test]
fn empty_config_mask_fails() {
    let project = Project::with_config("version = 1\n[filter]\nmask = \"\"\n");
    project.cmd().arg("filter").write_stdin("").assert().code(2);
}

/// > Minimal config is valid
#[test]
fn minimal_config_is_valid() {
    let project = Project::with_config(MINIMAL_CONFIG);
    project.cmd().arg("check").write_stdin("anything").assert().success();
}

/// > --config points at a config outside the working directory
#[test]
fn explicit_config_path() {
    let project = Project::empty();
    let config = project.file("conf/custom.toml", "version = 1\n[words]\ninline = [\"bad\"]\n");
    project.cmd().arg("check").arg("--config").arg(&config).write_stdin("bad").assert().code(1);
}

/// > WORDSIFT_CONFIG is the environment form of --config
#[test]
fn config_from_env() {
    let project = Project::empty();
    let config = project.file("conf/custom.toml", "version = 1\n[words]\ninline = [\"bad\"]\n");
    project.cmd().arg("check").env("WORDSIFT_CONFIG", &config).write_stdin("bad").assert().code(1);
}

/// > Missing explicit config exits 2
#[test]
fn missing_explicit_config_fails() {
    let project = Project::empty();
    project
        .cmd()
        .args(["check", "--config", "nope.toml"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("nope.toml"));
}

// =============================================================================
// WORD LISTS
// =============================================================================

/// > Word-list files skip comments and blank lines
#[test]
fn words_file_flag() {
    let project = Project::empty();
    project.file("banned.txt", "# comment\n\nbad\n");
    project
        .cmd()
        .args(["detect", "-w", "banned.txt"])
        .write_stdin("# comment is bad")
        .assert()
        .code(1)
        .stdout("<stdin>:13:3: bad\n1 match in 1 of 1 input\n");
}

/// > Configured lists and flags are combined
#[test]
fn config_and_flags_combine() {
    let project = Project::with_config("version = 1\n[words]\ninline = [\"foo\"]\n");
    project
        .cmd()
        .args(["detect", "--word", "bar"])
        .write_stdin("foo bar")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("2 matches"));
}

/// > Missing word-list file exits 2
#[test]
fn missing_words_file_fails() {
    let project = Project::empty();
    project
        .cmd()
        .args(["check", "-w", "missing.txt"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("missing.txt"));
}

/// > Banned words outside the supported range exit 2
#[test]
fn unsupported_word_fails() {
    let project = Project::empty();
    project
        .cmd()
        .args(["check", "--word", "\u{1F600}"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported character"));
}

/// > An empty word list warns and matches nothing
#[test]
fn empty_word_list_warns() {
    let project = Project::empty();
    project
        .cmd()
        .arg("check")
        .write_stdin("anything")
        .assert()
        .success()
        .stderr(predicates::str::contains("no banned words"));
}

/// > --verbose enables debug logging
#[test]
fn verbose_logs_compiled_words() {
    let project = Project::empty();
    project
        .cmd()
        .args(["check", "-v", "--word", "bad"])
        .write_stdin("ok")
        .assert()
        .success()
        .stderr(predicates::str::contains("compiled 1 banned words"));
}
