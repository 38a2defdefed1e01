//! Behavioral specs for `wordsift completions`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Completions are generated for each supported shell
#[test]
fn generates_completions() {
    for shell in ["bash", "zsh", "fish"] {
        wordsift_cmd()
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicates::str::contains("wordsift"));
    }
}

/// > Completions need no config
#[test]
fn completions_ignore_broken_config() {
    let project = Project::with_config("not toml");
    project.cmd().args(["completions", "bash"]).assert().success();
}

/// > Unknown shell is a usage error
#[test]
fn unknown_shell_fails() {
    wordsift_cmd().args(["completions", "cmd.exe"]).assert().failure();
}
