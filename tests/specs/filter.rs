//! Behavioral specs for `wordsift filter`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Banned words are masked with the configured character
#[test]
fn masks_with_config_mask() {
    wordsift_cmd()
        .args(["filter", "dirty.txt"])
        .current_dir(fixture("basic"))
        .assert()
        .success()
        .stdout("this ######\nthisis#######\n");
}

/// > --mask overrides the config
#[test]
fn mask_flag_overrides_config() {
    wordsift_cmd()
        .args(["filter", "--mask", "*", "dirty.txt"])
        .current_dir(fixture("basic"))
        .assert()
        .success()
        .stdout("this ******\nthisis*******\n");
}

/// > Only the first character of the mask is used
#[test]
fn multi_char_mask_uses_first() {
    let project = Project::empty();
    project
        .cmd()
        .args(["filter", "--word", "cat", "--mask", "xyz"])
        .write_stdin("concatenate")
        .assert()
        .success()
        .stdout("conxxxenate");
}

/// > Default mask is `*`
#[test]
fn default_mask_is_star() {
    let project = Project::empty();
    project
        .cmd()
        .args(["filter", "--word", "东正教"])
        .write_stdin("dddss屄defg东正教")
        .assert()
        .success()
        .stdout("dddss屄defg***");
}

/// > Clean text passes through unchanged
#[test]
fn clean_text_is_unchanged() {
    wordsift_cmd()
        .args(["filter", "clean.txt"])
        .current_dir(fixture("basic"))
        .assert()
        .success()
        .stdout("all good here\n");
}

/// > Empty mask exits 2
#[test]
fn empty_mask_is_config_error() {
    let project = Project::empty();
    project
        .cmd()
        .args(["filter", "--word", "bad", "--mask", ""])
        .write_stdin("bad")
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("mask"));
}

/// > Inputs are written in order
#[test]
fn multiple_inputs_in_order() {
    wordsift_cmd()
        .args(["filter", "clean.txt", "dirty.txt", "clean.txt"])
        .current_dir(fixture("basic"))
        .assert()
        .success()
        .stdout("all good here\nthis ######\nthisis#######\nall good here\n");
}
