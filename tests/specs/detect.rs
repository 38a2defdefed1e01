//! Behavioral specs for `wordsift detect`.
//!
//! Reference output format: `path:offset:length: word`, then a summary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Each match is reported at its character offset
#[test]
fn text_output_lists_matches() {
    wordsift_cmd()
        .args(["detect", "dirty.txt"])
        .current_dir(fixture("basic"))
        .assert()
        .code(1)
        .stdout(
            "dirty.txt:5:6: is bad\n\
             dirty.txt:8:3: bad\n\
             dirty.txt:18:7: badword\n\
             3 matches in 1 of 1 input\n",
        );
}

/// > Clean inputs exit 0 and still print the summary
#[test]
fn clean_input_prints_summary_only() {
    wordsift_cmd()
        .args(["detect", "clean.txt"])
        .current_dir(fixture("basic"))
        .assert()
        .success()
        .stdout("0 matches in 0 of 1 input\n");
}

/// > Offsets count characters, not bytes
#[test]
fn offsets_are_in_characters() {
    wordsift_cmd()
        .args(["detect", "cjk.txt"])
        .current_dir(fixture("basic"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("cjk.txt:10:3: 东正教\n"));
}

/// > JSON output carries every match and a total
#[test]
fn json_output() {
    let output = wordsift_cmd()
        .args(["detect", "-o", "json", "clean.txt", "dirty.txt"])
        .current_dir(fixture("basic"))
        .output()
        .expect("command should run");
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["inputs"][0]["path"], "clean.txt");
    assert_eq!(json["inputs"][0]["matches"].as_array().unwrap().len(), 0);
    assert_eq!(
        json["inputs"][1]["matches"][2],
        serde_json::json!({"offset": 18, "length": 7, "word": "badword"})
    );
}

/// > --color=always emits ANSI escapes
#[test]
fn color_always_emits_escapes() {
    wordsift_cmd()
        .args(["detect", "--color", "always", "dirty.txt"])
        .current_dir(fixture("basic"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\x1b["));
}

/// > NO_COLOR wins over --color=always
#[test]
fn no_color_env_disables_color() {
    wordsift_cmd()
        .args(["detect", "--color", "always", "dirty.txt"])
        .env("NO_COLOR", "1")
        .current_dir(fixture("basic"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\x1b[").not());
}

/// > Longest word wins at a shared start
#[test]
fn longest_match_per_start() {
    let project = Project::empty();
    project
        .cmd()
        .args(["detect", "--word", "bad", "--word", "badword"])
        .write_stdin("thisisbadword")
        .assert()
        .code(1)
        .stdout("<stdin>:6:7: badword\n1 match in 1 of 1 input\n");
}
