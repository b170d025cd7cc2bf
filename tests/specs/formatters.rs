// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `lintkit formatters`: formatter discovery.

use crate::prelude::*;

/// > Lists every formatter with its consumer and a sample
#[test]
fn lists_formatters() {
    lintkit_cmd()
        .arg("formatters")
        .assert()
        .success()
        .stdout(predicates::str::contains("prose [human]"))
        .stdout(predicates::str::contains("json [machine]"))
        .stdout(predicates::str::contains("simple [human]"))
        .stdout(predicates::str::contains(
            "  Sample: ERROR: myFile.ts:1:14 - Missing semicolon",
        ));
}

/// > Output is plain when stdout is not a terminal
#[test]
fn no_color_when_piped() {
    lintkit_cmd()
        .arg("formatters")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

/// > COLOR forces colored output
#[test]
fn color_env_forces_color() {
    lintkit_cmd()
        .arg("formatters")
        .env_remove("NO_COLOR")
        .env("COLOR", "1")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}

/// > NO_COLOR wins over COLOR
#[test]
fn no_color_env_wins() {
    lintkit_cmd()
        .arg("formatters")
        .env("NO_COLOR", "")
        .env("COLOR", "1")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

/// > --json prints metadata for tools
#[test]
fn json_listing() {
    let output = lintkit_cmd()
        .args(["formatters", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["formatterName"], "prose");
    assert_eq!(entries[1]["consumer"], "machine");
    assert!(entries[2]["description"].as_str().is_some());
}
