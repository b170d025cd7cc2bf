// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `--<formatter>-<name> [VALUE]` options on the format command.

use crate::prelude::*;

/// Results reported against an absolute path inside a fresh project.
fn project_with_absolute_failure() -> (Project, String) {
    let temp = Project::empty();
    let root = temp.path().canonicalize().unwrap();
    let results = serde_json::json!([{
        "name": root.join("lib").join("main.ts").to_string_lossy(),
        "ruleSeverity": "WARNING",
        "failure": "Prefer const",
        "startPosition": { "line": 4, "character": 2 }
    }]);
    let input = temp.file("results.json", &results.to_string());
    (temp, input.to_string_lossy().into_owned())
}

const RELATIVE_LINE: &str = "WARNING: lib/main.ts:5:3 - Prefer const\n";

/// > --prose-relative-paths sets the relativePaths option of prose
#[test]
fn prefixed_flag_reaches_formatter() {
    let (temp, input) = project_with_absolute_failure();
    format()
        .args(&[input.as_str(), "--prose-relative-paths"])
        .pwd(temp.path())
        .passes()
        .stdout_eq(RELATIVE_LINE);
}

/// > Options accept an inline `=value`
#[test]
fn inline_value() {
    let (temp, input) = project_with_absolute_failure();
    format()
        .args(&[input.as_str(), "--prose-relative-paths=true"])
        .pwd(temp.path())
        .passes()
        .stdout_eq(RELATIVE_LINE);
}

/// > A following value sets the option; "false" turns it off
#[test]
fn following_value_can_disable() {
    let (temp, input) = project_with_absolute_failure();
    temp.config("[format]\nrelative_paths = true\n");
    format()
        .args(&[input.as_str(), "--prose-relative-paths", "false"])
        .pwd(temp.path())
        .passes()
        .stdout_lacks("WARNING: lib/main.ts");
}

/// > The prefix follows the selected formatter
#[test]
fn prefix_follows_formatter() {
    format()
        .input("warnings.json")
        .args(&["-f", "simple", "--simple-verbose"])
        .passes()
        .stdout_eq("[9, 1]src/b.ts\n");
}

/// > Options for a different formatter are left over and rejected
#[test]
fn foreign_prefix_is_rejected() {
    format()
        .input("warnings.json")
        .args(&["-f", "simple", "--prose-relative-paths"])
        .exits(2)
        .stderr_has("unexpected argument '--prose-relative-paths'");
}

/// > Operands after an undeclared option travel with it
#[test]
fn operand_after_option_is_its_value() {
    // results.json is taken as the value of --prose-label, leaving no input
    format()
        .args(&["--prose-label", "results.json"])
        .stdin("[]")
        .passes()
        .stdout_eq("\n");
}

/// > Non-prefixed unknown flags remain errors after extraction
#[test]
fn unrelated_unknown_flag_is_rejected() {
    format()
        .input("warnings.json")
        .args(&["--prose-verbose", "--bar"])
        .exits(2)
        .stderr_has("unexpected argument '--bar'");
}

/// > Unrecognized options are accepted and logged
#[test]
fn unrecognized_option_is_logged() {
    format()
        .input("warnings.json")
        .args(&["--prose-color-mode", "dark"])
        .env("LINTKIT_LOG", "debug")
        .passes()
        .stderr_has("formatter option `colorMode` not recognized");
}
