// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `lintkit format`: formatter output, input shapes and exit codes.

use crate::prelude::*;

const MIXED_PROSE: &str = "\
ERROR: src/a.ts:1:5 - \" should be '
ERROR: src/a.ts:3:14 - Missing semicolon
WARNING: src/b.ts:9:1 - Unexpected console statement
";

// =============================================================================
// PROSE
// =============================================================================

/// > Prose is the default formatter; failures are sorted by file, line, column
#[test]
fn prose_is_default_and_sorted() {
    format().input("mixed.json").fails().stdout_eq(MIXED_PROSE);
}

/// > Empty results render as a single newline
#[test]
fn prose_empty_results() {
    format().input("empty.json").passes().stdout_eq("\n");
}

/// > Fixes supplied with a bare failure list are summarized per file
#[test]
fn prose_summarizes_fixes_from_file() {
    let fixes = fixture("results").join("fixes.json");
    format()
        .input("mixed.json")
        .args(&["--fixes", fixes.to_str().unwrap()])
        .fails()
        .stdout_eq(&format!(
            "Fixed 2 error(s) in src/a.ts\nFixed 1 error(s) in src/b.ts\n\n{}",
            MIXED_PROSE
        ));
}

/// > A context document carries its own fixes
#[test]
fn prose_reads_context_document() {
    format().input("context.json").fails().stdout_eq(
        "Fixed 2 error(s) in src/a.ts\n\
         Fixed 1 error(s) in src/c.ts\n\
         \n\
         ERROR: src/a.ts:3:14 - Missing semicolon\n",
    );
}

// =============================================================================
// OTHER FORMATTERS
// =============================================================================

/// > simple prints `[line, column]file` in input order
#[test]
fn simple_keeps_input_order() {
    format()
        .input("mixed.json")
        .args(&["-f", "simple"])
        .fails()
        .stdout_eq("[9, 1]src/b.ts\n[3, 14]src/a.ts\n[1, 5]src/a.ts\n");
}

/// > simple prints nothing for empty results
#[test]
fn simple_empty_results() {
    format()
        .input("empty.json")
        .args(&["--formatter", "simple"])
        .passes()
        .stdout_eq("");
}

/// > json prints the sorted failures as one JSON array
#[test]
fn json_outputs_sorted_array() {
    let run = format().input("mixed.json").args(&["-f", "json"]).fails();
    let stdout = run.stdout();
    assert_eq!(stdout.lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rules: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["ruleName"].as_str().unwrap())
        .collect();
    assert_eq!(rules, ["quotemark", "semicolon", "no-console"]);
    assert_eq!(value[0]["endPosition"]["character"], 9);
    assert_eq!(value[2]["ruleSeverity"], "WARNING");
}

/// > Unknown formatter names are an argument error
#[test]
fn unknown_formatter_fails() {
    format()
        .input("mixed.json")
        .args(&["-f", "checkstyle"])
        .exits(2)
        .stderr_has("unknown formatter 'checkstyle' (available: prose, json, simple)");
}

// =============================================================================
// INPUT AND OUTPUT
// =============================================================================

/// > Results are read from stdin when no input is given
#[test]
fn reads_stdin_without_input() {
    let content = std::fs::read_to_string(fixture("results").join("mixed.json")).unwrap();
    format().stdin(content).fails().stdout_eq(MIXED_PROSE);
}

/// > `-` reads stdin explicitly
#[test]
fn reads_stdin_with_dash() {
    let content = std::fs::read_to_string(fixture("results").join("warnings.json")).unwrap();
    format()
        .args(&["-", "-f", "simple"])
        .stdin(content)
        .passes()
        .stdout_eq("[9, 1]src/b.ts\n");
}

/// > --out writes to a file instead of stdout
#[test]
fn out_writes_file() {
    let temp = Project::empty();
    let out = temp.path().join("report.txt");
    format()
        .input("mixed.json")
        .args(&["-o", out.to_str().unwrap()])
        .fails()
        .stdout_eq("");
    assert_eq!(std::fs::read_to_string(out).unwrap(), MIXED_PROSE);
}

/// > Malformed input is reported with its origin
#[test]
fn invalid_input_fails() {
    format()
        .input("invalid.json")
        .exits(2)
        .stderr_has("lintkit: invalid input: ")
        .stderr_has("invalid.json");
}

/// > Input errors name the offending field
#[test]
fn invalid_input_names_field() {
    format()
        .stdin(r#"{"failures":[{"name":"a.ts","failure":"x","startPosition":{"line":0}}]}"#)
        .exits(2)
        .stderr_has("invalid input: <stdin>: context: missing field `character`");
}

/// > Input paths that are not valid UTF-8 are read as given
#[cfg(target_os = "linux")]
#[test]
fn non_utf8_input_path() {
    use std::os::unix::ffi::OsStrExt;

    let temp = Project::empty();
    let name = std::ffi::OsStr::from_bytes(b"results-\xff.json");
    let results = std::fs::read_to_string(fixture("results").join("warnings.json")).unwrap();
    let input = temp.file(name, &results);

    let output = lintkit_cmd()
        .arg("format")
        .arg(&input)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "WARNING: src/b.ts:9:1 - Unexpected console statement\n"
    );
}

/// > Malformed stdin is reported as <stdin>
#[test]
fn invalid_stdin_fails() {
    format()
        .stdin("not json")
        .exits(2)
        .stderr_has("invalid input: <stdin>");
}

/// > A missing input file is an I/O error
#[test]
fn missing_input_fails() {
    format()
        .args(&["does-not-exist.json"])
        .exits(3)
        .stderr_has("io error: does-not-exist.json");
}

// =============================================================================
// EXIT CODES
// =============================================================================

/// > Only warnings: exit 0
#[test]
fn warnings_only_pass() {
    format()
        .input("warnings.json")
        .passes()
        .stdout_eq("WARNING: src/b.ts:9:1 - Unexpected console statement\n");
}

/// > Any error-severity failure: exit 1
#[test]
fn errors_fail() {
    format().input("mixed.json").args(&["-f", "json"]).fails();
}

// =============================================================================
// RELATIVE PATHS
// =============================================================================

/// Project with one failure reported against an absolute path inside it.
fn absolute_results() -> (Project, String) {
    let temp = Project::empty();
    let root = temp.path().canonicalize().unwrap();
    let file = root.join("src").join("a.ts");
    let results = serde_json::json!([{
        "name": file.to_string_lossy(),
        "ruleName": "semicolon",
        "ruleSeverity": "WARNING",
        "failure": "Missing semicolon",
        "startPosition": { "line": 0, "character": 0 }
    }]);
    let input = temp.file("results.json", &results.to_string());
    (temp, input.to_string_lossy().into_owned())
}

/// > Paths are printed as given by default
#[test]
fn absolute_paths_by_default() {
    let (temp, input) = absolute_results();
    format()
        .args(&[input.as_str()])
        .pwd(temp.path())
        .passes()
        .stdout_lacks("WARNING: src/a.ts");
}

/// > --relative-paths prints paths relative to the working directory
#[test]
fn relative_paths_flag() {
    let (temp, input) = absolute_results();
    format()
        .args(&[input.as_str(), "--relative-paths"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("WARNING: src/a.ts:1:1 - Missing semicolon\n");
}
