// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON formatter.
//!
//! Writes the sorted failures as a single-line JSON array, using the same
//! field names the `format` command accepts as input.

use super::{Consumer, Formatter, FormatterContext, FormatterMetadata};
use crate::failure::sort_failures;

pub(super) static METADATA: FormatterMetadata = FormatterMetadata {
    name: "json",
    description: "Formats failures as a JSON array for consumption by other tools.",
    sample: r#"[{"name":"myFile.ts","ruleName":"semicolon","ruleSeverity":"ERROR","failure":"Missing semicolon","startPosition":{"line":0,"character":13}}]"#,
    consumer: Consumer::Machine,
};

/// Machine-readable JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn metadata(&self) -> &'static FormatterMetadata {
        &METADATA
    }

    fn render(&self, context: &FormatterContext) -> String {
        let sorted = sort_failures(&context.failures);
        let mut output = match serde_json::to_string(&sorted) {
            Ok(json) => json,
            Err(e) => {
                // Failures only hold strings and integers.
                tracing::error!("failed to serialize failures: {}", e);
                "[]".to_string()
            }
        };
        output.push('\n');
        output
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
