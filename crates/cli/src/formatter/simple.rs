// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal positional formatter: `[line, character]file`, input order.

use super::{Consumer, Formatter, FormatterContext, FormatterMetadata};

pub(super) static METADATA: FormatterMetadata = FormatterMetadata {
    name: "simple",
    description: "Terse positional output, one line per failure in reported order.",
    sample: "[1, 14]myFile.ts",
    consumer: Consumer::Human,
};

pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn metadata(&self) -> &'static FormatterMetadata {
        &METADATA
    }

    fn render(&self, context: &FormatterContext) -> String {
        let mut output = String::new();
        for failure in &context.failures {
            output.push_str(&format!(
                "[{}, {}]{}\n",
                failure.start.line + 1,
                failure.start.character + 1,
                failure.file_name
            ));
        }
        output
    }
}

#[cfg(test)]
#[path = "simple_tests.rs"]
mod tests;
