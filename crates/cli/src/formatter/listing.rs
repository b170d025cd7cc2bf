// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Formatter listing for `lintkit formatters`.

use std::io;

use termcolor::WriteColor;

use super::FormatterMetadata;
use crate::color::{consumer_label, scheme};

/// Write a colored, human-readable listing of `formatters`.
///
/// ```text
/// prose [human]
///   The default formatter which outputs simple human-readable messages.
///   Sample: ERROR: myFile.ts:1:14 - Missing semicolon
/// ```
pub fn write_listing(out: &mut dyn WriteColor, formatters: &[&FormatterMetadata]) -> io::Result<()> {
    for (i, metadata) in formatters.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        out.set_color(&scheme::formatter_name())?;
        write!(out, "{}", metadata.name)?;
        out.reset()?;
        write!(out, " ")?;
        out.set_color(&scheme::consumer(metadata.consumer))?;
        write!(out, "{}", consumer_label(metadata.consumer))?;
        out.reset()?;
        writeln!(out)?;

        out.set_color(&scheme::description())?;
        writeln!(out, "  {}", metadata.description)?;
        out.reset()?;

        write!(out, "  Sample: ")?;
        out.set_color(&scheme::sample())?;
        write!(out, "{}", metadata.sample)?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Serialize `formatters` as a pretty-printed JSON array.
pub fn listing_json(formatters: &[&FormatterMetadata]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(formatters)
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
