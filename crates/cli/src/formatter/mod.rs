// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure formatters.
//!
//! Every formatter implements [`Formatter`]: one `render` operation from a
//! [`FormatterContext`] to text, plus static [`FormatterMetadata`] used by
//! `lintkit formatters` for discovery.

mod context;
mod json;
mod listing;
mod prose;
mod simple;

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::failure::{Failure, Fix};

pub use context::{FormatterContext, FormatterInput, FormatterOptions, to_context};
pub use json::JsonFormatter;
pub use listing::{listing_json, write_listing};
pub use prose::ProseFormatter;
pub use simple::SimpleFormatter;

/// Who reads a formatter's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Consumer {
    Human,
    Machine,
}

impl fmt::Display for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Consumer::Human => write!(f, "human"),
            Consumer::Machine => write!(f, "machine"),
        }
    }
}

/// Static description of a formatter.
#[derive(Debug, Serialize)]
pub struct FormatterMetadata {
    /// Name used to select the formatter (also its custom option prefix).
    #[serde(rename = "formatterName")]
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Example of the output.
    pub sample: &'static str,
    pub consumer: Consumer,
}

/// A failure formatter.
///
/// Object-safe so the driver can select one at runtime via `Box<dyn Formatter>`.
pub trait Formatter: Send + Sync {
    /// Static metadata for this formatter.
    fn metadata(&self) -> &'static FormatterMetadata;

    /// Render the context into text.
    fn render(&self, context: &FormatterContext) -> String;

    /// Formatter name.
    fn name(&self) -> &'static str {
        self.metadata().name
    }

    /// Render a bare failure list (legacy call shape).
    fn render_failures(&self, failures: Vec<Failure>, fixes: Option<Vec<Fix>>) -> String {
        self.render(&to_context(FormatterInput::Failures(failures), fixes))
    }

    /// Render directly to a writer.
    fn render_to(&self, writer: &mut dyn Write, context: &FormatterContext) -> std::io::Result<()> {
        writer.write_all(self.render(context).as_bytes())
    }
}

/// Name of the formatter used when none is configured.
pub const DEFAULT_FORMATTER: &str = "prose";

/// Metadata for every built-in formatter, in listing order.
pub fn all_metadata() -> [&'static FormatterMetadata; 3] {
    [&prose::METADATA, &json::METADATA, &simple::METADATA]
}

/// Create a built-in formatter by name.
pub fn create(name: &str) -> Option<Box<dyn Formatter>> {
    match name {
        "prose" => Some(Box::new(ProseFormatter)),
        "json" => Some(Box::new(JsonFormatter)),
        "simple" => Some(Box::new(SimpleFormatter)),
        _ => None,
    }
}


#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
