// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint failure and fix records consumed by formatters.
//!
//! The serialized field names follow the JSON shape lint tools commonly emit
//! (`name`, `ruleName`, `ruleSeverity`, `failure`, `startPosition`), so results
//! produced by the JSON formatter can be read back and re-rendered.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Zero-based line/character position within a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Severity of a reported failure.
///
/// `error` and `warning` are recognized; any other name a lint tool reports
/// (`off`, `info`, ...) is kept as given and displayed upper-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Error,
    Warning,
    /// Lower-cased name of an unrecognized severity.
    Other(String),
}

impl Severity {
    /// Lower-case name as written in configs and input files.
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Other(name) => name,
        }
    }
}

/// Displays upper-cased (`ERROR`, `WARNING`, `OFF`).
impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Other(name) => write!(f, "{}", name.to_uppercase()),
        }
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "error" => Severity::Error,
            "warning" | "warn" => Severity::Warning,
            other => Severity::Other(other.to_string()),
        })
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single lint failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    /// File the failure was reported in.
    #[serde(rename = "name")]
    pub file_name: String,

    /// Rule that produced the failure.
    #[serde(default)]
    pub rule_name: String,

    #[serde(rename = "ruleSeverity", default)]
    pub severity: Severity,

    /// Human-readable description.
    #[serde(rename = "failure")]
    pub message: String,

    #[serde(rename = "startPosition")]
    pub start: Position,

    #[serde(rename = "endPosition", default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
}

impl Failure {
    /// Create an error-severity failure at `line:character` (zero-based).
    pub fn new(
        file_name: impl Into<String>,
        line: u32,
        character: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            rule_name: String::new(),
            severity: Severity::Error,
            message: message.into(),
            start: Position::new(line, character),
            end: None,
        }
    }

    /// Set the rule name.
    pub fn with_rule(mut self, rule_name: impl Into<String>) -> Self {
        self.rule_name = rule_name.into();
        self
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the end position.
    pub fn with_end(mut self, line: u32, character: u32) -> Self {
        self.end = Some(Position::new(line, character));
        self
    }

    /// Total order used for display: file name, then line, then character.
    pub fn compare(a: &Failure, b: &Failure) -> Ordering {
        a.file_name
            .cmp(&b.file_name)
            .then(a.start.line.cmp(&b.start.line))
            .then(a.start.character.cmp(&b.start.character))
    }
}

/// Return a copy of `failures` sorted by [`Failure::compare`].
///
/// The sort is stable, so failures at the same position keep input order.
pub fn sort_failures(failures: &[Failure]) -> Vec<&Failure> {
    let mut sorted: Vec<&Failure> = failures.iter().collect();
    sorted.sort_by(|a, b| Failure::compare(a, b));
    sorted
}

/// A fix that was applied automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fix {
    /// File the fix was applied to.
    #[serde(rename = "name")]
    pub file_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
}

impl Fix {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            rule_name: None,
        }
    }

    pub fn with_rule(mut self, rule_name: impl Into<String>) -> Self {
        self.rule_name = Some(rule_name.into());
        self
    }
}

#[cfg(test)]
#[path = "failure_tests.rs"]
mod tests;
