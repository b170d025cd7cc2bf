// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Formatter context and the adapter for legacy call shapes.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, de};

use crate::custom_options::CustomOptions;
use crate::failure::{Failure, Fix};

/// Options recognized by the built-in formatters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterOptions {
    /// Render file paths relative to `base_dir`.
    #[serde(default)]
    pub relative_paths: bool,

    /// Directory paths are made relative to (None = current directory).
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Option keys understood by [`FormatterOptions::apply_custom`].
const KNOWN_OPTION_KEYS: &[&str] = &["relativePaths"];

impl FormatterOptions {
    /// Build options from a custom options bag.
    pub fn from_custom(custom: &CustomOptions) -> Self {
        let mut options = Self::default();
        options.apply_custom(custom);
        options
    }

    /// Overlay recognized keys from a custom options bag.
    ///
    /// Unrecognized keys are left for formatters that read the bag directly.
    pub fn apply_custom(&mut self, custom: &CustomOptions) {
        if let Some(value) = custom.get("relativePaths") {
            self.relative_paths = value.as_bool();
        }
        for key in custom.keys() {
            if !KNOWN_OPTION_KEYS.contains(&key.as_str()) {
                tracing::debug!("formatter option `{}` not recognized, ignoring", key);
            }
        }
    }

    /// Set the directory relative paths are computed from.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }
}

/// Everything a formatter needs for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormatterContext {
    pub failures: Vec<Failure>,

    #[serde(default)]
    pub fixes: Option<Vec<Fix>>,

    #[serde(default)]
    pub options: FormatterOptions,
}

impl FormatterContext {
    /// Create a context with failures and default options.
    pub fn new(failures: Vec<Failure>) -> Self {
        Self {
            failures,
            fixes: None,
            options: FormatterOptions::default(),
        }
    }

    /// Attach fixes.
    pub fn with_fixes(mut self, fixes: Vec<Fix>) -> Self {
        self.fixes = Some(fixes);
        self
    }

    /// Replace options.
    pub fn with_options(mut self, options: FormatterOptions) -> Self {
        self.options = options;
        self
    }

    /// Fixes, or an empty slice when none were given.
    pub fn fixes(&self) -> &[Fix] {
        self.fixes.as_deref().unwrap_or_default()
    }

    /// True when there is neither a failure nor a fix to report.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty() && self.fixes().is_empty()
    }
}

/// The two shapes formatter input arrives in.
///
/// Deserializes from either a JSON object (`{"failures": [...], ...}`) or a
/// bare JSON array of failures. The shape is picked from the top-level JSON
/// type, so errors inside either shape name the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatterInput {
    /// A complete context.
    Context(FormatterContext),
    /// A bare list of failures (deprecated shape).
    Failures(Vec<Failure>),
}

impl<'de> Deserialize<'de> for FormatterInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Array(_) => serde_json::from_value(value)
                .map(FormatterInput::Failures)
                .map_err(|e| de::Error::custom(format!("failure list: {}", e))),
            serde_json::Value::Object(_) => serde_json::from_value(value)
                .map(FormatterInput::Context)
                .map_err(|e| de::Error::custom(format!("context: {}", e))),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a failure list or a context object",
            )),
        }
    }
}

fn unexpected(value: &serde_json::Value) -> de::Unexpected<'_> {
    match value {
        serde_json::Value::Null => de::Unexpected::Unit,
        serde_json::Value::Bool(b) => de::Unexpected::Bool(*b),
        serde_json::Value::Number(_) => de::Unexpected::Other("number"),
        serde_json::Value::String(s) => de::Unexpected::Str(s),
        serde_json::Value::Array(_) => de::Unexpected::Seq,
        serde_json::Value::Object(_) => de::Unexpected::Map,
    }
}

impl From<FormatterContext> for FormatterInput {
    fn from(context: FormatterContext) -> Self {
        FormatterInput::Context(context)
    }
}

impl From<Vec<Failure>> for FormatterInput {
    fn from(failures: Vec<Failure>) -> Self {
        FormatterInput::Failures(failures)
    }
}

/// Normalize formatter input into a context.
///
/// A context is returned unchanged and `fixes` is ignored. A bare failure
/// list is wrapped together with `fixes` and default options.
pub fn to_context(input: FormatterInput, fixes: Option<Vec<Fix>>) -> FormatterContext {
    match input {
        FormatterInput::Context(context) => context,
        FormatterInput::Failures(failures) => FormatterContext {
            failures,
            fixes,
            options: FormatterOptions::default(),
        },
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
