// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Custom option extraction from unrecognized command-line arguments.
//!
//! Flags that clap does not know about are collected into an "unknown" list.
//! Callers (formatters in particular) can claim a prefix and receive every
//! `--<prefix>-<name>[ value]` flag from that list as a loose key/value bag:
//!
//! ```text
//! --prose-relative-paths          => { "relativePaths": true }
//! --prose-style compact           => { "style": "compact" }
//! --prose-style=compact           => { "style": "compact" }
//! ```
//!
//! Extraction runs in two passes. The first pass classifies matching tokens
//! (does the flag take the following token as its value?), the second walks
//! the original list applying those classifications, producing the option
//! map and the tokens that remain unknown.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Custom options keyed by de-prefixed, camel-cased name.
pub type CustomOptions = BTreeMap<String, OptionValue>;

/// Value of a single custom option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Flag given without a value.
    Flag,
    /// Flag followed by (or assigned) a value.
    Value(String),
}

impl OptionValue {
    /// Interpret the value as a boolean.
    ///
    /// Bare flags are `true`; string values are `true` unless they spell
    /// out `false`, `0`, `no` or `off`.
    pub fn as_bool(&self) -> bool {
        match self {
            OptionValue::Flag => true,
            OptionValue::Value(v) => !matches!(
                v.to_ascii_lowercase().as_str(),
                "false" | "0" | "no" | "off"
            ),
        }
    }

    /// The string value, if one was given.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Flag => None,
            OptionValue::Value(v) => Some(v),
        }
    }
}

// Flags serialize as `true` so the map reads like a JSON config object.
impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Flag => serializer.serialize_bool(true),
            OptionValue::Value(v) => serializer.serialize_str(v),
        }
    }
}

/// How a matching token is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Arity {
    /// Boolean flag, consumes only itself.
    Flag,
    /// Value carried inline after `=`.
    Inline(String),
    /// Consumes the following token as its value.
    TakesNext,
}

/// A classified custom flag found during the first pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CustomFlag {
    /// Index of the flag token in the unknown list.
    pub index: usize,
    /// Option key (de-prefixed, camel-cased).
    pub key: String,
    pub arity: Arity,
}

/// Extract custom options carrying `prefix` from the unknown arguments.
///
/// Matched flags and their consumed values are removed from `unknown`;
/// every other token stays, in its original order.
pub fn extract_custom_options(prefix: &str, unknown: &mut Vec<String>) -> CustomOptions {
    let flags = classify(prefix, unknown);
    if flags.is_empty() {
        return CustomOptions::new();
    }

    let (options, remaining) = apply(&flags, std::mem::take(unknown));
    *unknown = remaining;

    tracing::debug!(
        "extracted {} custom option(s) with prefix `{}`, {} unknown argument(s) left",
        options.len(),
        prefix,
        unknown.len()
    );
    options
}

/// First pass: find `--<prefix>-` tokens and decide whether each one takes
/// the next token as its value.
pub(crate) fn classify(prefix: &str, tokens: &[String]) -> Vec<CustomFlag> {
    let marker = format!("--{}-", prefix);
    let mut flags = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        let Some(rest) = token.strip_prefix(&marker) else {
            continue;
        };

        let (name, arity) = match rest.split_once('=') {
            Some((name, value)) => (name, Arity::Inline(value.to_string())),
            None => {
                // Single-token lookahead: a following non-dash token is the value.
                let takes_next = tokens
                    .get(index + 1)
                    .is_some_and(|next| !next.starts_with('-'));
                let arity = if takes_next {
                    Arity::TakesNext
                } else {
                    Arity::Flag
                };
                (rest, arity)
            }
        };

        flags.push(CustomFlag {
            index,
            key: option_key(name),
            arity,
        });
    }

    flags
}

/// Second pass: walk the original tokens, consuming classified flags.
///
/// Returns the option map and the tokens left over.
pub(crate) fn apply(flags: &[CustomFlag], tokens: Vec<String>) -> (CustomOptions, Vec<String>) {
    let mut options = CustomOptions::new();
    let mut remaining = Vec::with_capacity(tokens.len().saturating_sub(flags.len()));
    let mut flags = flags.iter().peekable();
    let mut tokens = tokens.into_iter().enumerate();

    while let Some((index, token)) = tokens.next() {
        let Some(flag) = flags.next_if(|f| f.index == index) else {
            remaining.push(token);
            continue;
        };

        let value = match &flag.arity {
            Arity::Flag => OptionValue::Flag,
            Arity::Inline(v) => OptionValue::Value(v.clone()),
            Arity::TakesNext => match tokens.next() {
                Some((_, v)) => OptionValue::Value(v),
                None => OptionValue::Flag,
            },
        };

        // Later duplicates overwrite earlier ones.
        options.insert(flag.key.clone(), value);
    }

    (options, remaining)
}

/// Convert a de-prefixed flag name (`test-value`) into an option key
/// (`testValue`).
pub fn option_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for (i, segment) in name.split('-').filter(|s| !s.is_empty()).enumerate() {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                key.extend(first.to_lowercase());
            } else {
                key.extend(first.to_uppercase());
            }
            key.push_str(chars.as_str());
        }
    }
    key
}

#[cfg(test)]
#[path = "custom_options_tests.rs"]
mod tests;
