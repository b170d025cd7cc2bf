// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles lintkit.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::custom_options::{CustomOptions, OptionValue};
use crate::error::{Error, Result};

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    format: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Formatting defaults.
    pub format: FormatConfig,
}

/// `[format]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Formatter used when `--formatter` is not given.
    pub formatter: Option<String>,

    /// Render paths relative to the working directory.
    pub relative_paths: bool,

    /// Default custom options, overridden by `--<formatter>-<name>` flags.
    pub options: CustomOptions,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "lintkit.toml";

/// Known keys in the `[format]` table.
const KNOWN_FORMAT_KEYS: &[&str] = &["formatter", "relative_paths", "options"];

/// Load config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade lintkit to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    for key in flexible.unknown.keys() {
        warn_unknown_key(path, key);
    }

    let format = match flexible.format {
        Some(toml::Value::Table(table)) => parse_format(&table, path)?,
        Some(_) => return Err(type_error(path, "format", "a table")),
        None => FormatConfig::default(),
    };

    Ok(Config { version, format })
}

fn parse_format(table: &toml::Table, path: &Path) -> Result<FormatConfig> {
    for key in table.keys() {
        if !KNOWN_FORMAT_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("format.{}", key));
        }
    }

    let formatter = match table.get("formatter") {
        Some(toml::Value::String(name)) => Some(name.clone()),
        Some(_) => return Err(type_error(path, "format.formatter", "a string")),
        None => None,
    };

    let relative_paths = match table.get("relative_paths") {
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => return Err(type_error(path, "format.relative_paths", "a boolean")),
        None => false,
    };

    let options = match table.get("options") {
        Some(toml::Value::Table(options)) => parse_options(options, path),
        Some(_) => return Err(type_error(path, "format.options", "a table")),
        None => CustomOptions::new(),
    };

    Ok(FormatConfig {
        formatter,
        relative_paths,
        options,
    })
}

/// Convert `[format.options]` into custom options.
///
/// Only strings and booleans are accepted, anything else is skipped with a
/// warning.
fn parse_options(table: &toml::Table, path: &Path) -> CustomOptions {
    let mut options = CustomOptions::new();
    for (key, value) in table {
        let value = match value {
            toml::Value::Boolean(true) => OptionValue::Flag,
            toml::Value::Boolean(false) => OptionValue::Value("false".to_string()),
            toml::Value::String(s) => OptionValue::Value(s.clone()),
            other => {
                eprintln!(
                    "lintkit: warning: {}: option `format.options.{}` has unsupported type {} (ignored)",
                    path.display(),
                    key,
                    other.type_str()
                );
                continue;
            }
        };
        options.insert(key.clone(), value);
    }
    options
}

fn type_error(path: &Path, key: &str, expected: &str) -> Error {
    Error::Config {
        message: format!("`{}` must be {}", key, expected),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "lintkit: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
