// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint failure formatting.
//!
//! Two pieces: [`custom_options`] turns `--<prefix>-<name> [value]` tokens
//! into a keyed option map, and [`formatter`] renders lint failures through
//! interchangeable [`Formatter`] implementations.

pub mod cli;
pub mod color;
pub mod config;
pub mod custom_options;
pub mod discovery;
pub mod error;
pub mod failure;
pub mod formatter;

pub use cli::{Cli, Command, FormatArgs, FormattersArgs, SplitArgs};
pub use custom_options::{CustomOptions, OptionValue, extract_custom_options};
pub use error::{Error, ExitCode, Result};
pub use failure::{Failure, Fix, Position, Severity, sort_failures};
pub use formatter::{
    Formatter, FormatterContext, FormatterInput, FormatterMetadata, FormatterOptions, to_context,
};

#[cfg(test)]
pub mod test_utils;
