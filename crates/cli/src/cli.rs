// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.
//!
//! Formatter-specific flags (`--<formatter>-<name>`) are not declared to clap.
//! [`split_unknown`] separates them from the arguments clap knows about before
//! parsing, so they can be handed to the custom option extractor.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, Parser, Subcommand};

use crate::error::{Error, Result};

/// Render lint failures for people and tools
#[derive(Parser)]
#[command(name = "lintkit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "LINTKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render lint results with a formatter
    #[command(after_help = "Formatter options:\n  \
        --<formatter>-<name> [VALUE]  Passed to the selected formatter as `name`\n  \
        Example: lintkit format results.json -f prose --prose-relative-paths")]
    Format(FormatArgs),
    /// List available formatters
    Formatters(FormattersArgs),
}

#[derive(clap::Args, Default)]
pub struct FormatArgs {
    /// Lint results as JSON (reads stdin when omitted or `-`)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Formatter to use (see `lintkit formatters`)
    #[arg(short, long, value_name = "NAME")]
    pub formatter: Option<String>,

    /// JSON file with applied fixes
    #[arg(long, value_name = "FILE")]
    pub fixes: Option<PathBuf>,

    /// Show file paths relative to the current directory
    #[arg(long)]
    pub relative_paths: bool,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(clap::Args, Default)]
pub struct FormattersArgs {
    /// Print metadata as JSON
    #[arg(long)]
    pub json: bool,
}

/// Command-line arguments split by whether clap declares them.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SplitArgs {
    /// Arguments to hand to clap (program name first).
    pub known: Vec<OsString>,
    /// Undeclared options and the operands that follow them, in order.
    pub unknown: Vec<String>,
}

/// Split raw arguments into those `command` declares and the rest.
///
/// An undeclared option moves to `unknown` together with every operand after
/// it; declared options keep their values. Positional tokens that name a
/// subcommand switch the lookup scope to that subcommand. Everything after
/// `--` is known.
///
/// Known arguments are passed through untouched, so non-UTF-8 paths reach
/// clap intact. A non-UTF-8 token that would land in `unknown` is an error.
pub fn split_unknown<I>(command: &clap::Command, args: I) -> Result<SplitArgs>
where
    I: IntoIterator<Item = OsString>,
{
    let mut root = command.clone();
    root.build();

    let mut split = SplitArgs::default();
    let mut args = args.into_iter();
    if let Some(program) = args.next() {
        split.known.push(program);
    }

    let mut scope = &root;
    let mut to_unknown = false;

    while let Some(arg) = args.next() {
        let arg = match arg.into_string() {
            Ok(arg) => arg,
            Err(raw) if to_unknown => {
                return Err(Error::Argument(format!(
                    "argument is not valid UTF-8: '{}'",
                    raw.to_string_lossy()
                )));
            }
            // Options are ASCII, so anything else is an operand
            Err(raw) => {
                split.known.push(raw);
                continue;
            }
        };

        if arg == "--" {
            split.known.push(arg.into());
            split.known.extend(args.by_ref());
            break;
        }

        let declared = if let Some(long) = arg.strip_prefix("--") {
            let (name, inline) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };
            lookup(&root, scope, |a| matches_long(a, name)).map(|takes| takes && !inline)
        } else if let Some(shorts) = arg.strip_prefix('-').filter(|s| !s.is_empty()) {
            let mut chars = shorts.chars();
            chars.next().and_then(|c| {
                let inline = chars.next().is_some();
                lookup(&root, scope, |a| matches_short(a, c)).map(|takes| takes && !inline)
            })
        } else {
            if to_unknown {
                split.unknown.push(arg);
            } else {
                if let Some(sub) = scope.find_subcommand(&arg) {
                    scope = sub;
                }
                split.known.push(arg.into());
            }
            continue;
        };

        match declared {
            Some(takes_next) => {
                split.known.push(arg.into());
                if takes_next && let Some(value) = args.next() {
                    split.known.push(value);
                }
            }
            None => {
                tracing::trace!("undeclared argument {}", arg);
                split.unknown.push(arg);
                to_unknown = true;
            }
        }
    }

    Ok(split)
}

/// Reject arguments nothing consumed.
pub fn reject_unknown(unknown: &[String]) -> Result<()> {
    match unknown.first() {
        Some(arg) => Err(Error::Argument(format!("unexpected argument '{}'", arg))),
        None => Ok(()),
    }
}

/// Find an argument in the current scope, falling back to the root command.
///
/// Returns whether the argument takes a value.
fn lookup(root: &clap::Command, scope: &clap::Command, pred: impl Fn(&Arg) -> bool) -> Option<bool> {
    scope
        .get_arguments()
        .chain(root.get_arguments().filter(|a| a.is_global_set()))
        .find(|a| !a.is_positional() && pred(a))
        .map(|a| a.get_action().takes_values())
}

fn matches_long(arg: &Arg, name: &str) -> bool {
    arg.get_long() == Some(name)
        || arg
            .get_all_aliases()
            .is_some_and(|aliases| aliases.contains(&name))
}

fn matches_short(arg: &Arg, c: char) -> bool {
    arg.get_short() == Some(c)
        || arg
            .get_all_short_aliases()
            .is_some_and(|aliases| aliases.contains(&c))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
