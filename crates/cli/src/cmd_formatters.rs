// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Formatters command implementation.

use std::io::Write;

use termcolor::StandardStream;

use lintkit::cli::{self, FormattersArgs};
use lintkit::color::resolve_color;
use lintkit::error::{Error, ExitCode};
use lintkit::formatter::{all_metadata, listing_json, write_listing};

/// Run the formatters command.
pub fn run(args: &FormattersArgs, unknown: &[String]) -> anyhow::Result<ExitCode> {
    cli::reject_unknown(unknown)?;

    let formatters = all_metadata();
    if args.json {
        let json = listing_json(&formatters).map_err(|e| {
            Error::Internal(format!("failed to serialize formatter metadata: {}", e))
        })?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", json)?;
    } else {
        let mut stdout = StandardStream::stdout(resolve_color());
        write_listing(&mut stdout, &formatters)?;
        stdout.flush()?;
    }

    Ok(ExitCode::Success)
}
