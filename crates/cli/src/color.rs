// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. default:
//!    - If not stdout.is_tty() → no color
//!    - If CLAUDE_CODE, CODEX, CI, or CURSOR env var set → no color
//!    - Else → use color
//!
//! Only the `formatters` listing is colored. Formatter output is plain text so
//! it stays byte-identical between terminals and pipes.

use std::io::IsTerminal;
use termcolor::ColorChoice;

use crate::formatter::Consumer;

/// Resolve color choice from environment variables.
///
/// Priority: NO_COLOR > COLOR > auto-detect
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    if is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Check if running in an AI agent environment.
fn is_agent_environment() -> bool {
    std::env::var_os("CLAUDE_CODE").is_some()
        || std::env::var_os("CODEX").is_some()
        || std::env::var_os("CURSOR").is_some()
        || std::env::var_os("CI").is_some()
}

/// Color scheme for the formatter listing.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    use crate::formatter::Consumer;

    /// Bold formatter name.
    pub fn formatter_name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Consumer tag: green for people, cyan for tools.
    pub fn consumer(consumer: Consumer) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match consumer {
            Consumer::Human => spec.set_fg(Some(Color::Green)),
            Consumer::Machine => spec.set_fg(Some(Color::Cyan)),
        };
        spec
    }

    /// Dimmed sample output.
    pub fn sample() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }

    /// Default (no color) for descriptions.
    pub fn description() -> ColorSpec {
        ColorSpec::new()
    }
}

/// Label shown next to a formatter name.
pub fn consumer_label(consumer: Consumer) -> String {
    format!("[{}]", consumer)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
