// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable formatter.
//!
//! ```text
//! Fixed 2 error(s) in src/a.ts
//!
//! ERROR: src/b.ts:3:14 - Missing semicolon
//! WARNING: src/b.ts:9:1 - Trailing whitespace
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use super::{Consumer, Formatter, FormatterContext, FormatterMetadata, FormatterOptions};
use crate::failure::{Fix, sort_failures};

pub(super) static METADATA: FormatterMetadata = FormatterMetadata {
    name: "prose",
    description: "The default formatter which outputs simple human-readable messages.",
    sample: "ERROR: myFile.ts:1:14 - Missing semicolon",
    consumer: Consumer::Human,
};

/// Default formatter: one `SEVERITY: file:line:col - message` line per failure.
pub struct ProseFormatter;

impl Formatter for ProseFormatter {
    fn metadata(&self) -> &'static FormatterMetadata {
        &METADATA
    }

    fn render(&self, context: &FormatterContext) -> String {
        if context.is_empty() {
            return "\n".to_string();
        }

        let mut lines = fix_summary(context.fixes());

        let base_dir = resolve_base_dir(&context.options);
        for failure in sort_failures(&context.failures) {
            let path = display_path(&failure.file_name, base_dir.as_deref());
            lines.push(format!(
                "{}: {}:{}:{} - {}",
                failure.severity,
                path,
                failure.start.line + 1,
                failure.start.character + 1,
                failure.message
            ));
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

/// `Fixed N error(s) in FILE` lines in first-seen file order, followed by a
/// blank separator line. Empty when there are no fixes.
fn fix_summary(fixes: &[Fix]) -> Vec<String> {
    if fixes.is_empty() {
        return Vec::new();
    }

    let mut per_file: Vec<(&str, usize)> = Vec::new();
    for fix in fixes {
        match per_file.iter_mut().find(|(file, _)| *file == fix.file_name) {
            Some((_, count)) => *count += 1,
            None => per_file.push((fix.file_name.as_str(), 1)),
        }
    }

    let mut lines: Vec<String> = per_file
        .into_iter()
        .map(|(file, count)| format!("Fixed {} error(s) in {}", count, file))
        .collect();
    lines.push(String::new());
    lines
}

/// Directory to relativize against, or None when paths render as given.
fn resolve_base_dir(options: &FormatterOptions) -> Option<PathBuf> {
    if !options.relative_paths {
        return None;
    }
    match &options.base_dir {
        Some(dir) => Some(dir.clone()),
        None => match std::env::current_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                tracing::warn!("cannot resolve current directory, paths left as given: {}", e);
                None
            }
        },
    }
}

/// Render `file` relative to `base_dir` when one is set.
fn display_path<'a>(file: &'a str, base_dir: Option<&Path>) -> Cow<'a, str> {
    let Some(base) = base_dir else {
        return Cow::Borrowed(file);
    };

    let path = Path::new(file);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    match pathdiff::diff_paths(&absolute, base) {
        Some(relative) => Cow::Owned(relative.to_string_lossy().into_owned()),
        None => Cow::Borrowed(file),
    }
}

#[cfg(test)]
#[path = "prose_tests.rs"]
mod tests;
