// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Format command implementation.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::Context;

use lintkit::cli::{self, Cli, FormatArgs};
use lintkit::config::{self, Config};
use lintkit::custom_options::{CustomOptions, extract_custom_options};
use lintkit::discovery;
use lintkit::error::{Error, ExitCode, Result};
use lintkit::failure::{Fix, Severity};
use lintkit::formatter::{self, DEFAULT_FORMATTER, FormatterContext, FormatterInput, to_context};

/// Input path that means "read stdin".
const STDIN_PATH: &str = "-";

/// Run the format command.
///
/// `unknown` holds the arguments clap does not declare; custom options for
/// the selected formatter are taken from it and anything left is an error.
pub fn run(cli: &Cli, args: &FormatArgs, mut unknown: Vec<String>) -> anyhow::Result<ExitCode> {
    tracing::trace!("format command starting");

    let cwd = std::env::current_dir().context("cannot determine working directory")?;

    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let name = args
        .formatter
        .as_deref()
        .or(config.format.formatter.as_deref())
        .unwrap_or(DEFAULT_FORMATTER);
    let formatter = formatter::create(name).ok_or_else(|| {
        let available: Vec<_> = formatter::all_metadata().iter().map(|m| m.name).collect();
        Error::Argument(format!(
            "unknown formatter '{}' (available: {})",
            name,
            available.join(", ")
        ))
    })?;

    let custom = extract_custom_options(formatter.name(), &mut unknown);
    cli::reject_unknown(&unknown)?;

    let fixes = args.fixes.as_deref().map(read_fixes).transpose()?;
    let input = read_input(args.input.as_deref())?;
    if fixes.is_some() && matches!(input, FormatterInput::Context(_)) {
        tracing::warn!("--fixes ignored: input already carries its own context");
    }

    let mut context = to_context(input, fixes);
    apply_settings(&mut context, &config, &custom, args.relative_paths);
    context.options.base_dir = Some(cwd);

    tracing::debug!(
        "rendering {} failure(s) with {}",
        context.failures.len(),
        formatter.name()
    );

    match &args.out {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            })?;
            let mut writer = BufWriter::new(file);
            formatter
                .render_to(&mut writer, &context)
                .and_then(|()| writer.flush())
                .map_err(|e| Error::Io {
                    path: path.clone(),
                    source: e,
                })?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            formatter
                .render_to(&mut stdout, &context)
                .context("failed to write output")?;
        }
    }

    Ok(exit_code(&context))
}

/// Layer option sources onto the context.
///
/// Later sources win: input document, config file, custom CLI options,
/// then the `--relative-paths` flag.
fn apply_settings(
    context: &mut FormatterContext,
    config: &Config,
    custom: &CustomOptions,
    relative_paths_flag: bool,
) {
    let options = &mut context.options;
    options.relative_paths |= config.format.relative_paths;

    let mut merged = config.format.options.clone();
    merged.extend(custom.clone());
    options.apply_custom(&merged);

    if relative_paths_flag {
        options.relative_paths = true;
    }
}

fn exit_code(context: &FormatterContext) -> ExitCode {
    if context.failures.iter().any(|f| f.severity == Severity::Error) {
        ExitCode::LintFailed
    } else {
        ExitCode::Success
    }
}

/// Read and parse lint results from a file or stdin.
fn read_input(path: Option<&Path>) -> Result<FormatterInput> {
    let (origin, content) = match path {
        Some(path) if path != Path::new(STDIN_PATH) => {
            let content = read_file(path)?;
            (path.display().to_string(), content)
        }
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| Error::Io {
                    path: STDIN_PATH.into(),
                    source: e,
                })?;
            ("<stdin>".to_string(), content)
        }
    };

    serde_json::from_str(&content).map_err(|source| Error::Input { origin, source })
}

fn read_fixes(path: &Path) -> Result<Vec<Fix>> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| Error::Input {
        origin: path.display().to_string(),
        source,
    })
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
