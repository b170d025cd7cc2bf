// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lintkit CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use lintkit::cli::{self, Cli, Command};
use lintkit::error::ExitCode;

mod cmd_format;
mod cmd_formatters;

fn init_logging() {
    let filter = EnvFilter::try_from_env("LINTKIT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("lintkit: {}", e);
            match e.downcast_ref::<lintkit::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let split = cli::split_unknown(&Cli::command(), std::env::args_os())?;
    let cli = Cli::try_parse_from(&split.known).unwrap_or_else(|e| e.exit());

    match &cli.command {
        None => {
            // Show help for bare invocation
            cli::reject_unknown(&split.unknown)?;
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Format(args)) => cmd_format::run(&cli, args, split.unknown),
        Some(Command::Formatters(args)) => cmd_formatters::run(args, &split.unknown),
    }
}
