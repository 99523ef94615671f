// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Monkey - the lexical front end of the Monkey programming language
//!
//! This is the main entry point for the monkey CLI/REPL.
//!
//! ## Modes
//!
//! - Interactive REPL printing the tokens of every line
//! - Token listing of a whole file, read asynchronously with tokio
//! - Token listing of code passed on the command line

mod error;
mod output;
mod repl;

use clap::Parser;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use error::{MonkeyError, Result};
use output::OutputOptions;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "MONKEY_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "monkey",
    version,
    about = "Tokenize Monkey source code, interactively or from a file",
    long_about = None
)]
struct Cli {
    /// Monkey source file to tokenize
    file: Option<PathBuf>,

    /// Tokenize code from the command line
    #[arg(short = 'e', long = "eval", value_name = "CODE", conflicts_with = "file")]
    eval: Option<String>,

    /// Fail on the first ILLEGAL token
    #[arg(long)]
    deny_illegal: bool,

    /// Also print the closing EOF token
    #[arg(long)]
    show_eof: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn output_options(&self) -> OutputOptions {
        OutputOptions {
            deny_illegal: self.deny_illegal,
            show_eof: self.show_eof,
            ..OutputOptions::for_stdout()
        }
    }
}

/// Main entry point - uses tokio runtime for async operations.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = if let Some(code) = &cli.eval {
        run_eval(code, cli.output_options())
    } else if let Some(path) = &cli.file {
        run_file(path, cli.output_options()).await
    } else {
        run_repl()
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr log subscriber.
///
/// `--verbose` wins over `MONKEY_LOG`; without either only warnings show.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("monkey=debug,monkey_lexer=trace")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Start the interactive REPL
fn run_repl() -> Result<()> {
    debug!("starting REPL");
    let mut repl = repl::Repl::new()?;
    repl.run()
}

/// Tokenize a Monkey file, read asynchronously.
async fn run_file(path: &Path, options: OutputOptions) -> Result<()> {
    debug!(path = %path.display(), "reading source file");

    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| MonkeyError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    list_tokens(&source, options)
}

/// Tokenize Monkey code from the command line.
fn run_eval(code: &str, options: OutputOptions) -> Result<()> {
    debug!(bytes = code.len(), "tokenizing inline code");
    list_tokens(code, options)
}

fn list_tokens(source: &str, options: OutputOptions) -> Result<()> {
    let mut stdout = io::stdout().lock();
    output::write_tokens(source, options, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_means_repl() {
        let cli = Cli::parse_from(["monkey"]);
        assert!(cli.file.is_none());
        assert!(cli.eval.is_none());
    }

    #[test]
    fn test_eval_flags() {
        let cli = Cli::parse_from(["monkey", "-e", "let x = 1;", "--deny-illegal", "--show-eof"]);
        assert_eq!(cli.eval.as_deref(), Some("let x = 1;"));
        assert!(cli.deny_illegal);
        assert!(cli.show_eof);
    }

    #[test]
    fn test_eval_conflicts_with_file() {
        let result = Cli::try_parse_from(["monkey", "prog.mk", "-e", "1"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = run_file(Path::new("does/not/exist.mk"), OutputOptions::default())
            .await
            .expect_err("file does not exist");
        assert!(matches!(err, MonkeyError::Io { .. }));
    }
}
