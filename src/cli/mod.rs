//! CLI module for scriptcheck
//!
//! This module provides the command-line interface for the syntax checker.
//!
//! ## Commands
//!
//! - `[FILE]` - Check a file (or stdin) with default options
//! - `check [FILE]` - Check with explicit output format and grammar options
//! - `--lex FILE` - Print the token dump (debug)
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `report` - Plain, pretty and JSON report rendering
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod report;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::check::{CheckOptions, ReportFormat};
use crate::version::SCRIPTCHECK_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Syntax checker for a small JavaScript-like scripting language
#[derive(Parser, Debug)]
#[command(name = "scriptcheck")]
#[command(version = SCRIPTCHECK_VERSION)]
#[command(about = "Check scripts against the scriptcheck grammar and report every syntax error", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given; `-` or nothing reads stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a file and report syntax errors
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    /// Source file to check (`-` or nothing reads stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Report format. With `json`, lexical errors are reported as a `lex_errors` document and exit with status 1
    #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
    pub format: ReportFormat,

    /// Only `;` terminates a statement (by default any punctuation does)
    #[arg(long)]
    pub strict_semicolons: bool,

    /// Keep comments as tokens instead of skipping them. The grammar has no comment statement, so each kept comment
    /// is reported as a syntax error (debug aid for the scanner)
    #[arg(long)]
    pub keep_comments: bool,

    /// Exit with status 1 when syntax errors are found
    #[arg(long)]
    pub deny_errors: bool,
}

impl CheckArgs {
    pub fn options(&self) -> CheckOptions {
        CheckOptions::new()
            .with_format(self.format)
            .with_strict_semicolons(self.strict_semicolons)
            .with_keep_comments(self.keep_comments)
            .with_deny_errors(self.deny_errors)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }

    match cli.command {
        Some(Command::Check(args)) => commands::check_file(args.file.as_deref(), &args.options()),
        // Default: check the file (or stdin) with default options
        None => commands::check_file(cli.file.as_deref(), &CheckOptions::default()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use scriptcheck_syntax::TerminatorPolicy;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["scriptcheck", "program.js"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("program.js")));
    }

    #[test]
    fn test_cli_parse_no_args_reads_stdin() {
        let cli = Cli::try_parse_from(["scriptcheck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["scriptcheck", "check", "program.js"]).unwrap();
        let Some(Command::Check(args)) = cli.command else {
            panic!("Expected Check command");
        };
        assert_eq!(args.file, Some(PathBuf::from("program.js")));
        assert_eq!(args.format, ReportFormat::Plain);
        assert_eq!(args.options(), CheckOptions::default());
    }

    #[test]
    fn test_cli_parse_check_flags() {
        let cli = Cli::try_parse_from([
            "scriptcheck",
            "check",
            "-",
            "--format",
            "json",
            "--strict-semicolons",
            "--keep-comments",
            "--deny-errors",
        ])
        .unwrap();
        let Some(Command::Check(args)) = cli.command else {
            panic!("Expected Check command");
        };
        let options = args.options();
        assert_eq!(args.file, Some(PathBuf::from("-")));
        assert_eq!(options.format, ReportFormat::Json);
        assert_eq!(options.parser.terminator, TerminatorPolicy::SemicolonOnly);
        assert!(options.lexer.keep_comments);
        assert!(options.deny_errors);
    }

    #[test]
    fn test_cli_parse_pretty_format() {
        let cli = Cli::try_parse_from(["scriptcheck", "check", "--format", "pretty"]).unwrap();
        let Some(Command::Check(args)) = cli.command else {
            panic!("Expected Check command");
        };
        assert_eq!(args.format, ReportFormat::Pretty);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["scriptcheck", "check", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_parse_lex_flag() {
        let cli = Cli::try_parse_from(["scriptcheck", "--lex", "program.js"]).unwrap();
        assert_eq!(cli.lex_file, Some(PathBuf::from("program.js")));
        assert!(Cli::try_parse_from(["scriptcheck", "--lex", "a.js", "b.js"]).is_err());
    }
}
