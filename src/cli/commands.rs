//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use scriptcheck_syntax::lexer;
use scriptcheck_syntax::parser::ParseOutcome;

use super::report;
use super::{CliError, CliResult, ExitCode};
use crate::check::{CheckOptions, ReportFormat, check_source};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// A loaded source text and the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub text: String,
}

/// Read source code from a file, with size validation.
///
/// ## Errors
/// Returns an error if:
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let display = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", display, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            display,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", display, e)))
}

/// Load the input named on the command line. `None` and `-` read standard input.
pub fn read_input(file: Option<&Path>) -> CliResult<Input> {
    match file {
        Some(path) if path != Path::new("-") => Ok(Input {
            name: path.display().to_string(),
            text: read_source(path)?,
        }),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| CliError::failure(format!("Error reading standard input: {}", e)))?;
            Ok(Input {
                name: STDIN_NAME.to_string(),
                text,
            })
        }
    }
}

/// Exit status for a finished check: success unless `deny_errors` is set and violations were found.
pub fn exit_code_for(outcome: &ParseOutcome, options: &CheckOptions) -> ExitCode {
    if options.deny_errors && !outcome.is_clean() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Check a file (or stdin) and print the report in the requested format.
pub fn check_file(file: Option<&Path>, options: &CheckOptions) -> CliResult<ExitCode> {
    let input = read_input(file)?;
    tracing::debug!(file = %input.name, bytes = input.text.len(), "checking");

    if options.lexer.keep_comments {
        tracing::warn!("comments are kept as tokens and will be checked as statements");
    }

    let color = io::stderr().is_terminal();

    let outcome = match check_source(&input.text, options) {
        Ok(outcome) => outcome,
        Err(errors) => {
            let msg = match options.format {
                ReportFormat::Plain => report::render_lex_errors(&input.name, &errors),
                ReportFormat::Pretty => report::render_lex_errors_pretty(&input.name, &input.text, &errors, color)
                    .map_err(|_| CliError::failure("Error rendering diagnostics"))?,
                ReportFormat::Json => {
                    // The document goes to stdout like a syntax report; the exit status still signals failure
                    let doc = report::render_lex_errors_json(&input.name, &errors);
                    let text = serde_json::to_string_pretty(&doc)
                        .map_err(|e| CliError::failure(format!("Error serializing report: {}", e)))?;
                    println!("{}", text);
                    String::new()
                }
            };
            return Err(CliError::failure(msg.trim_end()));
        }
    };

    match options.format {
        ReportFormat::Plain => {
            eprint!("{}", report::render_plain(&outcome));
            println!("{}", report::summary_line(&outcome));
        }
        ReportFormat::Pretty => {
            let rendered = report::render_pretty(&input.name, &input.text, &outcome, color)
                .map_err(|_| CliError::failure("Error rendering diagnostics"))?;
            eprint!("{}", rendered);
            println!("{}", report::summary_line(&outcome));
        }
        ReportFormat::Json => {
            let doc = report::render_json(&input.name, &outcome);
            let text = serde_json::to_string_pretty(&doc)
                .map_err(|e| CliError::failure(format!("Error serializing report: {}", e)))?;
            println!("{}", text);
        }
    }

    Ok(exit_code_for(&outcome, options))
}

/// Tokenize and display tokens.
pub fn lex_file(file: &Path) -> CliResult<ExitCode> {
    let input = read_input(Some(file))?;
    let tokens = lexer::lex(&input.text).map_err(|errs| CliError::failure(report::render_lex_errors(&input.name, &errs)))?;

    print!("{}", lexer::dump(&tokens));
    Ok(ExitCode::SUCCESS)
}
