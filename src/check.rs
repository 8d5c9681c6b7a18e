//! Source-to-outcome pipeline used by the CLI.
//!
//! Scans the source into a token buffer and runs the parser over it. Kept free of IO so it can be driven from tests.

use scriptcheck_syntax::parser::{self, ParseOutcome};
use scriptcheck_syntax::{LexError, LexerConfig, ParserConfig, TerminatorPolicy, lexer};

/// How a check result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// One `Syntax Error at line L, column C: message` line per violation
    #[default]
    Plain,
    /// Source excerpts with a caret under the offending token
    Pretty,
    /// A single JSON document on stdout, a `lex_errors` document when scanning fails
    Json,
}

/// Everything that controls a single check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckOptions {
    pub lexer: LexerConfig,
    pub parser: ParserConfig,
    pub format: ReportFormat,
    /// Exit with status 1 when any violation was found
    pub deny_errors: bool,
}

impl CheckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Accept only `;` as a statement terminator
    pub fn with_strict_semicolons(mut self, strict: bool) -> Self {
        self.parser = self.parser.with_terminator(if strict {
            TerminatorPolicy::SemicolonOnly
        } else {
            TerminatorPolicy::AnyPunctuation
        });
        self
    }

    pub fn with_keep_comments(mut self, keep: bool) -> Self {
        self.lexer = self.lexer.with_keep_comments(keep);
        self
    }

    pub fn with_deny_errors(mut self, deny: bool) -> Self {
        self.deny_errors = deny;
        self
    }
}

/// Scan and check `source`.
///
/// ## Errors
/// Returns every lexical error if the source cannot be fully tokenized; the parser is not run in that case.
pub fn check_source(source: &str, options: &CheckOptions) -> Result<ParseOutcome, Vec<LexError>> {
    let tokens = lexer::lex_with_config(source, &options.lexer)?;
    Ok(parser::parse_program_with_config(&tokens, &options.parser))
}
