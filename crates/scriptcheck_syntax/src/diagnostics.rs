//! Diagnostics produced by the scanner and the parser.
//!
//! The parser has a single error kind, the syntax violation: a fixed message plus the position of the token that was
//! current when the violation was detected. Violations are never fatal to a run; the parser records them and keeps
//! going.
//!
//! ## Notes
//! - `Display` for [`SyntaxViolation`] is the stable one-line report format:
//!   `Syntax Error at line <L>, column <C>: <message>`.
//! - Both types implement [`miette::Diagnostic`] so front-ends can render them with source context.

use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::Position;

/// What went wrong, one variant per message the grammar can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Diagnostic)]
pub enum ViolationKind {
    #[error("Unexpected keyword")]
    #[diagnostic(
        code(syntax::unexpected_keyword),
        help("only `function`, `var`, `let`, `const`, `if` and `while` can start a statement")
    )]
    UnexpectedKeyword,

    #[error("Expected semicolon")]
    #[diagnostic(code(syntax::expected_semicolon))]
    ExpectedSemicolon,

    #[error("Expected {{")]
    #[diagnostic(code(syntax::expected_open_brace))]
    ExpectedOpenBrace,

    #[error("Expected }}")]
    #[diagnostic(code(syntax::expected_close_brace))]
    ExpectedCloseBrace,

    #[error("Expected expression")]
    #[diagnostic(
        code(syntax::expected_expression),
        help("an expression is a single identifier, number, string or boolean")
    )]
    ExpectedExpression,

    #[error("Expected 'function' keyword")]
    #[diagnostic(code(syntax::expected_function_keyword))]
    ExpectedFunctionKeyword,

    #[error("Expected function name")]
    #[diagnostic(code(syntax::expected_function_name))]
    ExpectedFunctionName,

    #[error("Expected '('")]
    #[diagnostic(code(syntax::expected_open_paren))]
    ExpectedOpenParen,

    #[error("Expected parameter name")]
    #[diagnostic(code(syntax::expected_parameter_name))]
    ExpectedParameterName,

    #[error("Expected ')'")]
    #[diagnostic(code(syntax::expected_close_paren))]
    ExpectedCloseParen,

    #[error("Expected variable declaration keyword")]
    #[diagnostic(code(syntax::expected_declaration_keyword))]
    ExpectedDeclarationKeyword,

    #[error("Expected variable name")]
    #[diagnostic(code(syntax::expected_variable_name))]
    ExpectedVariableName,

    #[error("Expected 'if' keyword")]
    #[diagnostic(code(syntax::expected_if_keyword))]
    ExpectedIfKeyword,

    #[error("Expected 'while' keyword")]
    #[diagnostic(code(syntax::expected_while_keyword))]
    ExpectedWhileKeyword,
}

impl ViolationKind {
    /// Stable diagnostic code, e.g. `syntax::expected_semicolon`.
    pub fn diagnostic_code(self) -> String {
        Diagnostic::code(&self).map(|c| c.to_string()).unwrap_or_default()
    }
}

/// A single detected syntax violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Diagnostic)]
#[error("Syntax Error at line {line}, column {column}: {kind}", line = .position.line, column = .position.column)]
#[diagnostic(forward(kind))]
pub struct SyntaxViolation {
    pub kind: ViolationKind,
    pub position: Position,
}

impl SyntaxViolation {
    pub fn new(kind: ViolationKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// The bare message without the position prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// A failure while scanning source text into tokens.
///
/// Unlike syntax violations these stop a check: the token buffer handed to the parser must be complete.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("Lexical Error at line {line}, column {column}: unexpected character {ch:?}")]
    #[diagnostic(code(lex::unexpected_character))]
    UnexpectedCharacter { ch: char, line: usize, column: usize },

    #[error("Lexical Error at line {line}, column {column}: unterminated string literal")]
    #[diagnostic(code(lex::unterminated_string), help("close the string with the same quote it was opened with"))]
    UnterminatedString { line: usize, column: usize },

    #[error("Lexical Error at line {line}, column {column}: unterminated block comment")]
    #[diagnostic(code(lex::unterminated_comment), help("block comments end with `*/`"))]
    UnterminatedComment { line: usize, column: usize },
}

impl LexError {
    /// Position where the offending construct starts.
    pub fn position(&self) -> Position {
        match *self {
            LexError::UnexpectedCharacter { line, column, .. }
            | LexError::UnterminatedString { line, column }
            | LexError::UnterminatedComment { line, column } => Position::new(line, column),
        }
    }
}
