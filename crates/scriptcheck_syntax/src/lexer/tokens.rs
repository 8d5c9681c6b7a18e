//! Token types shared by the scanner and the parser.
//!
//! A token is a coarse kind tag plus its literal spelling and 1-based source position. Keywords, operators and
//! punctuation are not split into per-spelling variants: the parser matches on the kind and disambiguates by
//! comparing the spelling against the `scriptcheck_core::lang` registries.
//!
//! ## Notes
//! - Tokens are immutable once produced.
//! - Use `crate::token_helpers` for registry-backed matching at call sites.

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfInput,
    Keyword,
    Identifier,
    String,
    Number,
    Operator,
    Punctuation,
    Boolean,
    Null,
    Undefined,
    Comment,
}

impl TokenKind {
    /// Upper-case tag used in token dumps (`KEYWORD: while`).
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EOF",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Null => "NULL",
            TokenKind::Undefined => "UNDEFINED",
            TokenKind::Comment => "COMMENT",
        }
    }

    /// Return `true` for the kinds the expression rule accepts as a complete expression.
    pub fn is_expression_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Number | TokenKind::String | TokenKind::Boolean
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 1-based line/column position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// First character of a source file.
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token with its kind, spelling and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Construct a token at an existing [`Position`].
    pub fn at(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self::new(kind, text, position.line, position.column)
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}
