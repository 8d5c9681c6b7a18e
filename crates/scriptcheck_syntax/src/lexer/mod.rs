//! Scanner for scriptcheck source text
//!
//! Handles tokenization including:
//! - Keywords (`function`, `var`, `if`, `while`, ...) and the literal words `true`/`false`/`null`/`undefined`
//! - Identifiers, numbers and quoted strings
//! - Operators (longest match) and punctuation
//! - `//` and `/* */` comments, dropped unless [`LexerConfig::keep_comments`] is set
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Position)

pub mod tokens;

pub use tokens::{Position, Token, TokenKind};

use crate::config::LexerConfig;
use crate::diagnostics::LexError;
use crate::source::{TokenBuffer, TokenSource};
use scriptcheck_core::lang::literals::{self, LiteralClass};
use scriptcheck_core::lang::{keywords, operators, punctuation};

/// Scanner over a source string.
///
/// Produces tokens lazily through [`TokenSource`]. After a lexical error the scanner skips the offending input and
/// keeps going, so one pass reports every bad character.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    column: usize,
    config: LexerConfig,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            config,
            finished: false,
        }
    }

    /// Tokenize the entire source.
    pub fn tokenize(self) -> Result<TokenBuffer, Vec<LexError>> {
        TokenBuffer::materialize(self)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Option<Result<Token, LexError>> {
        loop {
            self.skip_whitespace();

            let start = self.current_pos;
            let pos = self.position();
            let c = self.advance()?;
            let next = self.peek();

            let item = match c {
                '/' if matches!(next, Some('/') | Some('*')) => match self.scan_comment(start, pos) {
                    Ok(Some(token)) => Ok(token),
                    Ok(None) => continue,
                    Err(err) => Err(err),
                },
                '"' | '\'' => self.scan_string(start, pos, c),
                '0'..='9' => Ok(self.scan_number(start, pos)),
                _ if is_ident_start(c) => Ok(self.scan_identifier(start, pos)),
                _ if punctuation::from_char(c).is_some() => Ok(self.token_from(TokenKind::Punctuation, start, pos)),
                _ if operators::starts_operator(c) => Ok(self.scan_operator(start, pos, c)),
                _ => Err(LexError::UnexpectedCharacter {
                    ch: c,
                    line: pos.line,
                    column: pos.column,
                }),
            };
            return Some(item);
        }
    }

    fn token_from(&self, kind: TokenKind, start: usize, pos: Position) -> Token {
        Token::at(kind, &self.source[start..self.current_pos], pos)
    }

    fn end_of_input(&mut self) -> Option<Result<Token, LexError>> {
        if self.finished {
            return None;
        }
        self.finished = true;
        self.config
            .emit_eof
            .then(|| Ok(Token::at(TokenKind::EndOfInput, "", self.position())))
    }

    // ========================================================================
    // Token scanners
    // ========================================================================

    /// Scan a comment whose leading `/` has been consumed. Returns `Ok(None)` when comments are dropped.
    fn scan_comment(&mut self, start: usize, pos: Position) -> Result<Option<Token>, LexError> {
        match self.advance() {
            Some('*') => {
                let mut closed = false;
                while let Some(c) = self.advance() {
                    if c == '*' && self.peek() == Some('/') {
                        self.advance();
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(LexError::UnterminatedComment {
                        line: pos.line,
                        column: pos.column,
                    });
                }
            }
            _ => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            }
        }

        Ok(self
            .config
            .keep_comments
            .then(|| self.token_from(TokenKind::Comment, start, pos)))
    }

    fn scan_string(&mut self, start: usize, pos: Position, quote: char) -> Result<Token, LexError> {
        while let Some(c) = self.advance() {
            if c == quote {
                return Ok(self.token_from(TokenKind::String, start, pos));
            }
            if c == '\\' {
                self.advance();
            }
        }
        Err(LexError::UnterminatedString {
            line: pos.line,
            column: pos.column,
        })
    }

    fn scan_number(&mut self, start: usize, pos: Position) -> Token {
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {}
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            self.advance();
        }
        self.token_from(TokenKind::Number, start, pos)
    }

    fn scan_identifier(&mut self, start: usize, pos: Position) -> Token {
        while let Some(c) = self.peek() {
            if !is_ident_continue(c) {
                break;
            }
            self.advance();
        }

        let spelling = &self.source[start..self.current_pos];
        let kind = if keywords::from_str(spelling).is_some() {
            TokenKind::Keyword
        } else if let Some(id) = literals::from_str(spelling) {
            match literals::class(id) {
                LiteralClass::Boolean => TokenKind::Boolean,
                LiteralClass::Null => TokenKind::Null,
                LiteralClass::Undefined => TokenKind::Undefined,
            }
        } else {
            TokenKind::Identifier
        };
        Token::at(kind, spelling, pos)
    }

    /// Longest match against the operator registry; the first char is already consumed.
    fn scan_operator(&mut self, start: usize, pos: Position, first: char) -> Token {
        if let Some(second) = self.peek() {
            let mut pair = String::with_capacity(2);
            pair.push(first);
            pair.push(second);
            if operators::from_str(&pair).is_some() {
                self.advance();
            }
        }
        self.token_from(TokenKind::Operator, start, pos)
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        if self.finished {
            return None;
        }
        match self.scan_token() {
            Some(item) => Some(item),
            None => self.end_of_input(),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string with the default configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<TokenBuffer, Vec<LexError>> {
    Lexer::new(source).tokenize()
}

#[tracing::instrument(skip_all, fields(source_len = source.len(), keep_comments = config.keep_comments))]
pub fn lex_with_config(source: &str, config: &LexerConfig) -> Result<TokenBuffer, Vec<LexError>> {
    Lexer::with_config(source, *config).tokenize()
}

/// Render tokens as a dump, one `LABEL: text` line per token.
pub fn dump(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(token.kind.label());
        out.push_str(": ");
        out.push_str(&token.text);
        out.push('\n');
    }
    out
}
