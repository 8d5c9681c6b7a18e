//! The seam between tokenization and parsing.
//!
//! A [`TokenSource`] hands out tokens one at a time. The parser never talks to a source directly: a source is drained
//! into a [`TokenBuffer`] first, and the parser borrows the buffer as a plain `&[Token]`.

use std::ops::Deref;

use crate::diagnostics::LexError;
use crate::lexer::Token;

/// Pull-based producer of tokens.
///
/// `None` means the source is exhausted. An `Err` item reports a lexical failure; sources are expected to keep
/// producing tokens after an error so that all failures can be reported together.
pub trait TokenSource {
    fn next_token(&mut self) -> Option<Result<Token, LexError>>;
}

/// A fully materialized, ordered token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    /// Drain `source` to completion.
    ///
    /// ## Errors
    /// Returns every lexical error the source reported, in order, if there was at least one.
    pub fn materialize<S: TokenSource>(mut source: S) -> Result<Self, Vec<LexError>> {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        while let Some(item) = source.next_token() {
            match item {
                Ok(token) => tokens.push(token),
                Err(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            Ok(Self { tokens })
        } else {
            Err(errors)
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl Deref for TokenBuffer {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<Token> for TokenBuffer {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenBuffer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
