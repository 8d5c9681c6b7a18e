//! Syntax frontend for the scriptcheck language: token model, scanner, and the recursive-descent checker.
//!
//! The checker validates a token sequence against a small C/JavaScript-like grammar (declarations, `if`/`while`,
//! blocks, bare expressions) and reports every violation it finds instead of stopping at the first one.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: no AST is built, and there is no name resolution or evaluation.
//! - Tokenization sits behind the [`source::TokenSource`] seam. The parser only ever sees a fully materialized
//!   [`source::TokenBuffer`] and never shares state with the scanner.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `scriptcheck_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use scriptcheck_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("let x = 1;").unwrap();
//! let outcome = parser::parse_program(&tokens);
//! assert_eq!(outcome.error_count, 0);
//! ```

pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod token_helpers;

pub use config::{LexerConfig, ParserConfig, TerminatorPolicy};
pub use diagnostics::{LexError, SyntaxViolation, ViolationKind};
pub use lexer::{Position, Token, TokenKind};
pub use source::{TokenBuffer, TokenSource};
