//! Recursive-descent syntax checker
//!
//! Walks a token sequence against the scriptcheck grammar and collects every [`SyntaxViolation`] it finds. No syntax
//! tree is produced; the result is the list of violations and how far the cursor got.
//!
//! ```text
//! program    := statement*
//! statement  := function | var_decl | if_stmt | while_stmt | expression TERMINATOR
//! function   := 'function' IDENT '(' (IDENT ','?)* ')' block
//! var_decl   := ('var' | 'let' | 'const') IDENT ('=' expression)? TERMINATOR
//! if_stmt    := 'if' '(' expression ')' block ('else' (if_stmt | block))?
//! while_stmt := 'while' '(' expression ')' block
//! block      := '{' statement* '}'
//! expression := IDENT | NUMBER | STRING | BOOLEAN
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use scriptcheck_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("let x = 1").unwrap();
//! let outcome = parser::parse_program(&tokens);
//! assert_eq!(outcome.error_count, 1);
//! assert_eq!(outcome.violations[0].to_string(), "Syntax Error at line 1, column 10: Expected semicolon");
//! ```

use crate::config::{ParserConfig, TerminatorPolicy};
use crate::diagnostics::{SyntaxViolation, ViolationKind};
use crate::lexer::{Position, Token, TokenKind};
use scriptcheck_core::lang::keywords::{self, KeywordId};
use scriptcheck_core::lang::operators::OperatorId;
use scriptcheck_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
