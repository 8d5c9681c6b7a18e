#![forbid(unsafe_code)]
//! scriptcheck: a syntax checker for a small JavaScript-like scripting language
//!
//! The checker scans a script into tokens, walks them with a recursive-descent parser and reports every syntax error
//! it finds instead of stopping at the first. This crate is the command-line front-end; the scanner and parser live
//! in `scriptcheck_syntax`, the vocabulary registries in `scriptcheck_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod check;
pub mod cli;
pub mod version;

pub use check::{CheckOptions, ReportFormat, check_source};
pub use scriptcheck_syntax::{lexer, parser};
