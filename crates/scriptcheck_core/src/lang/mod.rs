//! Language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, literal words, operators and
//! punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up spellings/metadata via registry
//! tables instead of scattering string literals across the scanner and parser.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The scanner/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics, docs).
//!
//! ## Examples
//! ```rust
//! use scriptcheck_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! ```
//!
//! ## See also
//! - `cargo run -p scriptcheck_core --bin generate_lang_reference` to generate a Markdown reference page.

pub mod keywords;
pub mod literals;
pub mod operators;
pub mod punctuation;
pub mod registry;
