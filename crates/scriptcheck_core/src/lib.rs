//! Canonical language vocabulary for the scriptcheck syntax checker.
//!
//! This crate is intentionally small and dependency-free. It holds the reserved words, literal words, operators and
//! punctuation of the scripting language as const registries, so the scanner, the parser, diagnostics and generated
//! docs all agree on the same spellings.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no token or parser types.
//! - Syntax rules live in `scriptcheck_syntax`; this crate only answers “what is this spelling?”.

pub mod lang;
