//! Punctuation vocabulary.
//!
//! Delimiters and separators used by the block, parameter-list and statement-terminator rules.
//!
//! ## Notes
//! - Every punctuation spelling is a single character.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use scriptcheck_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("{"), Some(PunctuationId::LBrace));
//! assert_eq!(punctuation::as_str(PunctuationId::Semicolon), ";");
//! ```

use super::registry::Since;

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,` and `;`.
    Separator,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semicolon,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub since: Since,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Resolve a single character to a punctuation identifier.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION
        .iter()
        .find(|p| p.canonical.chars().eq(std::iter::once(c)))
        .map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        since: Since(0, 1),
    }
}
