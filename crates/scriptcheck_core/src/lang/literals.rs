//! Literal-word vocabulary.
//!
//! Words that look like identifiers but denote literal values. The scanner gives each of them its own token kind
//! (boolean, null, undefined) instead of `Keyword` or `Identifier`.
//!
//! ## Examples
//! ```rust
//! use scriptcheck_core::lang::literals::{self, LiteralWordId, LiteralClass};
//!
//! assert_eq!(literals::from_str("false"), Some(LiteralWordId::False));
//! assert_eq!(literals::class(LiteralWordId::Undefined), LiteralClass::Undefined);
//! ```

use super::registry::Since;

/// Stable identifier for literal words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralWordId {
    True,
    False,
    Null,
    Undefined,
}

/// Token class a literal word is scanned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralClass {
    Boolean,
    Null,
    Undefined,
}

/// Metadata for a literal word.
#[derive(Debug, Clone, Copy)]
pub struct LiteralWordInfo {
    pub id: LiteralWordId,
    pub canonical: &'static str,
    pub class: LiteralClass,
    pub since: Since,
}

/// Registry of literal words.
pub const LITERAL_WORDS: &[LiteralWordInfo] = &[
    word(LiteralWordId::True, "true", LiteralClass::Boolean),
    word(LiteralWordId::False, "false", LiteralClass::Boolean),
    word(LiteralWordId::Null, "null", LiteralClass::Null),
    word(LiteralWordId::Undefined, "undefined", LiteralClass::Undefined),
];

/// Canonical spelling.
pub fn as_str(id: LiteralWordId) -> &'static str {
    info_for(id).canonical
}

/// Token class for the word.
pub fn class(id: LiteralWordId) -> LiteralClass {
    info_for(id).class
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: LiteralWordId) -> &'static LiteralWordInfo {
    LITERAL_WORDS.iter().find(|w| w.id == id).expect("literal word info missing")
}

/// Lookup by spelling (case-sensitive).
pub fn from_str(s: &str) -> Option<LiteralWordId> {
    LITERAL_WORDS.iter().find(|w| w.canonical == s).map(|w| w.id)
}

const fn word(id: LiteralWordId, canonical: &'static str, class: LiteralClass) -> LiteralWordInfo {
    LiteralWordInfo {
        id,
        canonical,
        class,
        since: Since(0, 1),
    }
}
