//! Reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording canonical spellings, categories, usage hints and examples.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `true`, `false`, `null` and `undefined` are *not* keywords; they are literal words, see
//!   [`crate::lang::literals`].
//! - Several keywords (`return`, `for`, `switch`, ...) are reserved without a grammar production. The parser reports
//!   them as unexpected keywords at statement position.
//!
//! ## Examples
//! ```rust
//! use scriptcheck_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("function"), Some(KeywordId::Function));
//! assert_eq!(keywords::as_str(KeywordId::Const), "const");
//! assert!(keywords::is_declaration_keyword(KeywordId::Let));
//! ```

use super::registry::{Example, Since, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Var,
    Let,
    Const,
    Function,

    // Control flow
    If,
    Else,
    While,
    For,
    Do,
    Switch,
    Case,
    Default,

    // Jumps
    Return,
    Break,
    Continue,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    ControlFlow,
    Jump,
}

/// Where a keyword may appear in the recognized grammar.
///
/// ## Notes
/// - `StatementStart` keywords select a production in the statement dispatcher.
/// - `Clause` keywords only continue a construct that is already open (`else`).
/// - `Unsupported` keywords have no production; at statement position they are a syntax violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordUsage {
    StatementStart,
    Clause,
    Unsupported,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub usage: KeywordUsage,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    statement(
        KeywordId::Var,
        "var",
        KeywordCategory::Declaration,
        &[Example {
            code: "var count = 0;",
            note: None,
        }],
    ),
    statement(
        KeywordId::Let,
        "let",
        KeywordCategory::Declaration,
        &[Example {
            code: "let name;",
            note: Some("The initializer is optional."),
        }],
    ),
    statement(
        KeywordId::Const,
        "const",
        KeywordCategory::Declaration,
        &[Example {
            code: "const limit = 10;",
            note: None,
        }],
    ),
    statement(
        KeywordId::Function,
        "function",
        KeywordCategory::Declaration,
        &[Example {
            code: "function add(a, b) { a; }",
            note: None,
        }],
    ),
    // Control flow
    statement(
        KeywordId::If,
        "if",
        KeywordCategory::ControlFlow,
        &[Example {
            code: "if (ready) { go; } else if (waiting) { wait; } else { stop; }",
            note: Some("`else if` chains nest to any depth."),
        }],
    ),
    KeywordInfo {
        id: KeywordId::Else,
        canonical: "else",
        category: KeywordCategory::ControlFlow,
        usage: KeywordUsage::Clause,
        since: Since(0, 1),
        stability: Stability::Stable,
        examples: &[],
    },
    statement(
        KeywordId::While,
        "while",
        KeywordCategory::ControlFlow,
        &[Example {
            code: "while (running) { tick; }",
            note: None,
        }],
    ),
    reserved(KeywordId::For, "for", KeywordCategory::ControlFlow),
    reserved(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    reserved(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
    reserved(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    reserved(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    // Jumps
    reserved(KeywordId::Return, "return", KeywordCategory::Jump),
    reserved(KeywordId::Break, "break", KeywordCategory::Jump),
    reserved(KeywordId::Continue, "continue", KeywordCategory::Jump),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return `true` for the binding keywords `var`, `let` and `const`.
pub fn is_declaration_keyword(id: KeywordId) -> bool {
    matches!(id, KeywordId::Var | KeywordId::Let | KeywordId::Const)
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is a reserved word.
/// - `None` otherwise (including the literal words `true`/`false`/`null`/`undefined`).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn statement(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    examples: &'static [Example],
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        usage: KeywordUsage::StatementStart,
        since: Since(0, 1),
        stability: Stability::Stable,
        examples,
    }
}

const fn reserved(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        usage: KeywordUsage::Unsupported,
        since: Since(0, 1),
        stability: Stability::Reserved,
        examples: &[],
    }
}
