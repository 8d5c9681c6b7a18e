//! Operator vocabulary.
//!
//! The grammar recognized by the checker has no operator expressions; the only operator it inspects is `=` in a
//! variable initializer. The scanner still classifies every operator spelling so malformed input is reported at the
//! parser level with a precise position instead of failing during scanning.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - The scanner uses longest match: two-character spellings win over their one-character prefixes.
//!
//! ## Examples
//! ```rust
//! use scriptcheck_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("=="), Some(OperatorId::EqEq));
//! assert_eq!(operators::as_str(OperatorId::Assign), "=");
//! assert_eq!(operators::MAX_SPELLING_LEN, 2);
//! ```

use super::registry::Since;

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Assignment
    Assign,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical / bitwise
    Bang,
    Amp,
    AmpAmp,
    Pipe,
    PipePipe,
    Caret,

    // Misc
    Question,
    Colon,
    Dot,
}

/// Broad grouping for documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Assignment,
    Comparison,
    Logical,
    Access,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    pub category: OperatorCategory,
    pub since: Since,
}

/// Longest operator spelling, in characters.
pub const MAX_SPELLING_LEN: usize = 2;

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Plus, "+", OperatorCategory::Arithmetic),
    op(OperatorId::Minus, "-", OperatorCategory::Arithmetic),
    op(OperatorId::Star, "*", OperatorCategory::Arithmetic),
    op(OperatorId::Slash, "/", OperatorCategory::Arithmetic),
    op(OperatorId::Percent, "%", OperatorCategory::Arithmetic),
    op(OperatorId::Assign, "=", OperatorCategory::Assignment),
    op(OperatorId::EqEq, "==", OperatorCategory::Comparison),
    op(OperatorId::NotEq, "!=", OperatorCategory::Comparison),
    op(OperatorId::Lt, "<", OperatorCategory::Comparison),
    op(OperatorId::LtEq, "<=", OperatorCategory::Comparison),
    op(OperatorId::Gt, ">", OperatorCategory::Comparison),
    op(OperatorId::GtEq, ">=", OperatorCategory::Comparison),
    op(OperatorId::Bang, "!", OperatorCategory::Logical),
    op(OperatorId::Amp, "&", OperatorCategory::Logical),
    op(OperatorId::AmpAmp, "&&", OperatorCategory::Logical),
    op(OperatorId::Pipe, "|", OperatorCategory::Logical),
    op(OperatorId::PipePipe, "||", OperatorCategory::Logical),
    op(OperatorId::Caret, "^", OperatorCategory::Logical),
    op(OperatorId::Question, "?", OperatorCategory::Logical),
    op(OperatorId::Colon, ":", OperatorCategory::Access),
    op(OperatorId::Dot, ".", OperatorCategory::Access),
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == spelling).map(|o| o.id)
}

/// Return `true` if `c` begins at least one operator spelling.
pub fn starts_operator(c: char) -> bool {
    OPERATORS.iter().any(|o| o.canonical.starts_with(c))
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, canonical: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical,
        category,
        since: Since(0, 1),
    }
}
