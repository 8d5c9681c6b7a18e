//! Shareable metadata for `scriptcheck_core::lang` registries.
//!
//! Every registry (keywords, literal words, operators, punctuation) reuses the small metadata types defined here.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules lives in the parser.

/// Identify the checker version a vocabulary item has been recognized since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use scriptcheck_core::lang::registry::Since;
///
/// let since = Since(0, 1);
/// assert_eq!(since.to_string(), "0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Since(pub u8, pub u8);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - `Reserved` marks spellings the scanner classifies but the grammar has no production for yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Reserved,
}

/// A small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use scriptcheck_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "while (x) { x; }",
///     note: Some("Minimal loop."),
/// };
/// assert!(ex.code.starts_with("while"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}
