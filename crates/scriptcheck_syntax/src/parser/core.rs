/// Parser core types.
///
/// This chunk defines the [`Parser`] state, its constructors and accessors, and the [`ParseOutcome`] a finished run
/// is turned into.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Result of checking one token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOutcome {
    /// Every violation, in detection order.
    pub violations: Vec<SyntaxViolation>,
    /// Always `violations.len()`.
    pub error_count: usize,
    /// Final cursor position.
    pub consumed: usize,
    /// Length of the token sequence that was checked.
    pub token_count: usize,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }
}

/// Parser state.
///
/// ## Notes
/// - The cursor only moves forward. An explicit `EndOfInput` token and the end of the slice are the same place: the
///   cursor stops on the former and never passes it.
/// - `current` caches the token at the cursor (or `None`) and is refreshed by every cursor move.
/// - Productions are split across the `parser/*.rs` chunks.
pub struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    current: Option<&'a Token>,
    error_count: usize,
    violations: Vec<SyntaxViolation>,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned at token 0 with the default configuration.
    ///
    /// ## Parameters
    /// - `tokens`: the full token sequence; it must outlive the parser.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: &'a [Token], config: ParserConfig) -> Self {
        let mut parser = Self {
            tokens,
            cursor: 0,
            current: None,
            error_count: 0,
            violations: Vec::new(),
            config,
        };
        parser.current = parser.peek();
        parser
    }

    /// Index of the next unconsumed token.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of violations recorded so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// The cached current token; `None` at end of input.
    pub fn current(&self) -> Option<&'a Token> {
        self.current
    }

    pub fn violations(&self) -> &[SyntaxViolation] {
        &self.violations
    }

    pub fn into_outcome(self) -> ParseOutcome {
        ParseOutcome {
            error_count: self.error_count,
            consumed: self.cursor,
            token_count: self.tokens.len(),
            violations: self.violations,
        }
    }
}
