//! Scanner and parser configuration
//!
//! Defaults reproduce the classic checker behavior: comments are dropped, an explicit end-of-input token is appended,
//! and any punctuation token terminates a statement.

/// Scanner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Emit `Comment` tokens instead of skipping comments
    pub keep_comments: bool,
    /// Append an `EndOfInput` token after the last real token
    pub emit_eof: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keep_comments: false,
            emit_eof: true,
        }
    }
}

impl LexerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep or drop comment tokens
    pub fn with_keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    /// Append or omit the trailing end-of-input token
    pub fn with_emit_eof(mut self, emit: bool) -> Self {
        self.emit_eof = emit;
        self
    }
}

/// Which tokens end an expression statement or a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminatorPolicy {
    /// Any punctuation token is accepted as the terminator (`x )` is a complete statement).
    #[default]
    AnyPunctuation,
    /// Only `;` is accepted.
    SemicolonOnly,
}

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    pub terminator: TerminatorPolicy,
}

impl ParserConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the statement terminator policy
    pub fn with_terminator(mut self, terminator: TerminatorPolicy) -> Self {
        self.terminator = terminator;
        self
    }
}
