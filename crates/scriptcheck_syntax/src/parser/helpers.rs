/// Cursor primitives and violation bookkeeping.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching by kind (`match_kind`) and by spelling (keywords, operators, punctuation)
/// - Building, positioning and recording violations (`violation`, `record`, `recover`)
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance and onboarding.
impl<'a> Parser<'a> {
    // ========================================================================
    // Cursor
    // ========================================================================

    /// Return the token at the cursor without consuming it.
    ///
    /// `None` past the end of the slice and on an explicit `EndOfInput` token.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor).filter(|t| !t.is_end_of_input())
    }

    /// Move past the current token. A no-op at end of input.
    fn advance(&mut self) {
        if self.current.is_some() {
            self.cursor += 1;
            self.current = self.peek();
        }
    }

    /// If the current token has kind `kind`, consume it and return `true`.
    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.current.is_some_and(|t| t.kind == kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.current.is_some_and(|t| t.is_keyword(id))
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.current.is_some_and(|t| t.is_punctuation(id))
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.current.is_some_and(|t| t.is_operator(id))
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a statement terminator according to the configured [`TerminatorPolicy`].
    fn match_terminator(&mut self) -> bool {
        match self.config.terminator {
            TerminatorPolicy::AnyPunctuation => self.match_kind(TokenKind::Punctuation),
            TerminatorPolicy::SemicolonOnly => self.match_punct(PunctuationId::Semicolon),
        }
    }

    // ========================================================================
    // Violations
    // ========================================================================

    /// Where a violation detected right now is reported.
    ///
    /// The token at the cursor, including an explicit `EndOfInput` token. Past the end of the slice, the last token.
    /// For an empty slice, the start of the file.
    fn diagnostic_position(&self) -> Position {
        self.tokens
            .get(self.cursor)
            .or_else(|| self.tokens.last())
            .map_or(Position::START, Token::position)
    }

    /// Build a violation at the current position without recording it.
    fn violation(&self, kind: ViolationKind) -> SyntaxViolation {
        SyntaxViolation::new(kind, self.diagnostic_position())
    }

    /// Count and keep a violation.
    fn record(&mut self, violation: SyntaxViolation) {
        tracing::debug!(
            message = %violation.kind,
            line = violation.position.line,
            column = violation.position.column,
            "syntax violation"
        );
        self.error_count += 1;
        self.violations.push(violation);
    }

    fn report(&mut self, kind: ViolationKind) {
        let violation = self.violation(kind);
        self.record(violation);
    }

    /// Record the violation of an abandoned construct, if any, so parsing can carry on.
    fn recover(&mut self, result: ParseResult) {
        if let Err(violation) = result {
            self.record(violation);
        }
    }

    // ========================================================================
    // Expectations
    // ========================================================================

    fn expect_keyword(&mut self, id: KeywordId, kind: ViolationKind) -> ParseResult {
        if self.match_keyword(id) {
            Ok(())
        } else {
            Err(self.violation(kind))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, kind: ViolationKind) -> ParseResult {
        if self.match_punct(id) {
            Ok(())
        } else {
            Err(self.violation(kind))
        }
    }

    fn expect_identifier(&mut self, kind: ViolationKind) -> ParseResult {
        if self.match_kind(TokenKind::Identifier) {
            Ok(())
        } else {
            Err(self.violation(kind))
        }
    }
}

/// Outcome of one production: `Err` carries the violation that made it give up, not yet recorded.
type ParseResult = Result<(), SyntaxViolation>;
