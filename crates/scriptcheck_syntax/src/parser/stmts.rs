/// Statement parsing methods.
///
/// This chunk contains the program loop, the statement dispatcher, blocks and the `if`/`while` control-flow
/// statements.
///
/// ## Notes
/// - `parse_statement` is the recovery point: every violation a production gives up with is recorded there, and the
///   next statement starts at whatever token is current.
/// - Every statement consumes at least one token, which is what makes the program and block loops terminate.
impl<'a> Parser<'a> {
    // ========================================================================
    // Program
    // ========================================================================

    /// Parse statements until the tokens run out or an `EndOfInput` token is reached.
    pub fn parse_program(&mut self) {
        while self.current.is_some() {
            self.parse_statement();
        }
    }

    /// Parse one statement starting at the current token. A no-op at end of input.
    pub fn parse_statement(&mut self) {
        let Some(token) = self.current else {
            return;
        };

        let result = match token.kind {
            TokenKind::Keyword => match token.keyword_id() {
                Some(KeywordId::Function) => self.parse_function_declaration(),
                Some(KeywordId::Var | KeywordId::Let | KeywordId::Const) => self.parse_variable_declaration(),
                Some(KeywordId::If) => self.parse_if_statement(),
                Some(KeywordId::While) => self.parse_while_statement(),
                _ => {
                    self.report(ViolationKind::UnexpectedKeyword);
                    self.advance();
                    Ok(())
                }
            },
            _ => self.parse_expression_statement(),
        };
        self.recover(result);
    }

    /// `EXPR TERMINATOR`
    fn parse_expression_statement(&mut self) -> ParseResult {
        let expression = self.parse_expression();
        self.recover(expression);

        if self.match_terminator() {
            Ok(())
        } else {
            Err(self.violation(ViolationKind::ExpectedSemicolon))
        }
    }

    // ========================================================================
    // Blocks
    // ========================================================================

    /// `{ STATEMENT* }`
    ///
    /// A missing `{` gives up before the body. Running out of tokens ends the body; the missing `}` is then reported.
    fn parse_block(&mut self) -> ParseResult {
        self.expect_punct(PunctuationId::LBrace, ViolationKind::ExpectedOpenBrace)?;

        while self.current.is_some() && !self.check_punct(PunctuationId::RBrace) {
            self.parse_statement();
        }

        self.expect_punct(PunctuationId::RBrace, ViolationKind::ExpectedCloseBrace)
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    /// `if ( EXPR ) BLOCK (else (IF | BLOCK))?`
    ///
    /// ## Notes
    /// - An `else if` chain recurses once per link, so call depth grows with the chain length (and with block
    ///   nesting). There is no depth limit.
    /// - A malformed body is recorded and the `else` clause is still looked for.
    fn parse_if_statement(&mut self) -> ParseResult {
        self.expect_keyword(KeywordId::If, ViolationKind::ExpectedIfKeyword)?;
        self.parse_condition()?;

        let body = self.parse_block();
        self.recover(body);

        if self.match_keyword(KeywordId::Else) {
            if self.check_keyword(KeywordId::If) {
                return self.parse_if_statement();
            }
            return self.parse_block();
        }
        Ok(())
    }

    /// `while ( EXPR ) BLOCK`
    fn parse_while_statement(&mut self) -> ParseResult {
        self.expect_keyword(KeywordId::While, ViolationKind::ExpectedWhileKeyword)?;
        self.parse_condition()?;
        self.parse_block()
    }

    /// `( EXPR )` shared by `if` and `while`. A bad expression is recorded; missing parentheses give up.
    fn parse_condition(&mut self) -> ParseResult {
        self.expect_punct(PunctuationId::LParen, ViolationKind::ExpectedOpenParen)?;
        let condition = self.parse_expression();
        self.recover(condition);
        self.expect_punct(PunctuationId::RParen, ViolationKind::ExpectedCloseParen)
    }
}
