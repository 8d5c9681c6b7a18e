/// Declaration parsing methods.
///
/// This chunk parses function declarations and `var`/`let`/`const` declarations.
///
/// ## Notes
/// - A malformed header abandons the whole declaration: the first failed step returns its violation and the
///   statement dispatcher records it. Whatever token is current then starts the next statement.
impl<'a> Parser<'a> {
    // ========================================================================
    // Functions
    // ========================================================================

    /// `function NAME ( PARAMS ) BLOCK`
    fn parse_function_declaration(&mut self) -> ParseResult {
        self.expect_keyword(KeywordId::Function, ViolationKind::ExpectedFunctionKeyword)?;
        self.expect_identifier(ViolationKind::ExpectedFunctionName)?;
        self.expect_punct(PunctuationId::LParen, ViolationKind::ExpectedOpenParen)?;
        self.parse_parameter_list()?;
        self.expect_punct(PunctuationId::RParen, ViolationKind::ExpectedCloseParen)?;
        self.parse_block()
    }

    /// Parameter names up to (not including) the closing `)`.
    ///
    /// Commas between names are optional and a trailing comma is accepted. Running out of tokens ends the list; the
    /// caller then reports the missing `)`.
    fn parse_parameter_list(&mut self) -> ParseResult {
        while self.current.is_some() && !self.check_punct(PunctuationId::RParen) {
            self.expect_identifier(ViolationKind::ExpectedParameterName)?;
            self.match_punct(PunctuationId::Comma);
        }
        Ok(())
    }

    // ========================================================================
    // Variables
    // ========================================================================

    /// `(var | let | const) NAME (= EXPR)? TERMINATOR`
    fn parse_variable_declaration(&mut self) -> ParseResult {
        let is_declaration = self
            .current
            .and_then(Token::keyword_id)
            .is_some_and(keywords::is_declaration_keyword);
        if !is_declaration {
            return Err(self.violation(ViolationKind::ExpectedDeclarationKeyword));
        }
        self.advance();

        self.expect_identifier(ViolationKind::ExpectedVariableName)?;

        if self.match_op(OperatorId::Assign) {
            let initializer = self.parse_expression();
            self.recover(initializer);
        }

        if self.match_terminator() {
            Ok(())
        } else {
            Err(self.violation(ViolationKind::ExpectedSemicolon))
        }
    }
}
