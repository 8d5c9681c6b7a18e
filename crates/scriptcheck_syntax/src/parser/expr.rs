/// Expression parsing.
///
/// An expression is a single operand token. There are no operators, no grouping and no precedence.
impl<'a> Parser<'a> {
    /// Consume one identifier, number, string or boolean.
    ///
    /// Any other token is consumed as well, so the rule always makes progress unless the input is exhausted.
    fn parse_expression(&mut self) -> ParseResult {
        match self.current {
            Some(token) if token.kind.is_expression_operand() => {
                self.advance();
                Ok(())
            }
            Some(_) => {
                let violation = self.violation(ViolationKind::ExpectedExpression);
                self.advance();
                Err(violation)
            }
            None => Err(self.violation(ViolationKind::ExpectedExpression)),
        }
    }
}
