/// Check a token sequence with the default configuration.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token sequence, typically produced by `scriptcheck_syntax::lexer`.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_program(tokens: &[Token]) -> ParseOutcome {
    run(Parser::new(tokens))
}

#[tracing::instrument(skip_all, fields(token_count = tokens.len(), terminator = ?config.terminator))]
pub fn parse_program_with_config(tokens: &[Token], config: &ParserConfig) -> ParseOutcome {
    run(Parser::with_config(tokens, *config))
}

fn run(mut parser: Parser<'_>) -> ParseOutcome {
    parser.parse_program();
    let outcome = parser.into_outcome();
    tracing::debug!(
        error_count = outcome.error_count,
        consumed = outcome.consumed,
        "parse finished"
    );
    outcome
}
