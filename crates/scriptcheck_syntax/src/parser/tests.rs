#[cfg(test)]
/// Parser unit tests.
///
/// These tests cover each production, the recovery behavior after malformed constructs (including the cascades it
/// is known to produce), and the cursor/end-of-input rules.
mod tests {
    use super::*;
    use crate::config::LexerConfig;
    use crate::lexer;

    fn check(source: &str) -> ParseOutcome {
        let tokens = lexer::lex(source).expect("test source should lex");
        parse_program(&tokens)
    }

    fn check_strict(source: &str) -> ParseOutcome {
        let tokens = lexer::lex(source).expect("test source should lex");
        let config = ParserConfig::new().with_terminator(TerminatorPolicy::SemicolonOnly);
        parse_program_with_config(&tokens, &config)
    }

    fn messages(outcome: &ParseOutcome) -> Vec<String> {
        outcome.violations.iter().map(SyntaxViolation::message).collect()
    }

    /// Hand-built tokens on line 1, one column apart, with no trailing `EndOfInput`.
    fn toks(items: &[(TokenKind, &str)]) -> Vec<Token> {
        items
            .iter()
            .enumerate()
            .map(|(i, (kind, text))| Token::new(*kind, *text, 1, i + 1))
            .collect()
    }

    // ========================================================================
    // Well-formed programs
    // ========================================================================

    #[test]
    fn test_nested_control_flow_is_clean() {
        let source = "let x = 1 ; if ( x ) { while ( x ) { x ; } } else { x ; }";
        let tokens = lexer::lex(source).unwrap();
        let outcome = parse_program(&tokens);
        assert!(outcome.is_clean(), "unexpected violations: {:?}", messages(&outcome));
        // Everything but the trailing EndOfInput token is consumed.
        assert_eq!(outcome.consumed, tokens.len() - 1);
        assert_eq!(outcome.token_count, tokens.len());
    }

    #[test]
    fn test_well_formed_without_eof_token_consumes_everything() {
        use TokenKind::*;
        let tokens = toks(&[
            (Keyword, "let"),
            (Identifier, "x"),
            (Operator, "="),
            (Number, "1"),
            (Punctuation, ";"),
            (Keyword, "while"),
            (Punctuation, "("),
            (Boolean, "true"),
            (Punctuation, ")"),
            (Punctuation, "{"),
            (String, "'s'"),
            (Punctuation, ";"),
            (Punctuation, "}"),
        ]);
        let outcome = parse_program(&tokens);
        assert!(outcome.is_clean());
        assert_eq!(outcome.consumed, tokens.len());
    }

    #[test]
    fn test_else_if_chain_is_clean() {
        assert!(check("if ( x ) { x ; } else if ( x ) { x ; }").is_clean());
        assert!(check("if (a) { } else if (b) { } else if (c) { } else { d; }").is_clean());
    }

    #[test]
    fn test_long_else_if_chain() {
        let mut source = String::new();
        for _ in 0..200 {
            source.push_str("if (x) { } else ");
        }
        source.push_str("{ }");
        assert!(check(&source).is_clean());
    }

    #[test]
    fn test_function_declarations() {
        assert!(check("function add(a, b) { a; }").is_clean());
        assert!(check("function noop() { }").is_clean());
        assert!(check("function f() { function g(x) { x; } }").is_clean());
    }

    #[test]
    fn test_parameter_list_is_loose_about_commas() {
        assert!(check("function f(a b, c,) { }").is_clean());
    }

    #[test]
    fn test_variable_declarations() {
        assert!(check("var a; let b = 'two'; const c = true;").is_clean());
    }

    #[test]
    fn test_empty_input() {
        let outcome = parse_program(&[]);
        assert!(outcome.is_clean());
        assert_eq!(outcome.consumed, 0);

        let outcome = check("");
        assert!(outcome.is_clean());
        assert_eq!(outcome.consumed, 0);
        assert_eq!(outcome.token_count, 1);
    }

    // ========================================================================
    // Single violations
    // ========================================================================

    #[test]
    fn test_missing_semicolon() {
        let outcome = check("let x = 1");
        assert_eq!(messages(&outcome), vec!["Expected semicolon"]);
        // Reported at the EndOfInput token, one past the `1`.
        assert_eq!(outcome.violations[0].position, Position::new(1, 10));
    }

    #[test]
    fn test_missing_semicolon_without_eof_token_uses_last_token() {
        use TokenKind::*;
        let tokens = toks(&[(Keyword, "let"), (Identifier, "x"), (Operator, "="), (Number, "1")]);
        let outcome = parse_program(&tokens);
        assert_eq!(messages(&outcome), vec!["Expected semicolon"]);
        assert_eq!(outcome.violations[0].position, Position::new(1, 4));
    }

    #[test]
    fn test_missing_semicolon_between_declarations() {
        let outcome = check("let x = 1 let y = 2;");
        assert_eq!(messages(&outcome), vec!["Expected semicolon"]);
        assert_eq!(outcome.violations[0].position, Position::new(1, 11));
    }

    #[test]
    fn test_unterminated_block_returns() {
        let outcome = check("if ( x ) { x ;");
        assert_eq!(messages(&outcome), vec!["Expected }"]);
    }

    #[test]
    fn test_unknown_keyword_is_consumed() {
        let tokens = toks(&[(TokenKind::Keyword, "return")]);
        let mut parser = Parser::new(&tokens);
        parser.parse_program();
        assert_eq!(parser.error_count(), 1);
        assert_eq!(parser.cursor(), 1);
        assert_eq!(parser.violations()[0].kind, ViolationKind::UnexpectedKeyword);
    }

    #[test]
    fn test_truncated_parameter_list() {
        let outcome = check("function f(a");
        assert_eq!(messages(&outcome), vec!["Expected ')'"]);

        use TokenKind::*;
        let tokens = toks(&[
            (Keyword, "function"),
            (Identifier, "f"),
            (Punctuation, "("),
            (Identifier, "a"),
            (Punctuation, ","),
        ]);
        let outcome = parse_program(&tokens);
        assert_eq!(messages(&outcome), vec!["Expected ')'"]);
        assert_eq!(outcome.violations[0].position, Position::new(1, 5));
    }

    #[test]
    fn test_missing_else_block() {
        let outcome = check("if (x) { x; } else y;");
        assert_eq!(messages(&outcome), vec!["Expected {"]);
    }

    #[test]
    fn test_bad_if_body_still_takes_else() {
        let outcome = check("if (x) else { z; }");
        assert_eq!(messages(&outcome), vec!["Expected {"]);
        assert_eq!(outcome.consumed, outcome.token_count - 1);
    }

    #[test]
    fn test_bad_condition_is_recorded_and_parsing_continues() {
        let outcome = check("if (;) { x; }");
        assert_eq!(messages(&outcome), vec!["Expected expression"]);
    }

    #[test]
    fn test_null_is_not_an_expression() {
        let outcome = check("let x = null;");
        assert_eq!(messages(&outcome), vec!["Expected expression"]);
        assert_eq!(outcome.violations[0].position, Position::new(1, 9));
    }

    #[test]
    fn test_missing_function_body() {
        let outcome = check("function f() x");
        assert_eq!(messages(&outcome), vec!["Expected {", "Expected semicolon"]);
    }

    // ========================================================================
    // Recovery cascades
    // ========================================================================

    #[test]
    fn test_missing_function_name_cascades() {
        let outcome = check("function (a) {}");
        assert_eq!(
            messages(&outcome),
            vec![
                "Expected function name",
                "Expected expression",
                "Expected semicolon",
                "Expected expression",
            ]
        );
        assert_eq!(outcome.error_count, outcome.violations.len());
    }

    #[test]
    fn test_bad_parameter_abandons_declaration() {
        let outcome = check("function f(1) {}");
        assert_eq!(messages(&outcome), vec!["Expected parameter name", "Expected expression"]);
    }

    #[test]
    fn test_missing_variable_name() {
        let outcome = check("var = 1;");
        assert_eq!(
            messages(&outcome),
            vec!["Expected variable name", "Expected expression", "Expected semicolon"]
        );
    }

    #[test]
    fn test_missing_initializer_swallows_terminator() {
        let outcome = check("let x = ;");
        assert_eq!(messages(&outcome), vec!["Expected expression", "Expected semicolon"]);
    }

    #[test]
    fn test_missing_open_paren() {
        let outcome = check("if x) { x; }");
        assert_eq!(outcome.error_count, 5);
        assert_eq!(outcome.violations[0].kind, ViolationKind::ExpectedOpenParen);
        assert_eq!(outcome.violations[0].position, Position::new(1, 4));

        let outcome = check("while x");
        assert_eq!(messages(&outcome), vec!["Expected '('", "Expected semicolon"]);
    }

    #[test]
    fn test_any_punctuation_terminates_by_default() {
        // The `}` after `;` is taken as the terminator of the broken statement.
        let outcome = check("while (x) { return; }");
        assert_eq!(
            messages(&outcome),
            vec!["Unexpected keyword", "Expected expression", "Expected }"]
        );
    }

    #[test]
    fn test_semicolon_only_terminator() {
        let outcome = check_strict("while (x) { return; }");
        assert_eq!(
            messages(&outcome),
            vec!["Unexpected keyword", "Expected expression", "Expected semicolon"]
        );

        assert!(check("x )").is_clean());
        let outcome = check_strict("x )");
        assert_eq!(outcome.error_count, 3);
        assert_eq!(outcome.violations[0].kind, ViolationKind::ExpectedSemicolon);
        assert_eq!(outcome.violations[0].position, Position::new(1, 3));
    }

    #[test]
    fn test_kept_comment_tokens_are_expression_errors() {
        let config = LexerConfig::new().with_keep_comments(true);
        let tokens = lexer::lex_with_config("// note\nx;", &config).unwrap();
        let outcome = parse_program(&tokens);
        // The comment is checked as an expression statement, then `x` fails as its terminator
        assert_eq!(outcome.error_count, 2);
        assert_eq!(outcome.violations[0].kind, ViolationKind::ExpectedExpression);
        assert_eq!(outcome.violations[0].position, Position::new(1, 1));
        assert_eq!(outcome.violations[1].kind, ViolationKind::ExpectedSemicolon);
        assert_eq!(outcome.violations[1].position, Position::new(2, 1));

        let skipped = lexer::lex("// note\nx;").unwrap();
        assert!(parse_program(&skipped).is_clean());
    }

    // ========================================================================
    // Cursor and end-of-input
    // ========================================================================

    #[test]
    fn test_cursor_stops_at_eof_token() {
        use TokenKind::*;
        let tokens = toks(&[(Identifier, "x"), (EndOfInput, ""), (Identifier, "y"), (Punctuation, ";")]);
        let outcome = parse_program(&tokens);
        assert_eq!(outcome.consumed, 1);
        assert_eq!(messages(&outcome), vec!["Expected semicolon"]);
        assert_eq!(outcome.violations[0].position, Position::new(1, 2));
    }

    #[test]
    fn test_advance_is_a_noop_at_end() {
        let tokens = toks(&[(TokenKind::Identifier, "x")]);
        let mut parser = Parser::new(&tokens);
        parser.advance();
        assert_eq!(parser.cursor(), 1);
        assert!(parser.current().is_none());
        parser.advance();
        assert_eq!(parser.cursor(), 1);
    }

    #[test]
    fn test_match_kind_leaves_state_on_mismatch() {
        let tokens = toks(&[(TokenKind::Number, "1")]);
        let mut parser = Parser::new(&tokens);
        assert!(!parser.match_kind(TokenKind::Identifier));
        assert_eq!(parser.cursor(), 0);
        assert!(parser.match_kind(TokenKind::Number));
        assert_eq!(parser.cursor(), 1);
    }

    #[test]
    fn test_expression_always_makes_progress() {
        use TokenKind::*;
        for kind in [Keyword, Identifier, String, Number, Operator, Punctuation, Boolean, Null, Undefined, Comment] {
            let tokens = toks(&[(kind, "t")]);
            let mut parser = Parser::new(&tokens);
            let result = parser.parse_expression();
            assert_eq!(parser.cursor(), 1, "no progress on {kind:?}");
            assert_eq!(result.is_ok(), kind.is_expression_operand());
        }
    }

    #[test]
    fn test_expression_at_end_of_empty_input() {
        let mut parser = Parser::new(&[]);
        let err = parser.parse_expression().unwrap_err();
        assert_eq!(err.position, Position::START);
        assert_eq!(parser.cursor(), 0);
        // Not recorded until the caller decides to.
        assert_eq!(parser.error_count(), 0);
    }

    #[test]
    fn test_current_stays_in_sync_with_cursor() {
        let tokens = lexer::lex("function f(a) { if (a) { a; } else { b } } let q = 2 x").unwrap();
        let mut parser = Parser::new(&tokens);
        while parser.current().is_some() {
            let before = parser.cursor();
            parser.parse_statement();
            assert!(parser.cursor() > before);
            assert_eq!(parser.current(), parser.peek());
        }
    }

    #[test]
    fn test_statement_is_noop_at_end() {
        let tokens = lexer::lex("").unwrap();
        let mut parser = Parser::new(&tokens);
        parser.parse_statement();
        assert_eq!(parser.cursor(), 0);
        assert_eq!(parser.error_count(), 0);
    }
}
