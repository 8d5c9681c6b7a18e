//! Report rendering for `scriptcheck check`
//!
//! Three output shapes share one [`ParseOutcome`]:
//! - plain: the classic one-line-per-violation format plus a summary line
//! - pretty: miette's graphical handler, with the source line and a caret label
//! - json: a single `serde_json` document
//!
//! Rendering is pure (strings in, strings out). Writing to stdout/stderr is left to `commands`.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use scriptcheck_syntax::parser::ParseOutcome;
use scriptcheck_syntax::{LexError, Position};
use serde_json::json;

/// `Parsing completed with <N> errors`
pub fn summary_line(outcome: &ParseOutcome) -> String {
    format!("Parsing completed with {} errors", outcome.error_count)
}

/// One `Syntax Error at line L, column C: message` line per violation, in detection order.
pub fn render_plain(outcome: &ParseOutcome) -> String {
    let mut out = String::new();
    for violation in &outcome.violations {
        out.push_str(&violation.to_string());
        out.push('\n');
    }
    out
}

pub fn render_json(file: &str, outcome: &ParseOutcome) -> serde_json::Value {
    let errors: Vec<serde_json::Value> = outcome
        .violations
        .iter()
        .map(|v| {
            json!({
                "line": v.position.line,
                "column": v.position.column,
                "message": v.message(),
                "code": v.kind.diagnostic_code(),
            })
        })
        .collect();

    json!({
        "file": file,
        "error_count": outcome.error_count,
        "errors": errors,
    })
}

/// Render every violation with miette's graphical handler.
///
/// ## Errors
/// Only fails if writing into the output string fails.
pub fn render_pretty(file: &str, source: &str, outcome: &ParseOutcome, color: bool) -> Result<String, fmt::Error> {
    let items = outcome.violations.iter().map(|v| (v, v.position, v.message()));
    render_graphical(file, source, items, color)
}

/// `<file>: <error>` per lexical error, newline separated.
pub fn render_lex_errors(file: &str, errors: &[LexError]) -> String {
    let lines: Vec<String> = errors.iter().map(|e| format!("{file}: {e}")).collect();
    lines.join("\n")
}

/// JSON document for a run stopped by lexical errors: `{"file", "lex_errors": [{"line", "column", "message", "code"}]}`.
///
/// No `error_count` key is emitted since no syntax check ran.
pub fn render_lex_errors_json(file: &str, errors: &[LexError]) -> serde_json::Value {
    let lex_errors: Vec<serde_json::Value> = errors
        .iter()
        .map(|e| {
            let position = e.position();
            json!({
                "line": position.line,
                "column": position.column,
                "message": e.to_string(),
                "code": Diagnostic::code(e).map(|c| c.to_string()),
            })
        })
        .collect();

    json!({
        "file": file,
        "lex_errors": lex_errors,
    })
}

pub fn render_lex_errors_pretty(
    file: &str,
    source: &str,
    errors: &[LexError],
    color: bool,
) -> Result<String, fmt::Error> {
    let items = errors.iter().map(|e| (e, e.position(), "here".to_string()));
    render_graphical(file, source, items, color)
}

fn render_graphical<'d, D: Diagnostic + 'd>(
    file: &str,
    source: &str,
    items: impl IntoIterator<Item = (&'d D, Position, String)>,
    color: bool,
) -> Result<String, fmt::Error> {
    let named = NamedSource::new(file, source.to_string());
    let handler = handler(color);
    let mut out = String::new();
    for (diagnostic, position, label) in items {
        let located = Located::new(diagnostic, &named, source, position, label);
        handler.render_report(&mut out, &located)?;
    }
    Ok(out)
}

fn handler(color: bool) -> GraphicalReportHandler {
    let theme = if color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    GraphicalReportHandler::new_themed(theme)
}

/// Byte offset of a 1-based line/column (columns count chars). Clamped to the end of the source.
pub fn byte_offset(source: &str, position: Position) -> usize {
    let mut line = 1;
    let mut column = 1;
    for (idx, ch) in source.char_indices() {
        if line == position.line && column == position.column {
            return idx;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    source.len()
}

// ============================================================================
// Source-attached diagnostics
// ============================================================================

/// Attaches source text and a single labelled span to a diagnostic that has neither.
#[derive(Debug)]
struct Located<'a, D> {
    inner: &'a D,
    source: &'a NamedSource<String>,
    span: SourceSpan,
    label: String,
}

impl<'a, D> Located<'a, D> {
    fn new(inner: &'a D, named: &'a NamedSource<String>, text: &str, position: Position, label: String) -> Self {
        let offset = byte_offset(text, position);
        let len = text[offset..]
            .chars()
            .next()
            .filter(|c| *c != '\n')
            .map_or(0, char::len_utf8);
        Self {
            inner,
            source: named,
            span: (offset, len).into(),
            label,
        }
    }
}

impl<D: fmt::Display> fmt::Display for Located<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<D: std::error::Error> std::error::Error for Located<'_, D> {}

impl<D: Diagnostic> Diagnostic for Located<'_, D> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.inner.code()
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.inner.help()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(self.source)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            self.span,
        ))))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::check::{CheckOptions, check_source};

    fn outcome(source: &str) -> ParseOutcome {
        check_source(source, &CheckOptions::default()).unwrap()
    }

    #[test]
    fn test_byte_offset() {
        let source = "let a;\nlet é = 1;";
        assert_eq!(byte_offset(source, Position::new(1, 1)), 0);
        assert_eq!(byte_offset(source, Position::new(2, 1)), 7);
        assert_eq!(byte_offset(source, Position::new(2, 5)), 11);
        assert_eq!(byte_offset(source, Position::new(2, 6)), 13);
        assert_eq!(byte_offset(source, Position::new(9, 9)), source.len());
    }

    #[test]
    fn test_plain_report() {
        let outcome = outcome("let x = 1\nreturn;");
        insta::assert_snapshot!(render_plain(&outcome), @r"
        Syntax Error at line 2, column 1: Expected semicolon
        Syntax Error at line 2, column 1: Unexpected keyword
        Syntax Error at line 2, column 7: Expected expression
        Syntax Error at line 2, column 8: Expected semicolon
        ");
        assert_eq!(summary_line(&outcome), "Parsing completed with 4 errors");
    }

    #[test]
    fn test_clean_plain_report() {
        let outcome = outcome("let x = 1;");
        assert_eq!(render_plain(&outcome), "");
        assert_eq!(summary_line(&outcome), "Parsing completed with 0 errors");
    }

    #[test]
    fn test_json_report() {
        let outcome = outcome("if (x) { y }\nlet z");
        let json = serde_json::to_string_pretty(&render_json("demo.js", &outcome)).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "error_count": 2,
          "errors": [
            {
              "code": "syntax::expected_semicolon",
              "column": 6,
              "line": 2,
              "message": "Expected semicolon"
            },
            {
              "code": "syntax::expected_close_brace",
              "column": 6,
              "line": 2,
              "message": "Expected }"
            }
          ],
          "file": "demo.js"
        }
        "#);
    }

    #[test]
    fn test_pretty_report_shows_source_and_code() {
        let source = "let x = 1 y;\n";
        let rendered = render_pretty("demo.js", source, &outcome(source), false).unwrap();
        assert!(rendered.contains("syntax::expected_semicolon"), "{rendered}");
        assert!(rendered.contains("Syntax Error at line 1, column 11: Expected semicolon"), "{rendered}");
        assert!(rendered.contains("demo.js"), "{rendered}");
        assert!(rendered.contains("let x = 1 y;"), "{rendered}");
    }

    #[test]
    fn test_pretty_lex_errors() {
        let source = "let # = 1;";
        let errors = check_source(source, &CheckOptions::default()).unwrap_err();
        let rendered = render_lex_errors_pretty("demo.js", source, &errors, false).unwrap();
        assert!(rendered.contains("lex::unexpected_character"), "{rendered}");
        assert!(rendered.contains("here"), "{rendered}");
    }

    #[test]
    fn test_lex_errors_json() {
        let errors = check_source("let a = 1;\nlet b = @;", &CheckOptions::default()).unwrap_err();
        let json = serde_json::to_string_pretty(&render_lex_errors_json("demo.js", &errors)).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "file": "demo.js",
          "lex_errors": [
            {
              "code": "lex::unexpected_character",
              "column": 9,
              "line": 2,
              "message": "Lexical Error at line 2, column 9: unexpected character '@'"
            }
          ]
        }
        "#);
    }

    #[test]
    fn test_lex_errors_plain() {
        let errors = vec![LexError::UnexpectedCharacter { ch: '#', line: 1, column: 5 }];
        let rendered = render_lex_errors("demo.js", &errors);
        assert_eq!(rendered, "demo.js: Lexical Error at line 1, column 5: unexpected character '#'");
    }
}
