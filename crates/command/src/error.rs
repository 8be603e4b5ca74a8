// Input error reporting with Ariadne
//
// Parse failures on a console line are rendered as labeled reports pointing
// at the offending part of the line, then the prompt is re-issued.

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::Simple;
use scan::token::Token;
use std::io;

/// Type alias for Chumsky parser errors over console tokens
pub type ParseError = Simple<Token>;

/// Render parse errors against the line they came from.
///
/// Reports go to `out` rather than straight to stdout so REPL sessions can be
/// driven by tests.
pub fn report_errors<W: io::Write>(
    out: &mut W,
    line: &str,
    errors: &[ParseError],
) -> io::Result<()> {
    for error in errors {
        let span = error.span();
        let msg = format!("{}", error);

        let report = Report::build(ReportKind::Error, "input", span.start)
            .with_code("E001")
            .with_message("Invalid input")
            .with_label(
                Label::new(("input", span))
                    .with_message(msg)
                    .with_color(Color::Red),
            );

        // Add expected tokens if available
        let report = if error.expected().len() > 0 {
            let expected: Vec<String> = error.expected().map(format_expected).collect();
            report.with_help(format!("Expected: {}", expected.join(", ")))
        } else {
            report
        };

        report
            .finish()
            .write(("input", Source::from(line)), &mut *out)?;
    }
    Ok(())
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::Int(_)) => "a number".to_string(),
        Some(Token::Word(_)) => "a name".to_string(),
        None => "end of line".to_string(),
    }
}
