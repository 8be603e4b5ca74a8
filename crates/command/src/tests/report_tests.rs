// Error Report Rendering Tests

use crate::error::report_errors;
use crate::parser::{menu_choice, parse_line};

fn render(line: &str) -> String {
    let errors = parse_line(line, &menu_choice()).unwrap_err();
    let mut out = Vec::new();
    report_errors(&mut out, line, &errors).unwrap();
    String::from_utf8_lossy(&out).to_string()
}

#[test]
fn test_report_mentions_invalid_input() {
    let rendered = render("hello");
    assert!(rendered.contains("Invalid input"), "got: {}", rendered);
}

#[test]
fn test_report_carries_error_code() {
    assert!(render("hello").contains("E001"));
}

#[test]
fn test_report_on_unrecognized_chunk() {
    assert!(render("@@@").contains("Invalid input"));
}

#[test]
fn test_no_errors_writes_nothing() {
    let mut out = Vec::new();
    report_errors(&mut out, "3", &[]).unwrap();
    assert!(out.is_empty());
}
