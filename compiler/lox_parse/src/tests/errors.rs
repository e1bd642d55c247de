use pretty_assertions::assert_eq;

use super::parse_source;
use crate::{ParseError, ParseErrorKind};
use lox_diagnostic::ErrorCode;
use lox_ir::{Stmt, TokenKind};

fn errors(source: &str) -> Vec<ParseError> {
    parse_source(source).errors
}

#[test]
fn test_var_with_number_name() {
    let errs = errors("var 1 = 2;");
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].kind, ParseErrorKind::ExpectedIdentifier);
    assert_eq!(errs[0].location, "at '1'");
    assert_eq!(errs[0].line, 1);
    assert_eq!(errs[0].message(), "expect variable name");
}

#[test]
fn test_missing_semicolon_at_end() {
    let errs = errors("print 1");
    assert_eq!(
        errs,
        vec![ParseError {
            kind: ParseErrorKind::ExpectedToken {
                expected: TokenKind::Semicolon,
                after: "after value",
            },
            line: 1,
            location: "at end".into(),
        }]
    );
    assert_eq!(errs[0].message(), "expect ';' after value");
}

#[test]
fn test_invalid_assignment_target() {
    let errs = errors("a + b = 3;");
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].kind, ParseErrorKind::InvalidAssignmentTarget);
    assert_eq!(errs[0].location, "at '='");
    assert_eq!(errs[0].code(), ErrorCode::E1003);

    let grouped = errors("(a) = 3;");
    assert_eq!(grouped[0].kind, ParseErrorKind::InvalidAssignmentTarget);
}

#[test]
fn test_expected_expression() {
    let errs = errors("print ;");
    assert_eq!(errs[0].kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(errs[0].location, "at ';'");
}

#[test]
fn test_unclosed_paren() {
    let errs = errors("print (1 + 2;");
    assert_eq!(errs[0].message(), "expect ')' after expression");
}

#[test]
fn test_unclosed_block() {
    let errs = errors("{ print 1;");
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].message(), "expect '}' after block");
    assert_eq!(errs[0].location, "at end");
}

#[test]
fn test_if_and_while_headers() {
    assert_eq!(errors("if x) print 1;")[0].message(), "expect '(' after 'if'");
    assert_eq!(
        errors("if (x print 1;")[0].message(),
        "expect ')' after if condition"
    );
    assert_eq!(
        errors("while x) print 1;")[0].message(),
        "expect '(' after 'while'"
    );
    assert_eq!(
        errors("while (x print 1;")[0].message(),
        "expect ')' after condition"
    );
}

#[test]
fn test_recovery_reports_every_bad_statement() {
    let output = parse_source("var 1;\nprint 2;\nprint ;\nvar ok = 3;\n1 = 2;");
    let lines: Vec<u32> = output.errors.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![1, 3, 5]);
    // The good statements still parse, and so does the bad assignment,
    // which is reported without unwinding.
    assert_eq!(output.statements.len(), 3);
}

#[test]
fn test_invalid_assignment_does_not_swallow_next_statement() {
    let output = parse_source("a + b = c;\nprint d;");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.statements.len(), 2);
    assert!(matches!(output.statements[1], Stmt::Print(_)));
}

#[test]
fn test_error_after_invalid_assignment_is_reported() {
    let errs = errors("(a) = 1 print 2;");
    assert_eq!(
        errs.iter().map(ParseError::message).collect::<Vec<_>>(),
        vec![
            "invalid assignment target".to_string(),
            "expect ';' after expression".to_string(),
        ]
    );
    assert_eq!(errs[1].location, "at 'print'");
}

#[test]
fn test_recovery_inside_block() {
    let output = parse_source("{ print ; print 1; }\nprint 2;");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.statements.len(), 2);
}

#[test]
fn test_reserved_keywords_are_rejected() {
    for source in ["fun f() {}", "return 1;", "class A {}", "for (;;) {}", "this;", "break;"] {
        let errs = errors(source);
        assert!(!errs.is_empty(), "{source} should not parse");
    }
}

#[test]
fn test_diagnostic_conversion() {
    let errs = errors("var 1 = 2;");
    let diag = errs[0].to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1004);
    assert_eq!(diag.to_string(), "l1 error: at '1' expect variable name");
}
