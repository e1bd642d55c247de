//! Parser test suites.

mod errors;

use crate::ParseOutput;

/// Lex and parse `source`, asserting the lexer found nothing wrong.
pub(crate) fn parse_source(source: &str) -> ParseOutput {
    let lexed = lox_lexer::lex(source);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    crate::parse(&lexed.tokens)
}

/// Parse a single expression statement and render it in prefix form.
pub(crate) fn render_expr(source: &str) -> String {
    let output = parse_source(source);
    assert!(output.errors.is_empty(), "parse errors: {:?}", output.errors);
    match output.statements.as_slice() {
        [lox_ir::Stmt::Expression(expr)] => expr.to_string(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}
