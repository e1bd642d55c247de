//! End-to-end evaluator tests: source text in, printed output out.

mod scope_tests;

use crate::{buffer_handler, EvalError, Interpreter, InterpreterBuilder};

/// Lex, parse and run `source` on `interp`, asserting there were no static
/// errors.
pub(crate) fn run_on(interp: &mut Interpreter, source: &str) -> Result<(), EvalError> {
    let lexed = lox_lexer::lex(source);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    let parsed = lox_parse::parse(&lexed.tokens);
    assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);
    interp.interpret(&parsed.statements)
}

/// Interpreter whose `print` output is captured.
pub(crate) fn capturing() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

/// Run `source` on a fresh interpreter and return everything it printed.
pub(crate) fn output_of(source: &str) -> String {
    let mut interp = capturing();
    if let Err(err) = run_on(&mut interp, source) {
        panic!("runtime error on line {}: {err}", err.line);
    }
    interp.print_handler().get_output()
}

/// Run `source`, expecting a runtime error; returns it with the output
/// printed before it.
pub(crate) fn error_of(source: &str) -> (EvalError, String) {
    let mut interp = capturing();
    match run_on(&mut interp, source) {
        Ok(()) => panic!("expected a runtime error"),
        Err(err) => (err, interp.print_handler().get_output()),
    }
}
