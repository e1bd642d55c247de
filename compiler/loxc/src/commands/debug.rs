//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::{self, Write};

use lox_diagnostic::{ColorMode, Diagnostic, DiagnosticEmitter};
use lox_ir::{Stmt, Token};
use lox_lexer::LexError;
use lox_parse::ParseError;

use super::{read_file, stderr_emitter};
use crate::{CliError, RunOutcome};

/// Write one token per line: line, kind, lexeme and decoded literal.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        let kind = format!("{:?}", token.kind);
        write!(out, "{:>4} {kind:<12} {}", token.line, token.lexeme)?;
        if let Some(literal) = &token.literal {
            write!(out, " {literal:?}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the parsed statement forest in pretty debug form.
pub fn write_statements<W: Write>(out: &mut W, statements: &[Stmt]) -> io::Result<()> {
    for stmt in statements {
        writeln!(out, "{stmt:#?}")?;
    }
    Ok(())
}

/// Lex a file and print the token stream. Lexical errors go to stderr.
pub fn lex_file(path: &str, color: ColorMode) -> Result<RunOutcome, CliError> {
    let source = read_file(path)?;
    let lexed = lox_lexer::lex(&source);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Tokens for '{path}' ({} tokens):", lexed.tokens.len())?;
    write_tokens(&mut stdout, &lexed.tokens)?;

    let diagnostics: Vec<_> = lexed.errors.iter().map(LexError::to_diagnostic).collect();
    Ok(report(path, color, &diagnostics))
}

/// Parse a file and print its statements. Static errors go to stderr.
pub fn parse_file(path: &str, color: ColorMode) -> Result<RunOutcome, CliError> {
    let source = read_file(path)?;
    let lexed = lox_lexer::lex(&source);
    let parsed = lox_parse::parse(&lexed.tokens);

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "Parse result for '{path}' ({} statements):",
        parsed.statements.len()
    )?;
    write_statements(&mut stdout, &parsed.statements)?;

    let diagnostics: Vec<_> = lexed
        .errors
        .iter()
        .map(LexError::to_diagnostic)
        .chain(parsed.errors.iter().map(ParseError::to_diagnostic))
        .collect();
    Ok(report(path, color, &diagnostics))
}

fn report(path: &str, color: ColorMode, diagnostics: &[Diagnostic]) -> RunOutcome {
    if diagnostics.is_empty() {
        return RunOutcome::Success;
    }
    let mut emitter = stderr_emitter(color, path);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
    RunOutcome::StaticError {
        errors: diagnostics.len(),
    }
}
