//! Lexer for Lox using logos.
//!
//! [`lex`] turns source text into a token vector that always ends in exactly
//! one `Eof` token. Lexical errors do not stop scanning: each bad character
//! or unterminated string is recorded in [`LexOutput::errors`] and scanning
//! resumes after it, so one pass reports every problem.

mod escape;
mod keywords;
mod lex_error;
mod raw_token;

use logos::Logos;
use lox_ir::{LiteralValue, Token, TokenKind};
use tracing::debug;

pub use lex_error::{LexError, LexErrorKind};

use escape::unescape_string;
use raw_token::RawToken;

/// Tokens and lexical errors from one pass over a source.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into tokens.
pub fn lex(source: &str) -> LexOutput {
    let mut output = LexOutput::default();
    let mut logos = RawToken::lexer(source);
    let mut line: u32 = 1;

    while let Some(token_result) = logos.next() {
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment) => {}
            Ok(RawToken::Newline) => line += 1,
            Ok(RawToken::UnterminatedString) => {
                output
                    .errors
                    .push(LexError::new(LexErrorKind::UnterminatedString, line));
                line += count_newlines(slice);
            }
            Ok(raw) => {
                output.tokens.push(convert_token(raw, slice, line));
                line += count_newlines(slice);
            }
            Err(()) => {
                for c in slice.chars() {
                    output
                        .errors
                        .push(LexError::new(LexErrorKind::UnexpectedCharacter(c), line));
                }
            }
        }
    }

    output.tokens.push(Token::eof(line));

    debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        lines = line,
        "lexed source"
    );

    output
}

fn count_newlines(slice: &str) -> u32 {
    let count = slice.bytes().filter(|&b| b == b'\n').count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Convert a raw token to a `Token`, resolving keywords and decoding literals.
fn convert_token(raw: RawToken, slice: &str, line: u32) -> Token {
    let kind = match raw {
        RawToken::Number(n) => {
            return Token::with_literal(TokenKind::Number, slice, LiteralValue::Number(n), line);
        }
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            let value = LiteralValue::Str(unescape_string(content));
            return Token::with_literal(TokenKind::String, slice, value, line);
        }
        RawToken::Ident => keywords::lookup(slice).unwrap_or(TokenKind::Identifier),

        // Punctuation
        RawToken::LeftParen => TokenKind::LeftParen,
        RawToken::RightParen => TokenKind::RightParen,
        RawToken::LeftBrace => TokenKind::LeftBrace,
        RawToken::RightBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,

        // Operators
        RawToken::Bang => TokenKind::Bang,
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::Equal => TokenKind::Equal,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::Greater => TokenKind::Greater,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::Less => TokenKind::Less,
        RawToken::LessEqual => TokenKind::LessEqual,

        // Handled by `lex` before conversion
        RawToken::LineComment | RawToken::Newline | RawToken::UnterminatedString => {
            unreachable!("trivia and error tokens are not converted")
        }
    };
    Token::new(kind, slice, line)
}

#[cfg(test)]
mod tests;
