//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before keyword
//! resolution and literal decoding.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\x0C]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    // Punctuation
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,

    // One or two character operators
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,

    // A trailing '.' without digits is left for the Dot token.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // String literal; may span lines
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    String,

    // Opening quote that runs into end of input
    #[regex(r#""([^"\\]|\\(.|\n))*\\?"#)]
    UnterminatedString,

    // Identifier or keyword, resolved by `keywords::lookup`
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
