use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_lex_var_declaration() {
    let output = lex("var x = 42;");
    assert!(!output.has_errors());

    let tokens = &output.tokens;
    assert_eq!(tokens.len(), 6);
    assert!(matches!(tokens[0].kind, TokenKind::Var));
    assert!(matches!(tokens[1].kind, TokenKind::Identifier));
    assert_eq!(tokens[1].lexeme, "x");
    assert!(matches!(tokens[2].kind, TokenKind::Equal));
    assert_eq!(tokens[3].literal, Some(LiteralValue::Number(42.0)));
    assert!(matches!(tokens[4].kind, TokenKind::Semicolon));
    assert!(matches!(tokens[5].kind, TokenKind::Eof));
}

#[test]
fn test_empty_source_is_single_eof() {
    let output = lex("");
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(output.tokens[0].kind, TokenKind::Eof);
    assert_eq!(output.tokens[0].line, 1);
}

#[test]
fn test_two_character_operators() {
    assert_eq!(
        kinds("! != = == < <= > >="),
        vec![
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds("(){},.-+;/*"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Slash,
            TokenKind::Star,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_fractional_number() {
    let tokens = lex("3.5").tokens;
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "3.5");
    assert_eq!(tokens[0].literal, Some(LiteralValue::Number(3.5)));
}

#[test]
fn test_trailing_dot_is_not_part_of_number() {
    let tokens = lex("123.").tokens;
    assert_eq!(tokens[0].lexeme, "123");
    assert_eq!(tokens[0].literal, Some(LiteralValue::Number(123.0)));
    assert_eq!(tokens[1].kind, TokenKind::Dot);
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn test_string_literal_keeps_raw_lexeme() {
    let tokens = lex(r#""hello\tworld""#).tokens;
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, r#""hello\tworld""#);
    assert_eq!(
        tokens[0].literal,
        Some(LiteralValue::Str("hello\tworld".into()))
    );
}

#[test]
fn test_escaped_quote_does_not_end_string() {
    let output = lex(r#""a\"b" x"#);
    assert!(!output.has_errors());
    assert_eq!(
        output.tokens[0].literal,
        Some(LiteralValue::Str("a\"b".into()))
    );
    assert_eq!(output.tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_multiline_string_advances_line() {
    let tokens = lex("\"one\ntwo\" after").tokens;
    assert_eq!(tokens[0].line, 1);
    assert_eq!(
        tokens[0].literal,
        Some(LiteralValue::Str("one\ntwo".into()))
    );
    assert_eq!(tokens[1].lexeme, "after");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_comments_and_newlines() {
    let tokens = lex("// heading\nprint 1; // trailing\r\n\nprint 2;").tokens;
    let lines: Vec<(TokenKind, u32)> = tokens.iter().map(|t| (t.kind, t.line)).collect();
    assert_eq!(
        lines,
        vec![
            (TokenKind::Print, 2),
            (TokenKind::Number, 2),
            (TokenKind::Semicolon, 2),
            (TokenKind::Print, 4),
            (TokenKind::Number, 4),
            (TokenKind::Semicolon, 4),
            (TokenKind::Eof, 4),
        ]
    );
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        kinds("or orchid nil nil_ While while"),
        vec![
            TokenKind::Or,
            TokenKind::Identifier,
            TokenKind::Nil,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::While,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unexpected_characters_are_collected() {
    let output = lex("var @ x\n# y;");
    assert_eq!(
        output.errors,
        vec![
            LexError::new(LexErrorKind::UnexpectedCharacter('@'), 1),
            LexError::new(LexErrorKind::UnexpectedCharacter('#'), 2),
        ]
    );
    assert_eq!(
        output.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unterminated_string() {
    let output = lex("print \"never closed\nstill open");
    assert_eq!(
        output.errors,
        vec![LexError::new(LexErrorKind::UnterminatedString, 1)]
    );
    assert_eq!(output.tokens.len(), 2);
    assert_eq!(output.tokens[0].kind, TokenKind::Print);
    assert_eq!(output.tokens[1].kind, TokenKind::Eof);
    assert_eq!(output.tokens[1].line, 2);
}

#[test]
fn test_exactly_one_eof() {
    let output = lex("var a = 1; { print a; }");
    let eofs = output
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Eof)
        .count();
    assert_eq!(eofs, 1);
    assert_eq!(output.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}
