use super::*;
use pretty_assertions::assert_eq;

#[test]
fn discriminant_indices_fit_a_u128_bitset() {
    assert!(TOKEN_KIND_COUNT <= 128);
    assert_eq!(TokenKind::LeftParen.discriminant_index(), 0);
    assert_eq!(
        TokenKind::Eof.discriminant_index() as usize,
        TOKEN_KIND_COUNT - 1
    );
}

#[test]
fn keywords_are_classified() {
    assert!(TokenKind::While.is_keyword());
    assert!(TokenKind::Continue.is_keyword());
    assert!(!TokenKind::Identifier.is_keyword());
    assert!(!TokenKind::EqualEqual.is_keyword());
}

#[test]
fn location_points_at_lexeme_or_end() {
    let semi = Token::new(TokenKind::Semicolon, ";", 3);
    assert_eq!(semi.location(), "at ';'");

    let eof = Token::eof(9);
    assert_eq!(eof.location(), "at end");
}

#[test]
fn literal_display_matches_runtime_rendering() {
    assert_eq!(LiteralValue::Number(3.0).to_string(), "3");
    assert_eq!(LiteralValue::Number(3.5).to_string(), "3.5");
    assert_eq!(LiteralValue::Bool(false).to_string(), "false");
    assert_eq!(LiteralValue::Nil.to_string(), "nil");
    assert_eq!(LiteralValue::Str("hi".into()).to_string(), "hi");
}

#[test]
fn with_literal_keeps_raw_lexeme() {
    let tok = Token::with_literal(
        TokenKind::String,
        "\"a\\nb\"",
        LiteralValue::Str("a\nb".into()),
        1,
    );
    assert_eq!(tok.lexeme, "\"a\\nb\"");
    assert_eq!(tok.literal, Some(LiteralValue::Str("a\nb".into())));
}
