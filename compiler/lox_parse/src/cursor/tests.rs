use super::*;

fn tokens() -> Vec<Token> {
    vec![
        Token::new(TokenKind::Print, "print", 1),
        Token::new(TokenKind::Identifier, "x", 1),
        Token::new(TokenKind::Semicolon, ";", 1),
        Token::eof(1),
    ]
}

#[test]
fn advance_returns_consumed_token() {
    let tokens = tokens();
    let mut cursor = Cursor::new(&tokens);

    assert_eq!(cursor.previous_kind(), TokenKind::Eof);
    assert_eq!(cursor.advance().kind, TokenKind::Print);
    assert_eq!(cursor.previous_kind(), TokenKind::Print);
    assert!(cursor.check(TokenKind::Identifier));
    assert_eq!(cursor.position(), 1);
}

#[test]
fn advance_stops_at_eof() {
    let tokens = tokens();
    let mut cursor = Cursor::new(&tokens);
    for _ in 0..10 {
        cursor.advance();
    }
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 3);
}

#[test]
fn empty_slice_behaves_as_eof() {
    let mut cursor = Cursor::new(&[]);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.position(), 0);
}
