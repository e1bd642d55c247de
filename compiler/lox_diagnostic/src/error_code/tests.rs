use super::*;

const ALL: [ErrorCode; 10] = [
    ErrorCode::E0001,
    ErrorCode::E0002,
    ErrorCode::E1001,
    ErrorCode::E1002,
    ErrorCode::E1003,
    ErrorCode::E1004,
    ErrorCode::E2001,
    ErrorCode::E2002,
    ErrorCode::E2003,
    ErrorCode::E2004,
];

#[test]
fn phase_follows_leading_digit() {
    for code in ALL {
        let expected = match code.as_str().as_bytes()[1] {
            b'0' => Phase::Lex,
            b'1' => Phase::Parse,
            b'2' => Phase::Runtime,
            other => panic!("unexpected phase digit {other}"),
        };
        assert_eq!(code.phase(), expected, "{code}");
    }
}

#[test]
fn display_matches_as_str() {
    for code in ALL {
        assert_eq!(code.to_string(), code.as_str());
        assert!(!code.description().is_empty());
    }
}

#[test]
fn only_lex_and_parse_are_static() {
    assert!(Phase::Lex.is_static());
    assert!(Phase::Parse.is_static());
    assert!(!Phase::Runtime.is_static());
}
