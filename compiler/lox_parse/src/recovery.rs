//! Error recovery for the parser.
//!
//! After a parse error the parser skips ahead to a statement boundary and
//! carries on, so one pass reports every independent mistake. Membership in a
//! recovery set is a single bit test.

use super::cursor::Cursor;
use lox_ir::{TokenKind, TOKEN_KIND_COUNT};

const _: () = assert!(TOKEN_KIND_COUNT <= 128, "TokenSet is a u128 bitset");

/// A set of token kinds, one bit per `TokenKind` discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Tokens that begin a statement. Expression statements have no marker
/// keyword, so they are found through the `;` rule instead.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Skip to the next statement boundary.
///
/// Always consumes the offending token, then stops just after a `;` or just
/// before a token in [`STMT_START`], or at end of input. Returns the number
/// of tokens skipped.
pub fn synchronize(cursor: &mut Cursor<'_>) -> usize {
    let start = cursor.position();
    cursor.advance();

    while !cursor.is_at_end() {
        if cursor.previous_kind() == TokenKind::Semicolon {
            break;
        }
        if STMT_START.contains(cursor.current_kind()) {
            break;
        }
        cursor.advance();
    }

    cursor.position() - start
}
