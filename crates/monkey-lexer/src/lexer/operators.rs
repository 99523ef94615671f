// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//!
//! ## Single-Character Tokens
//!
//! | Byte | Token |
//! |------|-------|
//! | `+` | `Plus` |
//! | `-` | `Minus` |
//! | `*` | `Asterisk` |
//! | `/` | `Slash` |
//! | `<` | `LessThan` |
//! | `>` | `GreaterThan` |
//! | `,` | `Comma` |
//! | `;` | `Semicolon` |
//! | `(` `)` | `LeftParen`, `RightParen` |
//! | `{` `}` | `LeftBrace`, `RightBrace` |
//!
//! ## Two-Character Operators
//!
//! | Token | Method | Variants |
//! |-------|--------|----------|
//! | `=` | `scan_equal` | `=`, `==` |
//! | `!` | `scan_bang` | `!`, `!=` |
//!
//! ## Lookahead Logic
//!
//! The scanner peeks at the byte after the current one without consuming it:
//!
//! ```text
//! // For input "!="
//! scan_bang():
//!   current is '!'
//!   peek_char() returns '='  -> compound operator
//!   read_char()              -> cursor on '='
//!   return NotEqual
//! next_token() then consumes the '=' like any single-character token
//! ```
//!
//! Exactly one byte of lookahead is used, so `===` scans as `==` then `=`.

// This module serves as documentation. The actual implementation is in scanner.rs.

#[cfg(test)]
mod tests {
    use crate::lexer::{Scanner, Token, TokenKind};

    fn scan_single(src: &str) -> TokenKind {
        let mut scanner = Scanner::new(src);
        scanner.next_token().kind
    }

    fn scan_all(src: &str) -> Vec<Token> {
        Scanner::new(src).collect()
    }

    #[test]
    fn test_arithmetic_operators() {
        assert!(matches!(scan_single("+"), TokenKind::Plus));
        assert!(matches!(scan_single("-"), TokenKind::Minus));
        assert!(matches!(scan_single("*"), TokenKind::Asterisk));
        assert!(matches!(scan_single("/"), TokenKind::Slash));
    }

    #[test]
    fn test_comparison_operators() {
        assert!(matches!(scan_single("<"), TokenKind::LessThan));
        assert!(matches!(scan_single(">"), TokenKind::GreaterThan));
        assert!(matches!(scan_single("=="), TokenKind::Equal));
        assert!(matches!(scan_single("!="), TokenKind::NotEqual));
    }

    #[test]
    fn test_equal_operators() {
        assert!(matches!(scan_single("="), TokenKind::Assign));
        assert!(matches!(scan_single("=="), TokenKind::Equal));
        assert!(matches!(scan_single("=+"), TokenKind::Assign));
    }

    #[test]
    fn test_bang_operators() {
        assert!(matches!(scan_single("!"), TokenKind::Bang));
        assert!(matches!(scan_single("!="), TokenKind::NotEqual));
        assert!(matches!(scan_single("!!"), TokenKind::Bang));
    }

    #[test]
    fn test_compound_operator_text() {
        let tokens = scan_all("a==b!=c");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "==", "b", "!=", "c"]);
    }

    #[test]
    fn test_no_other_compound_operators() {
        let kinds: Vec<TokenKind> = scan_all("<= >= ++").into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LessThan,
                TokenKind::Assign,
                TokenKind::GreaterThan,
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::Plus,
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert!(matches!(scan_single(","), TokenKind::Comma));
        assert!(matches!(scan_single(";"), TokenKind::Semicolon));
        assert!(matches!(scan_single("("), TokenKind::LeftParen));
        assert!(matches!(scan_single(")"), TokenKind::RightParen));
        assert!(matches!(scan_single("{"), TokenKind::LeftBrace));
        assert!(matches!(scan_single("}"), TokenKind::RightBrace));
    }
}
