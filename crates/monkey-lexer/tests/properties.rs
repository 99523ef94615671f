// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Property tests for the scanner.

use monkey_lexer::{Scanner, TokenKind, tokenize};
use proptest::prelude::*;

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Strings built mostly from bytes the scanner knows about.
fn monkey_like() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("let".to_string()),
            Just("fn".to_string()),
            Just("=".to_string()),
            Just("!".to_string()),
            Just(" ".to_string()),
            Just("\n".to_string()),
            "[a-z_][a-z0-9_]{0,4}",
            "[0-9]{1,4}",
            "[-+*/<>;(),{}=!@#]",
        ],
        0..32,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn spans_tile_the_non_whitespace_input(src in monkey_like()) {
        let bytes = src.as_bytes();
        let mut cursor = 0;

        for token in tokenize(&src) {
            prop_assert!(token.span.start >= cursor);
            prop_assert!(bytes[cursor..token.span.start].iter().all(|&b| is_whitespace(b)));
            prop_assert_eq!(&src[token.span.start..token.span.end], token.text.as_str());
            cursor = token.span.end;
        }

        prop_assert_eq!(cursor, src.len());
    }

    #[test]
    fn lexemes_rebuild_input_without_whitespace(src in monkey_like()) {
        let rebuilt: String = tokenize(&src).into_iter().map(|t| t.text).collect();
        let stripped: String = src.chars().filter(|&c| !is_whitespace(c as u8)).collect();
        prop_assert_eq!(rebuilt, stripped);
    }

    #[test]
    fn arbitrary_input_terminates_with_one_eof(src in any::<String>()) {
        let tokens = tokenize(&src);
        prop_assert!(tokens.len() <= src.len() + 1);
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);

        for token in &tokens[..tokens.len() - 1] {
            prop_assert!(!token.span.is_empty());
            prop_assert!(!token.text.contains([' ', '\t', '\n', '\r']));
        }
    }

    #[test]
    fn eof_is_stable(src in monkey_like(), extra in 1usize..8) {
        let mut scanner = Scanner::new(&src);
        while !scanner.next_token().is_eof() {}

        for _ in 0..extra {
            let token = scanner.next_token();
            prop_assert_eq!(token.kind, TokenKind::Eof);
            prop_assert!(token.text.is_empty());
        }
    }

    #[test]
    fn non_ascii_bytes_are_single_illegal_tokens(src in "[a-z ]{0,4}[é漢🦀ß][a-z ]{0,4}") {
        for token in tokenize(&src) {
            if token.span.slice(src.as_bytes()).is_some_and(|b| !b.is_ascii()) {
                prop_assert_eq!(token.kind, TokenKind::Illegal);
                prop_assert_eq!(token.span.len(), 1);
            }
        }
    }
}
