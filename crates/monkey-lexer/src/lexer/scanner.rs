// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The scanner that produces tokens from source text.

use std::iter::FusedIterator;

use tracing::trace;

use super::{Span, Token, TokenKind, keywords};

/// A scanner that tokenizes Monkey source code.
///
/// The scanner walks the input one byte at a time. `current` holds the byte
/// at `position`, or `None` once `read_position` has run past the end of
/// the input; there is no in-band sentinel byte.
pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
    read_position: usize,
    current: Option<u8>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(input: &'a str) -> Self {
        let mut scanner = Self {
            input,
            position: 0,
            read_position: 0,
            current: None,
        };
        scanner.read_char();
        scanner
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted every call returns an `Eof` token with
    /// empty text.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        trace!(
            kind = %token.kind,
            start = token.span.start,
            end = token.span.end,
            "scanned token"
        );
        token
    }

    /// Byte offset of the character currently under inspection.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true once every byte of the input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;

        let Some(ch) = self.current else {
            return Token::eof(self.input.len());
        };

        let kind = match ch {
            // Single-character tokens
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::LessThan,
            b'>' => TokenKind::GreaterThan,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,

            // One or two characters
            b'=' => self.scan_equal(),
            b'!' => self.scan_bang(),

            // Identifiers, keywords and integers leave the cursor past the lexeme
            _ if is_id_start(ch) => return self.scan_identifier(),
            _ if ch.is_ascii_digit() => return self.scan_number(),

            _ => TokenKind::Illegal,
        };

        self.read_char();
        self.token_from(kind, start)
    }

    fn read_char(&mut self) {
        self.current = self.input.as_bytes().get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<u8> {
        self.input.as_bytes().get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    fn scan_equal(&mut self) -> TokenKind {
        if self.peek_char() == Some(b'=') {
            self.read_char();
            TokenKind::Equal
        } else {
            TokenKind::Assign
        }
    }

    fn scan_bang(&mut self) -> TokenKind {
        if self.peek_char() == Some(b'=') {
            self.read_char();
            TokenKind::NotEqual
        } else {
            TokenKind::Bang
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.position;
        while self.current.is_some_and(is_id_continue) {
            self.read_char();
        }

        let text = &self.input[start..self.position];
        Token::new(keywords::lookup_ident(text), text, Span::new(start, self.position))
    }

    fn scan_number(&mut self) -> Token {
        let start = self.position;
        while self.current.is_some_and(|ch| ch.is_ascii_digit()) {
            self.read_char();
        }

        self.token_from(TokenKind::Int, start)
    }

    /// Builds a token for the bytes between `start` and the cursor.
    ///
    /// Every lexeme except an `Illegal` non-ASCII byte is ASCII, so the
    /// lossy conversion only ever substitutes for illegal input.
    fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        let bytes = &self.input.as_bytes()[start..self.position];
        let text = String::from_utf8_lossy(bytes).into_owned();
        Token::new(kind, text, Span::new(start, self.position))
    }
}

/// Checks if a byte can start an identifier.
fn is_id_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Checks if a byte can continue an identifier.
fn is_id_continue(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() { None } else { Some(token) }
    }
}

impl FusedIterator for Scanner<'_> {}
