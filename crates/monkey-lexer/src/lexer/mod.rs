// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical analysis (tokenization) for Monkey source code.
//!
//! The lexer transforms Monkey source text into a stream of tokens
//! that can be consumed by the parser.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind` and `Span` definitions
//! - `keywords.rs` - The reserved word table
//!
//! ## Documentation Submodules
//!
//! - `operators` - One- and two-character operator scanning
//! - `literals` - Integer literals, identifiers and keywords
//!
//! ## Usage
//!
//! ```rust
//! use monkey_lexer::lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let x = 42;");
//!
//! loop {
//!     let token = scanner.next_token();
//!     if matches!(token.kind, TokenKind::Eof) {
//!         break;
//!     }
//!     println!("{} {}", token.kind, token.text);
//! }
//! ```

pub mod keywords;
mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};

/// Scans `source` to completion.
///
/// The returned vector always ends with exactly one [`TokenKind::Eof`] token.
///
/// ```rust
/// use monkey_lexer::lexer::{tokenize, TokenKind};
///
/// let tokens = tokenize("x != y");
/// assert_eq!(tokens[1].kind, TokenKind::NotEqual);
/// assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens: Vec<Token> = scanner.by_ref().collect();
    tokens.push(scanner.next_token());
    tokens
}
