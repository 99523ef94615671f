// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # monkey-lexer
//!
//! The lexical front end of the Monkey programming language.
//!
//! ## Overview
//!
//! This crate provides:
//! - A byte-oriented scanner producing classified tokens on demand
//! - The token vocabulary and the reserved word table
//! - The AST node shapes a parser builds from those tokens
//!
//! The scanner has no error channel. Bytes that match no lexical rule are
//! handed to the caller as [`TokenKind::Illegal`] tokens.
//!
//! ## Quick Start
//!
//! ```rust
//! use monkey_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//! assert_eq!(scanner.next_token().text, "five");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod lexer;

// Re-exports for convenience
pub use lexer::{Scanner, Span, Token, TokenKind, tokenize};
