// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! Monkey has integer literals and identifiers; strings and floats are
//! not part of the lexical grammar.
//!
//! ## Integer Literals
//!
//! Method: `scan_number`
//!
//! ```text
//! 5          -> Int("5")
//! 1234567890 -> Int("1234567890")
//! 007        -> Int("007")
//! 3.14       -> Int("3"), Illegal("."), Int("14")
//! ```
//!
//! The token text is the digit run exactly as written; no value is
//! computed here.
//!
//! ## Identifiers and Keywords
//!
//! Method: `scan_identifier`
//!
//! ### Identifier Rules
//!
//! - Start: `A-Z`, `a-z`, `_`
//! - Continue: Start chars + `0-9`
//!
//! ### Keyword Detection
//!
//! The complete run is looked up in the keyword table:
//!
//! ```text
//! "fn"     -> TokenKind::Function
//! "let"    -> TokenKind::Let
//! "let1"   -> TokenKind::Ident
//! "myVar"  -> TokenKind::Ident
//! ```
//!
//! Both methods stop with the cursor already on the byte after the lexeme,
//! so `next_token` returns their token without a further read.

// This module serves as documentation. The actual implementation is in scanner.rs.
