// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Reserved words of the Monkey language.
//!
//! The table is built once on first use and never mutated afterwards.
//! The scanner consults it only after it has isolated a complete
//! identifier run; it plays no part in finding token boundaries.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::TokenKind;

/// Every reserved spelling paired with its token kind.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

static TABLE: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Classifies an identifier run as a keyword or a plain identifier.
///
/// Returns the keyword's kind if `ident` is reserved, otherwise
/// [`TokenKind::Ident`].
pub fn lookup_ident(ident: &str) -> TokenKind {
    TABLE.get(ident).copied().unwrap_or(TokenKind::Ident)
}

/// Returns true if `ident` is a reserved word.
pub fn is_keyword(ident: &str) -> bool {
    TABLE.contains_key(ident)
}
