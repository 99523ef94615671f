// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token listing shared by the file, eval and REPL modes.

use std::io::{self, IsTerminal, Write};

use monkey_lexer::{Scanner, Token, TokenKind};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::error::{MonkeyError, Result};

/// How a token listing is produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Stop with an error at the first illegal token
    pub deny_illegal: bool,
    /// Print the closing `EOF` token as well
    pub show_eof: bool,
    /// Emit ANSI colors
    pub colored: bool,
}

impl OutputOptions {
    /// Plain listing, colored only when stdout is a terminal.
    pub fn for_stdout() -> Self {
        Self {
            colored: io::stdout().is_terminal(),
            ..Self::default()
        }
    }
}

/// Scans `source` and writes one line per token to `out`.
///
/// Returns the number of tokens written.
pub fn write_tokens(source: &str, options: OutputOptions, out: &mut impl Write) -> Result<usize> {
    let mut scanner = Scanner::new(source);
    let mut written = 0;

    loop {
        let token = scanner.next_token();

        if token.is_eof() && !options.show_eof {
            break;
        }

        if token.kind == TokenKind::Illegal && options.deny_illegal {
            return Err(MonkeyError::IllegalToken {
                text: token.text,
                offset: token.span.start,
            });
        }

        if options.colored {
            writeln!(out, "{}", format_token(&token))?;
        } else {
            writeln!(out, "{token}")?;
        }
        written += 1;

        if token.is_eof() {
            break;
        }
    }

    debug!(tokens = written, bytes = source.len(), "listed tokens");
    Ok(written)
}

/// Format a token for display with syntax coloring.
pub fn format_token(token: &Token) -> String {
    format!(
        "{}{}{}{}{}",
        "{Type:".dimmed(),
        token.kind.name().bold(),
        " Literal:".dimmed(),
        paint(token.kind, &token.text),
        "}".dimmed()
    )
}

/// Colors a lexeme according to its token kind.
pub fn paint(kind: TokenKind, text: &str) -> String {
    match kind {
        _ if kind.is_keyword() && !kind.is_literal() => text.magenta().bold().to_string(),
        TokenKind::True | TokenKind::False => text.blue().to_string(),
        TokenKind::Int => text.yellow().to_string(),
        _ if kind.is_operator() => text.cyan().to_string(),
        TokenKind::LeftParen | TokenKind::RightParen | TokenKind::LeftBrace | TokenKind::RightBrace => {
            text.yellow().to_string()
        }
        TokenKind::Illegal => text.red().underline().to_string(),
        _ => text.to_string(),
    }
}
