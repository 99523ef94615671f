// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the monkey CLI.
//!
//! The scanner itself never fails; these errors belong to the consumers
//! around it (file reading, output, the line editor, and the opt-in
//! `--deny-illegal` policy).

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, MonkeyError>;

/// Main error type for the monkey CLI.
#[derive(Error, Debug)]
pub enum MonkeyError {
    /// A source file could not be read
    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the token listing failed
    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),

    /// An illegal token was found while `--deny-illegal` was set
    #[error("illegal token {text:?} at byte {offset}")]
    IllegalToken { text: String, offset: usize },

    /// The line editor failed
    #[error("REPL error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_token_message() {
        let err = MonkeyError::IllegalToken {
            text: "@".to_string(),
            offset: 4,
        };
        assert_eq!(err.to_string(), "illegal token \"@\" at byte 4");
    }

    #[test]
    fn test_io_message_names_path() {
        let err = MonkeyError::Io {
            path: PathBuf::from("missing.mk"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "could not read 'missing.mk': not found");
    }
}
