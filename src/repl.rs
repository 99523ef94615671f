// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive read-print loop for the Monkey lexer.
//!
//! Every line is scanned with a fresh [`Scanner`] and each of its tokens is
//! printed. The loop ends when standard input is exhausted.

use monkey_lexer::lexer::keywords::{self, KEYWORDS};
use monkey_lexer::Scanner;
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{MonkeyError, Result};
use crate::output::{self, OutputOptions};

/// REPL configuration constants
const HISTORY_FILE: &str = ".monkey_history";
const MAX_HISTORY_SIZE: usize = 1000;
const PROMPT: &str = ">> ";

/// Bytes the scanner skips between tokens.
const SCANNER_WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim_matches(SCANNER_WHITESPACE).strip_prefix('.')?;
        let (cmd, arg) = match rest.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };

        let command = match cmd.to_lowercase().as_str() {
            "help" | "h" | "?" => ReplCommand::Help,
            "exit" | "quit" | "q" => ReplCommand::Exit,
            "clear" | "cls" => ReplCommand::Clear,
            "version" | "v" => ReplCommand::Version,
            "load" | "l" => ReplCommand::Load,
            _ => return None,
        };
        Some((command, arg))
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Tokenize a Monkey source file"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints and highlighting
struct MonkeyHelper {
    /// Keywords and REPL commands for completion
    words: Vec<&'static str>,
}

impl MonkeyHelper {
    fn new() -> Self {
        let mut words: Vec<&'static str> = KEYWORDS.iter().map(|(spelling, _)| *spelling).collect();
        words.extend([".help", ".exit", ".clear", ".version", ".load"]);
        Self { words }
    }

    /// Start of the word ending at `pos`.
    fn word_start(line: &str, pos: usize) -> usize {
        line[..pos]
            .char_indices()
            .rev()
            .find(|&(_, c)| !c.is_ascii_alphanumeric() && c != '_' && c != '.')
            .map_or(0, |(i, c)| i + c.len_utf8())
    }
}

impl Completer for MonkeyHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[Self::word_start(line, pos)..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: (*w).to_string(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for MonkeyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[Self::word_start(line, pos)..];
        if word.len() < 2 || keywords::is_keyword(word) {
            return None;
        }

        self.words
            .iter()
            .find(|w| w.starts_with(word) && w.len() > word.len())
            .map(|w| w[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for MonkeyHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if ReplCommand::parse(line).is_some() {
            return Cow::Owned(line.magenta().to_string());
        }
        Cow::Owned(highlight_line(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// Colors `line` token by token, copying the skipped whitespace through.
fn highlight_line(line: &str) -> String {
    let mut result = String::with_capacity(line.len() * 2);
    let mut cursor = 0;

    for token in Scanner::new(line) {
        // Trailing bytes of a multi-byte character were copied with its first byte.
        if token.span.start < cursor {
            continue;
        }
        result.push_str(&line[cursor..token.span.start]);

        let end = next_char_boundary(line, token.span.end);
        result.push_str(&output::paint(token.kind, &line[token.span.start..end]));
        cursor = end;
    }

    result.push_str(&line[cursor..]);
    result
}

fn next_char_boundary(line: &str, from: usize) -> usize {
    (from..line.len())
        .find(|&i| line.is_char_boundary(i))
        .unwrap_or(line.len())
}

impl Validator for MonkeyHelper {}

impl Helper for MonkeyHelper {}

/// The interactive REPL for the Monkey lexer
pub struct Repl {
    editor: Editor<MonkeyHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(MonkeyHelper::new()));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("monkey")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "could not create history directory");
            }
        }

        if editor.load_history(&history_path).is_err() {
            debug!(path = %history_path.display(), "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> Result<()> {
        self.print_banner();

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if is_blank(&line) {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(&line) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.scan_and_print(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    self.save_history();
                    return Err(err.into());
                }
            }
        }

        self.save_history();
        Ok(())
    }

    fn save_history(&mut self) {
        if let Err(e) = self.editor.save_history(&self.history_path) {
            warn!(path = %self.history_path.display(), error = %e, "could not save history");
        }
    }

    fn print_banner(&self) {
        println!(
            "Hello {}! This is the {} programming language!",
            current_user().bright_cyan().bold(),
            "Monkey".bright_yellow().bold()
        );
        println!("Feel free to type in commands");
        println!(
            "{} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => {
                self.print_help();
                CommandResult::Continue
            }
            ReplCommand::Exit => CommandResult::Exit,
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[H");
                CommandResult::Continue
            }
            ReplCommand::Version => {
                let version = env!("CARGO_PKG_VERSION");
                println!("{} {}", "monkey".bright_cyan().bold(), version.yellow());
                CommandResult::Continue
            }
            ReplCommand::Load => {
                match arg {
                    Some(path) => self.load_file(Path::new(path)),
                    None => eprintln!(
                        "{}: {} {}",
                        "Error".red().bold(),
                        ".load".cyan(),
                        "requires a file path".dimmed()
                    ),
                }
                CommandResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!("  {:16} {}", "Ctrl+C".yellow(), "Cancel current input".dimmed());
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Complete keyword".dimmed());
        println!();
    }

    fn load_file(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(source) => self.scan_and_print(&source),
            Err(source) => print_error(&MonkeyError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn scan_and_print(&mut self, input: &str) {
        let options = OutputOptions::for_stdout();
        if let Err(e) = output::write_tokens(input, options, &mut io::stdout().lock()) {
            print_error(&e);
        }
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

/// True when scanning `line` would produce nothing but `EOF`.
fn is_blank(line: &str) -> bool {
    line.trim_matches(SCANNER_WHITESPACE).is_empty()
}

/// Name used in the greeting.
fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string())
}

/// Print a formatted error message
fn print_error(error: &MonkeyError) {
    eprintln!("{}: {}", "Error".red().bold(), error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_command_parse() {
        assert!(matches!(
            ReplCommand::parse(".help"),
            Some((ReplCommand::Help, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".exit"),
            Some((ReplCommand::Exit, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".load prog.mk"),
            Some((ReplCommand::Load, Some("prog.mk")))
        ));
        assert!(matches!(
            ReplCommand::parse("  .Q  "),
            Some((ReplCommand::Exit, None))
        ));
        assert!(ReplCommand::parse("let x = 1;").is_none());
        assert!(ReplCommand::parse(".unknown").is_none());
    }

    #[test]
    fn test_word_start() {
        assert_eq!(MonkeyHelper::word_start("let ret", 7), 4);
        assert_eq!(MonkeyHelper::word_start("fn(x", 4), 3);
        assert_eq!(MonkeyHelper::word_start(".lo", 3), 0);
    }

    #[test]
    fn test_word_start_after_non_ascii() {
        assert_eq!(MonkeyHelper::word_start("let é", 6), 6);
        assert_eq!(MonkeyHelper::word_start("éret", 5), 2);
        assert_eq!(MonkeyHelper::word_start("漢 x", 5), 4);
    }

    #[test]
    fn test_hint_and_complete_on_non_ascii_line() {
        let helper = MonkeyHelper::new();
        let history = DefaultHistory::new();
        let ctx = rustyline::Context::new(&history);

        let line = "let é";
        assert_eq!(helper.hint(line, line.len(), &ctx), None);
        let (start, candidates) = helper
            .complete(line, line.len(), &ctx)
            .expect("completion succeeds");
        assert_eq!(start, line.len());
        assert!(candidates.is_empty());

        let line = "éret";
        let (_, candidates) = helper
            .complete(line, line.len(), &ctx)
            .expect("completion succeeds");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].replacement, "urn");
    }

    #[test]
    fn test_hint_stops_at_complete_keyword() {
        let helper = MonkeyHelper::new();
        let history = DefaultHistory::new();
        let ctx = rustyline::Context::new(&history);

        assert!(helper.hint("ret", 3, &ctx).is_some_and(|h| h.contains("urn")));
        assert_eq!(helper.hint("return", 6, &ctx), None);
        assert_eq!(helper.hint("fn", 2, &ctx), None);
    }

    #[test]
    fn test_blank_uses_scanner_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\n"));
        assert!(!is_blank("\x0c"));
        assert!(!is_blank("\x0b"));
        assert!(!is_blank("\u{a0}"));
    }

    #[test]
    fn test_command_parse_keeps_form_feed() {
        assert!(ReplCommand::parse("\x0c.help").is_none());
        assert!(matches!(
            ReplCommand::parse("\t.help\r\n"),
            Some((ReplCommand::Help, None))
        ));
    }

    #[test]
    fn test_helper_words() {
        let helper = MonkeyHelper::new();
        assert!(helper.words.contains(&"return"));
        assert!(helper.words.contains(&".load"));
    }

    #[test]
    fn test_highlight_keeps_every_lexeme() {
        let line = "let  x = 10;";
        let highlighted = highlight_line(line);
        for part in ["let", "  ", "x", "=", "10", ";"] {
            assert!(highlighted.contains(part), "missing {part:?}");
        }
    }

    #[test]
    fn test_highlight_non_ascii() {
        let highlighted = highlight_line("a é b");
        assert!(highlighted.contains('é'));
        assert!(highlighted.ends_with('b'));
    }
}
