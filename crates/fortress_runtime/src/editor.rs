//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline interactively and a scripted editor
//! for batch runs and tests.

use std::borrow::Cow;
use std::collections::VecDeque;

use fortress_foundation::{Error, Result};
use fortress_parser::Lexicon;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter};

use crate::highlight::FortressHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Teach the editor the words the parser knows, for completion and
    /// highlighting.
    fn set_vocabulary(&mut self, lexicon: &Lexicon);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter)]
struct FortressHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: FortressHighlighter,
}

impl Validator for FortressHelper {}

impl Highlighter for FortressHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for lexicon words.
#[derive(Default)]
struct WordCompleter {
    /// Lower-cased, sorted
    words: Vec<String>,
}

impl WordCompleter {
    fn set_words(&mut self, lexicon: &Lexicon) {
        self.words = lexicon.words().iter().map(|w| w.to_lowercase()).collect();
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let word = line[start..pos].to_lowercase();

        let candidates = self
            .words
            .iter()
            .filter(|w| w.starts_with(&word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<FortressHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let helper = FortressHelper {
            completer: WordCompleter::default(),
            hinter: HistoryHinter::new(),
            highlighter: FortressHighlighter::default(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_vocabulary(&mut self, lexicon: &Lexicon) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.set_words(lexicon);
            helper.highlighter.set_lexicon(lexicon.clone());
        }
    }
}

/// Line editor that replays a fixed list of lines, then reports EOF.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    lines: VecDeque<String>,
    history: Vec<String>,
    echo: bool,
}

impl ScriptedEditor {
    /// Creates an editor that will return each line in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            history: Vec::new(),
            echo: false,
        }
    }

    /// Prints each prompt and line as it is read, like a transcript.
    #[must_use]
    pub const fn echoing(mut self) -> Self {
        self.echo = true;
        self
    }

    /// Returns the lines added to history so far.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Returns how many lines have not been read yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        let Some(line) = self.lines.pop_front() else {
            return Ok(ReadResult::Eof);
        };
        if self.echo {
            println!("{prompt}{line}");
        }
        Ok(ReadResult::Line(line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_vocabulary(&mut self, _lexicon: &Lexicon) {}
}
