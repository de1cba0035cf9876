//! Input highlighting for the REPL.
//!
//! Colours each word by the slot the parser would give it.

use std::borrow::Cow;

use fortress_parser::{Lexicon, Normalizer, WordClass};

const VERB: &str = "\x1b[1;36m";
const DIRECTION: &str = "\x1b[33m";
const NOUN: &str = "\x1b[35m";
const FILLER: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Highlighter for player commands.
#[derive(Default)]
pub struct FortressHighlighter {
    lexicon: Lexicon,
}

impl FortressHighlighter {
    /// Creates a highlighter that knows the given words.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Replaces the known words.
    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        self.lexicon = lexicon;
    }

    fn colour(&self, word: &str) -> Option<&'static str> {
        let token = Normalizer::tokenize(word).pop()?;
        let token = self.lexicon.synonym(&token).unwrap_or(&token);
        match self.lexicon.classify(token)? {
            WordClass::Verb => Some(VERB),
            WordClass::Direction => Some(DIRECTION),
            WordClass::Noun => Some(NOUN),
            WordClass::Filler => Some(FILLER),
        }
    }

    /// Highlights a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut coloured = false;
        for piece in line.split_inclusive(char::is_whitespace) {
            let word = piece.trim_end();
            let gap = &piece[word.len()..];
            match self.colour(word) {
                Some(colour) => {
                    coloured = true;
                    result.push_str(colour);
                    result.push_str(word);
                    result.push_str(RESET);
                }
                None => result.push_str(word),
            }
            result.push_str(gap);
        }

        if coloured {
            Cow::Owned(result)
        } else {
            Cow::Borrowed(line)
        }
    }
}
