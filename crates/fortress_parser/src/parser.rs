//! Slot-filling parser.
//!
//! Orchestrates normalization and slot extraction from raw input to a
//! [`Command`].

use tracing::trace;

use crate::command::Command;
use crate::tokenizer::Normalizer;
use crate::vocabulary::{Lexicon, WordClass};

/// Parses player input against a lexicon.
#[derive(Clone, Copy, Debug)]
pub struct CommandParser<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> CommandParser<'a> {
    /// Creates a parser over the given lexicon.
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Normalizes and parses a raw line of input.
    #[must_use]
    pub fn parse(&self, input: &str) -> Command {
        let tokens = Normalizer::normalize(input, self.lexicon);
        self.parse_tokens(&tokens)
    }

    /// Parses an already-normalized token sequence.
    ///
    /// Each slot takes the first token of its class. Missing slots stay
    /// empty; an unrecognized line is not an error.
    #[must_use]
    pub fn parse_tokens(&self, tokens: &[String]) -> Command {
        let mut command = Command {
            remainder: tokens.iter().skip(1).cloned().collect(),
            ..Command::default()
        };

        for token in tokens {
            let slot = match self.lexicon.classify(token) {
                Some(WordClass::Verb) => &mut command.verb,
                Some(WordClass::Direction) => &mut command.direction,
                Some(WordClass::Noun) => &mut command.noun,
                Some(WordClass::Filler) | None => continue,
            };
            if slot.is_none() {
                *slot = Some(token.clone());
            }
        }

        trace!(%command, "parsed tokens");
        command
    }
}
