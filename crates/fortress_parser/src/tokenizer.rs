//! Input normalization.
//!
//! Converts a raw line of player input into a sequence of canonical tokens.

use crate::vocabulary::Lexicon;

/// Punctuation stripped from the edges of each word.
const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Normalizes player input.
pub struct Normalizer;

impl Normalizer {
    /// Splits a raw line into upper-cased words.
    ///
    /// - Splits on whitespace
    /// - Strips leading and trailing punctuation
    /// - Drops words that were nothing but punctuation
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input
            .split_whitespace()
            .map(|word| word.trim_matches(PUNCTUATION))
            .filter(|word| !word.is_empty())
            .map(str::to_uppercase)
            .collect()
    }

    /// Tokenizes a raw line, replaces synonyms, then removes filler.
    ///
    /// Synonyms are resolved before filler is removed, so a synonym for a
    /// filler word is stripped too.
    #[must_use]
    pub fn normalize(input: &str, lexicon: &Lexicon) -> Vec<String> {
        Self::tokenize(input)
            .into_iter()
            .map(|token| match lexicon.synonym(&token) {
                Some(canonical) => canonical.to_string(),
                None => token,
            })
            .filter(|token| !lexicon.is_filler(token))
            .collect()
    }
}
