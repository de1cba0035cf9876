//! The lexicon of words the parser recognizes.
//!
//! Stores the four word categories (verbs, directions, nouns, filler) and
//! the synonym table. Every word is stored upper-cased.

use std::collections::{BTreeSet, HashMap};

use crate::stdlib;

/// The slot a recognized word can fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// An action word.
    Verb,
    /// A compass or vertical direction.
    Direction,
    /// An in-world object or character.
    Noun,
    /// A word with no meaning to the parser.
    Filler,
}

/// Runtime storage for all vocabulary definitions.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    verbs: BTreeSet<String>,
    directions: BTreeSet<String>,
    nouns: BTreeSet<String>,
    filler: BTreeSet<String>,
    /// Alternate spelling -> canonical token
    synonyms: HashMap<String, String>,
}

impl Lexicon {
    /// Creates a new empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lexicon populated with the standard word tables.
    #[must_use]
    pub fn standard() -> Self {
        let mut lexicon = Self::new();
        for verb in stdlib::VERBS {
            lexicon.register_verb(verb);
        }
        for direction in stdlib::DIRECTIONS {
            lexicon.register_direction(direction);
        }
        for noun in stdlib::NOUNS {
            lexicon.register_noun(noun);
        }
        for word in stdlib::FILLER {
            lexicon.register_filler(word);
        }
        for (alternate, canonical) in stdlib::SYNONYMS {
            lexicon.register_synonym(alternate, canonical);
        }
        lexicon
    }

    /// Registers a verb.
    pub fn register_verb(&mut self, word: &str) {
        self.verbs.insert(word.to_uppercase());
    }

    /// Registers a direction.
    pub fn register_direction(&mut self, word: &str) {
        self.directions.insert(word.to_uppercase());
    }

    /// Registers a noun. Returns false if it was already known.
    pub fn register_noun(&mut self, word: &str) -> bool {
        self.nouns.insert(word.to_uppercase())
    }

    /// Registers a filler word.
    pub fn register_filler(&mut self, word: &str) {
        self.filler.insert(word.to_uppercase());
    }

    /// Registers an alternate spelling for a canonical token.
    pub fn register_synonym(&mut self, alternate: &str, canonical: &str) {
        self.synonyms
            .insert(alternate.to_uppercase(), canonical.to_uppercase());
    }

    /// Checks if a token is a verb.
    #[must_use]
    pub fn is_verb(&self, token: &str) -> bool {
        self.verbs.contains(token)
    }

    /// Checks if a token is a direction.
    #[must_use]
    pub fn is_direction(&self, token: &str) -> bool {
        self.directions.contains(token)
    }

    /// Checks if a token is a noun.
    #[must_use]
    pub fn is_noun(&self, token: &str) -> bool {
        self.nouns.contains(token)
    }

    /// Checks if a token is a filler word.
    #[must_use]
    pub fn is_filler(&self, token: &str) -> bool {
        self.filler.contains(token)
    }

    /// Looks up the canonical token for an alternate spelling.
    #[must_use]
    pub fn synonym(&self, token: &str) -> Option<&str> {
        self.synonyms.get(token).map(String::as_str)
    }

    /// Classifies a normalized token.
    ///
    /// A token fills at most one slot. When a word is registered in more
    /// than one category, verbs win over directions and directions over
    /// nouns.
    #[must_use]
    pub fn classify(&self, token: &str) -> Option<WordClass> {
        if self.is_verb(token) {
            Some(WordClass::Verb)
        } else if self.is_direction(token) {
            Some(WordClass::Direction)
        } else if self.is_noun(token) {
            Some(WordClass::Noun)
        } else if self.is_filler(token) {
            Some(WordClass::Filler)
        } else {
            None
        }
    }

    /// Returns the verbs in alphabetical order.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.verbs.iter().map(String::as_str)
    }

    /// Returns the directions in alphabetical order.
    pub fn directions(&self) -> impl Iterator<Item = &str> {
        self.directions.iter().map(String::as_str)
    }

    /// Returns the nouns in alphabetical order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.nouns.iter().map(String::as_str)
    }

    /// Returns every word a player could type: all categories except
    /// filler, plus every synonym.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut words: BTreeSet<&str> = self
            .verbs
            .iter()
            .chain(&self.directions)
            .chain(&self.nouns)
            .map(String::as_str)
            .collect();
        words.extend(self.synonyms.keys().map(String::as_str));
        words.into_iter().map(str::to_string).collect()
    }
}
