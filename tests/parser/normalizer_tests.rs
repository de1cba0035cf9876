//! Normalizer tests.
//!
//! Tests for converting raw input to canonical tokens.

use fortress_parser::{Lexicon, Normalizer};
use proptest::prelude::*;

fn normalize(input: &str) -> Vec<String> {
    Normalizer::normalize(input, &Lexicon::standard())
}

#[test]
fn synonyms_and_filler_are_resolved() {
    assert_eq!(normalize("take the goblet"), ["GET", "GOBLET"]);
    assert_eq!(normalize("x   gatekeeper"), ["LOOK", "GATEKEEPER"]);
    assert_eq!(normalize("walk to the n"), ["GO", "NORTH"]);
}

#[test]
fn case_does_not_matter() {
    assert_eq!(normalize("LoOk At Me"), normalize("look at me"));
    assert_eq!(normalize("look at me"), ["LOOK", "PLAYER"]);
}

#[test]
fn punctuation_is_trimmed() {
    assert_eq!(normalize("Look, at the goblet!"), ["LOOK", "GOBLET"]);
    assert_eq!(normalize("north."), ["NORTH"]);
    assert!(normalize("?! ...").is_empty());
}

#[test]
fn unknown_words_pass_through() {
    assert_eq!(normalize("dance wildly"), ["DANCE", "WILDLY"]);
}

#[test]
fn empty_input_yields_nothing() {
    assert!(normalize("").is_empty());
    assert!(normalize("   \t ").is_empty());
    assert!(normalize("the a an of").is_empty());
}

proptest! {
    #[test]
    fn normalization_is_idempotent(input in "[a-zA-Z ,.!]{0,40}") {
        let lexicon = Lexicon::standard();
        let once = Normalizer::normalize(&input, &lexicon);
        let twice = Normalizer::normalize(&once.join(" "), &lexicon);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filler_never_survives(input in "(the |a |at |go |north |goblet ){0,8}") {
        let lexicon = Lexicon::standard();
        for token in Normalizer::normalize(&input, &lexicon) {
            prop_assert!(!lexicon.is_filler(&token));
        }
    }
}
