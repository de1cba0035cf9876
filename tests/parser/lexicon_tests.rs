//! Lexicon tests.

use fortress_parser::stdlib::{DIRECTIONS, SYNONYMS, VERBS};
use fortress_parser::{Lexicon, WordClass};

#[test]
fn standard_lexicon_knows_the_tables() {
    let lexicon = Lexicon::standard();
    for verb in VERBS {
        assert_eq!(lexicon.classify(verb), Some(WordClass::Verb));
    }
    for direction in DIRECTIONS {
        assert_eq!(lexicon.classify(direction), Some(WordClass::Direction));
    }
    for (alternate, canonical) in SYNONYMS {
        assert_eq!(lexicon.synonym(alternate), Some(*canonical));
    }
}

#[test]
fn registered_nouns_are_classified() {
    let mut lexicon = Lexicon::standard();
    assert_eq!(lexicon.classify("GOBLET"), None);
    assert!(lexicon.register_noun("goblet"));
    assert!(!lexicon.register_noun("GOBLET"));
    assert_eq!(lexicon.classify("GOBLET"), Some(WordClass::Noun));
}

#[test]
fn verb_wins_over_noun() {
    let mut lexicon = Lexicon::standard();
    lexicon.register_noun("look");
    assert_eq!(lexicon.classify("LOOK"), Some(WordClass::Verb));
}

#[test]
fn completion_words_skip_filler() {
    let mut lexicon = Lexicon::standard();
    lexicon.register_noun("gatekeeper");
    let words = lexicon.words();
    assert!(words.iter().any(|w| w == "GATEKEEPER"));
    assert!(words.iter().any(|w| w == "X"));
    assert!(!words.iter().any(|w| w == "THE"));
}
