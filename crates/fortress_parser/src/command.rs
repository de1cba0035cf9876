//! The structured command record.

use std::fmt;

/// A parsed command: one optional token per slot plus the leftover words.
///
/// A command with every slot empty is valid and means the input was not
/// understood.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    /// The first verb in the input.
    pub verb: Option<String>,
    /// The first noun in the input.
    pub noun: Option<String>,
    /// The first direction in the input.
    pub direction: Option<String>,
    /// Every normalized token after the first.
    pub remainder: Vec<String>,
}

impl Command {
    /// Returns true if the verb slot holds `verb`.
    #[must_use]
    pub fn verb_is(&self, verb: &str) -> bool {
        self.verb.as_deref() == Some(verb)
    }

    /// Returns true if there were tokens after the first.
    #[must_use]
    pub fn has_remainder(&self) -> bool {
        !self.remainder.is_empty()
    }

    /// Returns true if no slot was filled.
    #[must_use]
    pub fn is_unrecognized(&self) -> bool {
        self.verb.is_none() && self.noun.is_none() && self.direction.is_none()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |s: &Option<String>| s.clone().unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "verb={} noun={} direction={} remainder=[{}]",
            slot(&self.verb),
            slot(&self.noun),
            slot(&self.direction),
            self.remainder.join(" ")
        )
    }
}
