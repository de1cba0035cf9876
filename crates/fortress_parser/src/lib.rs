//! Command parser for the Fortress of Peril.
//!
//! This crate turns free-text player input like "take the goblet" into a
//! flat [`Command`] with verb, noun, and direction slots.
//!
//! # Architecture
//!
//! ```text
//! "Examine the Gatekeeper!"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   NORMALIZER    │  → split, upper-case, strip punctuation
//! │                 │  → synonyms: EXAMINE → LOOK
//! │                 │  → drop filler: THE
//! └─────────────────┘  → ["LOOK", "GATEKEEPER"]
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SLOT FILLING    │  → verb: LOOK, noun: GATEKEEPER, direction: -
//! │                 │  → remainder: ["GATEKEEPER"]
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`vocabulary`] - The [`Lexicon`]: word categories and synonyms
//! - [`stdlib`] - The standard word tables
//! - [`tokenizer`] - Raw line to normalized tokens
//! - [`parser`] - Normalized tokens to [`Command`]
//! - [`command`] - The structured command record

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod stdlib;
pub mod tokenizer;
pub mod vocabulary;

pub use command::Command;
pub use parser::CommandParser;
pub use tokenizer::Normalizer;
pub use vocabulary::{Lexicon, WordClass};
