//! The Fortress of Peril - a small text adventure
//!
//! This crate re-exports all layers of the game for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: fortress_runtime     — Dispatcher, session, REPL, CLI
//! Layer 2: fortress_world       — Room/mob registry, navigation, world definitions
//! Layer 1: fortress_parser      — Lexicon, normalizer, slot-filling parser
//! Layer 0: fortress_foundation  — Core types (RoomId, MobId, Coordinate, Error)
//! ```

pub use fortress_foundation as foundation;
pub use fortress_parser as parser;
pub use fortress_runtime as runtime;
pub use fortress_world as world;
