//! Command dispatcher, REPL, and CLI for the Fortress of Peril.
//!
//! This crate provides:
//! - [`Dispatcher`] - Interprets parsed commands against the world
//! - [`Session`] - World, player, and the parse/dispatch pipeline
//! - [`Repl`] - The read-eval-print turn loop
//! - [`LineEditor`] - Rustyline and scripted input sources

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod describe;
pub mod dispatcher;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use dispatcher::{Dispatcher, Reply};
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use repl::{Repl, Step, is_affirmative};
pub use session::{FORTRESS_OF_PERIL, Session};
