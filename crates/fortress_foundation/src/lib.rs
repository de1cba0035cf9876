//! Core types, entity handles, and errors for the Fortress of Peril.
//!
//! This crate provides:
//! - [`RoomId`] and [`MobId`] - Insertion-order handles into the world registry
//! - [`Coordinate`] - Integer grid positions for rooms
//! - [`Error`] - Error types with optional load-time context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coordinate;
pub mod entity;
pub mod error;

pub use coordinate::Coordinate;
pub use entity::{EntityKind, MobId, RoomId};
pub use error::{Error, ErrorContext, ErrorKind, Result};
