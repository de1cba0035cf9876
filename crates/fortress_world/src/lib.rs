//! World registry, navigation, and world definitions for the Fortress of Peril.
//!
//! This crate provides:
//! - [`World`] - The registry owning every [`Room`] and [`Mob`] and their indexes
//! - [`navigation`] - Direction tokens to coordinate offsets
//! - [`WorldDefinition`] - Serde-loadable room and mob records

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod definition;
pub mod mob;
pub mod navigation;
pub mod room;
pub mod world;

pub use definition::{BuiltWorld, MobRecord, PLAYER_NAME, PlayerRecord, RoomRecord, WorldDefinition};
pub use mob::{Location, Mob, MobAttributes};
pub use navigation::{Direction, direction_offset};
pub use room::Room;
pub use world::World;
