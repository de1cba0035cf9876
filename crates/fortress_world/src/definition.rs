//! World definitions.
//!
//! A world is described by ordered room and mob records, usually loaded
//! from JSON:
//!
//! ```json
//! {
//!   "rooms": [{ "name": "gates", "description": "...", "x": 10, "y": 10 }],
//!   "mobs": [{ "name": "goblet", "room": "gates", "description": "a goblet", "takeable": true }],
//!   "player": { "room": "gates" }
//! }
//! ```
//!
//! Building registers rooms first, then the player, then the mobs, all in
//! file order.

use std::fs;
use std::path::Path;

use fortress_foundation::{Coordinate, Error, ErrorContext, MobId, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::mob::MobAttributes;
use crate::world::World;

/// Name the player mob is registered under.
pub const PLAYER_NAME: &str = "player";

/// A room record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Unique room name.
    pub name: String,
    /// Room text.
    pub description: String,
    /// East-west position.
    pub x: i64,
    /// North-south position.
    pub y: i64,
    /// Vertical position.
    #[serde(default)]
    pub z: i64,
}

impl RoomRecord {
    /// Returns the record's grid position.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y, self.z)
    }
}

fn default_health() -> i64 {
    MobAttributes::default().health
}

/// A mob record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobRecord {
    /// Mob name; need not be unique.
    pub name: String,
    /// Name of the starting room.
    pub room: String,
    /// Mob description, e.g. "a beautiful goblet".
    pub description: String,
    /// Whether the mob can be picked up.
    #[serde(default)]
    pub takeable: bool,
    /// Hit points.
    #[serde(default = "default_health")]
    pub health: i64,
    /// Money carried.
    #[serde(default)]
    pub ducats: i64,
}

impl MobRecord {
    fn attributes(&self) -> MobAttributes {
        MobAttributes {
            takeable: self.takeable,
            health: self.health,
            ducats: self.ducats,
        }
    }
}

fn default_player_description() -> String {
    "yourself".to_string()
}

/// The player's starting point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Name of the starting room.
    pub room: String,
    /// How the player appears to themselves.
    #[serde(default = "default_player_description")]
    pub description: String,
}

/// A complete world description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDefinition {
    /// Rooms, in registration order.
    pub rooms: Vec<RoomRecord>,
    /// Mobs other than the player, in registration order.
    #[serde(default)]
    pub mobs: Vec<MobRecord>,
    /// The player.
    pub player: PlayerRecord,
}

/// A populated world and the mob the player controls.
#[derive(Clone, Debug)]
pub struct BuiltWorld {
    /// The registry.
    pub world: World,
    /// The player's mob.
    pub player: MobId,
}

impl WorldDefinition {
    /// Parses a JSON world definition.
    ///
    /// # Errors
    ///
    /// Returns `WorldDefinition` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::world_definition(e.to_string()))
    }

    /// Reads and parses a JSON world definition file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read and `WorldDefinition` if it
    /// is malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let context = || ErrorContext::new().with_source(path.display().to_string());
        let json = fs::read_to_string(path).map_err(|e| Error::from(e).with_context(context()))?;
        Self::from_json(&json).map_err(|e| e.with_context(context()))
    }

    /// Registers every record in a fresh [`World`].
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` on a room name or coordinate collision and
    /// `NotFound` if a mob or the player names an unknown room. The error
    /// carries the record being registered as a context frame.
    pub fn build(&self) -> Result<BuiltWorld> {
        let mut world = World::new();

        for room in &self.rooms {
            world
                .create_room(&room.name, &room.description, room.coordinate())
                .map_err(|e| e.with_frame(format!("registering room '{}'", room.name)))?;
        }

        let start = world
            .room_by_name(&self.player.room)
            .map_err(|e| e.with_frame("placing the player"))?
            .id();
        let player = world.create_mob(
            PLAYER_NAME,
            start,
            &self.player.description,
            MobAttributes::default(),
        )?;

        for mob in &self.mobs {
            let frame = || format!("registering mob '{}'", mob.name);
            let room = world
                .room_by_name(&mob.room)
                .map_err(|e| e.with_frame(frame()))?
                .id();
            world
                .create_mob(&mob.name, room, &mob.description, mob.attributes())
                .map_err(|e| e.with_frame(frame()))?;
        }

        info!(
            rooms = world.room_count(),
            mobs = world.mob_count(),
            "world built"
        );
        Ok(BuiltWorld { world, player })
    }
}
