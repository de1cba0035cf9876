//! Mobs: characters, creatures, and the items that double as them.

use fortress_foundation::{MobId, RoomId};

/// Where a mob currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// In a room's inhabitant or content list.
    InRoom(RoomId),
    /// In another mob's inventory.
    HeldBy(MobId),
}

/// Optional attributes supplied when a mob is created.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MobAttributes {
    /// Whether the mob can be picked up.
    pub takeable: bool,
    /// Hit points.
    pub health: i64,
    /// Money carried.
    pub ducats: i64,
}

impl Default for MobAttributes {
    fn default() -> Self {
        Self {
            takeable: false,
            health: 10,
            ducats: 0,
        }
    }
}

impl MobAttributes {
    /// Marks the mob as takeable.
    #[must_use]
    pub const fn takeable(mut self) -> Self {
        self.takeable = true;
        self
    }

    /// Sets the mob's health.
    #[must_use]
    pub const fn with_health(mut self, health: i64) -> Self {
        self.health = health;
        self
    }

    /// Sets the mob's ducats.
    #[must_use]
    pub const fn with_ducats(mut self, ducats: i64) -> Self {
        self.ducats = ducats;
        self
    }
}

/// A character, creature, or item in the world.
#[derive(Clone, Debug)]
pub struct Mob {
    id: MobId,
    name: String,
    description: String,
    location: Location,
    /// Held items, in the order they were taken.
    inventory: Vec<MobId>,
    health: i64,
    ducats: i64,
    takeable: bool,
}

impl Mob {
    pub(crate) fn new(
        id: MobId,
        name: String,
        description: String,
        room: RoomId,
        attributes: MobAttributes,
    ) -> Self {
        Self {
            id,
            name,
            description,
            location: Location::InRoom(room),
            inventory: Vec::new(),
            health: attributes.health,
            ducats: attributes.ducats,
            takeable: attributes.takeable,
        }
    }

    /// Returns this mob's handle.
    #[must_use]
    pub const fn id(&self) -> MobId {
        self.id
    }

    /// Returns the mob's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the mob's description, e.g. "a beautiful goblet".
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns where the mob is.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Returns the room the mob is in, if it is not being carried.
    #[must_use]
    pub const fn room(&self) -> Option<RoomId> {
        match self.location {
            Location::InRoom(room) => Some(room),
            Location::HeldBy(_) => None,
        }
    }

    /// Returns the held items.
    #[must_use]
    pub fn inventory(&self) -> &[MobId] {
        &self.inventory
    }

    /// Returns true if the item is in this mob's inventory.
    #[must_use]
    pub fn holds(&self, item: MobId) -> bool {
        self.inventory.contains(&item)
    }

    /// Returns the mob's health.
    #[must_use]
    pub const fn health(&self) -> i64 {
        self.health
    }

    /// Returns the mob's ducats.
    #[must_use]
    pub const fn ducats(&self) -> i64 {
        self.ducats
    }

    /// Returns true if the mob can be picked up.
    #[must_use]
    pub const fn is_takeable(&self) -> bool {
        self.takeable
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub(crate) fn add_item(&mut self, item: MobId) {
        self.inventory.push(item);
    }

    pub(crate) fn remove_item(&mut self, item: MobId) -> bool {
        if let Some(pos) = self.inventory.iter().position(|&m| m == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }
}
