//! Rooms: static locations in the world grid.

use fortress_foundation::{Coordinate, MobId, RoomId};

/// A location in the world.
///
/// Rooms are created once and never destroyed. Only their inhabitant and
/// content lists change, and only through [`World`](crate::World).
#[derive(Clone, Debug)]
pub struct Room {
    id: RoomId,
    name: String,
    description: String,
    coordinate: Coordinate,
    /// Mobs standing here, in arrival order.
    inhabitants: Vec<MobId>,
    /// Items lying here, in the order they were put down.
    contents: Vec<MobId>,
}

impl Room {
    pub(crate) fn new(
        id: RoomId,
        name: String,
        description: String,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id,
            name,
            description,
            coordinate,
            inhabitants: Vec::new(),
            contents: Vec::new(),
        }
    }

    /// Returns this room's handle.
    #[must_use]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the room's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the room's text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the room's grid position.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns the mobs standing here.
    #[must_use]
    pub fn inhabitants(&self) -> &[MobId] {
        &self.inhabitants
    }

    /// Returns the items lying here.
    #[must_use]
    pub fn contents(&self) -> &[MobId] {
        &self.contents
    }

    /// Returns everything present: inhabitants first, then contents.
    pub fn present(&self) -> impl Iterator<Item = MobId> + '_ {
        self.inhabitants.iter().chain(&self.contents).copied()
    }

    /// Returns true if the mob is an inhabitant or part of the contents.
    #[must_use]
    pub fn contains(&self, mob: MobId) -> bool {
        self.inhabitants.contains(&mob) || self.contents.contains(&mob)
    }

    pub(crate) fn add_inhabitant(&mut self, mob: MobId) {
        self.inhabitants.push(mob);
    }

    pub(crate) fn add_content(&mut self, mob: MobId) {
        self.contents.push(mob);
    }

    /// Removes the mob from whichever list holds it.
    pub(crate) fn remove(&mut self, mob: MobId) -> bool {
        if let Some(pos) = self.inhabitants.iter().position(|&m| m == mob) {
            self.inhabitants.remove(pos);
            return true;
        }
        if let Some(pos) = self.contents.iter().position(|&m| m == mob) {
            self.contents.remove(pos);
            return true;
        }
        false
    }
}
