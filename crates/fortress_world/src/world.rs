//! The world registry.
//!
//! [`World`] owns every room and mob together with their lookup indexes:
//! by registration index, by name, and (rooms only) by coordinate. The
//! world is append-only; nothing is ever unregistered.
//!
//! Registering an entity also teaches the parser its name, so the
//! registry owns the [`Lexicon`].

use std::collections::HashMap;

use fortress_foundation::{Coordinate, EntityKind, Error, MobId, Result, RoomId};
use fortress_parser::Lexicon;
use tracing::debug;

use crate::mob::{Location, Mob, MobAttributes};
use crate::navigation::direction_offset;
use crate::room::Room;

/// Name keys are case-insensitive.
fn name_key(name: &str) -> String {
    name.to_uppercase()
}

/// The registry of rooms and mobs.
#[derive(Clone, Debug)]
pub struct World {
    rooms: Vec<Room>,
    rooms_by_name: HashMap<String, RoomId>,
    rooms_by_coordinate: HashMap<Coordinate, RoomId>,
    mobs: Vec<Mob>,
    /// Mob names may repeat; matches are kept in registration order.
    mobs_by_name: HashMap<String, Vec<MobId>>,
    lexicon: Lexicon,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates an empty world with the standard lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::standard())
    }

    /// Creates an empty world with the given lexicon.
    #[must_use]
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            rooms: Vec::new(),
            rooms_by_name: HashMap::new(),
            rooms_by_coordinate: HashMap::new(),
            mobs: Vec::new(),
            mobs_by_name: HashMap::new(),
            lexicon,
        }
    }

    /// Returns the parser vocabulary, extended with every registered name.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers a room.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if the name or coordinate is taken. Nothing is
    /// registered in that case.
    pub fn create_room(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        coordinate: Coordinate,
    ) -> Result<RoomId> {
        let name = name.into();
        let key = name_key(&name);
        if self.rooms_by_name.contains_key(&key) {
            return Err(Error::duplicate_key(EntityKind::Room, name));
        }
        if self.rooms_by_coordinate.contains_key(&coordinate) {
            return Err(Error::duplicate_key(EntityKind::Room, coordinate.to_string()));
        }

        let id = RoomId::new(self.rooms.len());
        debug!(%id, %name, %coordinate, "registering room");
        self.lexicon.register_noun(&name);
        self.rooms
            .push(Room::new(id, name, description.into(), coordinate));
        self.rooms_by_name.insert(key, id);
        self.rooms_by_coordinate.insert(coordinate, id);
        Ok(id)
    }

    /// Registers a mob as an inhabitant of `room`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `room` was not issued by this registry.
    pub fn create_mob(
        &mut self,
        name: impl Into<String>,
        room: RoomId,
        description: impl Into<String>,
        attributes: MobAttributes,
    ) -> Result<MobId> {
        let name = name.into();
        if room.index() >= self.rooms.len() {
            return Err(Error::not_found(EntityKind::Room, room.to_string()));
        }

        let id = MobId::new(self.mobs.len());
        debug!(%id, %name, %room, "registering mob");
        self.lexicon.register_noun(&name);
        self.mobs_by_name.entry(name_key(&name)).or_default().push(id);
        self.mobs
            .push(Mob::new(id, name, description.into(), room, attributes));
        self.rooms[room.index()].add_inhabitant(id);
        Ok(id)
    }

    // =========================================================================
    // Room lookup
    // =========================================================================

    /// Returns the room for a handle.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for a handle this registry did not issue.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.room_by_index(id.index())
    }

    /// Looks up a room by registration index.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the index is out of range.
    pub fn room_by_index(&self, index: usize) -> Result<&Room> {
        self.rooms
            .get(index)
            .ok_or_else(|| Error::not_found(EntityKind::Room, format!("#{index}")))
    }

    /// Looks up a room by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no room has that name.
    pub fn room_by_name(&self, name: &str) -> Result<&Room> {
        let id = self
            .rooms_by_name
            .get(&name_key(name))
            .ok_or_else(|| Error::not_found(EntityKind::Room, name))?;
        self.room(*id)
    }

    /// Looks up the room at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no room occupies the coordinate.
    pub fn room_at(&self, coordinate: Coordinate) -> Result<&Room> {
        let id = self
            .rooms_by_coordinate
            .get(&coordinate)
            .ok_or_else(|| Error::not_found(EntityKind::Room, coordinate.to_string()))?;
        self.room(*id)
    }

    /// Returns the room one step from `from` in the named direction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` for a non-navigable token and `NotFound`
    /// if there is no room there.
    pub fn neighbor(&self, from: RoomId, direction: &str) -> Result<&Room> {
        let origin = self.room(from)?.coordinate();
        self.room_at(direction_offset(origin, direction)?)
    }

    /// Returns the number of registered rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Iterates rooms in registration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    // =========================================================================
    // Mob lookup
    // =========================================================================

    /// Returns the mob for a handle.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for a handle this registry did not issue.
    pub fn mob(&self, id: MobId) -> Result<&Mob> {
        self.mob_by_index(id.index())
    }

    /// Looks up a mob by registration index.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the index is out of range.
    pub fn mob_by_index(&self, index: usize) -> Result<&Mob> {
        self.mobs
            .get(index)
            .ok_or_else(|| Error::not_found(EntityKind::Mob, format!("#{index}")))
    }

    /// Looks up every mob with the given name, ignoring case, in
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no mob has that name.
    pub fn mobs_by_name(&self, name: &str) -> Result<Vec<&Mob>> {
        let ids = self
            .mobs_by_name
            .get(&name_key(name))
            .ok_or_else(|| Error::not_found(EntityKind::Mob, name))?;
        ids.iter().map(|id| self.mob(*id)).collect()
    }

    /// Returns the number of registered mobs.
    #[must_use]
    pub fn mob_count(&self) -> usize {
        self.mobs.len()
    }

    /// Iterates mobs in registration order.
    pub fn mobs(&self) -> impl Iterator<Item = &Mob> {
        self.mobs.iter()
    }

    /// Returns the room a mob is standing in.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the mob is unknown or is being carried.
    pub fn room_of(&self, mob: MobId) -> Result<&Room> {
        let found = self.mob(mob)?;
        let room = found
            .room()
            .ok_or_else(|| Error::not_found(EntityKind::Room, format!("room of {}", found.name())))?;
        self.room(room)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Moves a mob one step in the named direction.
    ///
    /// The mob leaves its old room's inhabitants and is appended to the new
    /// room's. Nothing changes on error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` for a non-navigable token and `NotFound`
    /// if there is no room in that direction.
    pub fn move_mob(&mut self, mob: MobId, direction: &str) -> Result<RoomId> {
        let from = self.room_of(mob)?.id();
        let to = self.neighbor(from, direction)?.id();

        self.rooms[from.index()].remove(mob);
        self.rooms[to.index()].add_inhabitant(mob);
        self.mobs[mob.index()].set_location(Location::InRoom(to));
        debug!(%mob, %from, %to, direction, "moved mob");
        Ok(to)
    }

    /// Moves `item` from wherever it lies into `holder`'s inventory.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if either handle is unknown.
    pub fn give_to(&mut self, item: MobId, holder: MobId) -> Result<()> {
        let location = self.mob(item)?.location();
        self.mob(holder)?;

        match location {
            Location::InRoom(room) => {
                self.rooms[room.index()].remove(item);
            }
            Location::HeldBy(previous) => {
                self.mobs[previous.index()].remove_item(item);
            }
        }
        self.mobs[holder.index()].add_item(item);
        self.mobs[item.index()].set_location(Location::HeldBy(holder));
        debug!(%item, %holder, "item taken");
        Ok(())
    }

    /// Moves `item` out of `holder`'s inventory into the contents of the
    /// room `holder` stands in.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if either handle is unknown, `holder` is not in a
    /// room, or `holder` is not carrying `item`.
    pub fn drop_from(&mut self, item: MobId, holder: MobId) -> Result<RoomId> {
        let room = self.room_of(holder)?.id();
        let carrier = self.mob(holder)?;
        if !carrier.holds(item) {
            return Err(Error::not_found(
                EntityKind::Mob,
                format!("{item} in inventory of {}", carrier.name()),
            ));
        }

        self.mobs[holder.index()].remove_item(item);
        self.rooms[room.index()].add_content(item);
        self.mobs[item.index()].set_location(Location::InRoom(room));
        debug!(%item, %holder, %room, "item dropped");
        Ok(room)
    }
}
