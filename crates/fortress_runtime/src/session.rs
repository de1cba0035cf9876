//! Session state.
//!
//! The session holds the world registry and the player's mob, and runs one
//! line of input at a time through the parser and dispatcher.

use fortress_foundation::{MobId, Result};
use fortress_parser::{Command, CommandParser};
use fortress_world::{BuiltWorld, World, WorldDefinition};
use tracing::debug;

use crate::describe::full_description;
use crate::dispatcher::{Dispatcher, Reply};

/// The built-in world definition.
pub const FORTRESS_OF_PERIL: &str = include_str!("../assets/fortress.json");

/// A single-player game session.
#[derive(Clone, Debug)]
pub struct Session {
    /// The world registry.
    world: World,
    /// The mob the player controls.
    player: MobId,
}

impl Session {
    /// Creates a session over an already-built world.
    #[must_use]
    pub fn new(world: World, player: MobId) -> Self {
        Self { world, player }
    }

    /// Builds a session from a world definition.
    ///
    /// # Errors
    ///
    /// Returns the definition's build error (e.g. `DuplicateKey`).
    pub fn from_definition(definition: &WorldDefinition) -> Result<Self> {
        let BuiltWorld { world, player } = definition.build()?;
        Ok(Self::new(world, player))
    }

    /// Builds a session in the Fortress of Peril.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded world definition is invalid.
    pub fn fortress() -> Result<Self> {
        Self::from_definition(&WorldDefinition::from_json(FORTRESS_OF_PERIL)?)
    }

    /// Returns a reference to the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the player's mob.
    #[must_use]
    pub const fn player(&self) -> MobId {
        self.player
    }

    /// Parses a line of input against the world's vocabulary.
    #[must_use]
    pub fn parse(&self, input: &str) -> Command {
        CommandParser::new(self.world.lexicon()).parse(input)
    }

    /// Runs a parsed command for the player.
    pub fn execute_command(&mut self, command: &Command) -> Reply {
        debug!(%command, "dispatching");
        Dispatcher::new(&mut self.world, self.player).dispatch(command)
    }

    /// Parses and runs a line of input.
    pub fn execute(&mut self, input: &str) -> Reply {
        let command = self.parse(input);
        self.execute_command(&command)
    }

    /// Describes the player's surroundings, for the start of a game.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the player is not in a room.
    pub fn opening(&self) -> Result<String> {
        let room = self.world.room_of(self.player)?.id();
        full_description(&self.world, room, self.player)
    }
}
