//! Command dispatch.
//!
//! Interprets a parsed [`Command`] for the player against the [`World`].
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. `QUIT` asks for confirmation.
//! 2. A direction with no verb, or with `GO`, moves the player.
//! 3. `GO` without a direction asks where.
//! 4. `LOOK` with a direction peeks at the neighbouring room.
//! 5. `LOOK` alone describes the current room.
//! 6. `LOOK` with more words examines a present or held entity.
//! 7. `GET` with a known noun picks it up if possible.
//! 8. `GET` with unknown words reports it is not here.
//! 9. `GET` alone asks what to take.
//! 10. `INVENTORY` lists held items.
//! 11. `DROP` puts a held item down.
//! 12. `MAP` renders the current level.
//! 13. `HELP` lists the verbs.
//! 14. Anything else cannot be done.
//!
//! Lookup misses and bad directions become player-facing text here; no
//! error escapes a turn.

use fortress_foundation::{Error, MobId};
use fortress_parser::Command;
use fortress_parser::stdlib::verbs;
use fortress_world::{Location, World};
use tracing::{trace, warn};

use crate::describe::{full_description, render_map};

/// What a turn produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the player.
    Text(String),
    /// The player asked to quit; confirm before ending the session.
    ConfirmQuit,
}

impl Reply {
    fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

const NOT_HERE: &str = "You don't see that here.";
const CANT: &str = "You can't do that.";

/// Where a named entity is relative to the player.
enum Presence {
    InRoom(MobId),
    Held(MobId),
    Absent,
}

/// Dispatches commands on behalf of one actor.
pub struct Dispatcher<'w> {
    world: &'w mut World,
    player: MobId,
}

impl<'w> Dispatcher<'w> {
    /// Creates a dispatcher acting as `player`.
    pub fn new(world: &'w mut World, player: MobId) -> Self {
        Self { world, player }
    }

    /// Runs one command.
    pub fn dispatch(&mut self, command: &Command) -> Reply {
        let verb = command.verb.as_deref();
        let direction = command.direction.as_deref();

        match (verb, direction) {
            (Some(verbs::QUIT), _) => Reply::ConfirmQuit,
            (None | Some(verbs::GO), Some(direction)) => self.go(direction),
            (Some(verbs::GO), None) => Reply::text("Go where?"),
            (Some(verbs::LOOK), Some(direction)) => self.peek(direction),
            (Some(verbs::LOOK), None) if !command.has_remainder() => self.look_around(),
            (Some(verbs::LOOK), None) => self.examine(command.noun.as_deref()),
            (Some(verbs::GET), _) => self.take(command),
            (Some(verbs::INVENTORY), _) => self.inventory(),
            (Some(verbs::DROP), _) => self.put_down(command),
            (Some(verbs::MAP), _) => self.map(),
            (Some(verbs::HELP), _) => self.help(),
            _ => Reply::text(CANT),
        }
    }

    /// Converts an unexpected failure into the fallback reply.
    fn recover(&self, error: &Error) -> Reply {
        warn!(%error, player = %self.player, "unexpected failure during dispatch");
        Reply::text(CANT)
    }

    fn go(&mut self, direction: &str) -> Reply {
        let dir = direction.to_lowercase();
        match self.world.move_mob(self.player, direction) {
            Ok(to) => {
                let name = match self.world.room(to) {
                    Ok(room) => room.name().to_string(),
                    Err(e) => return self.recover(&e),
                };
                match full_description(self.world, to, self.player) {
                    Ok(text) => Reply::Text(format!("You move {dir} to the {name}.\n\n{text}")),
                    Err(e) => self.recover(&e),
                }
            }
            Err(e) => {
                trace!(error = %e, direction, "movement refused");
                Reply::Text(format!("Sadly, you can't go {dir} from here."))
            }
        }
    }

    fn peek(&self, direction: &str) -> Reply {
        let here = match self.world.room_of(self.player) {
            Ok(room) => room.id(),
            Err(e) => return self.recover(&e),
        };
        match self.world.neighbor(here, direction) {
            Ok(room) => {
                let whereabouts = match direction {
                    "UP" => "Above you".to_string(),
                    "DOWN" => "Below you".to_string(),
                    _ => format!("To the {}", direction.to_lowercase()),
                };
                Reply::Text(format!("{whereabouts}, you see the {}.", room.name()))
            }
            Err(e) => {
                trace!(error = %e, direction, "nothing to see");
                Reply::text("You don't see anything in that direction.")
            }
        }
    }

    fn look_around(&self) -> Reply {
        let described = self
            .world
            .room_of(self.player)
            .and_then(|room| full_description(self.world, room.id(), self.player));
        match described {
            Ok(text) => Reply::Text(text),
            Err(e) => self.recover(&e),
        }
    }

    fn examine(&self, noun: Option<&str>) -> Reply {
        let target = match noun.map(|n| self.locate(n)) {
            Some(Presence::InRoom(mob) | Presence::Held(mob)) => mob,
            Some(Presence::Absent) | None => return Reply::text(NOT_HERE),
        };
        match self.world.mob(target) {
            Ok(mob) => Reply::Text(format!("You're looking at {}.", mob.description())),
            Err(e) => self.recover(&e),
        }
    }

    fn take(&mut self, command: &Command) -> Reply {
        let Some(noun) = command.noun.as_deref() else {
            return if command.has_remainder() {
                Reply::text(NOT_HERE)
            } else {
                Reply::text("Take what?")
            };
        };

        let item = match self.locate(noun) {
            Presence::InRoom(mob) => mob,
            Presence::Held(_) => return Reply::text("You already have that."),
            Presence::Absent => return Reply::text(NOT_HERE),
        };
        let name = match self.world.mob(item) {
            Ok(mob) if !mob.is_takeable() => return Reply::text("You can't take that!"),
            Ok(mob) => mob.name().to_string(),
            Err(e) => return self.recover(&e),
        };
        match self.world.give_to(item, self.player) {
            Ok(()) => Reply::Text(format!("You took the {name}.")),
            Err(e) => self.recover(&e),
        }
    }

    fn put_down(&mut self, command: &Command) -> Reply {
        let Some(noun) = command.noun.as_deref() else {
            return if command.has_remainder() {
                Reply::text("You aren't carrying that.")
            } else {
                Reply::text("Drop what?")
            };
        };

        let Presence::Held(item) = self.locate(noun) else {
            return Reply::text("You aren't carrying that.");
        };
        let name = match self.world.mob(item) {
            Ok(mob) => mob.name().to_string(),
            Err(e) => return self.recover(&e),
        };
        match self.world.drop_from(item, self.player) {
            Ok(_) => Reply::Text(format!("You dropped the {name}.")),
            Err(e) => self.recover(&e),
        }
    }

    fn inventory(&self) -> Reply {
        let names = self.world.mob(self.player).and_then(|player| {
            player
                .inventory()
                .iter()
                .map(|&item| self.world.mob(item).map(|m| m.name().to_string()))
                .collect::<Result<Vec<_>, _>>()
        });
        match names {
            Ok(names) if names.is_empty() => Reply::text("You aren't carrying anything."),
            Ok(names) => Reply::Text(format!("You are carrying:\n\n{}", names.join("\n"))),
            Err(e) => self.recover(&e),
        }
    }

    fn map(&self) -> Reply {
        match render_map(self.world, self.player) {
            Ok(map) => Reply::Text(map),
            Err(e) => self.recover(&e),
        }
    }

    fn help(&self) -> Reply {
        let verbs: Vec<_> = self.world.lexicon().verbs().collect();
        Reply::Text(format!(
            "I understand these verbs: {}. You can also just type a direction.",
            verbs.join(", ")
        ))
    }

    /// Resolves a noun to an entity, preferring one in the player's room
    /// over one in the player's inventory.
    fn locate(&self, noun: &str) -> Presence {
        let candidates = match self.world.mobs_by_name(noun) {
            Ok(mobs) => mobs,
            Err(e) => {
                if !e.is_not_found() {
                    warn!(error = %e, "noun lookup failed");
                }
                trace!(noun, "no mob by that name");
                return Presence::Absent;
            }
        };
        let here = self.world.mob(self.player).ok().and_then(|p| p.room());

        if let Some(mob) = candidates
            .iter()
            .find(|m| here.is_some_and(|room| m.location() == Location::InRoom(room)))
        {
            return Presence::InRoom(mob.id());
        }
        if let Some(mob) = candidates
            .iter()
            .find(|m| m.location() == Location::HeldBy(self.player))
        {
            return Presence::Held(mob.id());
        }
        Presence::Absent
    }
}
