//! Standard word tables.
//!
//! Contains the default vocabulary the game's parser recognizes. Entity
//! names are added on top of these as the world is populated.

/// Canonical verb tokens.
pub mod verbs {
    /// End the session after confirmation.
    pub const QUIT: &str = "QUIT";
    /// List held items.
    pub const INVENTORY: &str = "INVENTORY";
    /// Move in a direction.
    pub const GO: &str = "GO";
    /// Describe the room, an entity, or a neighbouring room.
    pub const LOOK: &str = "LOOK";
    /// Pick up a takeable entity.
    pub const GET: &str = "GET";
    /// Put down a held entity.
    pub const DROP: &str = "DROP";
    /// Render the current level.
    pub const MAP: &str = "MAP";
    /// List the recognized verbs.
    pub const HELP: &str = "HELP";
}

/// Direction tokens, including the diagonals.
pub const DIRECTIONS: &[&str] = &[
    "NORTH",
    "SOUTH",
    "EAST",
    "WEST",
    "NORTHWEST",
    "NORTHEAST",
    "SOUTHEAST",
    "SOUTHWEST",
    "UP",
    "DOWN",
];

/// Verb tokens.
pub const VERBS: &[&str] = &[
    verbs::QUIT,
    verbs::INVENTORY,
    verbs::GO,
    verbs::LOOK,
    verbs::GET,
    verbs::DROP,
    verbs::MAP,
    verbs::HELP,
];

/// Nouns recognized before any entity is registered.
pub const NOUNS: &[&str] = &["PLAYER"];

/// Words dropped after synonym replacement.
pub const FILLER: &[&str] = &["THE", "AT", "TO", "AND", "OF", "A", "AN"];

/// Alternate spellings and their canonical tokens.
pub const SYNONYMS: &[(&str, &str)] = &[
    // Verbs
    ("TAKE", "GET"),
    ("L", "LOOK"),
    ("SCRUTINIZE", "LOOK"),
    ("EXAMINE", "LOOK"),
    ("X", "LOOK"),
    ("I", "INVENTORY"),
    ("INV", "INVENTORY"),
    ("WALK", "GO"),
    ("MOVE", "GO"),
    ("RUN", "GO"),
    ("Q", "QUIT"),
    // Directions
    ("N", "NORTH"),
    ("S", "SOUTH"),
    ("E", "EAST"),
    ("W", "WEST"),
    ("NE", "NORTHEAST"),
    ("SE", "SOUTHEAST"),
    ("NW", "NORTHWEST"),
    ("SW", "SOUTHWEST"),
    ("U", "UP"),
    ("D", "DOWN"),
    // Nouns
    ("YOURSELF", "PLAYER"),
    ("SELF", "PLAYER"),
    ("ME", "PLAYER"),
];
