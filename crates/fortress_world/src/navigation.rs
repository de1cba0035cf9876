//! Navigation: direction tokens to coordinate offsets.
//!
//! This module knows nothing about which rooms exist. Whether a destination
//! is occupied is the registry's question.

use std::fmt;
use std::str::FromStr;

use fortress_foundation::{Coordinate, Error, Result};

/// A navigable direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +y
    North,
    /// -y
    South,
    /// +x
    East,
    /// -x
    West,
    /// +z
    Up,
    /// -z
    Down,
}

impl Direction {
    /// Every navigable direction.
    pub const ALL: [Self; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Returns the canonical token, e.g. `NORTH`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::South => "SOUTH",
            Self::East => "EAST",
            Self::West => "WEST",
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }

    /// Returns the direction leading back.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns the `(dx, dy, dz)` step for this direction.
    #[must_use]
    pub const fn delta(self) -> (i64, i64, i64) {
        match self {
            Self::North => (0, 1, 0),
            Self::South => (0, -1, 0),
            Self::East => (1, 0, 0),
            Self::West => (-1, 0, 0),
            Self::Up => (0, 0, 1),
            Self::Down => (0, 0, -1),
        }
    }

    /// Returns the coordinate one step away in this direction, or `None`
    /// at the edge of the grid.
    #[must_use]
    pub fn step(self, from: Coordinate) -> Option<Coordinate> {
        let (dx, dy, dz) = self.delta();
        from.offset(dx, dy, dz)
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Accepts canonical tokens and their one-letter abbreviations, in any
    /// case. Diagonals are recognized words but not navigable.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NORTH" | "N" => Ok(Self::North),
            "SOUTH" | "S" => Ok(Self::South),
            "EAST" | "E" => Ok(Self::East),
            "WEST" | "W" => Ok(Self::West),
            "UP" | "U" => Ok(Self::Up),
            "DOWN" | "D" => Ok(Self::Down),
            _ => Err(Error::invalid_direction(s)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token().to_lowercase())
    }
}

/// Returns `coordinate` shifted one step in the direction named by `direction`.
///
/// # Errors
///
/// Returns `InvalidDirection` if the token is not a navigable direction or
/// the step would leave the grid.
pub fn direction_offset(coordinate: Coordinate, direction: &str) -> Result<Coordinate> {
    let parsed: Direction = direction.parse()?;
    parsed.step(coordinate).ok_or_else(|| {
        Error::invalid_direction(format!("{direction} from the edge at {coordinate}"))
    })
}
