//! Integer grid coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in the world grid.
///
/// North/south runs along `y`, east/west along `x`, and up/down along `z`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// East-west axis; east is positive.
    pub x: i64,
    /// North-south axis; north is positive.
    pub y: i64,
    /// Vertical axis; up is positive.
    pub z: i64,
}

impl Coordinate {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Returns this coordinate shifted by the given deltas, or `None` if
    /// any axis would leave the `i64` range.
    #[must_use]
    pub fn offset(self, dx: i64, dy: i64, dz: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }
}

impl From<(i64, i64, i64)> for Coordinate {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
