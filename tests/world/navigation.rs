//! Navigation tests.

use fortress_foundation::{Coordinate, ErrorKind};
use fortress_world::{Direction, direction_offset};
use proptest::prelude::*;

#[test]
fn north_then_south_returns_home() {
    let home = Coordinate::new(10, 10, 0);
    let there = direction_offset(home, "NORTH").unwrap();
    assert_eq!(there, Coordinate::new(10, 11, 0));
    assert_eq!(direction_offset(there, "SOUTH").unwrap(), home);
}

#[test]
fn unknown_tokens_are_invalid_directions() {
    for token in ["NORTHWEST", "SOUTHEAST", "LEFT", "GOBLET"] {
        let err = direction_offset(Coordinate::default(), token).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidDirection(_)), "{token}");
    }
}

proptest! {
    #[test]
    fn opposite_pairs_round_trip(
        x in any::<i32>(),
        y in any::<i32>(),
        z in any::<i32>(),
    ) {
        let c = Coordinate::new(i64::from(x), i64::from(y), i64::from(z));
        for (there, back) in [("NORTH", "SOUTH"), ("EAST", "WEST"), ("UP", "DOWN")] {
            let moved = direction_offset(c, there).unwrap();
            prop_assert_ne!(moved, c);
            prop_assert_eq!(direction_offset(moved, back).unwrap(), c);
        }
    }

    #[test]
    fn token_parses_back(index in 0usize..6) {
        let dir = Direction::ALL[index];
        prop_assert_eq!(dir.token().parse::<Direction>().unwrap(), dir);
        prop_assert_eq!(dir.opposite().opposite(), dir);
    }
}
