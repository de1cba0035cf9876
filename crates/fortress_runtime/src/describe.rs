//! Room descriptions and the level map.

use std::collections::HashSet;

use fortress_foundation::{Coordinate, MobId, Result, RoomId};
use fortress_world::World;

/// Builds the "You see here ..." sentence for a list of descriptions.
///
/// Returns `None` for an empty list. Three or more items are joined with
/// commas and a final "and".
#[must_use]
pub fn sighting(descriptions: &[&str]) -> Option<String> {
    match descriptions {
        [] => None,
        [only] => Some(format!("You see here {only}.")),
        [first, second] => Some(format!("You see here {first} and {second}.")),
        [init @ .., last] => Some(format!("You see here {}, and {last}.", init.join(", "))),
    }
}

/// Describes a room as seen by `viewer`: the room text followed by every
/// other mob present.
///
/// # Errors
///
/// Returns `NotFound` if a handle is not registered.
pub fn full_description(world: &World, room: RoomId, viewer: MobId) -> Result<String> {
    let room = world.room(room)?;
    let others = room
        .present()
        .filter(|&mob| mob != viewer)
        .map(|mob| world.mob(mob).map(|m| m.description()))
        .collect::<Result<Vec<_>>>()?;

    let mut text = room.description().to_string();
    if let Some(sentence) = sighting(&others) {
        text.push_str("\n\n");
        text.push_str(&sentence);
    }
    Ok(text)
}

/// How many cells the map shows on each side of the viewer.
pub const MAP_RADIUS: i64 = 10;

/// Renders the level `viewer` stands on, north at the top.
///
/// `@` marks the viewer, `#` any other room, `.` empty space. Only rooms
/// within [`MAP_RADIUS`] cells of the viewer on each axis are drawn; a
/// trailing note says when others were left out.
///
/// # Errors
///
/// Returns `NotFound` if the viewer is unknown or not in a room.
pub fn render_map(world: &World, viewer: MobId) -> Result<String> {
    let here = world.room_of(viewer)?.coordinate();
    let in_window = |c: &Coordinate| {
        c.x.abs_diff(here.x) <= MAP_RADIUS.unsigned_abs()
            && c.y.abs_diff(here.y) <= MAP_RADIUS.unsigned_abs()
    };

    let level: Vec<_> = world
        .rooms()
        .map(|room| room.coordinate())
        .filter(|c| c.z == here.z)
        .collect();
    let visible: HashSet<(i64, i64)> = level
        .iter()
        .filter(|c| in_window(c))
        .map(|c| (c.x, c.y))
        .collect();
    let truncated = visible.len() < level.len();

    // The viewer's room is always visible, so the bounds exist.
    let min_x = visible.iter().map(|c| c.0).min().unwrap_or(here.x);
    let max_x = visible.iter().map(|c| c.0).max().unwrap_or(here.x);
    let min_y = visible.iter().map(|c| c.1).min().unwrap_or(here.y);
    let max_y = visible.iter().map(|c| c.1).max().unwrap_or(here.y);

    let mut map = format!("Level {}:", here.z);
    for y in (min_y..=max_y).rev() {
        map.push('\n');
        for x in min_x..=max_x {
            let glyph = if x == here.x && y == here.y {
                '@'
            } else if visible.contains(&(x, y)) {
                '#'
            } else {
                '.'
            };
            map.push(glyph);
        }
    }
    if truncated {
        map.push_str(&format!(
            "\n(Rooms more than {MAP_RADIUS} steps away are not shown.)"
        ));
    }
    Ok(map)
}
