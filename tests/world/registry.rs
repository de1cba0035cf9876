//! Registry tests.
//!
//! Every index must agree, and failed registration must leave no trace.

use fortress_foundation::{Coordinate, ErrorKind, RoomId};
use fortress_world::{MobAttributes, World};
use proptest::prelude::*;

#[test]
fn all_three_room_lookups_return_the_same_room() {
    let mut world = World::new();
    let id = world
        .create_room("cellar", "Damp and dark.", Coordinate::new(3, -4, -1))
        .unwrap();

    let by_index = world.room_by_index(id.index()).unwrap();
    let by_name = world.room_by_name("cellar").unwrap();
    let by_coord = world.room_at(Coordinate::new(3, -4, -1)).unwrap();

    assert!(std::ptr::eq(by_index, by_name));
    assert!(std::ptr::eq(by_name, by_coord));
}

#[test]
fn duplicate_registration_leaves_registry_unchanged() {
    let mut world = World::new();
    world
        .create_room("gates", "Gates.", Coordinate::new(0, 0, 0))
        .unwrap();

    let by_name = world.create_room("gates", "Other.", Coordinate::new(5, 5, 5));
    let by_coord = world.create_room("yard", "Yard.", Coordinate::new(0, 0, 0));

    assert!(matches!(by_name.unwrap_err().kind, ErrorKind::DuplicateKey { .. }));
    assert!(matches!(by_coord.unwrap_err().kind, ErrorKind::DuplicateKey { .. }));
    assert_eq!(world.room_count(), 1);
    assert!(world.room_at(Coordinate::new(5, 5, 5)).is_err());
    assert!(world.room_by_name("yard").is_err());
    assert!(world.room_by_index(1).is_err());
    assert_eq!(world.room_at(Coordinate::new(0, 0, 0)).unwrap().description(), "Gates.");
}

#[test]
fn room_names_are_case_insensitive_keys() {
    let mut world = World::new();
    world
        .create_room("Gates", "Gates.", Coordinate::new(0, 0, 0))
        .unwrap();
    assert_eq!(world.room_by_name("GATES").unwrap().name(), "Gates");
    assert!(world
        .create_room("gates", "Again.", Coordinate::new(1, 0, 0))
        .is_err());
}

#[test]
fn mob_keeps_room_membership_consistent() {
    let mut world = World::new();
    let a = world
        .create_room("a", "A.", Coordinate::new(0, 0, 0))
        .unwrap();
    let b = world
        .create_room("b", "B.", Coordinate::new(0, 0, 1))
        .unwrap();
    let bat = world
        .create_mob("bat", a, "a bat", MobAttributes::default())
        .unwrap();

    world.move_mob(bat, "UP").unwrap();
    for mob in world.mobs() {
        let room = world.room(mob.room().unwrap()).unwrap();
        assert!(room.contains(mob.id()));
    }
    assert_eq!(world.room_of(bat).unwrap().id(), b);
    assert!(world.room(a).unwrap().inhabitants().is_empty());
}

#[test]
fn mob_attributes_are_recorded() {
    let mut world = World::new();
    let vault = world
        .create_room("vault", "A vault.", Coordinate::default())
        .unwrap();
    let miser = world
        .create_mob(
            "miser",
            vault,
            "a miser",
            MobAttributes::default().with_health(4).with_ducats(300),
        )
        .unwrap();
    let mob = world.mob(miser).unwrap();
    assert_eq!(mob.health(), 4);
    assert_eq!(mob.ducats(), 300);
    assert!(!mob.is_takeable());
}

#[test]
fn unknown_room_handle_is_not_found() {
    let world = World::new();
    assert!(world.room(RoomId::new(0)).unwrap_err().is_not_found());
}

proptest! {
    #[test]
    fn registered_rooms_are_found_by_every_key(
        coords in prop::collection::hash_set((-20i64..20, -20i64..20, -3i64..3), 1..30)
    ) {
        let mut world = World::new();
        let coords: Vec<_> = coords.into_iter().collect();
        for (i, &(x, y, z)) in coords.iter().enumerate() {
            world
                .create_room(format!("room{i}"), "A room.", Coordinate::new(x, y, z))
                .unwrap();
        }
        for (i, &(x, y, z)) in coords.iter().enumerate() {
            let by_index = world.room_by_index(i).unwrap().id();
            let by_name = world.room_by_name(&format!("room{i}")).unwrap().id();
            let by_coord = world.room_at(Coordinate::new(x, y, z)).unwrap().id();
            prop_assert_eq!(by_index, by_name);
            prop_assert_eq!(by_name, by_coord);
        }
    }
}
