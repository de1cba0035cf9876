//! World definition tests.

use fortress_foundation::ErrorKind;
use fortress_runtime::FORTRESS_OF_PERIL;
use fortress_world::{PLAYER_NAME, WorldDefinition};

#[test]
fn builtin_world_loads() {
    let def = WorldDefinition::from_json(FORTRESS_OF_PERIL).unwrap();
    assert_eq!(def.rooms.len(), 2);
    assert_eq!(def.mobs.len(), 2);

    let built = def.build().unwrap();
    let world = &built.world;
    assert_eq!(world.mob(built.player).unwrap().name(), PLAYER_NAME);
    assert!(world.lexicon().is_noun("GATEKEEPER"));
    assert!(world.lexicon().is_noun("GOBLET"));
    assert!(world.lexicon().is_noun("ANTECHAMBER"));
    assert!(world.mobs_by_name("goblet").unwrap()[0].is_takeable());
}

#[test]
fn duplicate_coordinates_abort_the_build() {
    let json = r#"{
        "rooms": [
            { "name": "a", "description": "A.", "x": 0, "y": 0 },
            { "name": "b", "description": "B.", "x": 0, "y": 0, "z": 0 }
        ],
        "player": { "room": "a" }
    }"#;
    let err = WorldDefinition::from_json(json).unwrap().build().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateKey { .. }));
}

#[test]
fn shared_mob_names_are_kept() {
    let json = r#"{
        "rooms": [
            { "name": "a", "description": "A.", "x": 0, "y": 0 },
            { "name": "b", "description": "B.", "x": 1, "y": 0 }
        ],
        "mobs": [
            { "name": "rat", "room": "a", "description": "a grey rat" },
            { "name": "rat", "room": "b", "description": "a brown rat" }
        ],
        "player": { "room": "a" }
    }"#;
    let built = WorldDefinition::from_json(json).unwrap().build().unwrap();
    let rats = built.world.mobs_by_name("RAT").unwrap();
    assert_eq!(rats.len(), 2);
    assert_eq!(rats[0].description(), "a grey rat");
    assert_eq!(rats[1].description(), "a brown rat");
}

#[test]
fn missing_fields_are_rejected() {
    let err = WorldDefinition::from_json(r#"{ "rooms": [] }"#).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::WorldDefinition(_)));
}
