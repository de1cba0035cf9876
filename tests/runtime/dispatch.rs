//! Dispatch tests over custom worlds.

use fortress_runtime::{Reply, Session};
use fortress_world::WorldDefinition;

const TOWER: &str = r#"{
    "rooms": [
        { "name": "yard", "description": "A muddy yard.", "x": 0, "y": 0 },
        { "name": "stair", "description": "A winding stair.", "x": 0, "y": 0, "z": 1 },
        { "name": "shed", "description": "A leaning shed.", "x": 1, "y": 0 }
    ],
    "mobs": [
        { "name": "rat", "room": "yard", "description": "a grey rat" },
        { "name": "lamp", "room": "yard", "description": "a brass lamp", "takeable": true },
        { "name": "key", "room": "shed", "description": "an iron key", "takeable": true },
        { "name": "rat", "room": "shed", "description": "a brown rat" }
    ],
    "player": { "room": "yard" }
}"#;

fn tower() -> Session {
    let definition = WorldDefinition::from_json(TOWER).unwrap();
    Session::from_definition(&definition).unwrap()
}

fn say(session: &mut Session, input: &str) -> String {
    match session.execute(input) {
        Reply::Text(text) => text,
        Reply::ConfirmQuit => panic!("unexpected quit prompt for {input:?}"),
    }
}

#[test]
fn three_things_use_the_serial_comma() {
    let mut session = tower();
    say(&mut session, "east");
    say(&mut session, "w");
    assert_eq!(
        say(&mut session, "look"),
        "A muddy yard.\n\nYou see here a grey rat and a brass lamp."
    );
    say(&mut session, "drop lamp");
    say(&mut session, "take lamp");
    say(&mut session, "e");
    say(&mut session, "drop lamp");
    assert_eq!(
        say(&mut session, "look"),
        "A leaning shed.\n\nYou see here an iron key, a brown rat, and a brass lamp."
    );
}

#[test]
fn vertical_movement() {
    let mut session = tower();
    assert!(say(&mut session, "climb up").starts_with("You move up to the stair."));
    assert_eq!(say(&mut session, "look down"), "Below you, you see the yard.");
    assert_eq!(
        say(&mut session, "look up"),
        "You don't see anything in that direction."
    );
    assert!(say(&mut session, "d").starts_with("You move down to the yard."));
    assert_eq!(say(&mut session, "look up"), "Above you, you see the stair.");
    assert_eq!(say(&mut session, "look east"), "To the east, you see the shed.");
}

fn frontier() -> Session {
    let json = format!(
        r#"{{
            "rooms": [
                {{ "name": "edge", "description": "The end of everything.", "x": {max}, "y": 0 }},
                {{ "name": "ledge", "description": "A narrow ledge.", "x": {below}, "y": 0 }},
                {{ "name": "outpost", "description": "A lonely outpost.", "x": 20000, "y": 20000 }}
            ],
            "player": {{ "room": "edge" }}
        }}"#,
        max = i64::MAX,
        below = i64::MAX - 1,
    );
    let definition = WorldDefinition::from_json(&json).unwrap();
    Session::from_definition(&definition).unwrap()
}

#[test]
fn walking_off_the_grid_is_refused() {
    let mut session = frontier();
    assert_eq!(
        say(&mut session, "east"),
        "Sadly, you can't go east from here."
    );
    assert_eq!(
        say(&mut session, "look east"),
        "You don't see anything in that direction."
    );
    assert!(say(&mut session, "west").starts_with("You move west to the ledge."));
    assert!(say(&mut session, "e").starts_with("You move east to the edge."));
}

#[test]
fn map_of_a_sprawling_level_is_windowed() {
    let mut session = frontier();
    let map = say(&mut session, "map");
    assert_eq!(
        map,
        "Level 0:\n#@\n(Rooms more than 10 steps away are not shown.)"
    );
}

#[test]
fn shared_names_resolve_to_the_local_mob() {
    let mut session = tower();
    assert_eq!(say(&mut session, "x rat"), "You're looking at a grey rat.");
    say(&mut session, "e");
    assert_eq!(say(&mut session, "x rat"), "You're looking at a brown rat.");
}

#[test]
fn untakeable_things_stay_put() {
    let mut session = tower();
    assert_eq!(say(&mut session, "take rat"), "You can't take that!");
    assert_eq!(say(&mut session, "take key"), "You don't see that here.");
    assert_eq!(say(&mut session, "take"), "Take what?");
    assert_eq!(say(&mut session, "i"), "You aren't carrying anything.");
}

#[test]
fn map_marks_the_player() {
    let mut session = tower();
    assert_eq!(say(&mut session, "map"), "Level 0:\n@#");
    say(&mut session, "u");
    assert_eq!(say(&mut session, "map"), "Level 1:\n@");
}

#[test]
fn unknown_input_is_politely_refused() {
    let mut session = tower();
    assert_eq!(say(&mut session, "xyzzy"), "You can't do that.");
    assert_eq!(say(&mut session, ""), "You can't do that.");
    assert_eq!(say(&mut session, "  the  "), "You can't do that.");
    assert_eq!(say(&mut session, "dance with the rat"), "You can't do that.");
    assert!(say(&mut session, "help").starts_with("I understand these verbs:"));
}

#[test]
fn quit_asks_for_confirmation() {
    let mut session = tower();
    assert_eq!(session.execute("q"), Reply::ConfirmQuit);
    assert_eq!(session.execute("quit the game"), Reply::ConfirmQuit);
}
