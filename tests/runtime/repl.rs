//! REPL loop tests with scripted input.

use fortress_runtime::{Repl, ScriptedEditor, Session, Step, is_affirmative};

fn repl(lines: &[&str]) -> Repl<ScriptedEditor> {
    let session = Session::fortress().unwrap();
    Repl::with_editor(ScriptedEditor::new(lines.iter().copied()), session).without_banner()
}

#[test]
fn affirmative_answers() {
    for answer in ["y", "Y", "yes", " YES ", "Yes"] {
        assert!(is_affirmative(answer), "{answer:?}");
    }
    for answer in ["", "n", "no", "yeah", "sure"] {
        assert!(!is_affirmative(answer), "{answer:?}");
    }
}

#[test]
fn declined_quit_continues() {
    let mut repl = repl(&["quit", "n", "look"]);
    assert_eq!(repl.step().unwrap(), Step::Continue);
    assert_eq!(repl.step().unwrap(), Step::Continue);
    assert_eq!(repl.editor().remaining(), 0);
}

#[test]
fn confirmed_quit_ends_the_loop() {
    let mut repl = repl(&["quit", "yes", "look"]);
    assert_eq!(repl.step().unwrap(), Step::Quit);
    assert_eq!(repl.editor().remaining(), 1);
}

#[test]
fn end_of_input_during_confirmation_quits() {
    let mut repl = repl(&["quit"]);
    assert_eq!(repl.step().unwrap(), Step::Quit);
}

#[test]
fn end_of_input_quits() {
    let mut repl = repl(&[]);
    assert_eq!(repl.step().unwrap(), Step::Quit);
}

#[test]
fn blank_lines_are_not_recorded() {
    let mut repl = repl(&["", "   ", "look"]);
    repl.run().unwrap();
    assert_eq!(repl.editor().history(), ["look"]);
}
