//! The turn loop.

use fortress_foundation::Result;
use tracing::info;

use crate::dispatcher::Reply;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// Question asked before quitting.
pub const QUIT_PROMPT: &str = "Are you sure you want to quit the game? ";

/// Returns true for "y" or "yes" in any case.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Whether the session continues after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Keep reading input.
    Continue,
    /// The player quit or input ended.
    Quit,
}

/// The interactive game loop.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Game state.
    session: Session,

    /// Whether to describe the starting room before the first prompt.
    show_banner: bool,

    /// Whether to print each parsed command before running it.
    debug: bool,

    /// Primary prompt.
    prompt: String,
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor and session.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_vocabulary(session.world().lexicon());
        Self {
            editor,
            session,
            show_banner: true,
            debug: false,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the opening room description.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Enables or disables printing of parsed commands.
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a reference to the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs turns until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            println!("\n{}\n", self.session.opening()?);
        }

        while self.step()? == Step::Continue {}

        info!("session ended");
        println!("\nFarewell, adventurer.");
        Ok(())
    }

    /// Reads one line and plays one turn.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn step(&mut self) -> Result<Step> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(Step::Continue);
            }
            ReadResult::Eof => return Ok(Step::Quit),
        };

        // Blank lines still take a turn; they just stay out of history.
        if !input.trim().is_empty() {
            self.editor.add_history(&input);
        }

        let command = self.session.parse(&input);
        if self.debug {
            println!("[{command}]");
        }

        match self.session.execute_command(&command) {
            Reply::Text(text) => {
                println!("{text}\n");
                Ok(Step::Continue)
            }
            Reply::ConfirmQuit => self.confirm_quit(),
        }
    }

    fn confirm_quit(&mut self) -> Result<Step> {
        match self.editor.read_line(QUIT_PROMPT)? {
            ReadResult::Line(answer) if is_affirmative(&answer) => Ok(Step::Quit),
            ReadResult::Eof => Ok(Step::Quit),
            ReadResult::Line(_) | ReadResult::Interrupted => Ok(Step::Continue),
        }
    }
}
