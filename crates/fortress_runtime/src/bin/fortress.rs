//! Fortress of Peril CLI entry point.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fortress_foundation::Result;
use fortress_runtime::{LineEditor, Repl, RustylineEditor, ScriptedEditor, Session};
use fortress_world::WorldDefinition;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The Fortress of Peril: a very small text adventure.
#[derive(Debug, Parser)]
#[command(name = "fortress", version, about)]
struct Cli {
    /// Load a JSON world definition instead of the built-in fortress
    #[arg(long, value_name = "PATH")]
    world: Option<PathBuf>,

    /// Play commands from a file, one per line, then exit
    #[arg(short, long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Print the parser's reading of each command
    #[arg(short, long)]
    debug: bool,

    /// Skip the opening room description
    #[arg(long)]
    no_banner: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with game text.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = &e.context {
                eprintln!("{context}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let session = match &cli.world {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading world");
            Session::from_definition(&WorldDefinition::from_path(path)?)?
        }
        None => Session::fortress()?,
    };

    if let Some(script) = &cli.script {
        let lines = fs::read_to_string(script)?;
        let editor = ScriptedEditor::new(lines.lines()).echoing();
        return configure(Repl::with_editor(editor, session), &cli).run();
    }

    configure(Repl::with_editor(RustylineEditor::new()?, session), &cli).run()
}

fn configure<E: LineEditor>(repl: Repl<E>, cli: &Cli) -> Repl<E> {
    let repl = repl.with_debug(cli.debug);
    if cli.no_banner {
        repl.without_banner()
    } else {
        repl
    }
}
