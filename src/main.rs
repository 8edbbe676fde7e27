//! fieldmarshal -- per-turn order computation over a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr, filtered by `RUST_LOG`.

use std::io::{self, BufRead, Write};

use tracing::{error, warn};

use fieldmarshal::engine::{Engine, EngineError};
use fieldmarshal::protocol::parser::{parse_command, Command};

/// Runs the protocol loop until `quit` or end of input.
fn run<W: Write>(engine: &mut Engine, input: impl BufRead, out: &mut W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match cmd {
            Command::Ident => engine.handle_ident(out)?,
            Command::IsReady => engine.handle_isready(out)?,
            Command::SetOption { name, value } => {
                if let Err(e) = engine.set_option(name, value) {
                    warn!("{}", e);
                }
            }
            Command::NewGame => engine.new_game(),
            Command::Position { json } => {
                if let Err(e) = engine.set_position(&json) {
                    warn!("{}", e);
                }
            }
            Command::SetPlayer { player } => engine.set_player(player),
            Command::Go => match engine.handle_go(out) {
                Err(EngineError::Io(e)) => return Err(e),
                Err(e) => warn!("go: {}", e),
                Ok(()) => {}
            },
            Command::GoAll => match engine.handle_goall(out) {
                Err(EngineError::Io(e)) => return Err(e),
                Err(e) => warn!("goall: {}", e),
                Ok(()) => {}
            },
            Command::Quit => break,
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    if let Err(e) = run(&mut engine, stdin.lock(), &mut out) {
        error!("i/o failure: {}", e);
        std::process::exit(1);
    }
}
