//! Hex dungeon crawl in Rust
//!
//! Main entry point for the game.

mod console;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hex_core::{GameLoop, GameRng, GameSession};

use crate::console::{ConsoleInput, ConsoleNarrator};

/// Hex: a dungeon crawl in a handful of rooms
#[derive(Parser, Debug)]
#[command(name = "hex")]
#[command(author, version, about = "Hex - Delve, die, and delve again!", long_about = None)]
struct Args {
    /// Seed for a reproducible dungeon
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Debug logging on stderr (when RUST_LOG is unset)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "starting game");

    let mut game = GameLoop::new(GameSession::new(rng));
    let mut input = ConsoleInput::new(io::stdin().lock(), io::stdout());
    let mut narrator = ConsoleNarrator::new(io::stdout());

    game.run(&mut input, &mut narrator)?;
    Ok(())
}

/// Log to stderr so narration on stdout stays clean
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_seed() {
        let args = Args::parse_from(["hex", "--seed", "42", "-v"]);
        assert_eq!(args.seed, Some(42));
        assert!(args.verbose);

        let args = Args::parse_from(["hex"]);
        assert_eq!(args.seed, None);
        assert!(!args.verbose);
    }
}
