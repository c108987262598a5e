//! Fox and Geese: a two-player console board game.
//!
//! ## Usage
//!
//! - `fox-geese` - Play an interactive game
//! - `fox-geese play` - Same as above
//! - `fox-geese demo` - Print the starting position and a few sample moves

use anyhow::Result;
use clap::{Parser, Subcommand};

use fox_geese::cli::Console;
use fox_geese::game::{self, MoveKind, Side};

/// Fox and Geese: the Fox hunts, the Geese surround
#[derive(Parser)]
#[command(name = "fox-geese")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on the console
    Play,
    /// Show the starting position and a short scripted exchange
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo) => run_demo(),
        Some(Commands::Play) | None => Console::new().run(),
    }
}

fn run_demo() -> Result<()> {
    println!("Fox and Geese\n");

    let mut state = game::new_game();
    println!("Starting position:");
    println!("{}", state.board);

    println!(
        "Geese: {}, Fox at {:?}, {} to move\n",
        state.geese,
        game::find_fox(&state),
        state.to_move.name()
    );

    // A goose advances while the fox closes in beside it.
    for (side, from, to) in [
        (Side::Geese, (2, 2), (3, 3)),
        (Side::Fox, (7, 1), (6, 2)),
        (Side::Geese, (3, 3), (4, 4)),
        (Side::Fox, (6, 2), (5, 3)),
    ] {
        let kind = match game::check_move(&state, side, from, to) {
            Ok(kind) => kind,
            Err(err) => anyhow::bail!("demo move {from:?} -> {to:?} rejected: {err}"),
        };
        game::apply_move(&mut state, from, to, kind);
        state.to_move = state.to_move.other();
    }

    println!("After the opening exchange:");
    println!("{}", state.board);

    // The advanced goose now sits on the fox's diagonal with an empty
    // square behind it.
    let captures: Vec<_> = game::legal_moves(&state, Side::Fox)
        .into_iter()
        .filter(|m| m.kind == MoveKind::Jump)
        .collect();
    println!("Fox capture moves: {:?}", captures);

    if let Some(jump) = captures.first() {
        game::apply_move(&mut state, jump.from, jump.to, jump.kind);
        println!("\nAfter the capture ({jump}):");
        println!("{}", state.board);
        println!("Geese remaining: {}", state.geese);
    }

    Ok(())
}
