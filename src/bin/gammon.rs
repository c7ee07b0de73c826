//! Interactive text driver for the gammon engine.
//!
//! Prompts for moves as `origin dest` pairs (0 = bar, 25 = bear off) and
//! renders the engine's observable state between turns. All rules live in
//! the library; this binary only translates lines of input into API calls.

use std::io::{self, BufRead, Write};

use clap::Parser;
use gammon::Game;

#[derive(Parser)]
#[command(name = "gammon", about = "Two-player backgammon at the terminal")]
struct Args {
    /// White player's name.
    #[arg(long, default_value = "")]
    white: String,

    /// Black player's name.
    #[arg(long, default_value = "")]
    black: String,

    /// Seed the dice for a reproducible match.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let mut game = Game::new();
    match args.seed {
        Some(seed) => game.start_match_seeded(&args.white, &args.black, seed),
        None => game.start_match(&args.white, &args.black),
    }

    if let Some(players) = game.players() {
        println!("{} vs {}", players[0], players[1]);
        println!("white moves 1 -> 24, black moves 24 -> 1");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_finished() {
        println!();
        println!("{game}");

        let Some(roll) = game.roll() else { break };
        println!("dice: {}", join(&roll));

        if !game.has_any_legal_move() {
            println!("no legal move available, turn forfeited");
            game.end_turn();
            continue;
        }

        while !game.available_distances().is_empty() && game.has_any_legal_move() {
            print!(
                "move [{}] (origin dest, 0=bar 25=off, 'pass' to stop): ",
                join(game.available_distances())
            );
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "pass" {
                break;
            }

            let Some((origin, dest)) = parse_move(line) else {
                println!("enter two numbers, e.g. `1 7`");
                continue;
            };

            if game.execute_move(origin, dest) {
                println!("ok");
            } else {
                println!("illegal move");
            }
        }

        if !game.is_finished() {
            game.end_turn();
        }
    }

    println!();
    println!("{game}");
    if let Some(winner) = game.winner() {
        println!("{winner} wins!");
    }
    Ok(())
}

fn parse_move(line: &str) -> Option<(u8, u8)> {
    let mut parts = line.split_whitespace();
    let origin = parts.next()?.parse().ok()?;
    let dest = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((origin, dest))
}

fn join(values: &[u8]) -> String {
    values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
