//! # gammon
//!
//! A rules engine for a two-player backgammon match. It owns board state,
//! dice, turn order, and the legality of every proposed move, and it
//! decides when the match ends. Presentation (menus, rendering, input) is
//! the caller's job: drivers call in, read the observable state, and
//! render it.
//!
//! ## Design Principles
//!
//! 1. **Errors are for contract violations only.** Illegal moves and
//!    "no move available" are ordinary boolean outcomes; [`GameError`]
//!    covers out-of-range indices, unknown color names, and mixed-color
//!    stacks, none of which are reachable through legal play.
//!
//! 2. **Invariants enforced at every mutation.** A point never holds two
//!    colors, and each color's 15 checkers are conserved across board,
//!    bar, and home.
//!
//! 3. **Deterministic when asked.** Dice run on a seeded ChaCha8 stream;
//!    a fixed seed replays an entire match.
//!
//! ## Modules
//!
//! - `core`: colors, checkers, dice, the board, players, errors
//! - `rules`: the [`Game`] state machine and scenario setup
//!
//! ## Example
//!
//! ```
//! use gammon::Game;
//!
//! let mut game = Game::new();
//! game.start_match_seeded("Ana", "Carlos", 42);
//!
//! let roll = game.roll().unwrap();
//! assert!(roll.len() == 2 || roll.len() == 4);
//!
//! // A fresh match always has a legal move somewhere.
//! assert!(game.has_any_legal_move());
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Checker, Color, ColorMap, Dice, DiceRng, Distances, GameError, Player, Result,
    CHECKERS_PER_COLOR, POINTS,
};

pub use crate::rules::{Game, GameSnapshot, Phase, ScenarioBuilder, BAR, OFF};
