//! Core building blocks: colors, checkers, dice, the board, players, errors.
//!
//! Everything here is a plain value or container; the rules that tie them
//! together live in [`crate::rules`].

pub mod board;
pub mod checker;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;

pub use board::{Board, CHECKERS_PER_COLOR, POINTS};
pub use checker::{Checker, Color, ColorMap};
pub use dice::{Dice, Distances};
pub use error::{GameError, Result};
pub use player::Player;
pub use rng::DiceRng;
