//! The rules engine: move validation, turn state, and scenario setup.

pub mod game;
pub mod setup;

pub use game::{Game, GameSnapshot, Phase, BAR, OFF};
pub use setup::ScenarioBuilder;
