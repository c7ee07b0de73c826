//! Error types for the engine.
//!
//! Only contract violations are errors: an unrecognized color name, a point
//! index outside the board, or an attempt to stack two colors on one point.
//! Illegal moves and "no move available this turn" are ordinary boolean
//! outcomes reported by [`Game`](crate::rules::Game), never errors.

use thiserror::Error;

use super::checker::Color;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Contract-violation errors.
///
/// None of these are reachable through a sequence of legal `Game` calls;
/// hitting one means the caller passed an out-of-contract value, or a bug
/// in the validation layer let an impossible mutation through.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A color name other than "white" or "black".
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A point index outside 1..=24.
    #[error("position {0} out of range, valid points are 1..=24")]
    PositionOutOfRange(i32),

    /// An attempt to push a checker onto a point held by the other color.
    #[error("point {point} holds {occupant} checkers, cannot add {incoming}")]
    ColorConflict {
        point: u8,
        occupant: Color,
        incoming: Color,
    },
}
