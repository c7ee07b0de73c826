//! Player identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::checker::Color;

/// A player: display name plus fixed checker color.
///
/// Deliberately a pure data holder. Checker counts live on the game
/// (board, bar, home), so there is no per-player counter to fall out of
/// sync.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    /// Create a player. Identity never changes after construction.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's checker color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
