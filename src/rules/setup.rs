//! Arbitrary-position setup.
//!
//! Drivers use this for puzzles and endgame drills; the test suite uses it
//! for edge positions (blots, loaded bars, bear-off races) that would take
//! hundreds of random rolls to reach from the standard start.
//!
//! Positions are taken as-is: the builder enforces color homogeneity per
//! point (via [`Board::add_checker`]) but not the 15-checker census, which
//! only binds states reached from the standard start.

use crate::core::board::Board;
use crate::core::checker::{Checker, Color, ColorMap};
use crate::core::dice::Dice;
use crate::core::error::Result;
use crate::core::player::Player;

use super::game::Game;

/// Builder for a match started from an arbitrary position.
///
/// ## Example
///
/// ```
/// use gammon::core::Color;
/// use gammon::rules::ScenarioBuilder;
///
/// // White to move with a 3, one checker on point 22, rest borne off.
/// let game = ScenarioBuilder::new()
///     .place(22, Color::White, 1).unwrap()
///     .borne_off(Color::White, 14)
///     .to_move(Color::White)
///     .distances(&[3])
///     .build();
///
/// assert!(game.is_legal_move(22, 25));
/// ```
#[derive(Clone, Debug)]
pub struct ScenarioBuilder {
    board: Board,
    names: [String; 2],
    turn: usize,
    distances: Vec<u8>,
    bar: ColorMap<usize>,
    home: ColorMap<usize>,
    seed: u64,
}

impl ScenarioBuilder {
    /// An empty board, white to move, no distances.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            names: ["Jugador 1".to_string(), "Jugador 2".to_string()],
            turn: 0,
            distances: Vec::new(),
            bar: ColorMap::default(),
            home: ColorMap::default(),
            seed: 0,
        }
    }

    /// Start from the canonical opening layout instead of an empty board.
    #[must_use]
    pub fn standard_board(mut self) -> Self {
        self.board = Board::standard();
        self
    }

    /// Stack `count` checkers of `color` on `point`.
    ///
    /// Errors propagate from [`Board::add_checker`]: out-of-range points
    /// and color conflicts with checkers already placed.
    pub fn place(mut self, point: u8, color: Color, count: usize) -> Result<Self> {
        for _ in 0..count {
            self.board.add_checker(point, Checker::new(color))?;
        }
        Ok(self)
    }

    /// Remove every checker from `point`.
    #[must_use]
    pub fn clear_point(mut self, point: u8) -> Self {
        while self.board.remove_checker(point).is_some() {}
        self
    }

    /// Put `count` checkers of `color` on the bar.
    #[must_use]
    pub fn on_bar(mut self, color: Color, count: usize) -> Self {
        self.bar[color] += count;
        self
    }

    /// Credit `count` borne-off checkers to `color`.
    #[must_use]
    pub fn borne_off(mut self, color: Color, count: usize) -> Self {
        self.home[color] += count;
        self
    }

    /// Whose move it is.
    #[must_use]
    pub fn to_move(mut self, color: Color) -> Self {
        self.turn = color.index();
        self
    }

    /// Player names (white, black).
    #[must_use]
    pub fn names(mut self, white: &str, black: &str) -> Self {
        self.names = [white.to_string(), black.to_string()];
        self
    }

    /// The current turn's unconsumed distances.
    #[must_use]
    pub fn distances(mut self, distances: &[u8]) -> Self {
        self.distances = distances.to_vec();
        self
    }

    /// Seed for the dice of the built game.
    #[must_use]
    pub fn dice_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the game.
    #[must_use]
    pub fn build(self) -> Game {
        let [white_name, black_name] = self.names;
        let players = [
            Player::new(white_name, Color::White),
            Player::new(black_name, Color::Black),
        ];
        let bar = ColorMap::new(|c| vec![Checker::new(c); self.bar[c]]);
        let home = ColorMap::new(|c| vec![Checker::new(c); self.home[c]]);
        Game::assemble(
            self.board,
            players,
            Dice::seeded(self.seed),
            self.turn,
            &self.distances,
            bar,
            home,
        )
    }
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::game::Phase;

    #[test]
    fn test_empty_build_awaits_roll() {
        let game = ScenarioBuilder::new().build();

        assert_eq!(game.phase(), Phase::AwaitingRoll);
        assert_eq!(game.current_color(), Some(Color::White));
        assert!(game.available_distances().is_empty());
    }

    #[test]
    fn test_distances_enter_move_phase() {
        let game = ScenarioBuilder::new()
            .standard_board()
            .distances(&[3, 5])
            .build();

        assert_eq!(game.phase(), Phase::MovePhase);
        assert_eq!(game.available_distances(), &[3, 5]);
    }

    #[test]
    fn test_place_and_bar_and_home() {
        let game = ScenarioBuilder::new()
            .place(7, Color::Black, 1)
            .unwrap()
            .on_bar(Color::White, 2)
            .borne_off(Color::Black, 3)
            .to_move(Color::Black)
            .build();

        let board = game.board().unwrap();
        assert_eq!(board.count_at(7), 1);
        assert_eq!(game.bar(Color::White).len(), 2);
        assert_eq!(game.home(Color::Black).len(), 3);
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_place_conflict_propagates() {
        let result = ScenarioBuilder::new()
            .place(4, Color::White, 1)
            .unwrap()
            .place(4, Color::Black, 1);

        assert!(result.is_err());
    }

    #[test]
    fn test_full_home_is_finished() {
        let game = ScenarioBuilder::new().borne_off(Color::White, 15).build();

        assert_eq!(game.phase(), Phase::Finished);
        assert!(game.is_finished());
        assert_eq!(game.winner().unwrap().color(), Color::White);
    }

    #[test]
    fn test_clear_point() {
        let game = ScenarioBuilder::new()
            .standard_board()
            .clear_point(24)
            .build();

        assert!(!game.board().unwrap().has_checkers(24));
    }
}
