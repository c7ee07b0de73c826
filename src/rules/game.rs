//! The rules engine: turn state, move legality, captures, bear-off, wins.
//!
//! ## Coordinates
//!
//! Origins and destinations are plain point numbers as callers see them:
//! [`BAR`] (0) is the mover's bar, 1..=24 are board points, [`OFF`] (25)
//! bears a checker off to the mover's home. White advances 1 → 24, black
//! 24 → 1.
//!
//! ## Lifecycle
//!
//! `NotStarted` → `AwaitingRoll` ⇄ `MovePhase` → `Finished`. The phase tag
//! is updated alongside the data fields. `Finished` is terminal: mutating
//! calls refuse, read accessors keep working.
//!
//! ## Outcomes vs errors
//!
//! An illegal move is a normal outcome: `is_legal_move` and `execute_move`
//! return `false` and change nothing. "No legal move this turn" is signaled
//! by `has_any_legal_move() == false`, after which the caller ends the turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::board::{Board, CHECKERS_PER_COLOR, POINTS};
use crate::core::checker::{Checker, Color, ColorMap};
use crate::core::dice::{Dice, Distances};
use crate::core::player::Player;

/// Origin value selecting the mover's bar.
pub const BAR: u8 = 0;

/// Destination value selecting the mover's home (bear off).
pub const OFF: u8 = 25;

/// Game phase, advanced alongside the data fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No match started; board, players, and dice are unset.
    NotStarted,
    /// A turn has an owner but no distances yet.
    AwaitingRoll,
    /// Distances are available to spend.
    MovePhase,
    /// A color reached 15 borne-off checkers. Terminal.
    Finished,
}

/// Serializable public view of a match, for drivers and renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub current_player: Option<String>,
    pub current_color: Option<Color>,
    /// Raw values of the last roll, if any.
    pub last_roll: Option<(u8, u8)>,
    /// Unconsumed distances for the current turn.
    pub available_distances: Vec<u8>,
    pub bar_white: usize,
    pub bar_black: usize,
    pub home_white: usize,
    pub home_black: usize,
    pub finished: bool,
    pub winner: Option<String>,
}

/// A two-player backgammon match.
///
/// Owns the board, both players, the dice, the per-color bar and home, the
/// turn index, and the unconsumed distances of the current roll. All
/// mutation goes through [`execute_move`](Game::execute_move) and the turn
/// methods; accessors hand out read-only views.
#[derive(Clone, Debug)]
pub struct Game {
    board: Option<Board>,
    /// Index 0 = white, 1 = black.
    players: Option<[Player; 2]>,
    dice: Option<Dice>,
    turn: usize,
    available: Distances,
    bar: ColorMap<Vec<Checker>>,
    home: ColorMap<Vec<Checker>>,
    phase: Phase,
}

impl Game {
    /// An empty, not-yet-started match.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: None,
            players: None,
            dice: None,
            turn: 0,
            available: SmallVec::new(),
            bar: ColorMap::default(),
            home: ColorMap::default(),
            phase: Phase::NotStarted,
        }
    }

    /// Start a match with entropy-seeded dice.
    ///
    /// Blank or whitespace-only names default to "Jugador 1" / "Jugador 2".
    /// The opening turn goes to whoever rolls the higher single die; ties
    /// re-roll until they differ.
    pub fn start_match(&mut self, name1: &str, name2: &str) {
        self.start_with_dice(name1, name2, Dice::new());
    }

    /// Start a match with a fixed dice seed, for reproducible play.
    pub fn start_match_seeded(&mut self, name1: &str, name2: &str, seed: u64) {
        self.start_with_dice(name1, name2, Dice::seeded(seed));
    }

    fn start_with_dice(&mut self, name1: &str, name2: &str, mut dice: Dice) {
        let white = Player::new(default_if_blank(name1, "Jugador 1"), Color::White);
        let black = Player::new(default_if_blank(name2, "Jugador 2"), Color::Black);

        self.turn = Self::opening_turn(&mut dice);
        self.board = Some(Board::standard());
        self.players = Some([white, black]);
        self.dice = Some(dice);
        self.available.clear();
        self.bar = ColorMap::default();
        self.home = ColorMap::default();
        self.phase = Phase::AwaitingRoll;
    }

    /// One die per player until the values differ; the higher roller starts.
    fn opening_turn(dice: &mut Dice) -> usize {
        loop {
            let white = dice.roll_single();
            let black = dice.roll_single();
            if white != black {
                return if white > black { 0 } else { 1 };
            }
        }
    }

    /// Roll the dice for the current turn, filling the available distances
    /// with the raw roll (two values, four on doubles).
    ///
    /// Rolling again before the distances are spent overwrites them.
    /// Returns `None` when no match is running.
    pub fn roll(&mut self) -> Option<Distances> {
        if matches!(self.phase, Phase::NotStarted | Phase::Finished) {
            return None;
        }
        let distances = self.dice.as_mut()?.roll();
        self.available = distances.clone();
        self.phase = Phase::MovePhase;
        Some(distances)
    }

    /// Check a proposed move without touching any state.
    ///
    /// `origin` is 0 (bar) or 1..=24; `dest` is 1..=24 or 25 (bear off).
    #[must_use]
    pub fn is_legal_move(&self, origin: u8, dest: u8) -> bool {
        self.validate_move(origin, dest).is_some()
    }

    /// Full legality check. Returns the distance the move would consume
    /// and the moving color, or `None` when any rule rejects it.
    fn validate_move(&self, origin: u8, dest: u8) -> Option<(u8, Color)> {
        if self.phase != Phase::MovePhase || self.available.is_empty() {
            return None;
        }
        let board = self.board.as_ref()?;
        let color = self.current_color()?;

        if origin > POINTS || dest < 1 || dest > OFF {
            return None;
        }

        // Bar entry has absolute priority: with a checker waiting on the
        // bar, no board origin is playable.
        let bar_occupied = !self.bar[color].is_empty();
        if bar_occupied && origin != BAR {
            return None;
        }
        if origin == BAR {
            if !bar_occupied {
                return None;
            }
        } else if board.color_at(origin) != Some(color) {
            return None;
        }

        // Direction-dependent distance. The bar acts as position 0 for
        // white and 25 for black; bearing off mirrors that (25 / 0).
        let distance = match color {
            Color::White => {
                if origin == BAR {
                    i32::from(dest)
                } else {
                    i32::from(dest) - i32::from(origin)
                }
            }
            Color::Black => {
                if origin == BAR {
                    25 - i32::from(dest)
                } else if dest == OFF {
                    i32::from(origin)
                } else {
                    i32::from(origin) - i32::from(dest)
                }
            }
        };
        if distance < 1 || distance > 6 {
            return None;
        }
        let distance = distance as u8;

        // Exact match against the unconsumed multiset; two dice never
        // combine into one distance.
        if !self.available.contains(&distance) {
            return None;
        }

        if dest == OFF {
            if !self.can_bear_off(color) {
                return None;
            }
        } else if board.color_at(dest) == Some(color.opponent()) && board.count_at(dest) >= 2 {
            // Blocked point. A lone enemy checker (blot) stays legal.
            return None;
        }

        Some((distance, color))
    }

    /// Bear-off eligibility: an empty bar and every board checker of
    /// `color` inside its home quadrant. Re-derived from the board on
    /// every call, so it is always consistent with the latest move.
    #[must_use]
    pub fn can_bear_off(&self, color: Color) -> bool {
        self.bar[color].is_empty()
            && self.board.as_ref().map_or(false, |b| b.all_in_home(color))
    }

    /// Execute a move, re-validating first.
    ///
    /// Returns `false` with zero state change when the move is illegal.
    /// On success: the checker leaves its origin (bar or point), a lone
    /// enemy blot on the destination goes to its own bar, the checker
    /// lands on the point or in home, and one matching distance is
    /// consumed.
    pub fn execute_move(&mut self, origin: u8, dest: u8) -> bool {
        let Some((distance, color)) = self.validate_move(origin, dest) else {
            return false;
        };
        let Some(board) = self.board.as_mut() else {
            return false;
        };

        let Some(moved) = (if origin == BAR {
            self.bar[color].pop()
        } else {
            board.remove_checker(origin)
        }) else {
            return false;
        };

        if dest == OFF {
            self.home[color].push(moved);
        } else {
            if board.color_at(dest) == Some(color.opponent()) && board.count_at(dest) == 1 {
                if let Some(blot) = board.remove_checker(dest) {
                    self.bar[blot.color()].push(blot);
                }
            }
            board
                .add_checker(dest, moved)
                .expect("validation left the destination open");
        }

        if let Some(pos) = self.available.iter().position(|&d| d == distance) {
            self.available.remove(pos);
        }

        if self.home[color].len() == CHECKERS_PER_COLOR {
            self.phase = Phase::Finished;
        }
        true
    }

    /// True iff any (origin, destination) pair is legal with the remaining
    /// distances. Bar entries are scanned first when the bar is occupied;
    /// otherwise every own point is tried against every distance,
    /// including bear-off destinations.
    #[must_use]
    pub fn has_any_legal_move(&self) -> bool {
        if self.phase != Phase::MovePhase || self.available.is_empty() {
            return false;
        }
        let Some(color) = self.current_color() else {
            return false;
        };

        if !self.bar[color].is_empty() {
            return self
                .available
                .iter()
                .any(|&d| self.is_legal_move(BAR, color.entry_point(d)));
        }

        for origin in 1..=POINTS {
            for &d in &self.available {
                let dest = match color {
                    Color::White => {
                        let dest = u32::from(origin) + u32::from(d);
                        if dest > u32::from(OFF) {
                            continue;
                        }
                        dest as u8
                    }
                    Color::Black => {
                        if origin == d {
                            OFF
                        } else if origin > d {
                            origin - d
                        } else {
                            continue;
                        }
                    }
                };
                if self.is_legal_move(origin, dest) {
                    return true;
                }
            }
        }
        false
    }

    /// Flip the turn and forfeit any unused distances.
    ///
    /// No-op before the match starts or after it finishes.
    pub fn end_turn(&mut self) {
        if matches!(self.phase, Phase::NotStarted | Phase::Finished) {
            return;
        }
        self.turn = 1 - self.turn;
        self.available.clear();
        self.phase = Phase::AwaitingRoll;
    }

    /// True once either color has borne off all 15 checkers.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        Color::BOTH
            .iter()
            .any(|&c| self.home[c].len() == CHECKERS_PER_COLOR)
    }

    /// The winning player, if the match has finished.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.players
            .as_ref()?
            .iter()
            .find(|p| self.home[p.color()].len() == CHECKERS_PER_COLOR)
    }

    // === Read accessors ===

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The board, once a match has started.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Both players (white first), once a match has started.
    #[must_use]
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// The dice, once a match has started.
    #[must_use]
    pub fn dice(&self) -> Option<&Dice> {
        self.dice.as_ref()
    }

    /// Turn index: 0 = white, 1 = black.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The player whose move it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|p| &p[self.turn])
    }

    /// The color whose move it is.
    #[must_use]
    pub fn current_color(&self) -> Option<Color> {
        self.current_player().map(Player::color)
    }

    /// Unconsumed distances of the current roll.
    #[must_use]
    pub fn available_distances(&self) -> &[u8] {
        &self.available
    }

    /// Captured checkers of `color` waiting to re-enter.
    #[must_use]
    pub fn bar(&self, color: Color) -> &[Checker] {
        &self.bar[color]
    }

    /// Borne-off checkers of `color`.
    #[must_use]
    pub fn home(&self, color: Color) -> &[Checker] {
        &self.home[color]
    }

    /// Serializable public view of the match.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            current_player: self.current_player().map(|p| p.name().to_string()),
            current_color: self.current_color(),
            last_roll: self
                .dice
                .as_ref()
                .and_then(|d| Some((d.first_die()?, d.second_die()?))),
            available_distances: self.available.to_vec(),
            bar_white: self.bar[Color::White].len(),
            bar_black: self.bar[Color::Black].len(),
            home_white: self.home[Color::White].len(),
            home_black: self.home[Color::Black].len(),
            finished: self.is_finished(),
            winner: self.winner().map(|p| p.name().to_string()),
        }
    }

    /// Discard the match and return to `NotStarted`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Assembly from explicit parts, for [`ScenarioBuilder`].
    ///
    /// The phase is derived: finished if a home already holds 15,
    /// move phase if distances are available, awaiting a roll otherwise.
    ///
    /// [`ScenarioBuilder`]: super::setup::ScenarioBuilder
    pub(super) fn assemble(
        board: Board,
        players: [Player; 2],
        dice: Dice,
        turn: usize,
        available: &[u8],
        bar: ColorMap<Vec<Checker>>,
        home: ColorMap<Vec<Checker>>,
    ) -> Self {
        let phase = if Color::BOTH.iter().any(|&c| home[c].len() == CHECKERS_PER_COLOR) {
            Phase::Finished
        } else if available.is_empty() {
            Phase::AwaitingRoll
        } else {
            Phase::MovePhase
        };
        Self {
            board: Some(board),
            players: Some(players),
            dice: Some(dice),
            turn,
            available: SmallVec::from_slice(available),
            bar,
            home,
            phase,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.board, &self.players) {
            (Some(board), Some(players)) => {
                writeln!(f, "turn: {}", players[self.turn])?;
                for (point, stack) in board.iter() {
                    if let Some(first) = stack.first() {
                        writeln!(f, "point {point:2}: {} x{}", first.color(), stack.len())?;
                    }
                }
                writeln!(
                    f,
                    "bar: white {} / black {}",
                    self.bar[Color::White].len(),
                    self.bar[Color::Black].len()
                )?;
                write!(
                    f,
                    "home: white {}/15 / black {}/15",
                    self.home[Color::White].len(),
                    self.home[Color::Black].len()
                )
            }
            _ => write!(f, "match not started"),
        }
    }
}

fn default_if_blank(name: &str, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
