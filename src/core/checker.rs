//! Checker colors, the checker value type, and per-color storage.
//!
//! ## Color
//!
//! A closed two-variant enumeration. White advances from point 1 toward
//! point 24, black from 24 toward 1; every direction-dependent rule in the
//! engine derives from the helpers here.
//!
//! ## ColorMap
//!
//! Fixed two-slot per-color data storage with O(1) access, indexable by
//! `Color`. Backs the bar and home containers on the game.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut, RangeInclusive};
use std::str::FromStr;

use super::error::GameError;

/// Checker color.
///
/// White moves toward increasing point numbers (1 → 24) and its home
/// quadrant is 19..=24; black mirrors it (24 → 1, home 1..=6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, white first (matching turn index 0).
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Turn index for this color: white = 0, black = 1.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Board point a checker of this color re-enters on from the bar
    /// when moving `die` pips. White enters in 1..=6, black in 19..=24.
    #[must_use]
    pub const fn entry_point(self, die: u8) -> u8 {
        match self {
            Color::White => die,
            Color::Black => 25 - die,
        }
    }

    /// The home quadrant: every checker must sit here before bearing off.
    #[must_use]
    pub fn home_range(self) -> RangeInclusive<u8> {
        match self {
            Color::White => 19..=24,
            Color::Black => 1..=6,
        }
    }

    /// True if `point` lies in this color's home quadrant.
    #[must_use]
    pub fn in_home_quadrant(self, point: u8) -> bool {
        self.home_range().contains(&point)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Color {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            _ => Err(GameError::InvalidColor(s.to_string())),
        }
    }
}

/// An immutable colored token. Equality is by color.
///
/// Checkers are only ever moved between containers (board point, bar,
/// home); they carry no other state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checker {
    color: Color,
}

impl Checker {
    /// Create a checker of the given color.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// The fixed color of this checker.
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// True iff this checker belongs to `color`'s player.
    #[must_use]
    pub const fn belongs_to(self, color: Color) -> bool {
        matches!(
            (self.color, color),
            (Color::White, Color::White) | (Color::Black, Color::Black)
        )
    }

    /// True iff a player of `opponent` color may capture this checker,
    /// i.e. the colors differ. Used to test whether a point's sole
    /// occupant is vulnerable.
    #[must_use]
    pub const fn capturable_by(self, opponent: Color) -> bool {
        !self.belongs_to(opponent)
    }
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} checker", self.color)
    }
}

/// Fixed per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use gammon::core::{Color, ColorMap};
///
/// let mut bar: ColorMap<u32> = ColorMap::default();
/// bar[Color::White] = 2;
///
/// assert_eq!(bar[Color::White], 2);
/// assert_eq!(bar[Color::Black], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMap<T> {
    white: T,
    black: T,
}

impl<T> ColorMap<T> {
    /// Create a ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            white: factory(Color::White),
            black: factory(Color::Black),
        }
    }

    /// Create a ColorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            white: value.clone(),
            black: value,
        }
    }

    /// Get a reference to a color's entry.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Get a mutable reference to a color's entry.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Iterate over (Color, &T) pairs, white first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::BOTH.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn test_entry_points() {
        assert_eq!(Color::White.entry_point(1), 1);
        assert_eq!(Color::White.entry_point(6), 6);
        assert_eq!(Color::Black.entry_point(1), 24);
        assert_eq!(Color::Black.entry_point(6), 19);
    }

    #[test]
    fn test_home_quadrants() {
        assert!(Color::White.in_home_quadrant(19));
        assert!(Color::White.in_home_quadrant(24));
        assert!(!Color::White.in_home_quadrant(18));

        assert!(Color::Black.in_home_quadrant(1));
        assert!(Color::Black.in_home_quadrant(6));
        assert!(!Color::Black.in_home_quadrant(7));
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("white".parse::<Color>().unwrap(), Color::White);
        assert_eq!("Black".parse::<Color>().unwrap(), Color::Black);
        assert_eq!(" WHITE ".parse::<Color>().unwrap(), Color::White);

        let err = "red".parse::<Color>().unwrap_err();
        assert_eq!(err, GameError::InvalidColor("red".to_string()));
    }

    #[test]
    fn test_checker_belongs_and_capture() {
        let checker = Checker::new(Color::White);

        assert_eq!(checker.color(), Color::White);
        assert!(checker.belongs_to(Color::White));
        assert!(!checker.belongs_to(Color::Black));

        assert!(checker.capturable_by(Color::Black));
        assert!(!checker.capturable_by(Color::White));
    }

    #[test]
    fn test_checker_equality_by_color() {
        assert_eq!(Checker::new(Color::White), Checker::new(Color::White));
        assert_ne!(Checker::new(Color::White), Checker::new(Color::Black));
    }

    #[test]
    fn test_color_map_index() {
        let mut map: ColorMap<Vec<u8>> = ColorMap::default();
        map[Color::Black].push(3);

        assert!(map[Color::White].is_empty());
        assert_eq!(map[Color::Black], vec![3]);
    }

    #[test]
    fn test_color_map_iter_order() {
        let map = ColorMap::new(|c| c.index());
        let pairs: Vec<_> = map.iter().map(|(c, &v)| (c, v)).collect();
        assert_eq!(pairs, vec![(Color::White, 0), (Color::Black, 1)]);
    }

    #[test]
    fn test_color_serde() {
        let json = serde_json::to_string(&Color::White).unwrap();
        assert_eq!(json, "\"white\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::White);
    }
}
