//! The 24-point board.
//!
//! Each point holds an ordered, same-colored stack of checkers. The
//! color-homogeneity invariant is enforced on every mutation, not just at
//! construction: `add_checker` refuses to mix colors, so a point can never
//! silently hold both.
//!
//! Points are numbered 1..=24 as callers see them. White's home quadrant
//! is 19..=24, black's is 1..=6.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::checker::{Checker, Color};
use super::error::{GameError, Result};

/// Number of points on the board.
pub const POINTS: u8 = 24;

/// Checkers per color in play.
pub const CHECKERS_PER_COLOR: usize = 15;

type Stack = SmallVec<[Checker; 8]>;

/// 24 ordered points, each a color-homogeneous stack of checkers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Index 0 holds point 1.
    points: Vec<Stack>,
}

impl Board {
    /// A board with every point empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: vec![Stack::new(); POINTS as usize],
        }
    }

    /// The canonical backgammon starting layout.
    ///
    /// White: 2 on point 1, 5 on 12, 3 on 17, 5 on 19.
    /// Black: 5 on point 6, 3 on 8, 5 on 13, 2 on 24.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        let layout = [
            (1, Color::White, 2),
            (12, Color::White, 5),
            (17, Color::White, 3),
            (19, Color::White, 5),
            (6, Color::Black, 5),
            (8, Color::Black, 3),
            (13, Color::Black, 5),
            (24, Color::Black, 2),
        ];
        for (point, color, count) in layout {
            let stack = &mut board.points[point as usize - 1];
            for _ in 0..count {
                stack.push(Checker::new(color));
            }
        }
        board
    }

    fn slot(&self, point: u8) -> Result<&Stack> {
        if (1..=POINTS).contains(&point) {
            Ok(&self.points[point as usize - 1])
        } else {
            Err(GameError::PositionOutOfRange(i32::from(point)))
        }
    }

    fn slot_mut(&mut self, point: u8) -> Result<&mut Stack> {
        if (1..=POINTS).contains(&point) {
            Ok(&mut self.points[point as usize - 1])
        } else {
            Err(GameError::PositionOutOfRange(i32::from(point)))
        }
    }

    /// The stack at `point` (1..=24).
    ///
    /// `PositionOutOfRange` for any other index.
    pub fn point(&self, point: u8) -> Result<&[Checker]> {
        self.slot(point).map(|stack| stack.as_slice())
    }

    /// True if the point holds at least one checker.
    /// Out-of-range points read as empty.
    #[must_use]
    pub fn has_checkers(&self, point: u8) -> bool {
        self.count_at(point) > 0
    }

    /// Color occupying the point, `None` if empty or out of range.
    #[must_use]
    pub fn color_at(&self, point: u8) -> Option<Color> {
        self.slot(point).ok()?.first().map(|c| c.color())
    }

    /// Number of checkers on the point, 0 if empty or out of range.
    #[must_use]
    pub fn count_at(&self, point: u8) -> usize {
        self.slot(point).map_or(0, |stack| stack.len())
    }

    /// Push a checker onto `point`.
    ///
    /// `ColorConflict` if the point is occupied by the other color;
    /// `PositionOutOfRange` outside 1..=24.
    pub fn add_checker(&mut self, point: u8, checker: Checker) -> Result<()> {
        let stack = self.slot_mut(point)?;
        if let Some(occupant) = stack.first() {
            if !occupant.belongs_to(checker.color()) {
                return Err(GameError::ColorConflict {
                    point,
                    occupant: occupant.color(),
                    incoming: checker.color(),
                });
            }
        }
        stack.push(checker);
        Ok(())
    }

    /// Pop and return the top checker at `point`.
    ///
    /// `None` on an empty or out-of-range point, never an error.
    pub fn remove_checker(&mut self, point: u8) -> Option<Checker> {
        self.slot_mut(point).ok()?.pop()
    }

    /// Total checkers of `color` across all 24 points.
    #[must_use]
    pub fn count_color(&self, color: Color) -> usize {
        self.points
            .iter()
            .filter(|stack| stack.first().map(|c| c.color()) == Some(color))
            .map(|stack| stack.len())
            .sum()
    }

    /// True when every on-board checker of `color` sits in its home
    /// quadrant. Vacuously true when the color has no board checkers.
    #[must_use]
    pub fn all_in_home(&self, color: Color) -> bool {
        self.iter().all(|(point, stack)| {
            stack.first().map(|c| c.color()) != Some(color) || color.in_home_quadrant(point)
        })
    }

    /// Iterate (point, stack) pairs, point 1..=24 in order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[Checker])> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, stack)| ((i + 1) as u8, stack.as_slice()))
    }
}
