//! The two sides of a chess game.

use std::fmt;
use std::ops::Not;

/// A team (side): White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Team {
    White = 0,
    Black = 1,
}

impl Team {
    /// Both teams in index order.
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing team.
    #[inline]
    pub const fn flip(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Row delta of a pawn advance: +1 for White, -1 for Black.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Row the team's pawns start on (and may double-push from).
    #[inline]
    pub const fn pawn_home_row(self) -> i8 {
        match self {
            Team::White => 2,
            Team::Black => 7,
        }
    }

    /// Row on which the team's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Team::White => 8,
            Team::Black => 1,
        }
    }

    /// Row a pawn must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_row(self) -> i8 {
        match self {
            Team::White => 5,
            Team::Black => 4,
        }
    }
}

impl Not for Team {
    type Output = Team;

    #[inline]
    fn not(self) -> Team {
        self.flip()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "white"),
            Team::Black => write!(f, "black"),
        }
    }
}
