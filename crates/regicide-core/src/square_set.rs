//! A set of board squares packed into a `u64`, one bit per square.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::square::Square;

/// A set of on-board squares. Bit `i` is the square with row-major index `i`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// Empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Every square on the board.
    pub const FULL: SquareSet = SquareSet(!0);

    /// Return `true` if no squares are in the set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count the squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if the square is in the set. Off-board squares never are.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        match sq.index() {
            Some(idx) => (self.0 & (1u64 << idx)) != 0,
            None => false,
        }
    }

    /// Return a new set with the given square added. Off-board squares are ignored.
    #[inline]
    pub const fn with(self, sq: Square) -> SquareSet {
        match sq.index() {
            Some(idx) => SquareSet(self.0 | (1u64 << idx)),
            None => self,
        }
    }

    /// Return a new set with the given square removed.
    #[inline]
    pub const fn without(self, sq: Square) -> SquareSet {
        match sq.index() {
            Some(idx) => SquareSet(self.0 & !(1u64 << idx)),
            None => self,
        }
    }

    /// Add a square in place.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        *self = self.with(sq);
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for SquareSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: SquareSet) {
        self.0 &= rhs.0;
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl Not for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn not(self) -> SquareSet {
        SquareSet(!self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

// --- Iterator (row-major order) ---

impl Iterator for SquareSet {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let sq = Square::from_index(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            sq
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareSet {}

// --- Debug (8x8 grid, row 8 on top) ---

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in (1..=8).rev() {
            write!(f, "  {} ", row)?;
            for col in 1..=8 {
                if self.contains(Square::new(row, col)) {
                    write!(f, "1 ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::SquareSet;
    use crate::square::Square;

    #[test]
    fn empty_and_full() {
        assert!(SquareSet::EMPTY.is_empty());
        assert!(!SquareSet::FULL.is_empty());
        assert_eq!(SquareSet::FULL.count(), 64);
        assert_eq!(!SquareSet::EMPTY, SquareSet::FULL);
    }

    #[test]
    fn insert_contains_remove() {
        let set = SquareSet::EMPTY.with(Square::E4);
        assert!(set.contains(Square::E4));
        assert!(!set.contains(Square::D4));
        assert_eq!(set.count(), 1);

        let set2 = set.without(Square::E4);
        assert!(set2.is_empty());
    }

    #[test]
    fn off_board_squares_ignored() {
        let set = SquareSet::EMPTY.with(Square::new(9, 1)).with(Square::NONE);
        assert!(set.is_empty());
        assert!(!SquareSet::FULL.contains(Square::new(0, 3)));
    }

    #[test]
    fn iterator_row_major() {
        let set: SquareSet = [Square::H8, Square::A1, Square::E4].into_iter().collect();
        let squares: Vec<_> = set.collect();
        assert_eq!(squares, vec![Square::A1, Square::E4, Square::H8]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn operators() {
        let a = SquareSet::EMPTY.with(Square::A1).with(Square::B2);
        let b = SquareSet::EMPTY.with(Square::B2).with(Square::C3);
        assert_eq!((a & b).count(), 1);
        assert_eq!((a | b).count(), 3);

        let mut c = a;
        c |= b;
        c &= !SquareSet::EMPTY.with(Square::A1);
        assert_eq!(c.count(), 2);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(SquareSet::default(), SquareSet::EMPTY);
    }
}
