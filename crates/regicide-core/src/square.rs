//! Board coordinates as 1-based (row, column) pairs.

use std::fmt;

/// A square on the chess board, addressed by 1-based row and column.
///
/// Row 1 is White's back rank and column 1 is the a-file. Coordinates outside
/// `1..=8` are valid values (ray casting walks off the board), but such a
/// square never indexes the board; see [`Square::is_on_board`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Total number of on-board squares.
    pub const COUNT: usize = 64;

    /// Sentinel returned when a lookup finds no square (row 0, column 0).
    pub const NONE: Square = Square { row: 0, col: 0 };

    /// Create a square from a row and column. No range check is performed.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Square {
        Square { row, col }
    }

    /// Create an on-board square from a zero-based row-major index.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square::new((index / 8) as i8 + 1, (index % 8) as i8 + 1))
        } else {
            None
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Square::new(
            (rank_byte - b'1') as i8 + 1,
            (file_byte - b'a') as i8 + 1,
        ))
    }

    /// Return the 1-based row.
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Return the 1-based column.
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Return `true` if both coordinates lie in `1..=8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 1 && self.row <= 8 && self.col >= 1 && self.col <= 8
    }

    /// Return the zero-based row-major index (row 1 first), or `None` off the board.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(((self.row - 1) * 8 + (self.col - 1)) as usize)
        } else {
            None
        }
    }

    /// Return the square displaced by `(d_row, d_col)`. The result may be off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Square {
        Square::new(self.row + d_row, self.col + d_col)
    }

    /// Chebyshev (king-step) distance between two squares.
    #[inline]
    pub const fn distance(self, other: Square) -> u8 {
        let dr = (self.row - other.row).unsigned_abs();
        let dc = (self.col - other.col).unsigned_abs();
        if dr > dc { dr } else { dc }
    }

    /// Iterate over all 64 squares in row-major order (row 1 → 8, column 1 → 8).
    pub fn all() -> impl Iterator<Item = Square> {
        (1i8..=8).flat_map(|row| (1i8..=8).map(move |col| Square::new(row, col)))
    }

    // Named square constants
    pub const A1: Square = Square::new(1, 1);
    pub const B1: Square = Square::new(1, 2);
    pub const C1: Square = Square::new(1, 3);
    pub const D1: Square = Square::new(1, 4);
    pub const E1: Square = Square::new(1, 5);
    pub const F1: Square = Square::new(1, 6);
    pub const G1: Square = Square::new(1, 7);
    pub const H1: Square = Square::new(1, 8);
    pub const A2: Square = Square::new(2, 1);
    pub const B2: Square = Square::new(2, 2);
    pub const C2: Square = Square::new(2, 3);
    pub const D2: Square = Square::new(2, 4);
    pub const E2: Square = Square::new(2, 5);
    pub const F2: Square = Square::new(2, 6);
    pub const G2: Square = Square::new(2, 7);
    pub const H2: Square = Square::new(2, 8);
    pub const A3: Square = Square::new(3, 1);
    pub const B3: Square = Square::new(3, 2);
    pub const C3: Square = Square::new(3, 3);
    pub const D3: Square = Square::new(3, 4);
    pub const E3: Square = Square::new(3, 5);
    pub const F3: Square = Square::new(3, 6);
    pub const G3: Square = Square::new(3, 7);
    pub const H3: Square = Square::new(3, 8);
    pub const A4: Square = Square::new(4, 1);
    pub const B4: Square = Square::new(4, 2);
    pub const C4: Square = Square::new(4, 3);
    pub const D4: Square = Square::new(4, 4);
    pub const E4: Square = Square::new(4, 5);
    pub const F4: Square = Square::new(4, 6);
    pub const G4: Square = Square::new(4, 7);
    pub const H4: Square = Square::new(4, 8);
    pub const A5: Square = Square::new(5, 1);
    pub const B5: Square = Square::new(5, 2);
    pub const C5: Square = Square::new(5, 3);
    pub const D5: Square = Square::new(5, 4);
    pub const E5: Square = Square::new(5, 5);
    pub const F5: Square = Square::new(5, 6);
    pub const G5: Square = Square::new(5, 7);
    pub const H5: Square = Square::new(5, 8);
    pub const A6: Square = Square::new(6, 1);
    pub const B6: Square = Square::new(6, 2);
    pub const C6: Square = Square::new(6, 3);
    pub const D6: Square = Square::new(6, 4);
    pub const E6: Square = Square::new(6, 5);
    pub const F6: Square = Square::new(6, 6);
    pub const G6: Square = Square::new(6, 7);
    pub const H6: Square = Square::new(6, 8);
    pub const A7: Square = Square::new(7, 1);
    pub const B7: Square = Square::new(7, 2);
    pub const C7: Square = Square::new(7, 3);
    pub const D7: Square = Square::new(7, 4);
    pub const E7: Square = Square::new(7, 5);
    pub const F7: Square = Square::new(7, 6);
    pub const G7: Square = Square::new(7, 7);
    pub const H7: Square = Square::new(7, 8);
    pub const A8: Square = Square::new(8, 1);
    pub const B8: Square = Square::new(8, 2);
    pub const C8: Square = Square::new(8, 3);
    pub const D8: Square = Square::new(8, 4);
    pub const E8: Square = Square::new(8, 5);
    pub const F8: Square = Square::new(8, 6);
    pub const G8: Square = Square::new(8, 7);
    pub const H8: Square = Square::new(8, 8);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + (self.col - 1) as u8) as char;
            write!(f, "{}{}", file, self.row)
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
