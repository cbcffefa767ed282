//! The chess board: piece placement plus en passant bookkeeping.

use std::fmt;

use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

/// Back-rank layout from column a to column h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces plus en passant state.
///
/// The board is a plain value: copying it is how moves are probed and
/// applied, so no caller ever observes a half-updated position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Piece on each square, indexed by [`Square::index`] (row-major, row 1 first).
    squares: [Option<Piece>; Square::COUNT],
    /// Square skipped by the most recent double pawn push, if any.
    en_passant: Option<Square>,
    /// Set when the last applied move was a double pawn push.
    double_push: bool,
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            en_passant: None,
            double_push: false,
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.reset_to_standard_start();
        board
    }

    /// Clear the board and set up the 32 pieces of the opening position.
    pub fn reset_to_standard_start(&mut self) {
        *self = Board::empty();
        for (col, kind) in (1i8..=8).zip(BACK_RANK) {
            self.set(Square::new(1, col), Some(Piece::new(Team::White, kind)));
            self.set(Square::new(2, col), Some(Piece::WHITE_PAWN));
            self.set(Square::new(7, col), Some(Piece::BLACK_PAWN));
            self.set(Square::new(8, col), Some(Piece::new(Team::Black, kind)));
        }
    }

    /// Put `piece` on `sq` (or clear it with `None`), replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if `sq` is not on the board.
    pub fn place(&mut self, sq: Square, piece: Option<Piece>) -> Result<(), BoardError> {
        let idx = sq.index().ok_or(BoardError::OutOfRange {
            row: sq.row(),
            col: sq.col(),
        })?;
        self.squares[idx] = piece;
        Ok(())
    }

    /// Overwrite a square the caller knows is on the board. Off-board squares are ignored.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(idx) = sq.index() {
            self.squares[idx] = piece;
        }
    }

    /// Return the piece on `sq`, or `None` if it is empty or off the board.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        sq.index().and_then(|idx| self.squares[idx])
    }

    /// Return the team of the piece on `sq`.
    ///
    /// `None` means either an empty square or an off-board square; move
    /// generation relies on both reading as "not a friendly piece".
    #[inline]
    pub fn team_at(&self, sq: Square) -> Option<Team> {
        self.piece_at(sq).map(Piece::team)
    }

    /// Return `true` if `sq` is on the board.
    #[inline]
    pub fn in_bounds(&self, sq: Square) -> bool {
        sq.is_on_board()
    }

    /// Return `true` if `sq` is on the board and holds no piece.
    #[inline]
    pub fn is_vacant(&self, sq: Square) -> bool {
        sq.is_on_board() && self.piece_at(sq).is_none()
    }

    /// Return the square of `team`'s king.
    ///
    /// Scans row-major and returns the first match; [`Square::NONE`] when the
    /// team has no king.
    pub fn find_king(&self, team: Team) -> Square {
        let king = Piece::new(team, PieceKind::King);
        Square::all()
            .find(|&sq| self.piece_at(sq) == Some(king))
            .unwrap_or(Square::NONE)
    }

    /// Return `true` if both kings are present and stand on touching squares.
    pub fn kings_adjacent(&self) -> bool {
        let white = self.find_king(Team::White);
        let black = self.find_king(Team::Black);
        if white == Square::NONE || black == Square::NONE {
            return false;
        }
        white.distance(black) <= 1
    }

    /// Iterate over `team`'s pieces in row-major order.
    pub fn pieces(&self, team: Team) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.team() == team => Some((sq, piece)),
            _ => None,
        })
    }

    /// Count the pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|p| p.is_some()).count()
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Set the en passant target square.
    #[inline]
    pub fn set_en_passant_target(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    /// Return `true` if the last applied move was a double pawn push.
    #[inline]
    pub fn double_push_flag(&self) -> bool {
        self.double_push
    }

    /// Set the double pawn push flag.
    #[inline]
    pub fn set_double_push_flag(&mut self, flag: bool) {
        self.double_push = flag;
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// One line per row, row 1 first: `|R|N|B|Q|K|B|N|R|`, spaces for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1i8..=8 {
            write!(f, "|")?;
            for col in 1i8..=8 {
                let c = self.piece_at(Square::new(row, col)).map_or(' ', Piece::letter);
                write!(f, "{c}|")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, row 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in (1i8..=8).rev() {
            write!(f, "{row}  ")?;
            for col in 1i8..=8 {
                let c = board.piece_at(Square::new(row, col)).map_or('.', Piece::letter);
                if col < 8 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
