//! Error types for board placement, FEN parsing, and move application.

use crate::chess_move::Move;

/// Errors from direct board manipulation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A square outside the 8x8 board was addressed.
    #[error("square ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: i8,
        /// Requested column.
        col: i8,
    },
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
}

/// Errors from committing a move to a [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move is not legal for the side to move. The reason (wrong team,
    /// no legal moves from the origin, move not in the legal set) is not
    /// distinguished.
    #[error("invalid move: {mv}")]
    InvalidMove {
        /// The rejected move.
        mv: Move,
    },
    /// A coordinate-notation string did not name a move on this board.
    #[error("unrecognized move: \"{notation}\"")]
    Unparseable {
        /// The notation that failed to resolve.
        notation: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, MoveError};
    use crate::chess_move::Move;
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 6 FEN fields, found 4");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::OutOfRange { row: 0, col: 9 };
        assert_eq!(format!("{err}"), "square (0, 9) is off the board");
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::InvalidMove {
            mv: Move::new(Square::E2, Square::E5),
        };
        assert_eq!(format!("{err}"), "invalid move: e2e5");
    }
}
