//! FEN string parsing and serialization for [`Board`].
//!
//! Castling rights are checked for syntax only; the rules engine has no
//! castling. Move counters are validated and discarded.

use std::str::FromStr;

use crate::board::Board;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;
use crate::team::Team;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a full FEN string into a board and the side to move.
pub(crate) fn parse_fen(fen: &str) -> Result<(Board, Team), FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let mut board = parse_placement(fields[0])?;

    let side_to_move = match fields[1] {
        "w" => Team::White,
        "b" => Team::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
    };

    if fields[2] != "-" {
        if let Some(character) = fields[2].chars().find(|c| !"KQkq".contains(*c)) {
            return Err(FenError::InvalidCastlingChar { character });
        }
    }

    let en_passant = if fields[3] == "-" {
        None
    } else {
        Some(
            Square::from_algebraic(fields[3]).ok_or_else(|| FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            })?,
        )
    };
    board.set_en_passant_target(en_passant);
    board.set_double_push_flag(en_passant.is_some());

    fields[4].parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
        field: "halfmove clock",
        found: fields[4].to_string(),
    })?;
    fields[5].parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
        field: "fullmove number",
        found: fields[5].to_string(),
    })?;

    Ok((board, side_to_move))
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        // FEN ranks go from 8 to 1 (top to bottom)
        let row = 8 - rank_index as i8;
        let mut col: i8 = 1;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                let digit = digit as i8;
                if col + digit > 9 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: (col - 1 + digit) as usize,
                    });
                }
                col += digit;
            } else {
                let piece = Piece::from_letter(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                if col > 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: col as usize,
                    });
                }
                board.set(Square::new(row, col), Some(piece));
                col += 1;
            }
        }

        if col != 9 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: (col - 1) as usize,
            });
        }
    }
    Ok(board)
}

impl FromStr for Board {
    type Err = FenError;

    /// Parse a FEN string, discarding the side to move.
    fn from_str(fen: &str) -> Result<Board, FenError> {
        parse_fen(fen).map(|(board, _)| board)
    }
}

impl Board {
    /// Return the piece placement field of the FEN for this board.
    pub fn placement(&self) -> String {
        let mut out = String::new();
        for row in (1i8..=8).rev() {
            let mut empty_count = 0u8;
            for col in 1i8..=8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push((b'0' + empty_count) as char);
                            empty_count = 0;
                        }
                        out.push(piece.letter());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push((b'0' + empty_count) as char);
            }
            if row > 1 {
                out.push('/');
            }
        }
        out
    }

    /// Serialize this board as FEN with `side_to_move` as the active color.
    ///
    /// Castling is always `-` and the counters are `0 1`.
    pub fn to_fen(&self, side_to_move: Team) -> String {
        let side = match side_to_move {
            Team::White => 'w',
            Team::Black => 'b',
        };
        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!("{} {} - {} 0 1", self.placement(), side, ep)
    }
}

#[cfg(test)]
mod tests {
    use super::{STARTING_FEN, parse_fen};
    use crate::board::Board;
    use crate::error::FenError;
    use crate::piece::Piece;
    use crate::square::Square;
    use crate::team::Team;

    #[test]
    fn starting_fen_matches_constructor() {
        let board: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn side_and_en_passant() {
        let (board, side) =
            parse_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 3").unwrap();
        assert_eq!(side, Team::Black);
        assert_eq!(board.en_passant_target(), Some(Square::E3));
        assert!(board.double_push_flag());
        assert_eq!(board.piece_at(Square::D4), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn to_fen_roundtrip() {
        let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1";
        let (board, side) = parse_fen(fen).unwrap();
        assert_eq!(board.to_fen(side), fen);
    }

    #[test]
    fn wrong_field_count() {
        let err = "8/8/8/8/8/8/8/8 w - -".parse::<Board>().unwrap_err();
        assert_eq!(err, FenError::WrongFieldCount { found: 4 });
    }

    #[test]
    fn wrong_rank_count() {
        let err = "8/8/8/8/8/8/8 w - - 0 1".parse::<Board>().unwrap_err();
        assert_eq!(err, FenError::WrongRankCount { found: 7 });
    }

    #[test]
    fn bad_rank_length() {
        let err = "9/8/8/8/8/8/8/8 w - - 0 1".parse::<Board>().unwrap_err();
        assert_eq!(err, FenError::InvalidPieceChar { character: '9' });

        let err = "ppppppppp/8/8/8/8/8/8/8 w - - 0 1".parse::<Board>().unwrap_err();
        assert!(matches!(err, FenError::BadRankLength { rank_index: 0, .. }));

        let err = "7/8/8/8/8/8/8/8 w - - 0 1".parse::<Board>().unwrap_err();
        assert_eq!(err, FenError::BadRankLength { rank_index: 0, length: 7 });
    }

    #[test]
    fn long_digit_run_is_rejected() {
        let fen = "8".repeat(17) + "/8/8/8/8/8/8/8 w - - 0 1";
        let err = fen.parse::<Board>().unwrap_err();
        assert_eq!(err, FenError::BadRankLength { rank_index: 0, length: 16 });

        let err = "44p/8/8/8/8/8/8/8 w - - 0 1".parse::<Board>().unwrap_err();
        assert_eq!(err, FenError::BadRankLength { rank_index: 0, length: 9 });
    }

    #[test]
    fn invalid_fields() {
        assert!(matches!(
            "8/8/8/8/8/8/8/8 x - - 0 1".parse::<Board>(),
            Err(FenError::InvalidColor { .. })
        ));
        assert!(matches!(
            "8/8/8/8/8/8/8/8 w KX - 0 1".parse::<Board>(),
            Err(FenError::InvalidCastlingChar { character: 'X' })
        ));
        assert!(matches!(
            "8/8/8/8/8/8/8/8 w - z9 0 1".parse::<Board>(),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            "8/8/8/8/8/8/8/8 w - - x 1".parse::<Board>(),
            Err(FenError::InvalidMoveCounter { field: "halfmove clock", .. })
        ));
    }
}
