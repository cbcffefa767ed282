//! Chess move representation.

use std::fmt;

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    /// All promotion pieces, in the order the generator emits them.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    /// Return the notation character for this promotion.
    pub const fn uci_char(self) -> char {
        match self {
            PromotionPiece::Queen => 'q',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Knight => 'n',
        }
    }

    /// Parse a notation character (lowercase) into a promotion piece.
    pub const fn from_uci_char(c: char) -> Option<PromotionPiece> {
        match c {
            'q' => Some(PromotionPiece::Queen),
            'r' => Some(PromotionPiece::Rook),
            'b' => Some(PromotionPiece::Bishop),
            'n' => Some(PromotionPiece::Knight),
            _ => None,
        }
    }
}

/// A chess move. Equality is structural over all fields.
///
/// A move does not record what it captures; that is read back from the
/// board when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    promotion: Option<PromotionPiece>,
    double_push: bool,
    en_passant: bool,
}

impl Move {
    /// Null move sentinel (A1→A1). Never generated.
    pub const NULL: Move = Move::new(Square::A1, Square::A1);

    /// Create a normal (quiet or capture) move.
    pub const fn new(source: Square, dest: Square) -> Move {
        Move {
            source,
            dest,
            promotion: None,
            double_push: false,
            en_passant: false,
        }
    }

    /// Create a promotion move.
    pub const fn new_promotion(source: Square, dest: Square, promo: PromotionPiece) -> Move {
        Move {
            promotion: Some(promo),
            ..Move::new(source, dest)
        }
    }

    /// Create a two-square pawn advance.
    pub const fn new_double_push(source: Square, dest: Square) -> Move {
        Move {
            double_push: true,
            ..Move::new(source, dest)
        }
    }

    /// Create an en passant capture onto the skipped-over square.
    pub const fn new_en_passant(source: Square, dest: Square) -> Move {
        Move {
            en_passant: true,
            ..Move::new(source, dest)
        }
    }

    /// Return the origin square.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// Return the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Return the promotion piece, if this is a promotion.
    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }

    /// Return `true` if this is a promotion move.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Return `true` if this is a two-square pawn advance.
    #[inline]
    pub const fn is_double_push(self) -> bool {
        self.double_push
    }

    /// Return `true` if this is an en passant capture.
    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.en_passant
    }

    /// Return `true` if this is the null move sentinel.
    #[inline]
    pub fn is_null(self) -> bool {
        self == Move::NULL
    }

    /// Return the coordinate-notation string (e.g. "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        self.to_string()
    }

    /// Resolve a coordinate-notation string against the pseudo-legal moves on `board`.
    ///
    /// The string only names squares and a promotion letter, so the flags
    /// (double push, en passant) are recovered from the generated move.
    pub fn from_uci(s: &str, board: &Board) -> Option<Move> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return None;
        }
        let source = Square::from_algebraic(&s[0..2])?;
        let dest = Square::from_algebraic(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            Some(c) => Some(PromotionPiece::from_uci_char(c)?),
            None => None,
        };

        board
            .pseudo_legal_moves(source)
            .as_slice()
            .iter()
            .copied()
            .find(|mv| mv.dest() == dest && mv.promotion() == promotion)
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NULL
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.uci_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}", self)?;
        if self.double_push {
            write!(f, " double-push")?;
        }
        if self.en_passant {
            write!(f, " en-passant")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Move, PromotionPiece};
    use crate::board::Board;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn normal_move_fields() {
        let mv = Move::new(Square::E2, Square::E3);
        assert_eq!(mv.source(), Square::E2);
        assert_eq!(mv.dest(), Square::E3);
        assert_eq!(mv.promotion(), None);
        assert!(!mv.is_double_push());
        assert!(!mv.is_en_passant());
        assert!(!mv.is_null());
    }

    #[test]
    fn flags_participate_in_equality() {
        let plain = Move::new(Square::E2, Square::E4);
        let double = Move::new_double_push(Square::E2, Square::E4);
        assert_ne!(plain, double);

        let capture = Move::new(Square::E5, Square::D6);
        let ep = Move::new_en_passant(Square::E5, Square::D6);
        assert_ne!(capture, ep);

        let mut set = HashSet::new();
        set.insert(double);
        set.insert(Move::new_double_push(Square::E2, Square::E4));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn promotion_all_pieces() {
        for promo in PromotionPiece::ALL {
            let mv = Move::new_promotion(Square::E7, Square::E8, promo);
            assert_eq!(mv.promotion(), Some(promo));
            assert!(mv.is_promotion());
        }
        assert_eq!(PromotionPiece::Knight.to_piece_kind(), PieceKind::Knight);
        assert_eq!(PromotionPiece::Queen.to_piece_kind(), PieceKind::Queen);
    }

    #[test]
    fn uci_formatting() {
        assert_eq!(Move::new(Square::E2, Square::E4).to_uci(), "e2e4");
        let mv = Move::new_promotion(Square::E7, Square::E8, PromotionPiece::Knight);
        assert_eq!(mv.to_uci(), "e7e8n");
        assert_eq!(format!("{}", Move::NULL), "0000");
    }

    #[test]
    fn debug_shows_flags() {
        let dbg = format!("{:?}", Move::new_double_push(Square::D2, Square::D4));
        assert!(dbg.contains("d2d4"), "{dbg}");
        assert!(dbg.contains("double-push"), "{dbg}");
    }

    #[test]
    fn from_uci_recovers_double_push_flag() {
        let board = Board::starting_position();
        let mv = Move::from_uci("e2e4", &board).unwrap();
        assert!(mv.is_double_push());
        assert_eq!(mv, Move::new_double_push(Square::E2, Square::E4));
    }

    #[test]
    fn from_uci_rejects_garbage() {
        let board = Board::starting_position();
        assert_eq!(Move::from_uci("e2e5", &board), None);
        assert_eq!(Move::from_uci("zz", &board), None);
        assert_eq!(Move::from_uci("e2e4x", &board), None);
        assert_eq!(Move::from_uci("e4e5", &board), None);
    }

    #[test]
    fn from_uci_promotion() {
        let board: Board = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let mv = Move::from_uci("a7a8r", &board).unwrap();
        assert_eq!(mv.promotion(), Some(PromotionPiece::Rook));
        assert_eq!(Move::from_uci("a7a8", &board), None);
    }
}
