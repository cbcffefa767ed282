//! Legality filtering and terminal-state detection.
//!
//! A pseudo-legal move is legal when the position it produces leaves the
//! mover's king unattacked and passes every extra rule enabled in [`Rules`].
//! Each candidate is applied to a copy of the board, so the caller's board is
//! never touched while probing.

use std::fmt;

use tracing::{debug, trace};

use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen::MoveList;
use crate::square::Square;
use crate::team::Team;

/// Outcome of a position from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The team has legal moves and is not in check.
    Ongoing,
    /// The team is in check but can respond.
    Check,
    /// The team is in check with no legal move.
    Checkmate,
    /// The team is not in check and has no legal move.
    Stalemate,
}

impl Status {
    /// Return `true` if the game cannot continue.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ongoing => write!(f, "ongoing"),
            Status::Check => write!(f, "check"),
            Status::Checkmate => write!(f, "checkmate"),
            Status::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Legality rules layered on top of king safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    /// Reject any move after which the two kings stand on touching squares.
    pub forbid_adjacent_kings: bool,
}

impl Rules {
    /// King safety plus the adjacent-kings house rule.
    pub const HOUSE: Rules = Rules {
        forbid_adjacent_kings: true,
    };

    /// King safety only.
    pub const STANDARD: Rules = Rules {
        forbid_adjacent_kings: false,
    };

    /// Return `true` if the position after `team` moved is acceptable.
    pub fn permits(&self, after: &Board, team: Team) -> bool {
        if after.is_in_check(team) {
            return false;
        }
        if self.forbid_adjacent_kings && after.kings_adjacent() {
            return false;
        }
        true
    }

    /// Return the legal moves of the piece on `sq`; empty if `sq` is empty.
    pub fn legal_moves(&self, board: &Board, sq: Square) -> MoveList {
        let Some(piece) = board.piece_at(sq) else {
            return MoveList::new();
        };
        let team = piece.team();
        let mut moves = board.pseudo_legal_moves(sq);
        moves.retain(|&mv| {
            let ok = self.permits(&board.make_move(mv), team);
            if !ok {
                trace!(mv = %mv, %team, "rejected pseudo-legal move");
            }
            ok
        });
        moves
    }

    /// Return every legal move of `team`, origin squares in row-major order.
    pub fn all_legal_moves(&self, board: &Board, team: Team) -> Vec<Move> {
        board
            .pieces(team)
            .flat_map(|(sq, _)| self.legal_moves(board, sq).as_slice().to_vec())
            .collect()
    }

    /// Return `true` if any piece of `team` has a legal move.
    pub fn has_legal_move(&self, board: &Board, team: Team) -> bool {
        board
            .pieces(team)
            .any(|(sq, _)| !self.legal_moves(board, sq).is_empty())
    }

    /// Return `true` if `team` is in check and has no legal move.
    pub fn is_in_checkmate(&self, board: &Board, team: Team) -> bool {
        board.is_in_check(team) && !self.has_legal_move(board, team)
    }

    /// Return `true` if `team` is not in check and has no legal move.
    pub fn is_in_stalemate(&self, board: &Board, team: Team) -> bool {
        !board.is_in_check(team) && !self.has_legal_move(board, team)
    }

    /// Classify the position for `team`.
    pub fn status(&self, board: &Board, team: Team) -> Status {
        let in_check = board.is_in_check(team);
        let status = match (in_check, self.has_legal_move(board, team)) {
            (false, true) => Status::Ongoing,
            (true, true) => Status::Check,
            (true, false) => Status::Checkmate,
            (false, false) => Status::Stalemate,
        };
        if status.is_terminal() {
            debug!(%team, %status, "terminal position");
        }
        status
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::HOUSE
    }
}

impl Board {
    /// Return `true` if `team`'s king is attacked. A team without a king is never in check.
    pub fn is_in_check(&self, team: Team) -> bool {
        let king = self.find_king(team);
        if king == Square::NONE {
            return false;
        }
        self.attacked_squares(!team).contains(king)
    }

    /// Legal moves of the piece on `sq` under [`Rules::HOUSE`].
    pub fn legal_moves(&self, sq: Square) -> MoveList {
        Rules::HOUSE.legal_moves(self, sq)
    }

    /// Checkmate test under [`Rules::HOUSE`].
    pub fn is_in_checkmate(&self, team: Team) -> bool {
        Rules::HOUSE.is_in_checkmate(self, team)
    }

    /// Stalemate test under [`Rules::HOUSE`].
    pub fn is_in_stalemate(&self, team: Team) -> bool {
        Rules::HOUSE.is_in_stalemate(self, team)
    }
}

#[cfg(test)]
mod tests {
    use super::{Rules, Status};
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::piece::Piece;
    use crate::square::Square;
    use crate::team::Team;

    #[test]
    fn starting_position_twenty_moves_each() {
        let board = Board::starting_position();
        assert_eq!(Rules::HOUSE.all_legal_moves(&board, Team::White).len(), 20);
        assert_eq!(Rules::HOUSE.all_legal_moves(&board, Team::Black).len(), 20);
    }

    #[test]
    fn empty_square_yields_empty_list() {
        let board = Board::starting_position();
        assert!(board.legal_moves(Square::E4).is_empty());
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        let board: Board = "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1".parse().unwrap();
        assert!(board.legal_moves(Square::E2).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board: Board = "4k3/8/8/8/8/8/3r4/4K3 w - - 0 1".parse().unwrap();
        let moves = board.legal_moves(Square::E1);
        // d2 rook covers d1, e2 (row 2) and the whole d-file; capture on d2 is legal.
        let dests: Vec<_> = moves.as_slice().iter().map(|m| m.dest()).collect();
        assert!(dests.contains(&Square::D2));
        assert!(dests.contains(&Square::F1));
        assert!(!dests.contains(&Square::E2));
        assert!(!dests.contains(&Square::F2));
        assert!(!dests.contains(&Square::D1));
    }

    #[test]
    fn check_must_be_answered() {
        // Black rook checks along the e-file; the knight on b1 cannot interpose.
        let board: Board = "4r2k/8/8/8/8/8/8/1N2K3 w - - 0 1".parse().unwrap();
        assert!(board.is_in_check(Team::White));
        let knight = board.legal_moves(Square::B1);
        assert!(knight.is_empty(), "knight on b1 cannot reach the e-file: {knight:?}");
        let king = board.legal_moves(Square::E1);
        assert!(king.as_slice().iter().all(|m| m.dest().col() != 5));
    }

    #[test]
    fn probing_leaves_board_unchanged() {
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        let before = board;
        let _ = board.legal_moves(Square::E5);
        let _ = board.legal_moves(Square::E1);
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_exposing_king_is_illegal() {
        // Capturing en passant removes both pawns from row 5 and opens the rook's line.
        let board: Board = "4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1".parse().unwrap();
        let moves = board.legal_moves(Square::B5);
        assert!(!moves.as_slice().iter().any(|m| m.is_en_passant()));
        assert!(board.pseudo_legal_moves(Square::B5).as_slice().iter().any(|m| m.is_en_passant()));
    }

    #[test]
    fn adjacent_kings_rule_is_pluggable() {
        let mut board = Board::empty();
        board.place(Square::D4, Some(Piece::WHITE_KING)).unwrap();
        board.place(Square::D6, Some(Piece::BLACK_KING)).unwrap();
        let target = Move::new(Square::D4, Square::D5);
        assert!(!Rules::HOUSE.legal_moves(&board, Square::D4).contains(&target));
        // Without the house rule the black king still guards d5.
        assert!(!Rules::STANDARD.legal_moves(&board, Square::D4).contains(&target));
        assert!(Rules::STANDARD.legal_moves(&board, Square::D4).contains(&Move::new(Square::D4, Square::C4)));
    }

    #[test]
    fn no_king_is_never_in_check() {
        let mut board = Board::empty();
        board.place(Square::E4, Some(Piece::BLACK_QUEEN)).unwrap();
        assert!(!board.is_in_check(Team::White));
    }

    #[test]
    fn fools_mate() {
        let board: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
            .parse()
            .unwrap();
        assert!(board.is_in_check(Team::White));
        assert!(board.is_in_checkmate(Team::White));
        assert!(!board.is_in_stalemate(Team::White));
        assert_eq!(Rules::HOUSE.status(&board, Team::White), Status::Checkmate);
    }

    #[test]
    fn stalemate_requires_no_check() {
        // Black king h8, white queen g6, white king f7: black to move has nothing.
        let board: Board = "7k/5K2/6Q1/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert!(!board.is_in_check(Team::Black));
        assert!(board.is_in_stalemate(Team::Black));
        assert!(!board.is_in_checkmate(Team::Black));
        assert_eq!(Rules::HOUSE.status(&board, Team::Black), Status::Stalemate);
    }

    #[test]
    fn status_check_and_ongoing() {
        let board = Board::starting_position();
        assert_eq!(Rules::HOUSE.status(&board, Team::White), Status::Ongoing);

        let board: Board = "4k3/8/8/8/8/8/8/R3K3 b - - 0 1".parse().unwrap();
        assert_eq!(Rules::HOUSE.status(&board, Team::Black), Status::Ongoing);
        let board: Board = "4k3/8/8/8/8/8/8/4R1K1 b - - 0 1".parse().unwrap();
        assert_eq!(Rules::HOUSE.status(&board, Team::Black), Status::Check);
    }

    #[test]
    fn legal_moves_idempotent() {
        let board = Board::starting_position();
        for (sq, _) in board.pieces(Team::White) {
            assert_eq!(board.legal_moves(sq), board.legal_moves(sq));
        }
    }

    #[test]
    fn status_display() {
        assert_eq!(Status::Checkmate.to_string(), "checkmate");
        assert!(Status::Stalemate.is_terminal());
        assert!(!Status::Check.is_terminal());
    }
}
