//! Pseudo-legal move generation.
//!
//! Moves produced here respect each piece's movement pattern and board
//! occupancy but ignore king safety. Legality filtering lives in
//! [`rules`](crate::rules).

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;
use crate::team::Team;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{gen_bishop, gen_queen, gen_rook};

/// Stack-allocated buffer for generated moves. A single piece never has more
/// than 27 moves; 256 also covers a whole side.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; 256],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Return `true` if `mv` is in the list.
    #[inline]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }

    /// Keep only the moves for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut write = 0usize;
        for read in 0..self.len as usize {
            let mv = self.moves[read];
            if keep(&mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write as u16;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &MoveList) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Push a single fixed-offset move if the target is on the board and not
/// held by `team`.
#[inline]
fn push_step(board: &Board, from: Square, team: Team, (d_row, d_col): (i8, i8), list: &mut MoveList) {
    let to = from.offset(d_row, d_col);
    if board.in_bounds(to) && board.team_at(to) != Some(team) {
        list.push(Move::new(from, to));
    }
}

/// Walk from `from` in each direction, pushing empty squares and the first
/// enemy-occupied square, stopping before any friendly piece.
fn push_rays(board: &Board, from: Square, team: Team, dirs: &[(i8, i8)], list: &mut MoveList) {
    for &(d_row, d_col) in dirs {
        let mut to = from.offset(d_row, d_col);
        while board.in_bounds(to) {
            match board.team_at(to) {
                None => list.push(Move::new(from, to)),
                Some(occupant) => {
                    if occupant != team {
                        list.push(Move::new(from, to));
                    }
                    break;
                }
            }
            to = to.offset(d_row, d_col);
        }
    }
}

impl Board {
    /// Generate the pseudo-legal moves of the piece on `sq`.
    ///
    /// Returns an empty list when `sq` is empty or off the board.
    pub fn pseudo_legal_moves(&self, sq: Square) -> MoveList {
        let mut list = MoveList::new();
        let Some(piece) = self.piece_at(sq) else {
            return list;
        };
        let team = piece.team();
        match piece.kind() {
            PieceKind::King => gen_king(self, sq, team, &mut list),
            PieceKind::Queen => gen_queen(self, sq, team, &mut list),
            PieceKind::Rook => gen_rook(self, sq, team, &mut list),
            PieceKind::Bishop => gen_bishop(self, sq, team, &mut list),
            PieceKind::Knight => gen_knight(self, sq, team, &mut list),
            PieceKind::Pawn => gen_pawn(self, sq, team, &mut list),
        }
        list
    }

    /// Return every square some piece of `team` has a pseudo-legal move onto.
    ///
    /// Recomputed from scratch on each call by regenerating every piece's
    /// moves. Pawn pushes are included, but they only ever land on empty
    /// squares, so the set is exact for the purpose of finding attacked pieces.
    pub fn attacked_squares(&self, team: Team) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for (sq, _) in self.pieces(team) {
            for mv in &self.pseudo_legal_moves(sq) {
                set.insert(mv.dest());
            }
        }
        set
    }
}
