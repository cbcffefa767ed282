//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::square::Square;
use crate::team::Team;

use super::{MoveList, push_rays};

const DIAGONALS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Generate pseudo-legal bishop moves.
pub(super) fn gen_bishop(board: &Board, src: Square, team: Team, list: &mut MoveList) {
    push_rays(board, src, team, &DIAGONALS, list);
}

/// Generate pseudo-legal rook moves.
pub(super) fn gen_rook(board: &Board, src: Square, team: Team, list: &mut MoveList) {
    push_rays(board, src, team, &ORTHOGONALS, list);
}

/// Generate pseudo-legal queen moves: diagonals first, then orthogonals.
pub(super) fn gen_queen(board: &Board, src: Square, team: Team, list: &mut MoveList) {
    push_rays(board, src, team, &DIAGONALS, list);
    push_rays(board, src, team, &ORTHOGONALS, list);
}
