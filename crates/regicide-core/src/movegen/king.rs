//! King move generation.

use crate::board::Board;
use crate::square::Square;
use crate::team::Team;

use super::{MoveList, push_step};

/// The eight unit steps, orthogonal then diagonal.
const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Generate pseudo-legal king moves. Castling is not supported.
pub(super) fn gen_king(board: &Board, src: Square, team: Team, list: &mut MoveList) {
    for step in KING_STEPS {
        push_step(board, src, team, step, list);
    }
}
