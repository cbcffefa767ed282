//! Knight move generation.

use crate::board::Board;
use crate::square::Square;
use crate::team::Team;

use super::{MoveList, push_step};

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Generate pseudo-legal knight moves.
pub(super) fn gen_knight(board: &Board, src: Square, team: Team, list: &mut MoveList) {
    for step in KNIGHT_STEPS {
        push_step(board, src, team, step, list);
    }
}
