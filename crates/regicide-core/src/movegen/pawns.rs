//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

use super::MoveList;

/// Push a pawn move, expanding it into one move per promotion piece when
/// `dst` is on the promotion row.
fn push_pawn_move(src: Square, dst: Square, team: Team, list: &mut MoveList) {
    if dst.row() == team.promotion_row() {
        for promo in PromotionPiece::ALL {
            list.push(Move::new_promotion(src, dst, promo));
        }
    } else {
        list.push(Move::new(src, dst));
    }
}

/// Generate pseudo-legal pawn moves: pushes, captures, double pushes, and en passant.
pub(super) fn gen_pawn(board: &Board, src: Square, team: Team, list: &mut MoveList) {
    let forward = team.forward();

    // --- Single push ---
    let one = src.offset(forward, 0);
    if board.is_vacant(one) {
        push_pawn_move(src, one, team, list);
    }

    // --- Captures ---
    for d_col in [-1, 1] {
        let dst = src.offset(forward, d_col);
        if board.team_at(dst) == Some(!team) {
            push_pawn_move(src, dst, team, list);
        }
    }

    // --- Double push ---
    if src.row() == team.pawn_home_row() {
        let two = src.offset(2 * forward, 0);
        if board.is_vacant(one) && board.is_vacant(two) {
            list.push(Move::new_double_push(src, two));
        }
    }

    // --- En passant ---
    // The passed pawn must actually stand beside us under the target.
    if let Some(target) = board.en_passant_target() {
        let beside = (src.col() - target.col()).abs() == 1;
        let victim = Square::new(src.row(), target.col());
        if src.row() == team.en_passant_row()
            && target.row() == src.row() + forward
            && beside
            && board.piece_at(victim) == Some(Piece::new(!team, PieceKind::Pawn))
        {
            list.push(Move::new_en_passant(src, target));
        }
    }
}
