//! Move execution via copy-make.

use tracing::trace;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

impl Board {
    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// The move is trusted: no legality check is made. If the source square
    /// is empty the board is returned unchanged.
    pub fn make_move(&self, mv: Move) -> Board {
        let mut b = *self;
        let src = mv.source();
        let dst = mv.dest();

        let Some(moving) = b.piece_at(src) else {
            return b;
        };
        let team = moving.team();

        // The pawn taken en passant sits beside the source, under the target.
        if mv.is_en_passant() {
            b.set(Square::new(src.row(), dst.col()), None);
        }

        let placed = match mv.promotion() {
            Some(promo) => Piece::new(team, promo.to_piece_kind()),
            None => moving,
        };
        b.set(src, None);
        b.set(dst, Some(placed));

        let ep_target = if mv.is_double_push() {
            Some(src.offset(team.forward(), 0))
        } else {
            None
        };
        b.set_en_passant_target(ep_target);
        b.set_double_push_flag(mv.is_double_push());

        trace!(mv = %mv, %team, "applied move");
        b
    }
}
