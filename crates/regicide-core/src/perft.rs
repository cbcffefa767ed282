//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::rules::Rules;
use crate::team::Team;

/// Count the leaf nodes of the legal-move tree at the given depth, `team` moving first.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves (bulk-counting: no recursive make_move).
pub fn perft(board: &Board, team: Team, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = Rules::default().all_legal_moves(board, team);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let child = board.make_move(*mv);
        nodes += perft(&child, !team, depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, team: Team, depth: usize) -> Vec<(String, u64)> {
    let moves = Rules::default().all_legal_moves(board, team);
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|mv| {
            let child = board.make_move(*mv);
            let count = if depth <= 1 { 1 } else { perft(&child, !team, depth - 1) };
            (mv.to_uci(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::parse_fen;

    // --- Position 1: Starting position ---

    #[test]
    fn perft_startpos_depth_1() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Team::White, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Team::White, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Team::White, 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Team::White, 4), 197_281);
    }

    // --- Position 3: 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1 ---
    // Exercises en passant and discovered checks along the fifth rank.

    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn perft_position3_depth_1() {
        let (board, side) = parse_fen(POSITION_3).unwrap();
        assert_eq!(perft(&board, side, 1), 14);
    }

    #[test]
    fn perft_position3_depth_2() {
        let (board, side) = parse_fen(POSITION_3).unwrap();
        assert_eq!(perft(&board, side, 2), 191);
    }

    #[test]
    fn perft_position3_depth_3() {
        let (board, side) = parse_fen(POSITION_3).unwrap();
        assert_eq!(perft(&board, side, 3), 2_812);
    }

    #[test]
    #[ignore] // slow
    fn perft_position3_depth_4() {
        let (board, side) = parse_fen(POSITION_3).unwrap();
        assert_eq!(perft(&board, side, 4), 43_238);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::starting_position();
        let parts = divide(&board, Team::White, 2);
        assert_eq!(parts.len(), 20);
        assert_eq!(parts.iter().map(|(_, n)| n).sum::<u64>(), 400);
        assert_eq!(parts[0].0, "a2a3");
        assert!(parts.iter().all(|(_, n)| *n == 20));
    }

    #[test]
    fn depth_zero_is_one() {
        assert_eq!(perft(&Board::empty(), Team::White, 0), 1);
    }
}
