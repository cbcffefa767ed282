//! A game in progress: board, side to move, and the rule set in force.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::{FenError, MoveError};
use crate::fen::parse_fen;
use crate::movegen::MoveList;
use crate::rules::{Rules, Status};
use crate::square::Square;
use crate::team::Team;

/// Board plus turn bookkeeping. Moves go through [`Game::make_move`], which
/// only commits legal moves for the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Team,
    rules: Rules,
}

impl Game {
    /// Start a game from the opening position with White to move.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position(), Team::White)
    }

    /// Wrap an existing position.
    pub fn from_board(board: Board, turn: Team) -> Game {
        Game {
            board,
            turn,
            rules: Rules::default(),
        }
    }

    /// Start a game from a FEN string.
    ///
    /// # Errors
    ///
    /// Returns [`FenError`] if the string is not valid FEN.
    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        let (board, turn) = parse_fen(fen)?;
        Ok(Game::from_board(board, turn))
    }

    /// Replace the rule set.
    pub fn with_rules(mut self, rules: Rules) -> Game {
        self.rules = rules;
        self
    }

    /// Return the side to move.
    pub fn turn(&self) -> Team {
        self.turn
    }

    /// Hand the move to `turn`.
    pub fn set_turn(&mut self, turn: Team) {
        self.turn = turn;
    }

    /// Return the current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the position; the turn is left as is.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Return the rule set in force.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Legal moves of the piece on `sq`, whichever team owns it.
    pub fn legal_moves(&self, sq: Square) -> MoveList {
        self.rules.legal_moves(&self.board, sq)
    }

    /// Resolve coordinate notation (`e2e4`, `e7e8q`) against the current position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Unparseable`] if the string is malformed or no
    /// piece on its origin square moves that way.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveError> {
        Move::from_uci(notation, &self.board).ok_or_else(|| MoveError::Unparseable {
            notation: notation.to_string(),
        })
    }

    /// Commit `mv` for the side to move and pass the turn.
    ///
    /// The move must equal a generated legal move in every field, flags
    /// included; use [`Game::parse_move`] to obtain one from notation.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the origin does not hold a piece
    /// of the side to move, or the move is not among that piece's legal moves.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let invalid = MoveError::InvalidMove { mv };
        if self.board.team_at(mv.source()) != Some(self.turn) {
            debug!(mv = %mv, turn = %self.turn, "rejected: origin not owned by side to move");
            return Err(invalid);
        }

        let legal = self.legal_moves(mv.source());
        if !legal.contains(&mv) {
            debug!(mv = ?mv, turn = %self.turn, legal = legal.len(), "rejected: not a legal move");
            return Err(invalid);
        }

        self.board = self.board.make_move(mv);
        debug!(mv = %mv, team = %self.turn, "move committed");
        self.turn = !self.turn;
        Ok(())
    }

    /// Return `true` if `team`'s king is attacked.
    pub fn is_in_check(&self, team: Team) -> bool {
        self.board.is_in_check(team)
    }

    /// Checkmate test for `team` under this game's rules.
    pub fn is_in_checkmate(&self, team: Team) -> bool {
        self.rules.is_in_checkmate(&self.board, team)
    }

    /// Stalemate test for `team` under this game's rules.
    pub fn is_in_stalemate(&self, team: Team) -> bool {
        self.rules.is_in_stalemate(&self.board, team)
    }

    /// Status of the side to move.
    pub fn status(&self) -> Status {
        self.rules.status(&self.board, self.turn)
    }

    /// FEN of the current position.
    pub fn to_fen(&self) -> String {
        self.board.to_fen(self.turn)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
