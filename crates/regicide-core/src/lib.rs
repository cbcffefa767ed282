//! Core chess types: board representation, move generation, and game rules.

mod board;
mod chess_move;
mod error;
mod fen;
mod game;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod rules;
mod square;
mod square_set;
mod team;

pub use board::{Board, PrettyBoard};
pub use chess_move::{Move, PromotionPiece};
pub use error::{BoardError, FenError, MoveError};
pub use fen::STARTING_FEN;
pub use game::Game;
pub use movegen::MoveList;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rules::{Rules, Status};
pub use square::Square;
pub use square_set::SquareSet;
pub use team::Team;
