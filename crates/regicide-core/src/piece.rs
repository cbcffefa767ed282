//! A chess piece: a team plus a kind.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::team::Team;

/// A chess piece belonging to one team. Equality is structural.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    team: Team,
    kind: PieceKind,
}

impl Piece {
    pub const WHITE_KING: Piece = Piece::new(Team::White, PieceKind::King);
    pub const WHITE_QUEEN: Piece = Piece::new(Team::White, PieceKind::Queen);
    pub const WHITE_ROOK: Piece = Piece::new(Team::White, PieceKind::Rook);
    pub const WHITE_BISHOP: Piece = Piece::new(Team::White, PieceKind::Bishop);
    pub const WHITE_KNIGHT: Piece = Piece::new(Team::White, PieceKind::Knight);
    pub const WHITE_PAWN: Piece = Piece::new(Team::White, PieceKind::Pawn);

    pub const BLACK_KING: Piece = Piece::new(Team::Black, PieceKind::King);
    pub const BLACK_QUEEN: Piece = Piece::new(Team::Black, PieceKind::Queen);
    pub const BLACK_ROOK: Piece = Piece::new(Team::Black, PieceKind::Rook);
    pub const BLACK_BISHOP: Piece = Piece::new(Team::Black, PieceKind::Bishop);
    pub const BLACK_KNIGHT: Piece = Piece::new(Team::Black, PieceKind::Knight);
    pub const BLACK_PAWN: Piece = Piece::new(Team::Black, PieceKind::Pawn);

    /// Create a piece from a team and a kind.
    #[inline]
    pub const fn new(team: Team, kind: PieceKind) -> Piece {
        Piece { team, kind }
    }

    /// Parse a piece letter: uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        Some(Piece::new(team, kind))
    }

    /// Return the team this piece belongs to.
    #[inline]
    pub const fn team(self) -> Team {
        self.team
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the letter for this piece: uppercase for White, lowercase for Black.
    #[inline]
    pub fn letter(self) -> char {
        let base = self.kind.letter();
        match self.team {
            Team::White => base.to_ascii_uppercase(),
            Team::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let team_prefix = match self.team {
            Team::White => 'W',
            Team::Black => 'B',
        };
        write!(f, "{}{}", team_prefix, self.kind.letter().to_ascii_uppercase())
    }
}
