//! Chess piece kinds.

use std::fmt;

/// The kind of a chess piece, without team information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All piece kinds.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Return the letter for this piece kind (lowercase).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    /// Parse a piece letter (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn letter_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.letter();
            assert_eq!(PieceKind::from_letter(c), Some(kind));
            assert_eq!(PieceKind::from_letter(c.to_ascii_uppercase()), Some(kind));
        }
    }

    #[test]
    fn from_letter_invalid() {
        assert_eq!(PieceKind::from_letter('x'), None);
        assert_eq!(PieceKind::from_letter('1'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Pawn), "p");
        assert_eq!(format!("{}", PieceKind::Knight), "n");
    }
}
