//! Canonical piece, color and square types for the engine.

use crate::point::Point;

/// Piece kind, including the empty-square sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Empty,
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

/// Promotion choices, in the order the promotion cursor walks them.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
];

impl PieceKind {
    pub fn to_char_upper(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    pub fn to_char_lower(self) -> char {
        self.to_char_upper().to_ascii_lowercase()
    }

    /// Map a piece letter of either case to its kind. `'.'` is not accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Self::Pawn),
            'r' => Some(Self::Rook),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Pawn => "pawn",
            Self::Rook => "rook",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Row delta of a pawn step for this side.
    pub(crate) fn forward(self) -> i32 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row a pawn of this side starts on.
    pub(crate) fn pawn_start_row(self) -> i32 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Row a pawn of this side promotes on.
    pub(crate) fn promotion_row(self) -> i32 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }
}

/// One cell of the grid. Empty squares carry a placeholder color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Point,
}

impl Square {
    pub const fn new(kind: PieceKind, color: Color, position: Point) -> Self {
        Self {
            kind,
            color,
            position,
        }
    }

    pub const fn empty(position: Point) -> Self {
        Self::new(PieceKind::Empty, Color::White, position)
    }

    pub fn is_empty(&self) -> bool {
        self.kind == PieceKind::Empty
    }

    /// Occupant as `(kind, color)`, `None` for an empty square.
    pub fn occupant(&self) -> Option<(PieceKind, Color)> {
        (!self.is_empty()).then_some((self.kind, self.color))
    }

    pub fn is_occupied_by(&self, color: Color) -> bool {
        !self.is_empty() && self.color == color
    }

    /// Single-letter record code: uppercase for White, lowercase for Black, `'.'` if empty.
    pub fn fen_code(&self) -> char {
        match (self.kind, self.color) {
            (PieceKind::Empty, _) => '.',
            (kind, Color::White) => kind.to_char_upper(),
            (kind, Color::Black) => kind.to_char_lower(),
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char_upper())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_codes_follow_color_case() {
        let at = Point::new(0, 0);
        assert_eq!(Square::new(PieceKind::Knight, Color::White, at).fen_code(), 'N');
        assert_eq!(Square::new(PieceKind::Knight, Color::Black, at).fen_code(), 'n');
        assert_eq!(Square::new(PieceKind::Empty, Color::Black, at).fen_code(), '.');
    }

    #[test]
    fn from_char_rejects_unknown_letters() {
        assert_eq!(PieceKind::from_char('Q'), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_char('q'), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_char('x'), None);
        assert_eq!(PieceKind::from_char('.'), None);
    }

    #[test]
    fn empty_square_has_no_occupant() {
        let sq = Square::empty(Point::new(2, 3));
        assert!(sq.is_empty());
        assert_eq!(sq.occupant(), None);
        assert!(!sq.is_occupied_by(Color::White));
    }
}
