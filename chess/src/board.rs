//! The board aggregate: grid, side to move, castling and en-passant state,
//! plus the selection state driven by [`Board::update`](crate::interaction).

use crate::interaction::{PromotionPhase, SelectionMode};
use crate::moves::{self, MoveList};
use crate::point::Point;
use crate::types::{Color, PieceKind, Square, PROMOTION_CHOICES};

pub(crate) type Grid = [[Square; 8]; 8];

/// Per-side, per-flank castling flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const NONE: Self = Self {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub const ALL: Self = Self {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub fn any(&self) -> bool {
        self.white_kingside || self.white_queenside || self.black_kingside || self.black_queenside
    }
}

/// A committed move, reported back to the caller of `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Point,
    pub to: Point,
    pub piece: PieceKind,
    pub color: Color,
    pub captured: Option<PieceKind>,
    /// Square of the pawn removed by an en-passant capture.
    pub en_passant_capture: Option<Point>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) turn: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Point,
    pub(crate) cursor: Point,
    pub(crate) selection_mode: SelectionMode,
    pub(crate) moves: MoveList,
    pub(crate) move_cursor_index: usize,
    pub(crate) promotion_cursor_index: usize,
    pub(crate) just_moved: bool,
    pub(crate) just_promoted: bool,
}

pub(crate) fn empty_grid() -> Grid {
    std::array::from_fn(|y| std::array::from_fn(|x| Square::empty(Point::new(x as i32, y as i32))))
}

impl Board {
    /// An empty board with White to move. Populate it with [`Board::load_fen`].
    pub fn new() -> Self {
        Self {
            grid: empty_grid(),
            turn: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_target: Point::OFF_BOARD,
            cursor: Point::new(0, 0),
            selection_mode: SelectionMode::Browsing,
            moves: MoveList::new(),
            move_cursor_index: 0,
            promotion_cursor_index: 0,
            just_moved: false,
            just_promoted: false,
        }
    }

    /// Square at `at`, `None` only for off-board points.
    pub fn square(&self, at: Point) -> Option<&Square> {
        if !at.is_inside() {
            return None;
        }
        Some(&self.grid[at.y as usize][at.x as usize])
    }

    /// All 64 squares, row 0 first.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.grid.iter().flatten()
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn en_passant_target(&self) -> Point {
        self.en_passant_target
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// Cached destinations of the selected piece. Empty outside `MoveChoice`.
    pub fn moves(&self) -> &[Point] {
        &self.moves
    }

    pub fn move_cursor_index(&self) -> usize {
        self.move_cursor_index
    }

    /// Destination under the move cursor, if a non-empty move list is open.
    pub fn selected_move(&self) -> Option<Point> {
        self.moves.get(self.move_cursor_index).copied()
    }

    pub fn promotion_cursor_index(&self) -> usize {
        self.promotion_cursor_index
    }

    pub fn promotion_choice(&self) -> PieceKind {
        PROMOTION_CHOICES[self.promotion_cursor_index.min(PROMOTION_CHOICES.len() - 1)]
    }

    pub fn just_moved(&self) -> bool {
        self.just_moved
    }

    pub fn just_promoted(&self) -> bool {
        self.just_promoted
    }

    /// Read and clear the one-shot promotion signal.
    pub fn take_just_promoted(&mut self) -> bool {
        std::mem::take(&mut self.just_promoted)
    }

    /// Pseudo-legal destinations for whatever stands on `at`.
    pub fn possible_moves(&self, at: Point) -> MoveList {
        self.square(at)
            .map(|square| moves::possible_moves(square, self))
            .unwrap_or_default()
    }

    /// Copy of the square at `at`; an empty square for off-board points.
    pub(crate) fn at(&self, at: Point) -> Square {
        self.square(at).copied().unwrap_or(Square::empty(at))
    }

    /// Replace a square wholesale. Off-board writes are ignored.
    pub(crate) fn put(&mut self, square: Square) {
        let at = square.position;
        if at.is_inside() {
            self.grid[at.y as usize][at.x as usize] = square;
        }
    }

    pub(crate) fn clear(&mut self, at: Point) {
        self.put(Square::empty(at));
    }

    fn holds(&self, at: Point, kind: PieceKind, color: Color) -> bool {
        self.square(at)
            .is_some_and(|sq| sq.kind == kind && sq.is_occupied_by(color))
    }

    /// Force castling rights off for every king or rook missing from its home square.
    pub(crate) fn rederive_castling_rights(&mut self) {
        let white_king = self.holds(Point::new(4, 7), PieceKind::King, Color::White);
        let black_king = self.holds(Point::new(4, 0), PieceKind::King, Color::Black);
        let white_kingside_rook = self.holds(Point::new(7, 7), PieceKind::Rook, Color::White);
        let white_queenside_rook = self.holds(Point::new(0, 7), PieceKind::Rook, Color::White);
        let black_kingside_rook = self.holds(Point::new(7, 0), PieceKind::Rook, Color::Black);
        let black_queenside_rook = self.holds(Point::new(0, 0), PieceKind::Rook, Color::Black);

        let before = self.castling_rights;
        let rights = &mut self.castling_rights;
        rights.white_kingside &= white_king && white_kingside_rook;
        rights.white_queenside &= white_king && white_queenside_rook;
        rights.black_kingside &= black_king && black_kingside_rook;
        rights.black_queenside &= black_king && black_queenside_rook;

        if before != self.castling_rights {
            tracing::debug!(
                before = ?before,
                after = ?self.castling_rights,
                "castling rights revoked"
            );
        }
    }

    /// Move the piece under the cursor to `to` and hand the turn over.
    pub(crate) fn commit_move(&mut self, to: Point) -> MoveRecord {
        let from = self.cursor;
        let mover = self.at(from);
        let is_pawn = mover.kind == PieceKind::Pawn;
        let mut captured = self.at(to).occupant().map(|(kind, _)| kind);

        let mut en_passant_capture = None;
        if is_pawn && to == self.en_passant_target {
            let behind = Point::new(to.x, to.y - mover.color.forward());
            if let Some((kind, _)) = self.at(behind).occupant() {
                captured = Some(kind);
                en_passant_capture = Some(behind);
            }
            self.clear(behind);
        }

        self.put(Square {
            position: to,
            ..mover
        });
        self.clear(from);
        self.moves.clear();
        self.move_cursor_index = 0;
        self.cursor = to;

        self.en_passant_target = if is_pawn && (to.y - from.y).abs() == 2 {
            Point::new(from.x, (from.y + to.y) / 2)
        } else {
            Point::OFF_BOARD
        };

        self.selection_mode = if is_pawn && to.y == mover.color.promotion_row() {
            self.promotion_cursor_index = 0;
            SelectionMode::Promotion(PromotionPhase::Armed)
        } else {
            SelectionMode::Browsing
        };

        self.turn = self.turn.opposite();
        self.just_moved = true;

        let record = MoveRecord {
            from,
            to,
            piece: mover.kind,
            color: mover.color,
            captured,
            en_passant_capture,
        };
        tracing::debug!(
            from = ?from.to_algebraic(),
            to = ?to.to_algebraic(),
            piece = mover.kind.name(),
            color = %mover.color,
            captured = ?captured,
            "move committed"
        );
        record
    }

    /// Replace the piece under the cursor with `kind`, keeping its color.
    pub(crate) fn promote(&mut self, kind: PieceKind) -> Point {
        let at = self.cursor;
        let color = self.at(at).color;
        self.put(Square::new(kind, color, at));
        tracing::debug!(at = ?at.to_algebraic(), piece = kind.name(), color = %color, "pawn promoted");
        at
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
