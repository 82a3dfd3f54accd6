//! Chess rule engine for a cursor-driven, text-rendered board.
//!
//! Moves are pseudo-legal: nothing checks whether the mover's king is left in
//! check. The engine performs no I/O; front-ends read the [`Board`] to draw and
//! feed it abstract [`Command`]s.

pub mod board;
pub mod fen;
pub mod interaction;
pub mod moves;
pub mod point;
pub mod types;

pub use board::{Board, CastlingRights, MoveRecord};
pub use fen::{format_fen, parse_fen, FenError, START_FEN};
pub use interaction::{Command, PromotionPhase, SelectionMode, UpdateOutcome};
pub use moves::{possible_moves, MoveList};
pub use point::Point;
pub use types::{Color, PieceKind, Square, PROMOTION_CHOICES};
