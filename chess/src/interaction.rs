//! Cursor-driven selection state machine.
//!
//! One abstract [`Command`] is consumed per [`Board::update`] call:
//!
//! - `Browsing`: directions hop the cursor between the mover's pieces,
//!   `Confirm` opens the move list of the piece under the cursor.
//! - `MoveChoice`: `Left`/`Right` cycle destinations, `Confirm` commits,
//!   `Cancel` closes the list.
//! - `Promotion`: `Up`/`Down` pick a piece; two consecutive `Confirm`s commit it.
//!
//! Castling rights are re-derived from the grid after every command.

use crate::board::{Board, MoveRecord};
use crate::moves::{self, MoveList};
use crate::point::Point;
use crate::types::{PieceKind, PROMOTION_CHOICES};

/// Abstract input, already translated from raw keys by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Command {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
    Confirm,
    Cancel,
}

impl Command {
    /// Unit step for directional commands.
    pub fn direction(self) -> Option<Point> {
        match self {
            Self::Left => Some(Point::new(-1, 0)),
            Self::Right => Some(Point::new(1, 0)),
            Self::Up => Some(Point::new(0, -1)),
            Self::Down => Some(Point::new(0, 1)),
            Self::None | Self::Confirm | Self::Cancel => None,
        }
    }
}

/// Debounce sub-state of a pending promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromotionPhase {
    /// Waiting for the first `Confirm`.
    #[default]
    Armed,
    /// First `Confirm` absorbed; the next consecutive `Confirm` commits.
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    Browsing,
    MoveChoice,
    Promotion(PromotionPhase),
}

impl SelectionMode {
    pub fn is_promotion(self) -> bool {
        matches!(self, Self::Promotion(_))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Browsing => "Select Piece",
            Self::MoveChoice => "Select Destination",
            Self::Promotion(_) => "Select Promotion",
        }
    }
}

/// What a single `update` call did. Board state stays the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Idle,
    CursorMoved(Point),
    SelectionOpened { count: usize },
    SelectionCycled { index: usize },
    SelectionCancelled,
    Moved(MoveRecord),
    PromotionPending,
    Promoted { at: Point, kind: PieceKind },
}

impl Board {
    /// Consume one command and settle the board before returning.
    pub fn update(&mut self, command: Command) -> UpdateOutcome {
        let outcome = match self.selection_mode {
            SelectionMode::Browsing => self.update_browsing(command),
            SelectionMode::MoveChoice => self.update_move_choice(command),
            SelectionMode::Promotion(phase) => self.update_promotion(phase, command),
        };
        self.rederive_castling_rights();

        if outcome != UpdateOutcome::Idle {
            tracing::trace!(?command, ?outcome, mode = ?self.selection_mode, "board updated");
        }
        outcome
    }

    fn update_browsing(&mut self, command: Command) -> UpdateOutcome {
        if let Some(direction) = command.direction() {
            self.just_moved = false;
            return match self.find_own_piece(direction) {
                Some(target) => {
                    self.cursor = target;
                    UpdateOutcome::CursorMoved(target)
                }
                None => UpdateOutcome::Idle,
            };
        }

        if command != Command::Confirm || self.just_moved {
            return UpdateOutcome::Idle;
        }

        let selected = self.at(self.cursor);
        self.moves = if selected.is_occupied_by(self.turn) {
            moves::possible_moves(&selected, self)
        } else {
            MoveList::new()
        };
        self.move_cursor_index = 0;
        self.selection_mode = SelectionMode::MoveChoice;
        UpdateOutcome::SelectionOpened {
            count: self.moves.len(),
        }
    }

    fn update_move_choice(&mut self, command: Command) -> UpdateOutcome {
        let count = self.moves.len();
        match command {
            Command::Left | Command::Right if count > 0 => {
                self.move_cursor_index = if command == Command::Left {
                    (self.move_cursor_index + count - 1) % count
                } else {
                    (self.move_cursor_index + 1) % count
                };
                UpdateOutcome::SelectionCycled {
                    index: self.move_cursor_index,
                }
            }
            Command::Cancel => self.close_selection(),
            Command::Confirm => match self.selected_move() {
                Some(to) => UpdateOutcome::Moved(self.commit_move(to)),
                None => self.close_selection(),
            },
            _ => UpdateOutcome::Idle,
        }
    }

    fn close_selection(&mut self) -> UpdateOutcome {
        self.selection_mode = SelectionMode::Browsing;
        self.moves.clear();
        self.move_cursor_index = 0;
        UpdateOutcome::SelectionCancelled
    }

    fn update_promotion(&mut self, phase: PromotionPhase, command: Command) -> UpdateOutcome {
        let last = PROMOTION_CHOICES.len() - 1;
        match command {
            Command::Up => {
                self.promotion_cursor_index = self.promotion_cursor_index.saturating_sub(1);
                self.selection_mode = SelectionMode::Promotion(PromotionPhase::Armed);
                UpdateOutcome::PromotionPending
            }
            Command::Down => {
                self.promotion_cursor_index = (self.promotion_cursor_index + 1).min(last);
                self.selection_mode = SelectionMode::Promotion(PromotionPhase::Armed);
                UpdateOutcome::PromotionPending
            }
            Command::Confirm if phase == PromotionPhase::Armed => {
                self.selection_mode = SelectionMode::Promotion(PromotionPhase::Confirmed);
                UpdateOutcome::PromotionPending
            }
            Command::Confirm => {
                let kind = self.promotion_choice();
                let at = self.promote(kind);
                self.promotion_cursor_index = 0;
                self.selection_mode = SelectionMode::Browsing;
                self.just_promoted = true;
                UpdateOutcome::Promoted { at, kind }
            }
            _ => {
                self.selection_mode = SelectionMode::Promotion(PromotionPhase::Armed);
                UpdateOutcome::Idle
            }
        }
    }

    /// Nearest square holding a piece of the side to move, searched along
    /// `direction` in lanes fanning out perpendicular to it.
    ///
    /// Lane `k` pairs the lane `k` steps before the cursor with the lane `k`
    /// steps after it; at each step the earlier lane is probed first.
    fn find_own_piece(&self, direction: Point) -> Option<Point> {
        let spread = if direction.x != 0 {
            Point::new(0, 1)
        } else {
            Point::new(1, 0)
        };

        for lane in 0..8 {
            let offset = Point::new(spread.x * lane, spread.y * lane);
            let mut before = self.cursor - offset;
            let mut after = self.cursor + offset;
            // Lane 0 is the cursor's own line; `before` and `after` coincide.
            let lanes = if lane == 0 { 1 } else { 2 };
            for _ in 0..8 {
                before = before + direction;
                after = after + direction;
                for &probe in &[before, after][..lanes] {
                    if self
                        .square(probe)
                        .is_some_and(|sq| sq.is_occupied_by(self.turn))
                    {
                        return Some(probe);
                    }
                }
            }
        }
        None
    }
}
