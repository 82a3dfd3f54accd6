//! Front-end state owned by the render loop.

use chess::{
    Board, Command, FenError, MoveRecord, Point, PromotionPhase, SelectionMode, UpdateOutcome,
};

use crate::history::TurnHistory;
use crate::input::InputEvent;
use crate::ui::theme::Theme;

pub struct App {
    board: Board,
    /// Positional record the next tick re-parses before applying its command.
    record: String,
    history: TurnHistory,
    /// Record the current turn started from while its promotion is pending.
    promotion_turn_start: Option<String>,
    theme: Theme,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(record: &str, theme: Theme) -> Result<Self, FenError> {
        let board = Board::from_fen(record)?;
        Ok(Self {
            record: board.to_fen(),
            board,
            history: TurnHistory::new(),
            promotion_turn_start: None,
            theme,
            status_message: None,
            should_quit: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn record(&self) -> &str {
        &self.record
    }

    /// Record safe to persist on quit.
    ///
    /// A pending promotion is not part of the positional record, so mid-promotion
    /// this is the record the turn started from and the move is replayed on resume.
    pub fn session_record(&self) -> &str {
        self.promotion_turn_start.as_deref().unwrap_or(&self.record)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                tracing::info!(record = %self.record, "quit requested");
                self.should_quit = true;
            }
            InputEvent::Undo => self.undo(),
            InputEvent::ToggleTheme => {
                self.theme.toggle();
                self.status_message = Some(format!("{} theme", self.theme.name()));
            }
            InputEvent::Command(command) => self.tick(command),
        }
    }

    /// Re-parse the record, apply one command, serialize the result.
    fn tick(&mut self, command: Command) {
        if let Err(e) = self.board.load_fen(&self.record) {
            tracing::warn!(record = %self.record, "Rejected positional record, keeping board: {}", e);
        }
        let turn_start = self.board.to_fen();

        match self.board.update(command) {
            UpdateOutcome::Moved(record) => {
                if self.board.selection_mode().is_promotion() {
                    self.promotion_turn_start = Some(turn_start.clone());
                }
                self.history.push(turn_start);
                tracing::info!(
                    from = %square_name(record.from),
                    to = %square_name(record.to),
                    piece = record.piece.name(),
                    "move played"
                );
                self.status_message = Some(describe_move(&record));
            }
            UpdateOutcome::SelectionOpened { count: 0 } => {
                self.status_message = Some("No moves from that square".to_string());
            }
            UpdateOutcome::SelectionCancelled => self.status_message = None,
            UpdateOutcome::PromotionPending
                if self.board.selection_mode()
                    == SelectionMode::Promotion(PromotionPhase::Confirmed) =>
            {
                self.status_message = Some(format!(
                    "Confirm again to promote to {}",
                    self.board.promotion_choice().name()
                ));
            }
            _ => {}
        }

        if self.board.take_just_promoted() {
            self.promotion_turn_start = None;
            let promoted = self
                .board
                .square(self.board.cursor())
                .map(|sq| sq.kind.name())
                .unwrap_or("piece");
            self.status_message = Some(format!("Pawn promoted to {promoted}"));
        }

        self.record = self.board.to_fen();
    }

    fn undo(&mut self) {
        if self.board.selection_mode() != SelectionMode::Browsing {
            self.status_message = Some("Finish the current selection before undoing".to_string());
            return;
        }
        let Some(previous) = self.history.pop() else {
            self.status_message = Some("Nothing to undo".to_string());
            return;
        };

        match self.board.load_fen(&previous) {
            Ok(()) => {
                tracing::info!(record = %previous, "turn taken back");
                self.record = previous;
                self.status_message = Some("Took back the last move".to_string());
            }
            Err(e) => {
                tracing::warn!(record = %previous, "Failed to restore history entry: {}", e);
            }
        }
    }
}

fn square_name(point: Point) -> String {
    point.to_algebraic().unwrap_or_else(|| point.to_string())
}

fn describe_move(record: &MoveRecord) -> String {
    let mut text = format!(
        "{} {} {} to {}",
        record.color,
        record.piece.name(),
        square_name(record.from),
        square_name(record.to)
    );
    if let Some(captured) = record.captured {
        text.push_str(&format!(", takes {}", captured.name()));
    }
    if record.en_passant_capture.is_some() {
        text.push_str(" en passant");
    }
    text
}
