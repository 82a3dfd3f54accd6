use std::collections::VecDeque;

/// How many turns can be taken back.
pub const MAX_TURN_HISTORY: usize = 64;

/// Records captured at the start of each committed turn, newest last.
#[derive(Debug, Default)]
pub struct TurnHistory {
    entries: VecDeque<String>,
}

impl TurnHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the record a turn started from, dropping the oldest past the cap.
    pub fn push(&mut self, record: String) {
        if self.entries.len() == MAX_TURN_HISTORY {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    /// Take back the most recent turn.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
