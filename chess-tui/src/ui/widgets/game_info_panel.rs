use chess::{Board, CastlingRights, Color as Side, Point, SelectionMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme::Theme;

pub struct GameInfoPanel<'a> {
    pub board: &'a Board,
    pub record: &'a str,
    pub status_message: Option<&'a str>,
    pub undo_depth: usize,
    pub theme: &'a Theme,
}

impl GameInfoPanel<'_> {
    fn field(&self, label: &'static str, value: Span<'static>) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                label,
                Style::default()
                    .fg(self.theme.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            value,
        ])
    }
}

impl Widget for GameInfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("♟ Game Info ♟")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![];

        let mode = self.board.selection_mode();
        let phase_color = match mode {
            SelectionMode::Browsing => self.theme.positive,
            SelectionMode::MoveChoice => self.theme.board_border,
            SelectionMode::Promotion(_) => self.theme.dialog_border,
        };
        lines.push(self.field(
            "Phase: ",
            Span::styled(
                mode.label(),
                Style::default().fg(phase_color).add_modifier(Modifier::BOLD),
            ),
        ));

        let (turn_text, turn_color) = match self.board.turn() {
            Side::White => ("White to move", self.theme.text_primary),
            Side::Black => ("Black to move", self.theme.text_secondary),
        };
        lines.push(self.field(
            "Turn: ",
            Span::styled(turn_text, Style::default().fg(turn_color).add_modifier(Modifier::BOLD)),
        ));

        lines.push(Line::raw(""));
        lines.push(self.field(
            "Castling: ",
            Span::raw(castling_text(self.board.castling_rights())),
        ));
        lines.push(self.field(
            "En passant: ",
            Span::raw(square_text(self.board.en_passant_target())),
        ));
        lines.push(self.field("Cursor: ", Span::raw(square_text(self.board.cursor()))));

        if mode == SelectionMode::MoveChoice {
            let destinations: Vec<String> = self
                .board
                .moves()
                .iter()
                .enumerate()
                .map(|(index, &to)| {
                    if index == self.board.move_cursor_index() {
                        format!("[{}]", square_text(to))
                    } else {
                        square_text(to)
                    }
                })
                .collect();
            let text = if destinations.is_empty() {
                "none".to_string()
            } else {
                destinations.join(", ")
            };
            lines.push(self.field(
                "Moves: ",
                Span::styled(text, Style::default().fg(self.theme.positive)),
            ));
        }

        lines.push(Line::raw(""));
        lines.push(self.field(
            "Undo: ",
            Span::raw(format!("{} turn(s)", self.undo_depth)),
        ));
        lines.push(self.field("Record: ", Span::raw("")));
        lines.push(Line::from(Span::styled(
            self.record.to_string(),
            Style::default().fg(self.theme.muted),
        )));

        if let Some(msg) = self.status_message {
            lines.push(Line::raw(""));
            lines.push(self.field(
                "Status: ",
                Span::styled(msg.to_string(), Style::default().fg(self.theme.warning)),
            ));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

fn castling_text(rights: CastlingRights) -> String {
    let flags = [
        (rights.white_kingside, 'K'),
        (rights.white_queenside, 'Q'),
        (rights.black_kingside, 'k'),
        (rights.black_queenside, 'q'),
    ];
    let text: String = flags
        .iter()
        .filter(|(held, _)| *held)
        .map(|(_, letter)| *letter)
        .collect();
    if text.is_empty() {
        "-".to_string()
    } else {
        text
    }
}

fn square_text(point: Point) -> String {
    point.to_algebraic().unwrap_or_else(|| "-".to_string())
}
