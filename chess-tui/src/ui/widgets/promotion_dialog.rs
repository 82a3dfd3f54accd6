use chess::{PieceKind, PromotionPhase, PROMOTION_CHOICES};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::ui::theme::Theme;

const DIALOG_WIDTH: u16 = 30;
const DIALOG_HEIGHT: u16 = 10;

pub struct PromotionWidget<'a> {
    pub selected_index: usize,
    pub phase: PromotionPhase,
    pub theme: &'a Theme,
}

impl Widget for PromotionWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let x = area.width.saturating_sub(DIALOG_WIDTH) / 2;
        let y = area.height.saturating_sub(DIALOG_HEIGHT) / 2;
        let dialog_area = Rect {
            x: area.x + x,
            y: area.y + y,
            width: DIALOG_WIDTH.min(area.width),
            height: DIALOG_HEIGHT.min(area.height),
        };

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title("♟ Select Promotion ♟")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.dialog_border))
            .style(Style::default().bg(self.theme.dialog_bg));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let mut lines = vec![Line::raw("")];

        for (index, kind) in PROMOTION_CHOICES.iter().enumerate() {
            let is_selected = index == self.selected_index;
            let prefix = if is_selected { "► " } else { "  " };

            let style = if is_selected {
                Style::default()
                    .fg(self.theme.dialog_highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text_primary)
            };

            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{} ", symbol(*kind)), style),
                Span::styled(title(*kind), style),
            ]));
        }

        let hint = match self.phase {
            PromotionPhase::Armed => "↑/↓ choose | Enter to pick",
            PromotionPhase::Confirmed => "Enter again to promote",
        };
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![Span::styled(
            hint,
            Style::default().fg(self.theme.muted),
        )]));

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .render(inner, buf);
    }
}

fn symbol(kind: PieceKind) -> char {
    match kind {
        PieceKind::Rook => '♖',
        PieceKind::Knight => '♘',
        PieceKind::Bishop => '♗',
        PieceKind::Queen => '♕',
        PieceKind::King => '♔',
        PieceKind::Pawn => '♙',
        PieceKind::Empty => ' ',
    }
}

fn title(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Rook => "Rook",
        PieceKind::Knight => "Knight",
        PieceKind::Bishop => "Bishop",
        PieceKind::Queen => "Queen",
        PieceKind::King => "King",
        PieceKind::Pawn => "Pawn",
        PieceKind::Empty => "",
    }
}
