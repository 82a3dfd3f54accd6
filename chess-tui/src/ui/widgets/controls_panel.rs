use chess::SelectionMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

pub struct ControlsPanel<'a> {
    pub mode: SelectionMode,
    pub theme: &'a Theme,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(mode: SelectionMode, theme: &'a Theme) -> Self {
        Self { mode, theme }
    }

    /// Key bindings relevant in the current selection mode.
    fn bindings(&self) -> Vec<(&'static str, &'static str)> {
        let mut bindings = match self.mode {
            SelectionMode::Browsing => vec![
                ("←→↑↓ / hjkl ", "Jump between pieces"),
                ("Enter / Space ", "Show moves"),
                ("u ", "Undo turn"),
            ],
            SelectionMode::MoveChoice => vec![
                ("← → / h l ", "Cycle destinations"),
                ("Enter / Space ", "Play move"),
                ("Esc / Backspace ", "Back to pieces"),
            ],
            SelectionMode::Promotion(_) => vec![
                ("↑ ↓ / k j ", "Choose piece"),
                ("Enter twice ", "Promote"),
            ],
        };
        bindings.push(("t ", "Toggle theme"));
        bindings.push(("q / Ctrl+C ", "Quit"));
        bindings
    }
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("⌨ Controls ⌨")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![Span::styled(
                self.mode.label(),
                Style::default()
                    .fg(self.theme.heading)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::raw(""),
        ];

        let key_style = Style::default()
            .fg(self.theme.key_hint)
            .add_modifier(Modifier::BOLD);
        for (keys, action) in self.bindings() {
            lines.push(Line::from(vec![
                Span::styled(keys, key_style),
                Span::raw(action),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::PromotionPhase;

    fn rendered(mode: SelectionMode) -> String {
        let area = Rect::new(0, 0, 50, 12);
        let mut buf = Buffer::empty(area);
        let theme = Theme::dark();
        ControlsPanel::new(mode, &theme).render(area, &mut buf);
        (area.top()..area.bottom())
            .flat_map(|y| (area.left()..area.right()).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect()
    }

    #[test]
    fn browsing_offers_undo() {
        let text = rendered(SelectionMode::Browsing);
        assert!(text.contains("Select Piece"));
        assert!(text.contains("Undo turn"));
        assert!(text.contains("Quit"));
    }

    #[test]
    fn move_choice_offers_cancel() {
        let text = rendered(SelectionMode::MoveChoice);
        assert!(text.contains("Back to pieces"));
        assert!(!text.contains("Undo turn"));
    }

    #[test]
    fn promotion_lists_its_keys() {
        let text = rendered(SelectionMode::Promotion(PromotionPhase::Armed));
        assert!(text.contains("Choose piece"));
        assert!(text.contains("Promote"));
    }
}
