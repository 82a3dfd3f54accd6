use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

use chess::SelectionMode;

use crate::input;
use crate::ui::app::App;
use crate::ui::widgets::{BoardWidget, ControlsPanel, GameInfoPanel, PromotionWidget};

/// Take over the terminal and run until the player quits.
pub fn run_app(app: &mut App) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// One key event per tick; every tick redraws.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle(input::map_key(key));
        }
    }
    Ok(())
}

pub fn draw(frame: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(frame.area());
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(16), Constraint::Length(10)])
        .split(columns[1]);

    let board = app.board();
    let theme = app.theme();

    frame.render_widget(BoardWidget::new(board, theme), columns[0]);
    frame.render_widget(
        GameInfoPanel {
            board,
            record: app.record(),
            status_message: app.status_message(),
            undo_depth: app.undo_depth(),
            theme,
        },
        side[0],
    );
    frame.render_widget(ControlsPanel::new(board.selection_mode(), theme), side[1]);

    if let SelectionMode::Promotion(phase) = board.selection_mode() {
        frame.render_widget(
            PromotionWidget {
                selected_index: board.promotion_cursor_index(),
                phase,
                theme,
            },
            columns[0],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use crate::ui::theme::Theme;
    use chess::{Command, START_FEN};
    use ratatui::backend::TestBackend;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 32)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_board_and_panels() {
        let app = App::new(START_FEN, Theme::dark()).unwrap();
        let text = screen(&app);
        assert!(text.contains("Chess Board"));
        assert!(text.contains("Game Info"));
        assert!(text.contains("Controls"));
        assert!(!text.contains("Select Promotion ♟"));
    }

    #[test]
    fn promotion_overlay_appears_while_promoting() {
        let mut app = App::new("8/P7/8/8/8/8/8/8 w - -", Theme::dark()).unwrap();
        for command in [Command::Down, Command::Confirm, Command::Confirm] {
            app.handle(InputEvent::Command(command));
        }
        let text = screen(&app);
        assert!(text.contains("Select Promotion ♟"));
        assert!(text.contains("Queen"));
    }
}
