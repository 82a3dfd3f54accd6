use chess::{Board, Color as Side, Point, SelectionMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::ui::theme::Theme;

/// Width taken by the rank labels left of the squares.
const RANK_LABEL_WIDTH: u16 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BoardSize {
    square_width: u16,
    square_height: u16,
}

impl BoardSize {
    const COMPACT: Self = Self {
        square_width: 3,
        square_height: 1,
    };

    const REGULAR: Self = Self {
        square_width: 5,
        square_height: 2,
    };

    const LARGE: Self = Self {
        square_width: 7,
        square_height: 3,
    };

    /// Largest size whose squares and labels fit inside `area`.
    fn for_area(area: Rect) -> Self {
        let available_width = area.width.saturating_sub(RANK_LABEL_WIDTH);
        let available_height = area.height.saturating_sub(1);

        [Self::LARGE, Self::REGULAR]
            .into_iter()
            .find(|size| {
                size.square_width * 8 <= available_width
                    && size.square_height * 8 <= available_height
            })
            .unwrap_or(Self::COMPACT)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SquareHighlight {
    /// Destination under the move cursor.
    Chosen,
    Destination,
    Cursor,
    EnPassant,
    None,
}

impl SquareHighlight {
    fn bg_color(self, theme: &Theme, is_light_square: bool) -> Color {
        let pair = match self {
            Self::Chosen => theme.overlay_chosen,
            Self::Destination => theme.overlay_destination,
            Self::Cursor => theme.overlay_cursor,
            Self::EnPassant => theme.overlay_en_passant,
            Self::None => (theme.light_square, theme.dark_square),
        };
        Theme::overlay(pair, is_light_square)
    }
}

pub struct BoardWidget<'a> {
    pub board: &'a Board,
    pub theme: &'a Theme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(board: &'a Board, theme: &'a Theme) -> Self {
        Self { board, theme }
    }

    fn highlight(&self, at: Point) -> SquareHighlight {
        let in_move_choice = self.board.selection_mode() == SelectionMode::MoveChoice;
        if in_move_choice && self.board.selected_move() == Some(at) {
            SquareHighlight::Chosen
        } else if in_move_choice && self.board.moves().contains(&at) {
            SquareHighlight::Destination
        } else if self.board.cursor() == at {
            SquareHighlight::Cursor
        } else if self.board.en_passant_target() == at {
            SquareHighlight::EnPassant
        } else {
            SquareHighlight::None
        }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("♟ Chess Board ♟")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.board_border));
        let inner = block.inner(area);
        block.render(area, buf);

        let size = BoardSize::for_area(inner);
        let board_width = size.square_width * 8;
        let board_height = size.square_height * 8;

        let offset_x = inner
            .width
            .saturating_sub(board_width + RANK_LABEL_WIDTH)
            / 2;
        let offset_y = inner.height.saturating_sub(board_height + 1) / 2;
        let board_start_x = inner.x + offset_x + RANK_LABEL_WIDTH;
        let board_start_y = inner.y + offset_y;
        let label_style = Style::default().fg(self.theme.board_label);

        let rank_x = board_start_x - RANK_LABEL_WIDTH;
        for row in 0..8u16 {
            let y = board_start_y + row * size.square_height + size.square_height / 2;
            if rank_x < inner.right() && y < inner.bottom() {
                let rank = (b'8' - row as u8) as char;
                buf.set_string(rank_x, y, rank.to_string(), label_style);
            }
        }

        let file_y = board_start_y + board_height;
        if file_y < inner.bottom() {
            for column in 0..8u16 {
                let x = board_start_x + column * size.square_width + size.square_width / 2;
                if x < inner.right() {
                    let file = (b'a' + column as u8) as char;
                    buf.set_string(x, file_y, file.to_string(), label_style);
                }
            }
        }

        for square in self.board.squares() {
            let at = square.position;
            let x = board_start_x + at.x as u16 * size.square_width;
            let y = board_start_y + at.y as u16 * size.square_height;
            let is_light_square = (at.x + at.y) % 2 == 0;
            let bg_color = self.highlight(at).bg_color(self.theme, is_light_square);

            render_square(buf, x, y, bg_color, size, inner);

            if let Some((_, side)) = square.occupant() {
                let fg_color = match side {
                    Side::White => self.theme.white_piece,
                    Side::Black => self.theme.black_piece,
                };
                let px = x + size.square_width / 2;
                let py = y + size.square_height / 2;
                if px < inner.right() && py < inner.bottom() {
                    buf.set_string(
                        px,
                        py,
                        square.fen_code().to_string(),
                        Style::default()
                            .bg(bg_color)
                            .fg(fg_color)
                            .add_modifier(Modifier::BOLD),
                    );
                }
            }
        }
    }
}

fn render_square(buf: &mut Buffer, x: u16, y: u16, bg_color: Color, size: BoardSize, bounds: Rect) {
    let style = Style::default().bg(bg_color);

    for dy in 0..size.square_height {
        for dx in 0..size.square_width {
            let px = x + dx;
            let py = y + dy;
            if px < bounds.right() && py < bounds.bottom() {
                buf[(px, py)].set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{Command, START_FEN};

    // Compact board: 8 * 3 columns + rank labels, 8 rows + file labels, plus borders.
    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 28,
        height: 11,
    };

    fn render(board: &Board, theme: &Theme) -> Buffer {
        let mut buf = Buffer::empty(AREA);
        BoardWidget::new(board, theme).render(AREA, &mut buf);
        buf
    }

    /// Buffer cell holding the glyph of the square at `(x, y)`.
    fn glyph_cell(x: u16, y: u16) -> (u16, u16) {
        (1 + RANK_LABEL_WIDTH + x * 3 + 1, 1 + y)
    }

    #[test]
    fn size_grows_with_the_area() {
        assert_eq!(BoardSize::for_area(Rect::new(0, 0, 26, 9)), BoardSize::COMPACT);
        assert_eq!(BoardSize::for_area(Rect::new(0, 0, 42, 17)), BoardSize::REGULAR);
        assert_eq!(BoardSize::for_area(Rect::new(0, 0, 80, 40)), BoardSize::LARGE);
    }

    #[test]
    fn start_position_pieces_and_labels() {
        let board = Board::from_fen(START_FEN).unwrap();
        let theme = Theme::dark();
        let buf = render(&board, &theme);

        assert_eq!(buf[glyph_cell(0, 0)].symbol(), "r");
        assert_eq!(buf[glyph_cell(4, 0)].symbol(), "k");
        assert_eq!(buf[glyph_cell(4, 7)].symbol(), "K");
        assert_eq!(buf[glyph_cell(3, 6)].symbol(), "P");
        assert_eq!(buf[glyph_cell(3, 4)].symbol(), " ");

        assert_eq!(buf[glyph_cell(4, 7)].fg, theme.white_piece);
        assert_eq!(buf[glyph_cell(4, 0)].fg, theme.black_piece);

        assert_eq!(buf[(1, 1)].symbol(), "8");
        assert_eq!(buf[(1, 8)].symbol(), "1");
        assert_eq!(buf[(4, 9)].symbol(), "a");
        assert_eq!(buf[(25, 9)].symbol(), "h");
    }

    #[test]
    fn cursor_and_destinations_are_highlighted() {
        let mut board = Board::from_fen(START_FEN).unwrap();
        board.update(Command::Down);
        let theme = Theme::dark();

        let buf = render(&board, &theme);
        // a2 is a light square.
        assert_eq!(buf[glyph_cell(0, 6)].bg, theme.overlay_cursor.0);

        board.update(Command::Confirm);
        let buf = render(&board, &theme);
        // a3 is chosen first, a4 is the other destination.
        assert_eq!(buf[glyph_cell(0, 5)].bg, theme.overlay_chosen.1);
        assert_eq!(buf[glyph_cell(0, 4)].bg, theme.overlay_destination.0);
        assert_eq!(buf[glyph_cell(1, 4)].bg, theme.dark_square);
    }

    #[test]
    fn en_passant_target_is_marked() {
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq 45").unwrap();
        let theme = Theme::dark();
        let buf = render(&board, &theme);
        // e3 is a dark square.
        assert_eq!(buf[glyph_cell(4, 5)].bg, theme.overlay_en_passant.1);
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let board = Board::from_fen(START_FEN).unwrap();
        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(&board, &Theme::dark()).render(area, &mut buf);
    }
}
