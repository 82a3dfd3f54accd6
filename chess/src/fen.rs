//! Positional record codec.
//!
//! `<row0>/<row1>/.../<row7> <w|b> <KQkq|-> <-|XY>`
//!
//! Row 0 is rank 8. The en-passant field is written as two raw coordinate
//! digits (column, row) rather than an algebraic square; algebraic squares
//! and trailing halfmove/fullmove counters are accepted on input only.

use std::fmt;
use std::str::FromStr;

use crate::board::{empty_grid, Board, CastlingRights, Grid};
use crate::point::Point;
use crate::types::{Color, PieceKind, Square};

/// Record for the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("Empty positional record")]
    Empty,
    #[error("Expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("Rank {rank} expands to {columns} columns, expected 8")]
    ColumnCount { rank: usize, columns: usize },
    #[error("Invalid piece character: {0}")]
    InvalidPiece(char),
    #[error("Expected at least 3 metadata fields, found {0}")]
    MissingFields(usize),
    #[error("Invalid castling field: {0}")]
    InvalidCastling(String),
    #[error("Invalid en-passant square: {0}")]
    InvalidEnPassant(String),
    #[error("Invalid move counter: {0}")]
    InvalidCounter(String),
    #[error("Unexpected trailing field: {0}")]
    TrailingField(String),
}

/// Everything a record carries, parsed but not yet applied to a board.
struct Record {
    grid: Grid,
    turn: Color,
    castling_rights: CastlingRights,
    en_passant_target: Point,
}

fn parse_record(fen: &str) -> Result<Record, FenError> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or(FenError::Empty)?;
    let grid = parse_placement(placement)?;

    let metadata: Vec<&str> = fields.collect();
    if metadata.len() < 3 {
        return Err(FenError::MissingFields(metadata.len()));
    }

    let turn = if metadata[0] == "w" {
        Color::White
    } else {
        Color::Black
    };
    let castling_rights = parse_castling(metadata[1])?;
    let en_passant_target = parse_en_passant(metadata[2])?;

    // Halfmove clock and fullmove number are tolerated and dropped.
    let counters = &metadata[3..];
    if let Some(extra) = counters.get(2) {
        return Err(FenError::TrailingField((*extra).to_string()));
    }
    if let Some(bad) = counters.iter().find(|c| c.parse::<u32>().is_err()) {
        return Err(FenError::InvalidCounter((*bad).to_string()));
    }

    Ok(Record {
        grid,
        turn,
        castling_rights,
        en_passant_target,
    })
}

fn parse_placement(placement: &str) -> Result<Grid, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut grid = empty_grid();
    for (y, rank) in ranks.iter().enumerate() {
        let mut x = 0usize;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                // A zero-length run would not survive re-serialization.
                if skip == 0 {
                    return Err(FenError::InvalidPiece(c));
                }
                x += skip as usize;
                continue;
            }
            let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece(c))?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            if x < 8 {
                grid[y][x] = Square::new(kind, color, Point::new(x as i32, y as i32));
            }
            x += 1;
        }
        if x != 8 {
            return Err(FenError::ColumnCount {
                rank: y,
                columns: x,
            });
        }
    }
    Ok(grid)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::NONE;
    if field == "-" {
        return Ok(rights);
    }

    let invalid = || FenError::InvalidCastling(field.to_string());
    for c in field.chars() {
        let flag = match c {
            'K' => &mut rights.white_kingside,
            'Q' => &mut rights.white_queenside,
            'k' => &mut rights.black_kingside,
            'q' => &mut rights.black_queenside,
            _ => return Err(invalid()),
        };
        if *flag {
            return Err(invalid());
        }
        *flag = true;
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Point, FenError> {
    if field == "-" {
        return Ok(Point::OFF_BOARD);
    }

    let digits: Vec<u32> = field.chars().filter_map(|c| c.to_digit(10)).collect();
    if field.len() == 2 && digits.len() == 2 {
        let target = Point::new(digits[0] as i32, digits[1] as i32);
        if target.is_inside() {
            return Ok(target);
        }
    }

    Point::from_algebraic(field).ok_or_else(|| FenError::InvalidEnPassant(field.to_string()))
}

/// Parse a record into a fresh board.
pub fn parse_fen(fen: &str) -> Result<Board, FenError> {
    let mut board = Board::new();
    board.load_fen(fen)?;
    Ok(board)
}

/// Format the board's position as a record.
pub fn format_fen(board: &Board) -> String {
    let mut fen = String::with_capacity(64);

    for (y, row) in board.grid.iter().enumerate() {
        if y > 0 {
            fen.push('/');
        }
        let mut blank = 0;
        for square in row {
            if square.is_empty() {
                blank += 1;
                continue;
            }
            if blank > 0 {
                fen.push_str(&blank.to_string());
                blank = 0;
            }
            fen.push(square.fen_code());
        }
        if blank > 0 {
            fen.push_str(&blank.to_string());
        }
    }

    fen.push(' ');
    fen.push(match board.turn {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    let rights = board.castling_rights;
    if rights.any() {
        for (held, letter) in [
            (rights.white_kingside, 'K'),
            (rights.white_queenside, 'Q'),
            (rights.black_kingside, 'k'),
            (rights.black_queenside, 'q'),
        ] {
            if held {
                fen.push(letter);
            }
        }
    } else {
        fen.push('-');
    }

    fen.push(' ');
    let target = board.en_passant_target;
    if target.is_inside() {
        fen.push_str(&format!("{}{}", target.x, target.y));
    } else {
        fen.push('-');
    }

    fen
}

impl Board {
    /// Replace the position with the one in `fen`.
    ///
    /// The cursor and selection state are kept, so a loop may re-parse its own
    /// output every tick. On error the board is left untouched.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let record = parse_record(fen)?;
        self.grid = record.grid;
        self.turn = record.turn;
        self.castling_rights = record.castling_rights;
        self.en_passant_target = record.en_passant_target;
        tracing::trace!(fen, "positional record loaded");
        Ok(())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        format_fen(self)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fen(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_fen(self))
    }
}
