//! Board coordinates.
//!
//! Row 0 is the top of the board (rank 8), column 0 is the a-file.

use std::fmt;
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Sentinel for "no square", e.g. an absent en-passant target.
    pub const OFF_BOARD: Point = Point { x: -1, y: -1 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        (0..8).contains(&self.x) && (0..8).contains(&self.y)
    }

    /// Parse an algebraic square such as `e3`.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank)
        {
            return None;
        }
        let x = file as i32 - 'a' as i32;
        let y = 7 - (rank as i32 - '1' as i32);
        Some(Self::new(x, y))
    }

    /// Algebraic name of the square, `None` when off the board.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_inside() {
            return None;
        }
        let file = (b'a' + self.x as u8) as char;
        let rank = (b'8' - self.y as u8) as char;
        Some(format!("{file}{rank}"))
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
