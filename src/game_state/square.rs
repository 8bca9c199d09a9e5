//! Grid coordinate value type.
//!
//! `x` is the file (column) and `y` the rank (row), both zero-based with
//! `(0, 0)` at White's bottom-left corner. Coordinates are signed so that
//! offsets stepping off the board can be represented and then rejected by
//! [`Board::is_valid_square`](crate::game_state::board::Board::is_valid_square).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Square {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Prints as `file-letter` + `rank-number`, e.g. `(4, 1)` is `e2`.
/// Squares outside `a..z` fall back to the raw pair.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.x) && self.y >= 0 {
            write!(f, "{}{}", char::from(b'a' + self.x as u8), self.y + 1)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}
