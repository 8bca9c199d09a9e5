//! Rectangular mailbox board.
//!
//! `Board` is a pure coordinate-addressed container with no rules knowledge.
//! It owns an arena of every piece ever added to it; cells hold [`PieceId`]
//! handles into that arena. A piece standing in a cell always reports that
//! cell as its location, because every placement goes through `put_piece` or
//! `move_piece`, which update both sides together.
//!
//! Pieces are never removed from the arena. Taking a piece off the board only
//! clears its cell, which lets the rules engine restore captured pieces.

use crate::game_state::chess_types::{Color, Piece, PieceId, Square};

pub const DEFAULT_BOARD_SIZE: i32 = 8;

#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Option<PieceId>>,
    pieces: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE)
    }
}

impl Board {
    /// Empty `width` x `height` board. Non-positive dimensions, or a cell
    /// count that does not fit in `i32`, give 8x8.
    pub fn new(width: i32, height: i32) -> Self {
        let cell_count = if width > 0 && height > 0 {
            width.checked_mul(height)
        } else {
            None
        };
        let (width, height, cell_count) = match cell_count {
            Some(count) => (width, height, count),
            None => (
                DEFAULT_BOARD_SIZE,
                DEFAULT_BOARD_SIZE,
                DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE,
            ),
        };

        Self {
            width,
            height,
            cells: vec![None; cell_count as usize],
            pieces: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn is_valid_xy(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    #[inline]
    pub fn is_valid_square(&self, square: Square) -> bool {
        self.is_valid_xy(square.x, square.y)
    }

    #[inline]
    fn cell_index(&self, square: Square) -> Option<usize> {
        if self.is_valid_square(square) {
            Some((square.y * self.width + square.x) as usize)
        } else {
            None
        }
    }

    /// Register a piece in the arena without placing it.
    pub fn add_piece(&mut self, piece: Piece) -> PieceId {
        self.pieces.push(piece);
        PieceId(self.pieces.len() - 1)
    }

    /// Arena lookup. Panics if `id` was not issued by this board.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    #[inline]
    pub fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.0]
    }

    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// Handle of the piece standing on `square`; `None` if empty or off the board.
    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<PieceId> {
        self.cell_index(square).and_then(|idx| self.cells[idx])
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.get_piece(square).map(|id| self.piece(id))
    }

    /// Place `id` on `square`, silently replacing any occupant, and update the
    /// piece's location. No-op on an invalid square.
    pub fn put_piece(&mut self, id: PieceId, square: Square) {
        let Some(idx) = self.cell_index(square) else {
            return;
        };
        self.cells[idx] = Some(id);
        self.piece_mut(id).set_location(square);
    }

    /// Clear `square`. The removed piece keeps its stored location.
    pub fn remove_piece(&mut self, square: Square) {
        if let Some(idx) = self.cell_index(square) {
            self.cells[idx] = None;
        }
    }

    /// Move the occupant of `from` to `to`, overwriting whatever stands on
    /// `to`. Callers that need the captured piece must read it first.
    ///
    /// No-op if `from == to`, either square is invalid or `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        if from == to {
            return;
        }
        let (Some(from_idx), Some(to_idx)) = (self.cell_index(from), self.cell_index(to)) else {
            return;
        };
        let Some(id) = self.cells[from_idx] else {
            return;
        };

        self.cells[from_idx] = None;
        self.cells[to_idx] = Some(id);
        self.piece_mut(id).set_location(to);
    }

    #[inline]
    pub fn has_piece(&self, square: Square) -> bool {
        self.get_piece(square).is_some()
    }

    /// True for an empty square on the board; false if occupied or invalid.
    #[inline]
    pub fn is_open_square(&self, square: Square) -> bool {
        self.cell_index(square)
            .is_some_and(|idx| self.cells[idx].is_none())
    }

    #[inline]
    pub fn piece_color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(Piece::color)
    }

    /// True if `square` holds a piece of the color opposing `color`.
    #[inline]
    pub fn has_enemy(&self, square: Square, color: Color) -> bool {
        self.piece_color_at(square)
            .is_some_and(|occupant| occupant != color)
    }

    /// True if `square` is on the board and either empty or capturable by `color`.
    #[inline]
    pub fn is_open_or_capturable(&self, square: Square, color: Color) -> bool {
        self.is_open_square(square) || self.has_enemy(square, color)
    }

    /// Occupied squares with their pieces, rank by rank from `y = 0`.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            let idx = idx as i32;
            cell.map(|id| (Square::new(idx % self.width, idx / self.width), id))
        })
    }
}
