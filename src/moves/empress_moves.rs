//! Empress: rook rays plus knight jumps.

use std::collections::HashSet;

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::knight_moves::knight_moves;
use crate::moves::rook_moves::rook_moves;

pub fn empress_moves(board: &Board, origin: Square, color: Color, out: &mut HashSet<Square>) {
    knight_moves(board, origin, color, out);
    rook_moves(board, origin, color, out);
}
