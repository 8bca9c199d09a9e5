//! Princess: bishop rays plus knight jumps.

use std::collections::HashSet;

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::knight_moves::knight_moves;

pub fn princess_moves(board: &Board, origin: Square, color: Color, out: &mut HashSet<Square>) {
    knight_moves(board, origin, color, out);
    bishop_moves(board, origin, color, out);
}
