use std::collections::HashSet;

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

pub fn queen_moves(board: &Board, origin: Square, color: Color, out: &mut HashSet<Square>) {
    rook_moves(board, origin, color, out);
    bishop_moves(board, origin, color, out);
}
