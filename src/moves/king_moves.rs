use std::collections::HashSet;

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::move_shared::{add_jump_targets, KING_OFFSETS};

pub fn king_moves(board: &Board, origin: Square, color: Color, out: &mut HashSet<Square>) {
    add_jump_targets(board, origin, color, &KING_OFFSETS, out);
}
