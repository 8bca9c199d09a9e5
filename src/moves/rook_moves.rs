use std::collections::HashSet;

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::move_shared::{trace_rays, ORTHOGONAL_DIRECTIONS};

pub fn rook_moves(board: &Board, origin: Square, color: Color, out: &mut HashSet<Square>) {
    trace_rays(board, origin, color, &ORTHOGONAL_DIRECTIONS, out);
}
