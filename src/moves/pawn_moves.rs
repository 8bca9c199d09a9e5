//! Pawn movement.
//!
//! Pawns push straight ahead onto empty squares only (two squares from an
//! unmoved pawn when both are empty) and capture only on the forward
//! diagonals. Their attack set is the two diagonals regardless of occupancy.

use std::collections::HashSet;

use crate::game_state::chess_types::{Board, Color, Square};

pub fn pawn_moves(
    board: &Board,
    origin: Square,
    color: Color,
    has_moved: bool,
    out: &mut HashSet<Square>,
) {
    let dir = color.pawn_direction();

    let one_step = origin.offset(0, dir);
    if board.is_open_square(one_step) {
        out.insert(one_step);

        let two_step = origin.offset(0, 2 * dir);
        if !has_moved && board.is_open_square(two_step) {
            out.insert(two_step);
        }
    }

    for target in pawn_attacks(origin, color) {
        if board.has_enemy(target, color) {
            out.insert(target);
        }
    }
}

/// The two forward diagonals. Validity against a board is the caller's job.
#[inline]
pub fn pawn_attacks(origin: Square, color: Color) -> [Square; 2] {
    let dir = color.pawn_direction();
    [origin.offset(-1, dir), origin.offset(1, dir)]
}
