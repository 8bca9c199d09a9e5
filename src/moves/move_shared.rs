//! Movement helpers shared by every piece generator.
//!
//! Sliders cast rays; leapers test a fixed offset table. Both take the
//! mover's origin and color explicitly so generators stay free functions.

use std::collections::HashSet;

use crate::game_state::chess_types::{Board, Color, Square};

pub const ORTHOGONAL_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Every (dx, dy) with `|dx| + |dy| == 3` and neither component zero.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = generate_knight_offsets();

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const fn generate_knight_offsets() -> [(i32, i32); 8] {
    let mut table = [(0, 0); 8];
    let mut n = 0usize;
    let mut dx: i32 = -2;

    while dx <= 2 {
        let mut dy: i32 = -2;
        while dy <= 2 {
            if dx != 0 && dy != 0 && dx.abs() + dy.abs() == 3 {
                table[n] = (dx, dy);
                n += 1;
            }
            dy += 1;
        }
        dx += 1;
    }

    table
}

/// Walk from `origin` in steps of `(dx, dy)`. Open squares are added; the
/// first occupied square is added only if it holds an enemy, and ends the ray.
pub fn trace_ray(
    board: &Board,
    origin: Square,
    color: Color,
    (dx, dy): (i32, i32),
    out: &mut HashSet<Square>,
) {
    if dx == 0 && dy == 0 {
        return;
    }

    let mut square = origin.offset(dx, dy);
    while board.is_valid_square(square) {
        if board.is_open_square(square) {
            out.insert(square);
        } else {
            if board.has_enemy(square, color) {
                out.insert(square);
            }
            break;
        }
        square = square.offset(dx, dy);
    }
}

pub fn trace_rays(
    board: &Board,
    origin: Square,
    color: Color,
    directions: &[(i32, i32)],
    out: &mut HashSet<Square>,
) {
    for &direction in directions {
        trace_ray(board, origin, color, direction, out);
    }
}

/// Add every `origin + offset` that is on the board and empty or capturable.
pub fn add_jump_targets(
    board: &Board,
    origin: Square,
    color: Color,
    offsets: &[(i32, i32)],
    out: &mut HashSet<Square>,
) {
    for &(dx, dy) in offsets {
        let target = origin.offset(dx, dy);
        if board.is_open_or_capturable(target, color) {
            out.insert(target);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashSet;

    use crate::game_state::chess_types::{Board, Color, Piece, PieceId, PieceKind, Square};

    pub fn place(board: &mut Board, kind: PieceKind, color: Color, x: i32, y: i32) -> PieceId {
        let id = board.add_piece(Piece::new(kind, color));
        board.put_piece(id, Square::new(x, y));
        id
    }

    pub fn moves_of(board: &Board, id: PieceId) -> HashSet<Square> {
        board.piece(id).possible_moves(board)
    }

    pub fn squares(coords: &[(i32, i32)]) -> HashSet<Square> {
        coords.iter().map(|&c| Square::from(c)).collect()
    }
}
