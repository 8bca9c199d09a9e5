use std::collections::HashSet;

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::move_shared::{add_jump_targets, KNIGHT_OFFSETS};

pub fn knight_moves(board: &Board, origin: Square, color: Color, out: &mut HashSet<Square>) {
    add_jump_targets(board, origin, color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Board, Color, PieceKind};
    use crate::moves::move_shared::test_support::{moves_of, place, squares};

    #[test]
    fn knight_in_corner_has_two_targets() {
        let mut board = Board::default();
        let knight = place(&mut board, PieceKind::Knight, Color::White, 7, 7);
        assert_eq!(moves_of(&board, knight), squares(&[(6, 5), (5, 6)]));
    }

    #[test]
    fn knight_in_center_has_eight_targets() {
        let mut board = Board::default();
        let knight = place(&mut board, PieceKind::Knight, Color::White, 4, 4);
        assert_eq!(
            moves_of(&board, knight),
            squares(&[(5, 2), (5, 6), (3, 2), (3, 6), (6, 3), (6, 5), (2, 3), (2, 5)])
        );
    }

    #[test]
    fn knight_skips_friends_and_keeps_captures() {
        let mut board = Board::default();
        let knight = place(&mut board, PieceKind::Knight, Color::White, 4, 4);
        for (x, y) in [(5, 2), (5, 6), (3, 2), (3, 6)] {
            place(&mut board, PieceKind::Pawn, Color::White, x, y);
        }
        for (x, y) in [(6, 3), (2, 3)] {
            place(&mut board, PieceKind::Pawn, Color::Black, x, y);
        }
        assert_eq!(
            moves_of(&board, knight),
            squares(&[(6, 3), (6, 5), (2, 3), (2, 5)])
        );
    }

    #[test]
    fn knight_jumps_over_a_surrounding_ring() {
        let mut board = Board::default();
        let knight = place(&mut board, PieceKind::Knight, Color::White, 4, 4);
        for (x, y) in [(3, 3), (3, 4), (3, 5), (5, 3), (5, 4), (5, 5)] {
            place(&mut board, PieceKind::Pawn, Color::White, x, y);
        }
        for (x, y) in [(4, 5), (4, 3)] {
            place(&mut board, PieceKind::Pawn, Color::Black, x, y);
        }
        assert_eq!(moves_of(&board, knight).len(), 8);
    }
}
