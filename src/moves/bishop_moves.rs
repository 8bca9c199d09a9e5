use std::collections::HashSet;

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::move_shared::{trace_rays, DIAGONAL_DIRECTIONS};

pub fn bishop_moves(board: &Board, origin: Square, color: Color, out: &mut HashSet<Square>) {
    trace_rays(board, origin, color, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Board, Color, PieceKind};
    use crate::moves::move_shared::test_support::{moves_of, place, squares};

    #[test]
    fn bishop_open_board_counts() {
        let mut board = Board::default();
        let corner = place(&mut board, PieceKind::Bishop, Color::White, 0, 0);
        assert_eq!(moves_of(&board, corner).len(), 7);

        let mut board = Board::default();
        let center = place(&mut board, PieceKind::Bishop, Color::White, 3, 4);
        assert_eq!(moves_of(&board, center).len(), 13);
    }

    #[test]
    fn bishop_from_corner_blocked_by_friend() {
        let mut board = Board::default();
        let bishop = place(&mut board, PieceKind::Bishop, Color::Black, 0, 0);
        place(&mut board, PieceKind::Pawn, Color::Black, 4, 4);
        assert_eq!(
            moves_of(&board, bishop),
            squares(&[(1, 1), (2, 2), (3, 3)])
        );
    }

    #[test]
    fn bishop_center_with_mixed_obstacles() {
        let mut board = Board::default();
        let bishop = place(&mut board, PieceKind::Bishop, Color::White, 4, 4);
        place(&mut board, PieceKind::Pawn, Color::White, 2, 2);
        place(&mut board, PieceKind::Pawn, Color::White, 7, 7);
        place(&mut board, PieceKind::Pawn, Color::Black, 3, 5);
        place(&mut board, PieceKind::Pawn, Color::Black, 5, 3);

        assert_eq!(
            moves_of(&board, bishop),
            squares(&[(3, 3), (3, 5), (5, 3), (5, 5), (6, 6)])
        );
    }
}
