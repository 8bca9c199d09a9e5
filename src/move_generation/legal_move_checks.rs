//! Attack and king-safety queries over a board and an attacking roster.

use crate::game_state::chess_types::{Board, PieceId, Square};
use crate::game_state::game::Roster;

/// Where `king` currently stands, if it is still on the board.
#[inline]
pub fn king_square(board: &Board, king: Option<PieceId>) -> Option<Square> {
    let king = king?;
    let square = board.get(king)?.location()?;
    (board.get_piece(square) == Some(king)).then_some(square)
}

/// True if any piece in `attackers` can attack `square`.
pub fn is_square_attacked(board: &Board, attackers: &Roster, square: Square) -> bool {
    attackers
        .iter()
        .any(|&id| board.piece(id).can_attack(board, square))
}

/// True unless `king` stands on a square attacked by `attackers`. A side
/// without a king on the board is never considered in danger.
#[inline]
pub fn is_king_safe(board: &Board, king: Option<PieceId>, attackers: &Roster) -> bool {
    match king_square(board, king) {
        Some(square) => !is_square_attacked(board, attackers, square),
        None => true,
    }
}
