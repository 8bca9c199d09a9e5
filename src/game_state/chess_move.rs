use crate::game_state::chess_types::{Piece, PieceId, Square};

/// Record of one executed ply, holding enough to invert it exactly.
///
/// `had_moved` is the moved piece's flag before the ply; it is the one value
/// undo cannot re-derive from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved_piece: PieceId,
    pub captured_piece: Option<PieceId>,
    pub had_moved: bool,
}

impl Move {
    /// Snapshot a ply before it is executed. `piece` must be the piece behind
    /// `moved_piece`, still in its pre-move state.
    pub fn record(
        from: Square,
        to: Square,
        moved_piece: PieceId,
        piece: &Piece,
        captured_piece: Option<PieceId>,
    ) -> Self {
        Self {
            from,
            to,
            moved_piece,
            captured_piece,
            had_moved: piece.has_moved(),
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}
