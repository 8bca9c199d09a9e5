//! Piece record and its movement capability.
//!
//! A piece is a small plain record: color, kind, where it stands and whether
//! it has moved. Move generation dispatches on `kind` to the per-variant
//! generators in [`crate::moves`], which all read the piece's own stored
//! location.

use std::collections::HashSet;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::{
    bishop_moves, empress_moves, king_moves, knight_moves, pawn_moves, princess_moves,
    queen_moves, rook_moves,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    location: Option<Square>,
    has_moved: bool,
}

impl Piece {
    /// Pieces always start out unmoved and unplaced.
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            color,
            kind,
            location: None,
            has_moved: false,
        }
    }

    /// Squares this piece could move to on `board`, ignoring the safety of its
    /// own king. Empty when the piece has no location or stands off the board.
    pub fn possible_moves(&self, board: &Board) -> HashSet<Square> {
        let Some(origin) = self.location else {
            return HashSet::new();
        };
        if !board.is_valid_square(origin) {
            return HashSet::new();
        }

        let mut moves = HashSet::new();
        match self.kind {
            PieceKind::Pawn => {
                pawn_moves::pawn_moves(board, origin, self.color, self.has_moved, &mut moves)
            }
            PieceKind::Knight => knight_moves::knight_moves(board, origin, self.color, &mut moves),
            PieceKind::Bishop => bishop_moves::bishop_moves(board, origin, self.color, &mut moves),
            PieceKind::Rook => rook_moves::rook_moves(board, origin, self.color, &mut moves),
            PieceKind::Queen => queen_moves::queen_moves(board, origin, self.color, &mut moves),
            PieceKind::King => king_moves::king_moves(board, origin, self.color, &mut moves),
            PieceKind::Princess => {
                princess_moves::princess_moves(board, origin, self.color, &mut moves)
            }
            PieceKind::Empress => {
                empress_moves::empress_moves(board, origin, self.color, &mut moves)
            }
        }
        moves
    }

    /// True if this piece attacks `target` on `board`.
    ///
    /// Pawns attack only their two forward diagonals, whether or not anything
    /// stands there; every other kind attacks exactly its possible moves.
    pub fn can_attack(&self, board: &Board, target: Square) -> bool {
        let Some(origin) = self.location else {
            return false;
        };
        if !board.is_valid_square(origin) || !board.is_valid_square(target) {
            return false;
        }

        match self.kind {
            PieceKind::Pawn => pawn_moves::pawn_attacks(origin, self.color).contains(&target),
            _ => self.possible_moves(board).contains(&target),
        }
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn location(&self) -> Option<Square> {
        self.location
    }

    #[inline]
    pub fn set_location(&mut self, location: Square) {
        self.location = Some(location);
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    #[inline]
    pub fn mark_unmoved(&mut self) {
        self.has_moved = false;
    }
}
