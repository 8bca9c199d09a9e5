//! Canonical starting arrangements.
//!
//! Each layout lists one side's pieces as `(kind, x, rank)` where `rank` is
//! `Pawn` or `Back`; the game mirrors it to y = 1/0 for White and 6/7 for Black.

use crate::game_state::chess_types::{Color, GameVariant, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Pawn,
    Back,
}

impl Rank {
    pub const fn y(self, color: Color) -> i32 {
        match (self, color) {
            (Rank::Back, Color::White) => 0,
            (Rank::Pawn, Color::White) => 1,
            (Rank::Pawn, Color::Black) => 6,
            (Rank::Back, Color::Black) => 7,
        }
    }
}

pub const STANDARD_LAYOUT: [(PieceKind, i32, Rank); 16] = [
    (PieceKind::Pawn, 0, Rank::Pawn),
    (PieceKind::Pawn, 1, Rank::Pawn),
    (PieceKind::Pawn, 2, Rank::Pawn),
    (PieceKind::Pawn, 3, Rank::Pawn),
    (PieceKind::Pawn, 4, Rank::Pawn),
    (PieceKind::Pawn, 5, Rank::Pawn),
    (PieceKind::Pawn, 6, Rank::Pawn),
    (PieceKind::Pawn, 7, Rank::Pawn),
    (PieceKind::Rook, 0, Rank::Back),
    (PieceKind::Knight, 1, Rank::Back),
    (PieceKind::Bishop, 2, Rank::Back),
    (PieceKind::Queen, 3, Rank::Back),
    (PieceKind::King, 4, Rank::Back),
    (PieceKind::Bishop, 5, Rank::Back),
    (PieceKind::Knight, 6, Rank::Back),
    (PieceKind::Rook, 7, Rank::Back),
];

/// 10x8 arrangement: Princesses flank the pawns, Empresses flank the back rank.
pub const CUSTOM_LAYOUT: [(PieceKind, i32, Rank); 20] = [
    (PieceKind::Princess, 0, Rank::Pawn),
    (PieceKind::Pawn, 1, Rank::Pawn),
    (PieceKind::Pawn, 2, Rank::Pawn),
    (PieceKind::Pawn, 3, Rank::Pawn),
    (PieceKind::Pawn, 4, Rank::Pawn),
    (PieceKind::Pawn, 5, Rank::Pawn),
    (PieceKind::Pawn, 6, Rank::Pawn),
    (PieceKind::Pawn, 7, Rank::Pawn),
    (PieceKind::Pawn, 8, Rank::Pawn),
    (PieceKind::Princess, 9, Rank::Pawn),
    (PieceKind::Empress, 0, Rank::Back),
    (PieceKind::Rook, 1, Rank::Back),
    (PieceKind::Knight, 2, Rank::Back),
    (PieceKind::Bishop, 3, Rank::Back),
    (PieceKind::Queen, 4, Rank::Back),
    (PieceKind::King, 5, Rank::Back),
    (PieceKind::Bishop, 6, Rank::Back),
    (PieceKind::Knight, 7, Rank::Back),
    (PieceKind::Rook, 8, Rank::Back),
    (PieceKind::Empress, 9, Rank::Back),
];

pub fn starting_layout(variant: GameVariant) -> &'static [(PieceKind, i32, Rank)] {
    match variant {
        GameVariant::Standard => &STANDARD_LAYOUT,
        GameVariant::Custom => &CUSTOM_LAYOUT,
    }
}
