//! Display glyphs for pieces, supplied to renderers as a capability.

use crate::game_state::chess_types::{Color, PieceKind};

/// Maps a piece to the character a renderer should draw for it. `None`
/// means the set has no glyph and the renderer should fall back to letters.
pub trait IconSet {
    fn icon(&self, color: Color, kind: PieceKind) -> Option<char>;
}

/// Chess symbols from the Unicode block. Princess and Empress have none.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeIcons;

impl IconSet for UnicodeIcons {
    fn icon(&self, color: Color, kind: PieceKind) -> Option<char> {
        let glyph = match (color, kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
            (_, PieceKind::Princess | PieceKind::Empress) => return None,
        };
        Some(glyph)
    }
}

/// Uppercase letters for White, lowercase for Black.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterIcons;

impl IconSet for LetterIcons {
    fn icon(&self, color: Color, kind: PieceKind) -> Option<char> {
        Some(letter_icon(color, kind))
    }
}

#[inline]
pub fn letter_icon(color: Color, kind: PieceKind) -> char {
    match color {
        Color::White => kind.code(),
        Color::Black => kind.code().to_ascii_lowercase(),
    }
}
