//! Core value types shared by the board, the pieces and the rules engine.
//! Colors and kinds are plain tags; a piece's identity is its arena index.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::chess_move::Move;
pub use crate::game_state::piece::Piece;
pub use crate::game_state::square::Square;

/// Side to move, and the owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Board y-direction a pawn of this color advances in.
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'W' => Some(Color::White),
            'B' => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind. Princess and Empress only appear in the 10x8 variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Princess,
    Empress,
}

impl PieceKind {
    /// Single-letter code, upper case. Knight is `N` as in algebraic notation.
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
            PieceKind::Princess => 'C',
            PieceKind::Empress => 'E',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
            PieceKind::Princess => "Princess",
            PieceKind::Empress => "Empress",
        }
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 8] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Princess,
    PieceKind::Empress,
];

/// Stable handle of a piece inside a board's arena.
///
/// Board cells and rosters store these rather than the pieces themselves, so
/// a captured piece keeps its handle and can be restored by undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

/// Overall status of a game, recomputed after every move and undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    WhiteInCheck,
    BlackInCheck,
    Stalemate,
    WhiteWins,
    BlackWins,
}

impl GameState {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameState::Stalemate | GameState::WhiteWins | GameState::BlackWins
        )
    }

    pub const fn in_check(color: Color) -> Self {
        match color {
            Color::White => GameState::WhiteInCheck,
            Color::Black => GameState::BlackInCheck,
        }
    }

    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameState::WhiteWins,
            Color::Black => GameState::BlackWins,
        }
    }

    /// Color credited with the win, if the game was decided by checkmate.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::WhiteWins => Some(Color::White),
            GameState::BlackWins => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameState::Playing => "playing",
            GameState::WhiteInCheck => "white in check",
            GameState::BlackInCheck => "black in check",
            GameState::Stalemate => "stalemate",
            GameState::WhiteWins => "white wins",
            GameState::BlackWins => "black wins",
        };
        f.write_str(text)
    }
}

/// Which board and starting arrangement a game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameVariant {
    /// 8x8 board with the customary arrangement.
    Standard,
    /// 10x8 board adding a Princess and an Empress on each flank.
    Custom,
}

impl GameVariant {
    pub const fn board_width(self) -> i32 {
        match self {
            GameVariant::Standard => 8,
            GameVariant::Custom => 10,
        }
    }

    pub const fn board_height(self) -> i32 {
        8
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameVariant::Standard => write!(f, "Standard (8x8) Chess Game"),
            GameVariant::Custom => write!(f, "Custom (10x8) Chess Game"),
        }
    }
}
