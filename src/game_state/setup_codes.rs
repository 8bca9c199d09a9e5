//! Five-character position codes used for custom arrangements and tests.
//!
//! Grammar: `[KQBNRP][WB][0-7][0-7][TF]`: piece type, color, x, y and a
//! moved flag where `F` marks the piece as already moved and `T` leaves it
//! unmoved. Anything else is rejected with a [`SetupCodeError`].

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind, Square};

pub type SetupCodeResult<T> = Result<T, SetupCodeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupCodeError {
    WrongLength(usize),
    UnknownPieceType(char),
    UnknownColor(char),
    CoordinateOutOfRange(char),
    UnknownMovedFlag(char),
}

impl fmt::Display for SetupCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupCodeError::WrongLength(len) => {
                write!(f, "position code must be 5 characters, got {len}")
            }
            SetupCodeError::UnknownPieceType(ch) => write!(f, "unknown piece type '{ch}'"),
            SetupCodeError::UnknownColor(ch) => write!(f, "unknown color '{ch}'"),
            SetupCodeError::CoordinateOutOfRange(ch) => {
                write!(f, "coordinate '{ch}' is not in 0-7")
            }
            SetupCodeError::UnknownMovedFlag(ch) => write!(f, "moved flag '{ch}' is not T or F"),
        }
    }
}

impl Error for SetupCodeError {}

/// One decoded position code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionCode {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub moved: bool,
}

impl fmt::Display for PositionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.kind.code(),
            self.color.code(),
            self.square.x,
            self.square.y,
            if self.moved { 'F' } else { 'T' }
        )
    }
}

pub fn parse_position_code(code: &str) -> SetupCodeResult<PositionCode> {
    let chars: Vec<char> = code.chars().collect();
    let &[kind, color, x, y, moved] = chars.as_slice() else {
        return Err(SetupCodeError::WrongLength(chars.len()));
    };

    let kind = piece_kind_from_code(kind).ok_or(SetupCodeError::UnknownPieceType(kind))?;
    let color = Color::from_code(color).ok_or(SetupCodeError::UnknownColor(color))?;
    let x = coordinate_from_char(x)?;
    let y = coordinate_from_char(y)?;
    let moved = match moved {
        'T' => false,
        'F' => true,
        other => return Err(SetupCodeError::UnknownMovedFlag(other)),
    };

    Ok(PositionCode {
        kind,
        color,
        square: Square::new(x, y),
        moved,
    })
}

/// Piece letters accepted by the position-code grammar. Princess and Empress
/// have no code and cannot be placed this way.
fn piece_kind_from_code(ch: char) -> Option<PieceKind> {
    match ch {
        'K' => Some(PieceKind::King),
        'Q' => Some(PieceKind::Queen),
        'B' => Some(PieceKind::Bishop),
        'N' => Some(PieceKind::Knight),
        'R' => Some(PieceKind::Rook),
        'P' => Some(PieceKind::Pawn),
        _ => None,
    }
}

fn coordinate_from_char(ch: char) -> SetupCodeResult<i32> {
    match ch {
        '0'..='7' => Ok(ch as i32 - '0' as i32),
        _ => Err(SetupCodeError::CoordinateOutOfRange(ch)),
    }
}
