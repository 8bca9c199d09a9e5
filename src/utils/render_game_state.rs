//! Terminal-oriented board renderer.
//!
//! Draws any board size with file letters along the top and bottom and rank
//! numbers on both sides, White's first rank at the bottom.

use crate::game_state::game::Game;
use crate::utils::piece_icons::{letter_icon, IconSet};

const EMPTY_SQUARE: char = '·';

/// Render the board of `game` using `icons`, falling back to letters for any
/// piece the icon set has no glyph for.
pub fn render_game_state(game: &Game, icons: &impl IconSet) -> String {
    let board = game.board();
    let files = file_labels(board.width());
    let mut out = String::new();

    out.push_str(&files);
    out.push('\n');

    for rank in (0..board.height()).rev() {
        out.push_str(&format!("{:>2} ", rank + 1));

        for file in 0..board.width() {
            let ch = board
                .piece_at((file, rank).into())
                .map(|piece| {
                    icons
                        .icon(piece.color(), piece.kind())
                        .unwrap_or_else(|| letter_icon(piece.color(), piece.kind()))
                })
                .unwrap_or(EMPTY_SQUARE);
            out.push(ch);

            if file < board.width() - 1 {
                out.push(' ');
            }
        }

        out.push_str(&format!(" {}\n", rank + 1));
    }

    out.push_str(&files);
    out
}

fn file_labels(width: i32) -> String {
    let letters: Vec<String> = (0..width)
        .map(|file| char::from(b'a' + file as u8).to_string())
        .collect();
    format!("   {}", letters.join(" "))
}
