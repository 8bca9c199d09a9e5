//! Legal move filtering by trial moves on the live board.
//!
//! Each pseudo-legal destination is tried in place: any occupant is lifted
//! off the board and out of its roster, the piece is moved, and the mover's
//! king is tested against the remaining opposing pieces. A [`TrialMove`] guard
//! puts everything back when it goes out of scope, on every exit path.

use std::collections::HashSet;

use crate::game_state::chess_types::{Board, PieceId, Square};
use crate::game_state::game::{Game, Roster};
use crate::move_generation::legal_move_checks::is_king_safe;

/// A move applied to the board for inspection only. Dropping it rolls the
/// board and the opposing roster back to where they were.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    opposing: &'a mut Roster,
    from: Square,
    to: Square,
    captured: Option<PieceId>,
}

impl<'a> TrialMove<'a> {
    pub fn apply(board: &'a mut Board, opposing: &'a mut Roster, from: Square, to: Square) -> Self {
        let captured = board.get_piece(to);
        if let Some(id) = captured {
            opposing.remove(&id);
        }
        board.remove_piece(to);
        board.move_piece(from, to);

        Self {
            board,
            opposing,
            from,
            to,
            captured,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.board
    }

    #[inline]
    pub fn opposing(&self) -> &Roster {
        self.opposing
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.move_piece(self.to, self.from);
        if let Some(id) = self.captured {
            self.board.put_piece(id, self.to);
            self.opposing.insert(id);
        }
    }
}

/// Destinations of `piece` that do not leave its own king attacked.
///
/// Empty if the game has ended, the piece is not on the board or it is not
/// that color's turn.
pub fn generate_legal_moves(game: &mut Game, piece: PieceId) -> HashSet<Square> {
    if game.ended {
        return HashSet::new();
    }
    let Some(mover) = game.board.get(piece) else {
        return HashSet::new();
    };
    let color = mover.color();
    let Some(origin) = mover.location() else {
        return HashSet::new();
    };
    if color != game.turn_color || game.board.get_piece(origin) != Some(piece) {
        return HashSet::new();
    }

    let candidates = mover.possible_moves(&game.board);
    let king = game.kings[color.index()];
    let board = &mut game.board;
    let opposing = &mut game.rosters[color.opposite().index()];

    let mut legal = HashSet::with_capacity(candidates.len());
    for dest in candidates {
        let trial = TrialMove::apply(board, opposing, origin, dest);
        if is_king_safe(trial.board(), king, trial.opposing()) {
            legal.insert(dest);
        }
    }

    legal
}

/// Every legal `(from, to)` pair for the side to move, sorted.
pub fn generate_all_legal_moves(game: &mut Game) -> Vec<(Square, Square)> {
    let movers: Vec<PieceId> = game.pieces_of(game.turn_color).collect();
    let mut all = Vec::new();

    for id in movers {
        let Some(from) = game.board.piece(id).location() else {
            continue;
        };
        let mut dests: Vec<Square> = generate_legal_moves(game, id).into_iter().collect();
        dests.sort_unstable();
        all.extend(dests.into_iter().map(|to| (from, to)));
    }

    all.sort_unstable();
    all
}
