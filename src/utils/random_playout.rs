//! Uniformly random legal play.
//!
//! Used to drive games forward in tests and from the terminal session. There
//! is no evaluation here: every legal move of the side to move is equally
//! likely.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_types::Move;
use crate::game_state::game::Game;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

/// Play one random legal move. `None` once the side to move has none.
pub fn random_move<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> Option<Move> {
    let moves = generate_all_legal_moves(game);
    let &(from, to) = moves.choose(rng)?;
    game.try_run_turn(from, to).ok()
}

/// Play up to `max_plies` random legal moves, stopping early when the game
/// ends. Returns the number of plies played.
pub fn random_playout<R: Rng + ?Sized>(game: &mut Game, rng: &mut R, max_plies: usize) -> usize {
    let mut played = 0;
    while played < max_plies && random_move(game, rng).is_some() {
        played += 1;
    }
    played
}
