//! Move-path enumeration for validating the rules engine.
//!
//! Every legal line is played on the live game with `try_run_turn` and taken
//! back with `undo_move`, so a finished perft also proves that undo restores
//! each intermediate position.

use crate::game_state::chess_types::{GameState, Square};
use crate::game_state::game::Game;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub checkmates: usize,
    pub stalemates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
        self.stalemates += rhs.stalemates;
    }
}

/// Leaf count at `depth` plies from the current position.
pub fn perft(game: &mut Game, depth: u8) -> usize {
    perft_counts(game, depth).nodes
}

/// Leaf counts at `depth`, classified by what the last ply did.
pub fn perft_counts(game: &mut Game, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (from, to) in generate_all_legal_moves(game) {
        perft_recurse(game, from, to, depth, 1, &mut total);
    }
    total
}

/// Leaf count below each root move, in sorted move order.
pub fn perft_divide(game: &mut Game, depth: u8) -> Vec<((Square, Square), usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut divided = Vec::new();
    for (from, to) in generate_all_legal_moves(game) {
        let mut local = PerftCounts::default();
        perft_recurse(game, from, to, depth, 1, &mut local);
        divided.push(((from, to), local.nodes));
    }
    divided
}

fn perft_recurse(
    game: &mut Game,
    from: Square,
    to: Square,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let Ok(mv) = game.try_run_turn(from, to) else {
        return;
    };

    if current_depth == search_depth {
        let mut leaf = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        if mv.is_capture() {
            leaf.captures += 1;
        }
        match game.game_state() {
            GameState::WhiteInCheck | GameState::BlackInCheck => leaf.checks += 1,
            GameState::WhiteWins | GameState::BlackWins => {
                leaf.checks += 1;
                leaf.checkmates += 1;
            }
            GameState::Stalemate => leaf.stalemates += 1,
            GameState::Playing => {}
        }
        counts.merge(leaf);
    } else {
        for (child_from, child_to) in generate_all_legal_moves(game) {
            perft_recurse(
                game,
                child_from,
                child_to,
                search_depth,
                current_depth + 1,
                counts,
            );
        }
    }

    game.undo_move();
}
