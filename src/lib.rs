//! Crate root module declarations for the Grid Chess rules engine.
//!
//! Exposes the game model and rules engine, the per-piece move generators,
//! legality and perft utilities, rendering and random play helpers, and the
//! terminal front end so the binary, tests and benches share one module tree.

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod piece;
    pub mod setup_codes;
    pub mod square;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod empress_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod princess_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod piece_icons;
    pub mod random_playout;
    pub mod render_game_state;
}

pub mod frontend {
    pub mod terminal_session;
}
