use rand::{rngs::StdRng, SeedableRng};

use grid_chess::game_state::chess_types::{Color, GameState, Piece, PieceId, Square};
use grid_chess::game_state::game::Game;
use grid_chess::move_generation::legal_move_generator::generate_all_legal_moves;
use grid_chess::utils::random_playout::{random_move, random_playout};

struct EndingCase {
    codes: &'static [&'static str],
    turn: Color,
    expected: GameState,
}

const ENDINGS: &[EndingCase] = &[
    EndingCase {
        codes: &["KB77F", "KW04F", "RW07F", "RW06F"],
        turn: Color::Black,
        expected: GameState::WhiteWins,
    },
    EndingCase {
        codes: &["KW40F", "RW07F", "KB67F", "PB56F", "PB66F", "PB76F"],
        turn: Color::Black,
        expected: GameState::WhiteWins,
    },
    EndingCase {
        codes: &["KW55F", "QW66F", "KB67F"],
        turn: Color::Black,
        expected: GameState::WhiteWins,
    },
    EndingCase {
        codes: &["KW70F", "KB62F", "QB52F", "NB72F"],
        turn: Color::White,
        expected: GameState::BlackWins,
    },
    EndingCase {
        codes: &["KW00F", "KB12F", "QB20F"],
        turn: Color::White,
        expected: GameState::BlackWins,
    },
    EndingCase {
        codes: &["KB47F", "PW35F", "PW46F", "KW45F"],
        turn: Color::Black,
        expected: GameState::Stalemate,
    },
    EndingCase {
        codes: &["KW12F", "QW32F", "KB20F"],
        turn: Color::Black,
        expected: GameState::Stalemate,
    },
    EndingCase {
        codes: &["KW30F", "KB32F", "QB22F"],
        turn: Color::White,
        expected: GameState::Stalemate,
    },
];

fn snapshot(game: &Game) -> (Vec<(PieceId, Piece)>, Color, GameState) {
    (game.all_pieces(), game.turn_color(), game.game_state())
}

#[test]
fn ending_positions_are_terminal() {
    for case in ENDINGS {
        let mut game = Game::from_position_codes(case.codes, case.turn);
        assert_eq!(game.game_state(), case.expected, "{:?}", case.codes);
        assert!(game.is_ended(), "{:?}", case.codes);
        assert!(!game.current_color_has_moves(), "{:?}", case.codes);
        assert!(generate_all_legal_moves(&mut game).is_empty());
    }
}

#[test]
fn fools_mate_through_the_public_api() {
    let mut game = Game::new_standard();
    for (from, to) in [((5, 1), (5, 2)), ((4, 6), (4, 4)), ((6, 1), (6, 3)), ((3, 7), (7, 3))] {
        game.try_run_turn(Square::from(from), Square::from(to))
            .expect("fool's mate moves should all be legal");
    }
    assert_eq!(game.game_state(), GameState::BlackWins);
    assert_eq!(game.game_state().winner(), Some(Color::Black));
    assert!(game.is_ended());
}

#[test]
fn every_ply_of_a_random_game_undoes_exactly() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = if seed % 2 == 0 {
            Game::new_standard()
        } else {
            Game::new_custom()
        };

        for _ in 0..60 {
            let before = snapshot(&game);
            let Some(mv) = random_move(&mut game, &mut rng) else {
                break;
            };
            game.undo_move().expect("the ply just played");
            assert_eq!(snapshot(&game), before, "seed {seed} ply {mv:?}");
            game.try_run_turn(mv.from, mv.to)
                .expect("replaying an undone move should succeed");
        }
    }
}

#[test]
fn unwinding_a_playout_restores_the_start() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = Game::new_custom();
    let start = snapshot(&game);

    let played = random_playout(&mut game, &mut rng, 80);
    assert_eq!(game.move_history().len(), played);

    for _ in 0..played {
        game.undo_move().expect("history should cover every ply");
    }
    assert!(game.undo_move().is_none());
    assert_eq!(snapshot(&game), start);
}

#[test]
fn pieces_and_board_stay_consistent_during_play() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut game = Game::new_standard();

    for _ in 0..100 {
        for (id, piece) in game.all_pieces() {
            let square = piece.location().expect("pieces in play are placed");
            assert_eq!(game.board().get_piece(square), Some(id));
        }
        assert_eq!(game.board().occupied().count(), game.all_pieces().len());

        if random_move(&mut game, &mut rng).is_none() {
            break;
        }
    }
}
