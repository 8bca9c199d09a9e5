//! Turn-based rules engine.
//!
//! `Game` owns the board (and through it every piece), one roster of piece
//! handles per color, the registered king of each color, the side to move,
//! the overall [`GameState`] and the move history. Requests that break the
//! rules are absorbed: `run_turn` ignores them and `undo_move` on an empty
//! history returns `None`. `try_run_turn` exposes the rejection reason for
//! callers that want it.
//!
//! Legality is decided by trying each candidate move on the live board and
//! rolling it back; see [`crate::move_generation::legal_move_generator`].

use std::collections::{BTreeSet, HashSet};
use std::error::Error;
use std::fmt;

use crate::game_state::chess_rules::starting_layout;
use crate::game_state::chess_types::{
    Board, Color, GameState, GameVariant, Move, Piece, PieceId, PieceKind, Square,
};
use crate::game_state::setup_codes::parse_position_code;
use crate::move_generation::legal_move_checks::is_king_safe;
use crate::move_generation::legal_move_generator::generate_legal_moves;

/// Handles of one color's pieces still in play.
pub type Roster = BTreeSet<PieceId>;

pub type MoveResult<T> = Result<T, MoveRejection>;

/// Why a requested move was not played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    GameEnded,
    NoPieceAtSource(Square),
    WrongTurn(Color),
    IllegalDestination(Square),
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameEnded => write!(f, "the game has ended"),
            MoveRejection::NoPieceAtSource(square) => write!(f, "no piece on {square}"),
            MoveRejection::WrongTurn(color) => write!(f, "it is {color}'s turn"),
            MoveRejection::IllegalDestination(square) => {
                write!(f, "{square} is not a legal destination")
            }
        }
    }
}

impl Error for MoveRejection {}

#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) variant: GameVariant,
    pub(crate) board: Board,
    pub(crate) rosters: [Roster; 2],
    pub(crate) kings: [Option<PieceId>; 2],
    pub(crate) turn_color: Color,
    pub(crate) state: GameState,
    pub(crate) move_history: Vec<Move>,
    pub(crate) ended: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new_standard()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variant)
    }
}

impl Game {
    /// Board of the variant's size with no pieces, White to move.
    pub fn empty(variant: GameVariant) -> Self {
        Self {
            variant,
            board: Board::new(variant.board_width(), variant.board_height()),
            rosters: [Roster::new(), Roster::new()],
            kings: [None, None],
            turn_color: Color::White,
            state: GameState::Playing,
            move_history: Vec::new(),
            ended: false,
        }
    }

    /// Variant's customary starting arrangement, White to move.
    pub fn new(variant: GameVariant) -> Self {
        let mut game = Self::empty(variant);
        for color in [Color::White, Color::Black] {
            for &(kind, x, rank) in starting_layout(variant) {
                game.add_piece_to_game(Piece::new(kind, color), Square::new(x, rank.y(color)));
            }
        }
        game
    }

    pub fn new_standard() -> Self {
        Self::new(GameVariant::Standard)
    }

    pub fn new_custom() -> Self {
        Self::new(GameVariant::Custom)
    }

    /// 8x8 game from position codes; see [`Game::from_position_codes_on`].
    pub fn from_position_codes<I, S>(codes: I, turn_color: Color) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_position_codes_on(GameVariant::Standard, codes, turn_color)
    }

    /// Arrangement built from `[KQBNRP][WB][0-7][0-7][TF]` codes. Malformed
    /// codes are skipped, and the state is validated once after loading.
    pub fn from_position_codes_on<I, S>(variant: GameVariant, codes: I, turn_color: Color) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut game = Self::empty(variant);
        game.turn_color = turn_color;

        for code in codes {
            let Ok(code) = parse_position_code(code.as_ref()) else {
                continue;
            };
            let mut piece = Piece::new(code.kind, code.color);
            if code.moved {
                piece.mark_moved();
            }
            game.add_piece_to_game(piece, code.square);
        }

        game.validate_state();
        game
    }

    /// Register `piece` on `square` and in its color's roster.
    ///
    /// A king is only accepted if its color has none registered yet; a second
    /// king is dropped entirely. Pieces aimed at an invalid or occupied square
    /// are dropped as well. Returns the new handle when the piece was placed.
    pub fn add_piece_to_game(&mut self, piece: Piece, square: Square) -> Option<PieceId> {
        if !self.board.is_open_square(square) {
            return None;
        }
        let color = piece.color();
        if piece.is_king() && self.kings[color.index()].is_some() {
            return None;
        }

        let is_king = piece.is_king();
        let id = self.board.add_piece(piece);
        if is_king {
            self.kings[color.index()] = Some(id);
        }
        self.rosters[color.index()].insert(id);
        self.board.put_piece(id, square);
        Some(id)
    }

    /// Play `from -> to` if it is legal, then pass the turn and revalidate.
    /// Anything else is silently ignored.
    pub fn run_turn(&mut self, from: Square, to: Square) {
        let _ = self.try_run_turn(from, to);
    }

    /// As [`Game::run_turn`], reporting the executed move or why it was refused.
    pub fn try_run_turn(&mut self, from: Square, to: Square) -> MoveResult<Move> {
        let mv = self.make_move(from, to)?;
        self.swap_turn_color();
        self.validate_state();
        Ok(mv)
    }

    fn make_move(&mut self, from: Square, to: Square) -> MoveResult<Move> {
        if self.ended {
            return Err(MoveRejection::GameEnded);
        }
        let piece = self
            .board
            .get_piece(from)
            .ok_or(MoveRejection::NoPieceAtSource(from))?;
        if self.board.piece(piece).color() != self.turn_color {
            return Err(MoveRejection::WrongTurn(self.turn_color));
        }
        if !self.legal_moves(piece).contains(&to) {
            return Err(MoveRejection::IllegalDestination(to));
        }

        let captured = self.board.get_piece(to);
        let mv = Move::record(from, to, piece, self.board.piece(piece), captured);

        if let Some(captured) = captured {
            self.rosters[self.opposing_color().index()].remove(&captured);
        }
        self.board.remove_piece(to);
        self.board.move_piece(from, to);
        self.board.piece_mut(piece).mark_moved();
        self.move_history.push(mv);
        Ok(mv)
    }

    /// Revert the last ply, pass the turn back and revalidate. Returns the
    /// reverted move, or `None` when nothing has been played.
    ///
    /// Undoing the move that ended the game reopens it.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_history.pop()?;

        self.board.move_piece(mv.to, mv.from);
        let moved = self.board.piece_mut(mv.moved_piece);
        if moved.has_moved() != mv.had_moved {
            if mv.had_moved {
                moved.mark_moved();
            } else {
                moved.mark_unmoved();
            }
        }

        if let Some(captured) = mv.captured_piece {
            let color = self.board.piece(captured).color();
            self.board.put_piece(captured, mv.to);
            self.rosters[color.index()].insert(captured);
        }

        self.swap_turn_color();
        self.ended = false;
        self.validate_state();
        Some(mv)
    }

    /// Recompute check, checkmate and stalemate for the side to move.
    pub fn validate_state(&mut self) {
        if self.ended {
            return;
        }

        let turn = self.turn_color;
        self.state = if self.king_is_safe(turn) {
            GameState::Playing
        } else {
            GameState::in_check(turn)
        };

        if !self.current_color_has_moves() {
            self.ended = true;
            self.state = match self.state {
                GameState::WhiteInCheck => GameState::BlackWins,
                GameState::BlackInCheck => GameState::WhiteWins,
                _ => GameState::Stalemate,
            };
        }
    }

    /// True if the side to move has at least one legal move.
    pub fn current_color_has_moves(&mut self) -> bool {
        if self.ended {
            return false;
        }
        let defenders: Vec<PieceId> = self.pieces_of(self.turn_color).collect();
        defenders
            .into_iter()
            .any(|id| !self.legal_moves(id).is_empty())
    }

    /// Legal destinations of `piece`; empty if the game has ended or it is
    /// not that piece's turn.
    pub fn legal_moves(&mut self, piece: PieceId) -> HashSet<Square> {
        generate_legal_moves(self, piece)
    }

    pub fn legal_moves_at(&mut self, square: Square) -> HashSet<Square> {
        match self.board.get_piece(square) {
            Some(piece) => self.legal_moves(piece),
            None => HashSet::new(),
        }
    }

    fn king_is_safe(&self, color: Color) -> bool {
        is_king_safe(
            &self.board,
            self.kings[color.index()],
            &self.rosters[color.opposite().index()],
        )
    }

    fn swap_turn_color(&mut self) {
        self.turn_color = self.turn_color.opposite();
    }

    /// Snapshot of every piece in play, ordered by handle.
    pub fn all_pieces(&self) -> Vec<(PieceId, Piece)> {
        let mut all: Vec<(PieceId, Piece)> = self
            .rosters
            .iter()
            .flatten()
            .map(|&id| (id, self.board.piece(id).clone()))
            .collect();
        all.sort_by_key(|(id, _)| *id);
        all
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.rosters[color.index()].iter().copied()
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.board.get(id)
    }

    #[inline]
    pub fn piece_kind_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        self.board
            .piece_at(square)
            .map(|piece| (piece.color(), piece.kind()))
    }

    #[inline]
    pub fn king_of(&self, color: Color) -> Option<PieceId> {
        self.kings[color.index()]
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    #[inline]
    pub fn game_state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn turn_color(&self) -> Color {
        self.turn_color
    }

    #[inline]
    pub fn opposing_color(&self) -> Color {
        self.turn_color.opposite()
    }

    #[inline]
    pub fn is_whites_turn(&self) -> bool {
        self.turn_color == Color::White
    }

    #[inline]
    pub fn is_blacks_turn(&self) -> bool {
        self.turn_color == Color::Black
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }
}
