//! Line-oriented terminal front end.
//!
//! Reads one command per line, drives a [`Game`], and prints boards, moves and
//! results. It also keeps the players' names and scores and a list of
//! finished games. Diagnostics are `info string` lines. Command errors are
//! always reported, while rejected moves and state changes are only reported
//! with `debug on`.

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::chess_types::{Color, GameState, GameVariant, Move, Square};
use crate::game_state::game::Game;
use crate::game_state::setup_codes::parse_position_code;
use crate::utils::piece_icons::{LetterIcons, UnicodeIcons};
use crate::utils::random_playout::random_move;
use crate::utils::render_game_state::render_game_state;

const SESSION_NAME: &str = "Grid Chess";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TerminalSession::new();

    writeln!(stdout, "{SESSION_NAME}: {}", session.game)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    MissingArgument(&'static str),
    InvalidNumber(String),
    UnknownVariant(String),
    UnknownColor(String),
    UnknownOption(String),
    InvalidOptionValue { name: String, value: String },
    Output(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::MissingArgument(what) => write!(f, "missing {what}"),
            SessionError::InvalidNumber(tok) => write!(f, "'{tok}' is not a number"),
            SessionError::UnknownVariant(tok) => write!(f, "unknown variant '{tok}'"),
            SessionError::UnknownColor(tok) => write!(f, "unknown color '{tok}'"),
            SessionError::UnknownOption(name) => write!(f, "unknown option '{name}'"),
            SessionError::InvalidOptionValue { name, value } => {
                write!(f, "invalid {name} value '{value}'")
            }
            SessionError::Output(msg) => write!(f, "output failed: {msg}"),
        }
    }
}

impl Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Output(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyphs {
    Unicode,
    Letters,
}

/// One concluded game in the score list.
#[derive(Debug, Clone)]
pub struct FinishedGame {
    pub finished_at: DateTime<Local>,
    pub outcome: GameState,
    pub winner: Option<Color>,
    pub by_forfeit: bool,
}

impl fmt::Display for FinishedGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.finished_at.format(TIMESTAMP_FORMAT), self.outcome)?;
        if self.by_forfeit {
            write!(f, " by forfeit")?;
        }
        Ok(())
    }
}

pub struct TerminalSession {
    game: Game,
    variant: GameVariant,
    names: [String; 2],
    scores: [u32; 2],
    finished: Vec<FinishedGame>,
    concluded: bool,
    glyphs: Glyphs,
    debug_mode: bool,
    rng: StdRng,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Session whose `random` command is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let variant = GameVariant::Standard;
        Self {
            game: Game::new(variant),
            variant,
            names: ["White".to_owned(), "Black".to_owned()],
            scores: [0, 0],
            finished: Vec::new(),
            concluded: false,
            glyphs: Glyphs::Unicode,
            debug_mode: false,
            rng,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn score(&self, color: Color) -> u32 {
        self.scores[color.index()]
    }

    pub fn finished_games(&self) -> &[FinishedGame] {
        &self.finished
    }

    /// Handle one input line. Returns `true` when the session should quit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let result = match cmd {
            "new" => self.handle_new(&args, out),
            "setup" => self.handle_setup(&args, out),
            "moves" => self.handle_moves(&args, out),
            "move" => self.handle_move(&args, out),
            "undo" => self.handle_undo(out),
            "forfeit" => self.handle_forfeit(out),
            "random" => self.handle_random(&args, out),
            "board" => self.print_board(out),
            "score" => self.print_score(out),
            "state" => self.print_state(out),
            "debug" => {
                let mode = args.first().copied().unwrap_or_default();
                self.debug_mode = mode.eq_ignore_ascii_case("on");
                Ok(())
            }
            "setoption" => self.handle_setoption(trimmed),
            "quit" => return Ok(true),
            other => self.debug(out, format_args!("unknown command '{other}'")),
        };

        if let Err(err) = result {
            writeln!(out, "info string {cmd} error: {err}")?;
        }
        Ok(false)
    }

    fn handle_new(&mut self, args: &[&str], out: &mut impl Write) -> SessionResult<()> {
        if let Some(tok) = args.first() {
            self.variant = parse_variant(tok)?;
        }
        self.game = Game::new(self.variant);
        self.concluded = false;
        writeln!(out, "new {}", self.game)?;
        self.print_board(out)
    }

    fn handle_setup(&mut self, args: &[&str], out: &mut impl Write) -> SessionResult<()> {
        let (color, codes) = args
            .split_first()
            .ok_or(SessionError::MissingArgument("side to move"))?;
        let turn = parse_color(color)?;

        for code in codes {
            if let Err(err) = parse_position_code(code) {
                self.debug(out, format_args!("dropped setup code {code}: {err}"))?;
            }
        }

        self.game = Game::from_position_codes_on(self.variant, codes, turn);
        self.concluded = false;
        self.print_board(out)?;
        self.print_state(out)?;

        if self.game.game_state().is_terminal() {
            self.conclude_loaded(out)?;
        }
        Ok(())
    }

    fn handle_moves(&mut self, args: &[&str], out: &mut impl Write) -> SessionResult<()> {
        let square = parse_square(args, 0)?;
        let label = match self.game.board().get_piece(square).and_then(|id| self.game.piece(id)) {
            Some(piece) => format!("{square} {}", piece.kind().name()),
            None => square.to_string(),
        };
        let mut moves: Vec<Square> = self.game.legal_moves_at(square).into_iter().collect();
        moves.sort_unstable();

        if moves.is_empty() {
            writeln!(out, "moves {label}: none")?;
        } else {
            let listed: Vec<String> = moves.iter().map(Square::to_string).collect();
            writeln!(out, "moves {label}: {}", listed.join(" "))?;
        }
        Ok(())
    }

    fn handle_move(&mut self, args: &[&str], out: &mut impl Write) -> SessionResult<()> {
        let from = parse_square(args, 0)?;
        let to = parse_square(args, 2)?;
        if self.concluded {
            return self.debug(out, format_args!("game over; start a new game"));
        }

        match self.game.try_run_turn(from, to) {
            Ok(mv) => self.after_move(mv, out),
            Err(reason) => self.debug(out, format_args!("rejected {from}{to}: {reason}")),
        }
    }

    fn handle_undo(&mut self, out: &mut impl Write) -> SessionResult<()> {
        if self.concluded {
            return self.debug(out, format_args!("game over; start a new game"));
        }
        match self.game.undo_move() {
            Some(mv) => {
                writeln!(out, "undone {}{}", mv.from, mv.to)?;
                self.debug_state(out)
            }
            None => self.debug(out, format_args!("nothing to undo")),
        }
    }

    fn handle_forfeit(&mut self, out: &mut impl Write) -> SessionResult<()> {
        if self.concluded || self.game.is_ended() {
            return self.debug(out, format_args!("game over; start a new game"));
        }
        let winner = self.game.opposing_color();
        self.conclude(GameState::win_for(winner), Some(winner), true, out)
    }

    fn handle_random(&mut self, args: &[&str], out: &mut impl Write) -> SessionResult<()> {
        let plies = match args.first() {
            Some(tok) => parse_number::<usize>(tok)?,
            None => 1,
        };

        for _ in 0..plies {
            if self.concluded {
                break;
            }
            let Some(mv) = random_move(&mut self.game, &mut self.rng) else {
                break;
            };
            self.after_move(mv, out)?;
        }
        Ok(())
    }

    fn after_move(&mut self, mv: Move, out: &mut impl Write) -> SessionResult<()> {
        writeln!(out, "played {}{}", mv.from, mv.to)?;
        self.debug_state(out)?;

        let outcome = self.game.game_state();
        if outcome.is_terminal() {
            self.conclude(outcome, outcome.winner(), false, out)?;
        }
        Ok(())
    }

    /// A loaded position that is already final is recorded but scores nothing.
    fn conclude_loaded(&mut self, out: &mut impl Write) -> SessionResult<()> {
        let outcome = self.game.game_state();
        self.concluded = true;
        self.finished.push(FinishedGame {
            finished_at: Local::now(),
            outcome,
            winner: outcome.winner(),
            by_forfeit: false,
        });
        writeln!(out, "result {outcome} in loaded position, not scored")?;
        Ok(())
    }

    /// Record the result once. Only a checkmate or a forfeit scores a point.
    fn conclude(
        &mut self,
        outcome: GameState,
        winner: Option<Color>,
        by_forfeit: bool,
        out: &mut impl Write,
    ) -> SessionResult<()> {
        if let Some(color) = winner {
            self.scores[color.index()] += 1;
        }
        self.concluded = true;

        let record = FinishedGame {
            finished_at: Local::now(),
            outcome,
            winner,
            by_forfeit,
        };
        match winner {
            Some(color) if by_forfeit => {
                writeln!(out, "result {} wins by forfeit", self.names[color.index()])?
            }
            Some(color) => writeln!(out, "result {} wins", self.names[color.index()])?,
            None => writeln!(out, "result {outcome}")?,
        }
        self.finished.push(record);
        Ok(())
    }

    fn handle_setoption(&mut self, line: &str) -> SessionResult<()> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");

        if name.eq_ignore_ascii_case("Variant") {
            self.variant = parse_variant(&value).map_err(|_| invalid_value(&name, &value))?;
        } else if name.eq_ignore_ascii_case("WhiteName") {
            if value.is_empty() {
                return Err(invalid_value(&name, &value));
            }
            self.names[Color::White.index()] = value;
        } else if name.eq_ignore_ascii_case("BlackName") {
            if value.is_empty() {
                return Err(invalid_value(&name, &value));
            }
            self.names[Color::Black.index()] = value;
        } else if name.eq_ignore_ascii_case("Glyphs") {
            self.glyphs = match value.to_ascii_lowercase().as_str() {
                "unicode" => Glyphs::Unicode,
                "letters" => Glyphs::Letters,
                _ => return Err(invalid_value(&name, &value)),
            };
        } else {
            return Err(SessionError::UnknownOption(name));
        }

        Ok(())
    }

    fn print_board(&self, out: &mut impl Write) -> SessionResult<()> {
        let text = match self.glyphs {
            Glyphs::Unicode => render_game_state(&self.game, &UnicodeIcons),
            Glyphs::Letters => render_game_state(&self.game, &LetterIcons),
        };
        writeln!(out, "{text}")?;
        Ok(())
    }

    fn print_score(&self, out: &mut impl Write) -> SessionResult<()> {
        writeln!(
            out,
            "score {} {} {} {}",
            self.names[0], self.scores[0], self.names[1], self.scores[1]
        )?;
        for (n, game) in self.finished.iter().enumerate() {
            writeln!(out, "game {} {game}", n + 1)?;
        }
        Ok(())
    }

    fn print_state(&self, out: &mut impl Write) -> SessionResult<()> {
        write!(
            out,
            "state {} turn {}",
            self.game.game_state(),
            self.names[self.game.turn_color().index()]
        )?;
        match self.game.last_move() {
            Some(mv) => writeln!(out, " last {}{}", mv.from, mv.to)?,
            None => writeln!(out)?,
        }
        Ok(())
    }

    fn debug_state(&self, out: &mut impl Write) -> SessionResult<()> {
        if self.debug_mode {
            writeln!(
                out,
                "info string state {} plies {}",
                self.game.game_state(),
                self.game.move_history().len()
            )?;
        }
        Ok(())
    }

    fn debug(&self, out: &mut impl Write, msg: fmt::Arguments<'_>) -> SessionResult<()> {
        if self.debug_mode {
            writeln!(out, "info string {msg}")?;
        }
        Ok(())
    }
}

fn invalid_value(name: &str, value: &str) -> SessionError {
    SessionError::InvalidOptionValue {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

fn parse_variant(tok: &str) -> SessionResult<GameVariant> {
    match tok.to_ascii_lowercase().as_str() {
        "standard" => Ok(GameVariant::Standard),
        "custom" => Ok(GameVariant::Custom),
        _ => Err(SessionError::UnknownVariant(tok.to_owned())),
    }
}

fn parse_color(tok: &str) -> SessionResult<Color> {
    match tok.to_ascii_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => Err(SessionError::UnknownColor(tok.to_owned())),
    }
}

fn parse_number<T: std::str::FromStr>(tok: &str) -> SessionResult<T> {
    tok.parse::<T>()
        .map_err(|_| SessionError::InvalidNumber(tok.to_owned()))
}

/// Reads `args[at]` and `args[at + 1]` as an `x y` coordinate pair.
fn parse_square(args: &[&str], at: usize) -> SessionResult<Square> {
    let x = args
        .get(at)
        .ok_or(SessionError::MissingArgument("x coordinate"))?;
    let y = args
        .get(at + 1)
        .ok_or(SessionError::MissingArgument("y coordinate"))?;
    Ok(Square::new(parse_number(x)?, parse_number(y)?))
}

#[cfg(test)]
mod tests {
    use super::{Glyphs, SessionError, TerminalSession};
    use crate::game_state::chess_types::{Color, GameState, GameVariant, Square};

    fn run(session: &mut TerminalSession, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            session
                .handle_command(line, &mut out)
                .expect("writing to a Vec should not fail");
        }
        String::from_utf8(out).expect("session output should be UTF-8")
    }

    #[test]
    fn move_command_plays_and_reports() {
        let mut session = TerminalSession::with_seed(1);
        let out = run(&mut session, &["move 4 1 4 3"]);
        assert_eq!(out, "played e2e4\n");
        assert!(session.game().board().has_piece(Square::new(4, 3)));
        assert_eq!(session.game().turn_color(), Color::Black);
    }

    #[test]
    fn rejected_move_is_silent_without_debug() {
        let mut session = TerminalSession::with_seed(1);
        assert_eq!(run(&mut session, &["move 4 1 4 4"]), "");

        let out = run(&mut session, &["debug on", "move 4 1 4 4"]);
        assert_eq!(out, "info string rejected e2e5: e5 is not a legal destination\n");
    }

    #[test]
    fn moves_lists_sorted_destinations() {
        let mut session = TerminalSession::with_seed(1);
        let out = run(&mut session, &["moves 1 0", "moves 4 4", "moves 4 6"]);
        assert_eq!(out, "moves b1 Knight: a3 c3\nmoves e5: none\nmoves e7 Pawn: none\n");
    }

    #[test]
    fn bad_arguments_are_reported() {
        let mut session = TerminalSession::with_seed(1);
        let out = run(&mut session, &["move 4 1 x 3", "new chess960", "moves 4"]);
        assert_eq!(
            out,
            "info string move error: 'x' is not a number\n\
             info string new error: unknown variant 'chess960'\n\
             info string moves error: missing y coordinate\n"
        );
    }

    #[test]
    fn fools_mate_scores_for_black() {
        let mut session = TerminalSession::with_seed(1);
        let out = run(
            &mut session,
            &["move 5 1 5 2", "move 4 6 4 4", "move 6 1 6 3", "move 3 7 7 3"],
        );
        assert!(out.ends_with("played d8h4\nresult Black wins\n"), "{out}");
        assert_eq!(session.score(Color::Black), 1);
        assert_eq!(session.score(Color::White), 0);
        assert_eq!(session.finished_games().len(), 1);
        assert_eq!(session.finished_games()[0].outcome, GameState::BlackWins);

        // A concluded game is frozen until a new one starts.
        assert_eq!(run(&mut session, &["undo"]), "");
        assert!(session.game().is_ended());
    }

    #[test]
    fn forfeit_credits_the_opponent_once() {
        let mut session = TerminalSession::with_seed(1);
        let out = run(&mut session, &["setoption name WhiteName value Ada", "forfeit", "forfeit"]);
        assert_eq!(out, "result Black wins by forfeit\n");
        assert_eq!(session.score(Color::Black), 1);

        let out = run(&mut session, &["new", "move 4 1 4 3", "forfeit", "score"]);
        assert!(out.contains("result Ada wins by forfeit\n"), "{out}");
        assert!(out.contains("score Ada 1 Black 1\n"), "{out}");
        assert!(out.contains("game 2 "), "{out}");
        assert!(out.trim_end().ends_with("white wins by forfeit"), "{out}");
    }

    #[test]
    fn stalemate_and_restart_score_nothing() {
        let mut session = TerminalSession::with_seed(1);
        run(&mut session, &["setup w KW75F RW64F KB77F", "move 6 4 6 5"]);
        assert_eq!(session.game().game_state(), GameState::Stalemate);
        assert_eq!(session.score(Color::White), 0);
        assert_eq!(session.finished_games().len(), 1);

        run(&mut session, &["new", "move 4 1 4 3", "new"]);
        assert_eq!(session.score(Color::White), 0);
        assert_eq!(session.score(Color::Black), 0);
    }

    #[test]
    fn state_shows_the_last_move() {
        let mut session = TerminalSession::with_seed(1);
        let out = run(&mut session, &["move 4 1 4 3", "state"]);
        assert_eq!(out, "played e2e4\nstate playing turn Black last e2e4\n");
    }

    #[test]
    fn loaded_final_position_is_recorded_without_score() {
        let mut session = TerminalSession::with_seed(1);
        let out = run(&mut session, &["setup b KB77F KW04F RW07F RW06F"]);
        assert!(out.ends_with("state white wins turn Black\nresult white wins in loaded position, not scored\n"), "{out}");
        assert_eq!(session.finished_games().len(), 1);
        assert_eq!(session.finished_games()[0].winner, Some(Color::White));
        assert_eq!(session.score(Color::White), 0);

        let out = run(&mut session, &["setup b KB47F PW35F PW46F KW45F"]);
        assert!(out.ends_with("result stalemate in loaded position, not scored\n"), "{out}");
        assert_eq!(session.finished_games().len(), 2);
        assert_eq!(run(&mut session, &["debug on", "undo"]), "info string game over; start a new game\n");
    }

    #[test]
    fn setup_reports_dropped_codes_in_debug() {
        let mut session = TerminalSession::with_seed(1);
        let out = run(&mut session, &["debug on", "setup b KW00F KB77F QQ11F"]);
        assert!(out.starts_with("info string dropped setup code QQ11F: unknown color 'Q'\n"), "{out}");
        assert!(out.ends_with("state playing turn Black\n"), "{out}");
        assert_eq!(session.game().all_pieces().len(), 2);
    }

    #[test]
    fn undo_reverts_and_reports() {
        let mut session = TerminalSession::with_seed(1);
        let out = run(&mut session, &["move 6 0 5 2", "undo", "undo"]);
        assert_eq!(out, "played g1f3\nundone g1f3\n");
        assert!(session.game().move_history().is_empty());
    }

    #[test]
    fn setoption_variant_and_glyphs() {
        let mut session = TerminalSession::with_seed(1);
        run(&mut session, &["setoption name Variant value custom", "setoption name Glyphs value letters"]);
        assert_eq!(session.variant, GameVariant::Custom);
        assert_eq!(session.glyphs, Glyphs::Letters);

        let out = run(&mut session, &["new"]);
        assert!(out.starts_with("new Custom (10x8) Chess Game\n"), "{out}");
        assert!(out.contains(" 1 E R N B Q K B N R E 1\n"), "{out}");
    }

    #[test]
    fn setoption_errors() {
        let mut session = TerminalSession::with_seed(1);
        assert_eq!(
            session.handle_setoption("setoption name Glyphs value emoji"),
            Err(SessionError::InvalidOptionValue {
                name: "Glyphs".to_owned(),
                value: "emoji".to_owned()
            })
        );
        assert_eq!(
            session.handle_setoption("setoption name Hash value 64"),
            Err(SessionError::UnknownOption("Hash".to_owned()))
        );
    }

    #[test]
    fn random_command_is_reproducible() {
        let mut first = TerminalSession::with_seed(9);
        let mut second = TerminalSession::with_seed(9);
        let a = run(&mut first, &["random 6"]);
        let b = run(&mut second, &["random 6"]);
        assert_eq!(a, b);
        assert_eq!(a.lines().filter(|l| l.starts_with("played")).count(), first.game().move_history().len());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut session = TerminalSession::with_seed(1);
        let mut out = Vec::new();
        assert!(session.handle_command("quit", &mut out).expect("quit"));
        assert!(!session.handle_command("state", &mut out).expect("state"));
        assert_eq!(String::from_utf8(out).expect("utf8"), "state playing turn White\n");
    }
}
