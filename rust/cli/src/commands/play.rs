//! # Play Command
//!
//! Interactive best-of-N match against the computer.
//!
//! The session reads one command per line and renders the match the way a
//! small game window would: a header, the best-of length, the scoreboard, an
//! announcement line, and both players' moves.
//!
//! ## Features
//!
//! - Move selection by name or first letter (`rock`, `p`, ...)
//! - `best [N]` to change the match length, asking again until the answer is
//!   valid or blank
//! - `reset` to restart the current match, `score` and `help`
//! - "Play again?" prompt when a match ends
//! - Quit confirmation (`q`, `quit`, `exit`); EOF ends the session directly
//! - Thinking animation before each reveal, decoupled from the result

use crate::animation::{DEFAULT_SPINS, ThinkingAnimation, ThreadPause};
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{
    Symbols, format_header, format_match_winner, format_move, format_round_announcement,
    format_scoreboard,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_best_of, parse_command, parse_yes_no};
use roshambo_ai::{ComputerOpponent, create_ai};
use roshambo_engine::errors::GameError;
use roshambo_engine::game::{DEFAULT_BEST_OF, MatchState, Side};
use roshambo_engine::moves::Move;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const HELP: &str = "\
Commands:
  rock | r         throw Rock
  paper | p        throw Paper
  scissors | s     throw Scissors
  best [N]         start a new best-of-N match (N positive and odd)
  reset            restart the current match
  score            show the scoreboard
  help             show this list
  quit | q         leave the game";

/// Settings for one `play` invocation, after config and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOptions {
    pub best_of: i64,
    pub seed: Option<u64>,
    pub animation: bool,
    pub spins: u8,
    pub ascii: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            best_of: i64::from(DEFAULT_BEST_OF),
            seed: None,
            animation: true,
            spins: DEFAULT_SPINS,
            ascii: false,
        }
    }
}

impl From<&Config> for PlayOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            best_of: i64::from(cfg.best_of),
            seed: cfg.seed,
            animation: cfg.animation,
            spins: cfg.spins,
            ascii: cfg.ascii,
        }
    }
}

impl PlayOptions {
    /// Apply command-line flags on top of configured values.
    pub fn with_overrides(
        mut self,
        best_of: Option<i64>,
        seed: Option<u64>,
        no_animation: bool,
        spins: Option<u8>,
        ascii: bool,
    ) -> Self {
        if let Some(n) = best_of {
            self.best_of = n;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if no_animation {
            self.animation = false;
        }
        if let Some(k) = spins {
            self.spins = k;
        }
        self.ascii |= ascii;
        self
    }
}

/// Running totals across every match of one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Rounds resolved, including ties
    pub rounds: u32,
    pub user_matches: u32,
    pub computer_matches: u32,
}

/// Handle the play command: interactive match against a random opponent
///
/// # Arguments
///
/// * `opts` - Merged configuration and flags
/// * `out` - Output stream for the game display
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for player commands
///
/// # Returns
///
/// * `Ok(())` when the player leaves the session
/// * `Err(CliError::InvalidInput)` if the best-of length is invalid; nothing
///   is read from `stdin` in that case
///
/// # Examples
///
/// ```
/// use roshambo_cli::commands::{handle_play_command, PlayOptions};
/// use std::io::Cursor;
///
/// let opts = PlayOptions { seed: Some(7), animation: false, ..PlayOptions::default() };
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = Cursor::new("rock\nq\ny\n");
/// handle_play_command(opts, &mut out, &mut err, &mut input).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Round 1:"));
/// ```
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let state = MatchState::new(opts.best_of)?;
    let seed = opts.seed.unwrap_or_else(rand::random);
    let symbols = Symbols::detect(opts.ascii);

    let animation = if opts.animation {
        // previews draw from their own stream so they never shift the opponent's
        ThinkingAnimation::new(opts.spins, seed.rotate_left(32), Box::new(ThreadPause))
    } else {
        ThinkingAnimation::disabled()
    };

    writeln!(out, "play: best_of={} seed={}", state.best_of(), seed)?;
    info!(best_of = state.best_of(), seed, "session started");

    let opponent = create_ai("random", seed)
        .ok_or_else(|| CliError::Engine("unknown opponent: random".to_string()))?;
    debug!(opponent = opponent.name(), "opponent ready");

    let mut session = PlaySession::new(state, opponent, animation, symbols);
    let stats = session.run(stdin, out, err)?;
    info!(
        rounds = stats.rounds,
        user_matches = stats.user_matches,
        computer_matches = stats.computer_matches,
        "session ended"
    );
    Ok(())
}

/// One interactive session: the match state, the opponent and the display.
///
/// The session owns the only mutable reference to the [`MatchState`].
pub struct PlaySession {
    state: MatchState,
    opponent: Box<dyn ComputerOpponent>,
    animation: ThinkingAnimation,
    symbols: Symbols,
    stats: SessionStats,
}

impl PlaySession {
    pub fn new(
        state: MatchState,
        opponent: Box<dyn ComputerOpponent>,
        animation: ThinkingAnimation,
        symbols: Symbols,
    ) -> Self {
        Self {
            state,
            opponent,
            animation,
            symbols,
            stats: SessionStats::default(),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Read and execute commands until the player quits or input ends.
    pub fn run(
        &mut self,
        stdin: &mut dyn BufRead,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<SessionStats, CliError> {
        writeln!(out, "{}", format_header(self.symbols))?;
        writeln!(
            out,
            "Type rock, paper or scissors (r/p/s). 'help' lists all commands."
        )?;
        self.render_new_match(out)?;

        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = read_stdin_line(stdin) else {
                writeln!(out)?;
                break;
            };

            match parse_command(&line) {
                ParseResult::Move(mv) => self.play_move(mv, stdin, out)?,
                ParseResult::BestOf(arg) => self.change_best_of(arg, stdin, out, err)?,
                ParseResult::Reset => {
                    self.state.reset();
                    writeln!(out, "Match reset.")?;
                    self.render_new_match(out)?;
                }
                ParseResult::Score => {
                    writeln!(
                        out,
                        "{}",
                        format_scoreboard(self.state.score_user(), self.state.score_computer())
                    )?;
                }
                ParseResult::Help => writeln!(out, "{}", HELP)?,
                ParseResult::Quit => {
                    if confirm("Are you sure you want to quit? (y/n) ", true, stdin, out)? {
                        break;
                    }
                }
                ParseResult::Empty => {}
                ParseResult::Invalid(msg) => {
                    debug!(input = %line, "unrecognized command");
                    ui::write_error(err, &msg)?;
                }
            }
        }

        self.write_summary(out)?;
        Ok(self.stats)
    }

    fn render_new_match(&self, out: &mut dyn Write) -> Result<(), CliError> {
        writeln!(out, "Best of: {}", self.state.best_of())?;
        writeln!(
            out,
            "{}",
            format_scoreboard(self.state.score_user(), self.state.score_computer())
        )?;
        writeln!(out, "Choose your move")?;
        Ok(())
    }

    fn play_move(
        &mut self,
        user_move: Move,
        stdin: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<(), CliError> {
        if self.state.is_finished() {
            debug!(?user_move, "move ignored, match already finished");
            ui::display_info(out, "Match over", &GameError::MatchAlreadyFinished.to_string())?;
            return Ok(());
        }

        writeln!(out, "You: {}", format_move(user_move, self.symbols))?;
        writeln!(out, "CPU is choosing...")?;
        let computer_move = self.opponent.choose_move();
        self.animation.play(self.symbols, out)?;
        writeln!(out, "CPU: {}", format_move(computer_move, self.symbols))?;

        let result = match self.state.resolve_round(user_move, computer_move) {
            Ok(result) => result,
            Err(e) => {
                debug!(error = %e, "round rejected");
                ui::display_info(out, "Match over", &e.to_string())?;
                return Ok(());
            }
        };
        self.stats.rounds += 1;

        writeln!(out, "{}", format_round_announcement(&result))?;
        writeln!(
            out,
            "{}",
            format_scoreboard(result.score_user, result.score_computer)
        )?;

        if let Some(winner) = result.winner {
            self.finish_match(winner, stdin, out)?;
        }
        Ok(())
    }

    fn finish_match(
        &mut self,
        winner: Side,
        stdin: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<(), CliError> {
        match winner {
            Side::User => self.stats.user_matches += 1,
            Side::Computer => self.stats.computer_matches += 1,
        }
        writeln!(out, "{}", format_match_winner(winner, self.symbols))?;

        if confirm("Play again? (y/n) ", false, stdin, out)? {
            self.state.reset();
            self.render_new_match(out)?;
        }
        Ok(())
    }

    /// Apply `best N`. An invalid number is reported and asked for again;
    /// a blank answer or EOF keeps the current match.
    fn change_best_of(
        &mut self,
        arg: Option<String>,
        stdin: &mut dyn BufRead,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<(), CliError> {
        let mut pending = arg;
        loop {
            let raw = match pending.take() {
                Some(raw) => raw,
                None => {
                    write!(out, "Enter an odd number of rounds (e.g., 1,3,5,7): ")?;
                    out.flush()?;
                    match read_stdin_line(stdin) {
                        Some(line) if !line.is_empty() => line,
                        _ => {
                            writeln!(out, "Best-of unchanged.")?;
                            return Ok(());
                        }
                    }
                }
            };

            let requested = match parse_best_of(&raw) {
                Ok(n) => n,
                Err(msg) => {
                    ui::write_error(err, &msg)?;
                    continue;
                }
            };

            match self.state.configure(requested) {
                Ok(()) => return self.render_new_match(out),
                Err(e) => {
                    debug!(requested, "best-of rejected");
                    ui::write_error(err, &e.to_string())?;
                }
            }
        }
    }

    fn write_summary(&self, out: &mut dyn Write) -> Result<(), CliError> {
        writeln!(out, "Session over. Rounds played: {}", self.stats.rounds)?;
        writeln!(
            out,
            "Matches won: You {}, CPU {}",
            self.stats.user_matches, self.stats.computer_matches
        )?;
        Ok(())
    }
}

/// Ask a yes/no question until it is answered; EOF picks `default`.
fn confirm(
    prompt: &str,
    default: bool,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<bool, CliError> {
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(default);
        };
        if let Some(answer) = parse_yes_no(&line) {
            return Ok(answer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roshambo_ai::scripted::ScriptedOpponent;
    use std::io::Cursor;

    fn scripted(best_of: i64, moves: Vec<Move>) -> PlaySession {
        PlaySession::new(
            MatchState::new(best_of).unwrap(),
            Box::new(ScriptedOpponent::new(moves)),
            ThinkingAnimation::disabled(),
            Symbols::Ascii,
        )
    }

    fn run(session: &mut PlaySession, input: &str) -> (SessionStats, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.to_string());
        let stats = session.run(&mut stdin, &mut out, &mut err).unwrap();
        (
            stats,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_overrides_take_precedence() {
        let cfg = Config {
            best_of: 5,
            seed: Some(1),
            animation: true,
            spins: 9,
            ascii: false,
        };
        let opts = PlayOptions::from(&cfg).with_overrides(Some(7), None, true, Some(3), true);
        assert_eq!(
            opts,
            PlayOptions {
                best_of: 7,
                seed: Some(1),
                animation: false,
                spins: 3,
                ascii: true,
            }
        );
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let cfg = Config::default();
        let opts = PlayOptions::from(&cfg).with_overrides(None, None, false, None, false);
        assert_eq!(opts, PlayOptions::default());
    }

    #[test]
    fn test_eof_ends_session_with_summary() {
        let mut session = scripted(3, vec![Move::Rock]);
        let (stats, out, err) = run(&mut session, "");
        assert_eq!(stats, SessionStats::default());
        assert!(out.contains("Best of: 3"));
        assert!(out.contains("You: 0    CPU: 0"));
        assert!(out.contains("Session over. Rounds played: 0"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_round_display_order() {
        let mut session = scripted(3, vec![Move::Scissors]);
        let (_, out, _) = run(&mut session, "rock\n");
        let you = out.find("You: [R] Rock").unwrap();
        let choosing = out.find("CPU is choosing...").unwrap();
        let cpu = out.find("CPU: [S] Scissors").unwrap();
        let round = out.find("Round 1: You win this round!").unwrap();
        assert!(you < choosing && choosing < cpu && cpu < round);
        assert!(out.contains("You: 1    CPU: 0"));
    }

    #[test]
    fn test_invalid_command_reports_error() {
        let mut session = scripted(3, vec![Move::Rock]);
        let (_, _, err) = run(&mut session, "lizard\n");
        assert!(err.contains("Error: Unrecognized command 'lizard'"));
    }

    #[test]
    fn test_quit_declined_keeps_playing() {
        let mut session = scripted(3, vec![Move::Rock]);
        let (stats, out, _) = run(&mut session, "q\nn\nrock\nq\ny\n");
        assert_eq!(stats.rounds, 1);
        assert!(out.contains("Round 1: It's a tie."));
    }

    #[test]
    fn test_confirm_repeats_until_answered() {
        let mut out = Vec::new();
        let mut stdin = Cursor::new("maybe\nyes\n");
        assert!(confirm("Sure? ", false, &mut stdin, &mut out).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Sure? ").count(), 2);
    }

    #[test]
    fn test_invalid_best_of_asks_again_until_valid() {
        let mut session = scripted(3, vec![Move::Rock]);
        let (_, out, err) = run(&mut session, "best 4\n6\nseven\n5\n");
        assert_eq!(
            out.matches("Enter an odd number of rounds").count(),
            3,
            "one prompt after each rejected answer"
        );
        assert_eq!(err.matches("Error: ").count(), 3);
        assert_eq!(session.state().best_of(), 5);
        assert!(out.contains("Best of: 5"));
    }

    #[test]
    fn test_blank_answer_after_rejection_keeps_match() {
        let mut session = scripted(3, vec![Move::Scissors]);
        let (_, out, _) = run(&mut session, "rock\nbest 2\n\n");
        assert!(out.contains("Best-of unchanged."));
        assert_eq!(session.state().best_of(), 3);
        assert_eq!(session.state().score_user(), 1);
    }

    #[test]
    fn test_play_command_rejects_even_best_of_before_reading() {
        let opts = PlayOptions {
            best_of: 4,
            animation: false,
            ..PlayOptions::default()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new("rock\n");
        let result = handle_play_command(opts, &mut out, &mut err, &mut stdin);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
        assert_eq!(stdin.position(), 0);
    }

    #[test]
    fn test_play_command_prints_seed() {
        let opts = PlayOptions {
            seed: Some(99),
            animation: false,
            ..PlayOptions::default()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new("");
        handle_play_command(opts, &mut out, &mut err, &mut stdin).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("play: best_of=3 seed=99\n"));
    }
}
