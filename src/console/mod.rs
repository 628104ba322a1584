//! Line-oriented two-player console.
//!
//! Reads one command per line, drives a [`Game`] and writes plain text
//! replies. Errors are written as `error: ...`; a castle refused because its
//! path is attacked is written as `notice: ...`.

use std::fmt;
use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Coordinate, CoordinateError, Game, MoveError, MoveRecord};

pub mod command;
pub mod options;
pub mod print;

pub use command::{parse_console_command, ConsoleCommand};
pub use options::ConsoleOptions;

/// Error type for console commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// A square argument did not parse
    Coordinate(CoordinateError),
    /// The engine refused the move
    Move(MoveError),
    /// Nothing of the side to move stands on the square
    NotSelectable { at: Coordinate },
    /// A required argument is missing
    MissingArgument(&'static str),
    UnknownCommand(String),
    UnknownOption(String),
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Coordinate(e) => write!(f, "{e}"),
            ConsoleError::Move(e) => write!(f, "{e}"),
            ConsoleError::NotSelectable { at } => {
                write!(f, "No piece of the side to move on {at}")
            }
            ConsoleError::MissingArgument(what) => write!(f, "Missing argument: {what}"),
            ConsoleError::UnknownCommand(line) => {
                write!(f, "Unknown command '{line}' (try 'help')")
            }
            ConsoleError::UnknownOption(name) => write!(f, "Unknown option '{name}'"),
            ConsoleError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option {name}")
            }
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<CoordinateError> for ConsoleError {
    fn from(e: CoordinateError) -> Self {
        ConsoleError::Coordinate(e)
    }
}

impl From<MoveError> for ConsoleError {
    fn from(e: MoveError) -> Self {
        ConsoleError::Move(e)
    }
}

fn square(arg: Option<&str>) -> Result<Coordinate, ConsoleError> {
    let arg = arg.ok_or(ConsoleError::MissingArgument("square"))?;
    Ok(arg.parse()?)
}

/// A game plus the display settings of one console session.
pub struct Console {
    game: Game,
    options: ConsoleOptions,
    rng: StdRng,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Console {
            game: Game::new(),
            options: ConsoleOptions::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// A console whose `random` command is reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Console {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    /// Continue from an existing position instead of a new game.
    #[must_use]
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }

    /// Run one command, returning the reply lines. `Ok(None)` means quit.
    pub fn execute(&mut self, cmd: ConsoleCommand) -> Result<Option<Vec<String>>, ConsoleError> {
        let lines = match cmd {
            ConsoleCommand::NewGame => {
                self.game.new_game();
                vec!["new game, White to move".to_string()]
            }
            ConsoleCommand::Board => self.board_lines(),
            ConsoleCommand::Select(arg) => {
                let at = square(arg.as_deref())?;
                if !self.game.select(at) {
                    return Err(ConsoleError::NotSelectable { at });
                }
                self.selection_lines()
            }
            ConsoleCommand::Move(arg) => {
                let to = square(arg.as_deref())?;
                let record = self.game.try_move(to)?;
                self.moved_lines(&record)
            }
            ConsoleCommand::Play(from, to) => {
                let from = square(Some(&from))?;
                let to = square(Some(&to))?;
                if !self.game.select(from) {
                    return Err(ConsoleError::NotSelectable { at: from });
                }
                let record = self.game.try_move(to)?;
                self.moved_lines(&record)
            }
            ConsoleCommand::Guide => match self.game.selected_piece() {
                Some(piece) => vec![
                    format!("{} on {}", piece.name(), piece.position),
                    print::render_guide(self.game.move_guide()),
                ],
                None => return Err(MoveError::NoSelection.into()),
            },
            ConsoleCommand::Log => {
                let lines = print::render_log(self.game.move_log());
                if lines.is_empty() {
                    vec!["no moves yet".to_string()]
                } else {
                    lines
                }
            }
            ConsoleCommand::Captured => {
                print::render_captured(&self.game.snapshot(), &self.options)
            }
            ConsoleCommand::Turn => vec![format!("{} to move", self.game.turn())],
            ConsoleCommand::Random => self.random_move()?,
            ConsoleCommand::Set(None, _) => self.options.describe(),
            ConsoleCommand::Set(Some(name), value) => {
                let value = value.ok_or(ConsoleError::MissingArgument("value"))?;
                self.options.apply_set(&name, &value)?;
                vec![format!("{name} = {value}")]
            }
            ConsoleCommand::Help => print::HELP.iter().map(|s| (*s).to_string()).collect(),
            ConsoleCommand::Quit => return Ok(None),
            ConsoleCommand::Unknown(line) => return Err(ConsoleError::UnknownCommand(line)),
        };
        Ok(Some(lines))
    }

    fn board_lines(&self) -> Vec<String> {
        let mut lines = print::render_board(&self.game.snapshot(), &self.options);
        lines.push(format!("{} to move", self.game.turn()));
        lines
    }

    fn selection_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if let Some(piece) = self.game.selected_piece() {
            lines.push(format!("selected {} on {}", piece.name(), piece.position));
        }
        if self.options.guide {
            lines.push(print::render_guide(self.game.move_guide()));
        }
        lines
    }

    fn moved_lines(&self, record: &MoveRecord) -> Vec<String> {
        let mut line = format!("played {}", record.notation);
        if let Some(taken) = self.game.captured_piece(record) {
            line.push_str(&format!(", captured {}", taken.name()));
        }
        vec![line, format!("{} to move", self.game.turn())]
    }

    fn random_move(&mut self) -> Result<Vec<String>, ConsoleError> {
        let moves = self.game.legal_moves();
        let Some(&(id, to)) = moves.choose(&mut self.rng) else {
            return Ok(vec![format!("{} has no moves", self.game.turn())]);
        };
        if !self.game.select_piece(id) {
            let at = self.game.board().get(id).map_or(to, |p| p.position);
            return Err(ConsoleError::NotSelectable { at });
        }
        let record = self.game.try_move(to)?;
        Ok(self.moved_lines(&record))
    }
}

/// Drive a console from `input` until `quit` or end of input.
pub fn run_console<R: BufRead, W: Write>(
    console: &mut Console,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_console_command(&line) else {
            continue;
        };

        match console.execute(cmd) {
            Ok(Some(lines)) => {
                for line in lines {
                    writeln!(output, "{line}")?;
                }
            }
            Ok(None) => break,
            Err(ConsoleError::Move(e @ MoveError::CastlingPathAttacked { .. })) => {
                writeln!(output, "notice: {e}")?;
            }
            Err(e) => writeln!(output, "error: {e}")?,
        }

        output.flush()?;
    }
    Ok(())
}

/// Run the console over stdin and stdout.
pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = Console::new();
    for line in console.board_lines() {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    run_console(&mut console, stdin.lock(), &mut stdout)
}
