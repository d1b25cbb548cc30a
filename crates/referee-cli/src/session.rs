//! Line-oriented command session.
//!
//! Each input line is one command. Clicks go through the same selection
//! state machine a graphical front end would drive.

use referee_core::{Board, Color, Square};
use referee_engine::{Activation, Game, GameError, SaveError, SavedGame};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Errors from parsing or running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0} (try 'help')")]
    Unknown(String),

    #[error("'{command}' takes {expected} argument(s)")]
    Arity {
        command: &'static str,
        expected: usize,
    },

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click(Square),
    Move(Square, Square),
    Undo,
    Board,
    Moves(Square),
    History,
    Save(PathBuf),
    Load(PathBuf),
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  click <sq>        select a piece, or move the selected piece to <sq>
  move <from> <to>  move directly
  undo              take back the last move
  board             print the board
  moves <sq>        list destinations for the piece on <sq>
  history           list applied moves
  save <path>       write the game as JSON
  load <path>       read a game written by 'save'
  reset             return to the starting board
  quit              leave";

fn parse_square(text: &str) -> Result<Square, CommandError> {
    Square::from_algebraic(text).ok_or_else(|| CommandError::InvalidSquare(text.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let expect = |command: &'static str, expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(CommandError::Arity { command, expected })
            }
        };

        match name {
            "click" | "c" => {
                expect("click", 1)?;
                Ok(Command::Click(parse_square(args[0])?))
            }
            "move" | "m" => {
                expect("move", 2)?;
                Ok(Command::Move(parse_square(args[0])?, parse_square(args[1])?))
            }
            "undo" | "u" => {
                expect("undo", 0)?;
                Ok(Command::Undo)
            }
            "board" | "b" => {
                expect("board", 0)?;
                Ok(Command::Board)
            }
            "moves" => {
                expect("moves", 1)?;
                Ok(Command::Moves(parse_square(args[0])?))
            }
            "history" => {
                expect("history", 0)?;
                Ok(Command::History)
            }
            "save" => {
                expect("save", 1)?;
                Ok(Command::Save(PathBuf::from(args[0])))
            }
            "load" => {
                expect("load", 1)?;
                Ok(Command::Load(PathBuf::from(args[0])))
            }
            "reset" => {
                expect("reset", 0)?;
                Ok(Command::Reset)
            }
            "help" | "?" => {
                expect("help", 0)?;
                Ok(Command::Help)
            }
            "quit" | "exit" | "q" => {
                expect("quit", 0)?;
                Ok(Command::Quit)
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Renders the board as text, optionally with rank and file labels.
///
/// The selected square, if any, is bracketed.
pub fn render_board(
    board: &Board,
    turn: Color,
    selection: Option<Square>,
    coordinates: bool,
) -> String {
    let mut out = String::new();
    for (row, squares) in board.rows().iter().enumerate() {
        if coordinates {
            let _ = write!(out, "{} ", 8 - row);
        }
        for (col, piece) in squares.iter().enumerate() {
            let c = piece.map_or('.', |p| p.to_char());
            let here = Square::new(row as u8, col as u8);
            if selection == Some(here) {
                let _ = write!(out, "[{}]", c);
            } else {
                let _ = write!(out, " {} ", c);
            }
        }
        out.push('\n');
    }
    if coordinates {
        out.push_str("   a  b  c  d  e  f  g  h\n");
    }
    let _ = write!(out, "{} to move", turn);
    out
}

/// An interactive game plus display settings.
pub struct Session {
    game: Game,
    coordinates: bool,
}

impl Session {
    pub fn new(game: Game, coordinates: bool) -> Self {
        Session { game, coordinates }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Renders the current board.
    pub fn board_text(&self) -> String {
        render_board(
            self.game.board(),
            self.game.turn(),
            self.game.selection(),
            self.coordinates,
        )
    }

    /// Runs one command and returns the text to show.
    ///
    /// `Quit` is left to the caller and returns an empty reply.
    pub fn execute(&mut self, command: Command) -> Result<String, CommandError> {
        match command {
            Command::Click(square) => Ok(match self.game.on_square_activated(square) {
                Activation::Selected(sq) => format!("selected {}", sq),
                Activation::Ignored => format!("nothing to select on {}", square),
                Activation::Moved(record) => format!("{}\n{}", record, self.board_text()),
                Activation::Rejected => "cannot move there; selection cleared".to_string(),
            }),
            Command::Move(from, to) => {
                let record = self.game.make_move(from, to)?;
                Ok(format!("{}\n{}", record, self.board_text()))
            }
            Command::Undo => Ok(match self.game.undo() {
                Some(record) => format!("undid {}\n{}", record, self.board_text()),
                None => "nothing to undo".to_string(),
            }),
            Command::Board => Ok(self.board_text()),
            Command::Moves(square) => {
                let targets: Vec<String> = self
                    .game
                    .legal_destinations(square)
                    .iter()
                    .map(|sq| sq.to_string())
                    .collect();
                if targets.is_empty() {
                    Ok(format!("no moves from {}", square))
                } else {
                    Ok(targets.join(" "))
                }
            }
            Command::History => {
                let lines: Vec<String> = self
                    .game
                    .history()
                    .iter()
                    .enumerate()
                    .map(|(i, record)| format!("{:>3}. {}", i + 1, record))
                    .collect();
                if lines.is_empty() {
                    Ok("no moves yet".to_string())
                } else {
                    Ok(lines.join("\n"))
                }
            }
            Command::Save(path) => {
                let json = self.game.to_saved().to_json_pretty()?;
                std::fs::write(&path, json).map_err(|source| CommandError::Io {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), plies = self.game.ply_count(), "saved game");
                Ok(format!("saved to {}", path.display()))
            }
            Command::Load(path) => {
                self.game = load_game(&path)?;
                info!(path = %path.display(), plies = self.game.ply_count(), "loaded game");
                Ok(format!("loaded {}\n{}", path.display(), self.board_text()))
            }
            Command::Reset => {
                self.game.reset();
                Ok(self.board_text())
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }
}

/// Reads and validates a saved game from disk.
pub fn load_game(path: &std::path::Path) -> Result<Game, CommandError> {
    let json = std::fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let saved = SavedGame::from_json(&json)?;
    Ok(Game::from_saved(saved)?)
}
