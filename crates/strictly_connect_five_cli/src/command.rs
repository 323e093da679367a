//! Parsing of interactive commands and coordinate arguments.

use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// A command typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Place the current player's mark at a coordinate.
    Place(Vec<usize>),
    /// Select a history entry.
    Jump(usize),
    /// List the history entries.
    History,
    /// Show the current board.
    Board,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
}

/// Error parsing a typed command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Empty command")]
    Empty,

    /// First word is not a known command.
    #[display("Unknown command '{command}'")]
    Unknown {
        /// The unrecognised word.
        command: String,
    },

    /// A number was expected but something else was found.
    #[display("'{value}' is not a non-negative number")]
    InvalidNumber {
        /// The offending text.
        value: String,
    },

    /// The command got the wrong number of arguments.
    #[display("'{command}' expects {expected}")]
    BadArguments {
        /// Command name.
        command: &'static str,
        /// Human-readable argument shape.
        expected: &'static str,
    },
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  place <coords>   place your mark (row col, or layer row col; commas allowed)
  jump <k>         go to history entry k (0 is the game start)
  history          list history entries
  board            show the current board
  help             show this message
  quit             leave the game";

/// Splits on whitespace and commas, dropping empty pieces.
fn words(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty())
}

fn parse_number(word: &str) -> Result<usize, CommandError> {
    word.parse().map_err(|_| CommandError::InvalidNumber {
        value: word.to_string(),
    })
}

/// Parses a coordinate argument such as `2,3` or `1,2,3`.
#[instrument]
pub fn parse_coords(input: &str) -> Result<Vec<usize>, CommandError> {
    let coords = words(input).map(parse_number).collect::<Result<Vec<_>, _>>()?;
    if coords.is_empty() {
        return Err(CommandError::Empty);
    }
    Ok(coords)
}

impl FromStr for ReplCommand {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = words(input);
        let name = parts.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = parts.collect();

        let no_args = |command: ReplCommand, label: &'static str| {
            if args.is_empty() {
                Ok(command)
            } else {
                Err(CommandError::BadArguments {
                    command: label,
                    expected: "no arguments",
                })
            }
        };

        match name.to_lowercase().as_str() {
            "place" | "p" => {
                if args.is_empty() {
                    return Err(CommandError::BadArguments {
                        command: "place",
                        expected: "coordinates",
                    });
                }
                let coords = args
                    .iter()
                    .map(|word| parse_number(word))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ReplCommand::Place(coords))
            }
            "jump" | "j" => match args.as_slice() {
                [index] => Ok(ReplCommand::Jump(parse_number(index)?)),
                _ => Err(CommandError::BadArguments {
                    command: "jump",
                    expected: "one history index",
                }),
            },
            "history" | "h" => no_args(ReplCommand::History, "history"),
            "board" | "b" => no_args(ReplCommand::Board, "board"),
            "help" | "?" => no_args(ReplCommand::Help, "help"),
            "quit" | "q" | "exit" => no_args(ReplCommand::Quit, "quit"),
            other => Err(CommandError::Unknown {
                command: other.to_string(),
            }),
        }
    }
}
