use minesweep_core::{Coord, Coord2};
use std::str::FromStr;
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`, try `help`")]
    UnknownCommand(String),
    #[error("`{0}` expects a row and a column")]
    MissingCoords(&'static str),
    #[error("`{0}` is not a valid row or column")]
    InvalidCoord(String),
    #[error("Unexpected input after command: `{0}`")]
    TrailingInput(String),
}

pub(crate) const HELP: &str = "\
Commands:
  r ROW COL    reveal a cell (also: reveal)
  f ROW COL    place or remove a flag (also: flag)
  n            start a new game (also: new)
  h            show this help (also: help, ?)
  q            quit (also: quit)
Any move on a finished board starts a new game first.";

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ParseError::Empty);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(&mut words, "reveal")?),
            "f" | "flag" => Command::Flag(parse_coords(&mut words, "flag")?),
            "n" | "new" => Command::NewGame,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(ParseError::UnknownCommand(name.to_string())),
        };

        let rest: Vec<_> = words.collect();
        if !rest.is_empty() {
            return Err(ParseError::TrailingInput(rest.join(" ")));
        }
        Ok(command)
    }
}

fn parse_coords<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<Coord2, ParseError> {
    let (Some(row), Some(col)) = (words.next(), words.next()) else {
        return Err(ParseError::MissingCoords(command));
    };
    Ok((parse_coord(row)?, parse_coord(col)?))
}

fn parse_coord(word: &str) -> Result<Coord, ParseError> {
    word.parse()
        .map_err(|_| ParseError::InvalidCoord(word.to_string()))
}
