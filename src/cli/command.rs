//! Line commands for the terminal front end.
//!
//! Seats are 1-based on the command line and converted to `PlayerId` here.

use thiserror::Error;

use crate::core::{parse_amount, Action, PlayerId, Step};

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Dispatch an action to the session.
    Act(Action),
    /// Show the history list.
    History,
    /// Show the board, or a JSON snapshot.
    Status { json: bool },
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0:?} (try `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("{0:?} is not a seat number")]
    BadSeat(String),

    #[error("{0:?} is not a whole number")]
    BadAmount(String),
}

pub const HELP: &str = "\
+ <p> | - <p>          +1 / -1 life for seat p
up <p> | down <p>      +/- that seat's custom amount
adjust <p> <n> [label] change life by n
amt <p> <n>            set custom amount
name <p> <text...>     rename (empty text clears the name)
add                    add a player (before the first life change)
reset                  start over
history                list life changes
status [json]          show the board
help | quit";

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "" => return Err(ParseError::Empty),
            "+" => press("+", rest, Step::Plus1)?,
            "-" => press("-", rest, Step::Minus1)?,
            "up" => press("up", rest, Step::CustomUp)?,
            "down" => press("down", rest, Step::CustomDown)?,
            "adjust" => {
                let mut args = rest.split_whitespace();
                let player = seat("adjust", args.next())?;
                let delta = amount("adjust", args.next())?;
                let label = args.collect::<Vec<_>>().join(" ");
                let label = if label.is_empty() {
                    format!("{:+}", delta)
                } else {
                    label
                };
                Command::Act(Action::AdjustLife { player, delta, label })
            }
            "amt" => {
                let mut args = rest.split_whitespace();
                let player = seat("amt", args.next())?;
                let amount = amount("amt", args.next())?;
                Command::Act(Action::SetCustomAmount { player, amount })
            }
            "name" => {
                let (seat_arg, name) = match rest.split_once(char::is_whitespace) {
                    Some((s, name)) => (s, name.trim()),
                    None => (rest, ""),
                };
                let player = seat("name", Some(seat_arg).filter(|s| !s.is_empty()))?;
                Command::Act(Action::Rename {
                    player,
                    name: name.to_string(),
                })
            }
            "add" => Command::Act(Action::AddPlayer),
            "reset" => Command::Act(Action::Reset),
            "history" => Command::History,
            "status" => Command::Status { json: rest == "json" },
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        Ok(command)
    }
}

fn press(command: &'static str, rest: &str, step: Step) -> Result<Command, ParseError> {
    let player = seat(command, rest.split_whitespace().next())?;
    Ok(Command::Act(Action::Press { player, step }))
}

fn seat(command: &'static str, arg: Option<&str>) -> Result<PlayerId, ParseError> {
    let arg = arg.ok_or(ParseError::MissingArgument {
        command,
        what: "a seat number",
    })?;
    arg.parse::<usize>()
        .ok()
        .and_then(PlayerId::from_seat)
        .ok_or_else(|| ParseError::BadSeat(arg.to_string()))
}

fn amount(command: &'static str, arg: Option<&str>) -> Result<i64, ParseError> {
    let arg = arg.ok_or(ParseError::MissingArgument {
        command,
        what: "an amount",
    })?;
    parse_amount(arg).map_err(|_| ParseError::BadAmount(arg.to_string()))
}
