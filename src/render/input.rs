//! Player input: one command per line.
//!
//! - `<n>`: place the question at insertion point `n`
//! - `flip <n>`: turn table card `n` over
//! - `link <n>`: show the lookup link for table card `n`
//! - `help`, `quit`

use std::str::FromStr;

/// A parsed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert the question at this index.
    Place(usize),
    /// Toggle the back side of the table card at this index.
    Flip(usize),
    /// Show the lookup link of the table card at this index.
    Link(usize),
    Help,
    Quit,
}

/// Why an input line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    /// Positions are never negative.
    #[error("position {0} is out of range")]
    NegativePosition(i64),

    #[error("{0} needs a card number")]
    MissingIndex(&'static str),

    #[error("unknown command: {0:?} (try `help`)")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(InputError::Empty);
        };

        match head.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "h" | "help" | "?" => Ok(Command::Help),
            "flip" | "f" => parse_index(words.next(), "flip").map(Command::Flip),
            "link" | "l" => parse_index(words.next(), "link").map(Command::Link),
            _ => match head.parse::<i64>() {
                Ok(n) if n < 0 => Err(InputError::NegativePosition(n)),
                Ok(n) => usize::try_from(n)
                    .map(Command::Place)
                    .map_err(|_| InputError::Unknown(line.trim().to_string())),
                Err(_) => Err(InputError::Unknown(line.trim().to_string())),
            },
        }
    }
}

fn parse_index(word: Option<&str>, command: &'static str) -> Result<usize, InputError> {
    let word = word.ok_or(InputError::MissingIndex(command))?;
    word.parse()
        .map_err(|_| InputError::Unknown(format!("{command} {word}")))
}

/// Interpret a replay answer. Anything but yes means no.
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
