use colored::{ColoredString, Colorize};
use rustyline::error::ReadlineError;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Errors found while turning a command line into a [`Command`](crate::commands::Command)
///
/// All of them come from user input, so none of them is fatal: the read loop prints them and
/// carries on with the next line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{0} is missing.")]
    MissingField(&'static str),
    #[error("Invalid {field}: {value:?} is not a valid number.")]
    MalformedNumber { field: &'static str, value: String },
    #[error("Invalid {field} {value}: {constraint}.")]
    OutOfRange {
        field: &'static str,
        value: String,
        constraint: String,
    },
    #[error("Invalid category: {value}. Valid categories: {valid}")]
    UnknownCategory { value: String, valid: String },
    #[error("Invalid currency code: {0}")]
    UnknownCurrency(String),
    #[error("Unrecognized command: {0}")]
    UnknownCommand(String),
    #[error("This command type does not exist for \"{family}\": {value}")]
    UnknownSubcommand { family: &'static str, value: String },
    #[error("Invalid command format.")]
    WrongArity,
}

/// A rejected command line: what went wrong and, when the command has one, how it should look
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub error: ParseError,
    pub usage: Option<&'static str>,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error.to_string().red())?;
        if let Some(usage) = self.usage {
            write!(f, "\n{} {}", "Command Format:".yellow(), usage)?;
        }
        Ok(())
    }
}

/// Error for everything that is not a parse error: start-up problems and commands that cannot
/// be carried out on the current books
#[derive(Debug)]
pub struct Error {
    pub message: Vec<ColoredString>,
}

impl Error {
    pub fn new(message: &str) -> Self {
        Error {
            message: vec![message.bold().bright_red()],
        }
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ColoredStrings(&self.message))
    }
}

impl From<ReadlineError> for Error {
    fn from(error: ReadlineError) -> Self {
        Error {
            message: vec!["Could not read input: ".red(), error.to_string().normal()],
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error {
            message: vec!["I/O error: ".red(), error.to_string().normal()],
        }
    }
}

// https://medium.com/apolitical-engineering/how-do-you-impl-display-for-vec-b8dbb21d814f
struct ColoredStrings<'a>(pub &'a Vec<ColoredString>);

impl<'a> fmt::Display for ColoredStrings<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.iter().fold(Ok(()), |result, partial| {
            result.and_then(|_| write!(f, "{}", partial))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ParseError::MissingField("amount"), "amount is missing.")]
    #[case(
        ParseError::MalformedNumber { field: "amount", value: "hello".to_string() },
        "Invalid amount: \"hello\" is not a valid number."
    )]
    #[case(
        ParseError::OutOfRange {
            field: "amount",
            value: "-3".to_string(),
            constraint: "must be greater than zero".to_string(),
        },
        "Invalid amount -3: must be greater than zero."
    )]
    #[case(ParseError::UnknownCurrency("abc".to_string()), "Invalid currency code: abc")]
    #[case(
        ParseError::UnknownSubcommand { family: "rec", value: "dance".to_string() },
        "This command type does not exist for \"rec\": dance"
    )]
    #[case(ParseError::WrongArity, "Invalid command format.")]
    fn parse_error_display(#[case] error: ParseError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn rejection_shows_usage_on_second_line() {
        colored::control::set_override(false);
        let rejection = Rejection {
            error: ParseError::WrongArity,
            usage: Some("change currency <currency_code>"),
        };
        assert_eq!(
            rejection.to_string(),
            "Invalid command format.\nCommand Format: change currency <currency_code>"
        );
        let bare = Rejection {
            error: ParseError::MissingField("category"),
            usage: None,
        };
        assert_eq!(bare.to_string().lines().count(), 1);
    }

    #[test]
    fn error_concatenates_parts() {
        colored::control::set_override(false);
        let error = Error::new("Unknown currency XYZ");
        assert_eq!(format!("{}", error), "Unknown currency XYZ");
    }
}
