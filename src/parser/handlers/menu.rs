use crate::commands::Command;
use crate::ParseError;

/// `menu [INDEX]`; no index means the whole menu, index 0
pub(crate) fn menu(input: &str) -> Result<Command, ParseError> {
    let rest = input.strip_prefix("menu").unwrap_or(input);
    let argument = rest.trim();
    if argument.is_empty() {
        return Ok(Command::Menu { index: 0 });
    }
    if !rest.starts_with(char::is_whitespace) {
        return Err(ParseError::UnknownCommand(input.to_string()));
    }
    match argument.parse::<usize>() {
        Ok(index) => Ok(Command::Menu { index }),
        Err(_) => Err(ParseError::MalformedNumber {
            field: "menu index",
            value: argument.to_string(),
        }),
    }
}
