use crate::commands::Command;
use crate::models::Currency;
use crate::{List, ParseError};

/// `change currency CODE`, where the code (or a symbol standing for it) is a known currency
pub(crate) fn change_currency(
    input: &str,
    currencies: &List<Currency>,
) -> Result<Command, ParseError> {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        [_, _, code] => match currencies.get(code) {
            Some(currency) => Ok(Command::ChangeCurrency {
                currency: currency.clone(),
            }),
            None => Err(ParseError::UnknownCurrency(code.to_string())),
        },
        _ => Err(ParseError::WrongArity),
    }
}
