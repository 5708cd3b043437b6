//! One handler per command family
//!
//! Every handler takes the whole trimmed line, extracts and validates its fields, and only
//! then builds the command. Shared checks live here.
use std::str::FromStr;

use crate::models::{Amount, Category};
use crate::ParseError;

pub(crate) mod add;
pub(crate) mod budget;
pub(crate) mod currency;
pub(crate) mod edit;
pub(crate) mod find;
pub(crate) mod list;
pub(crate) mod menu;
pub(crate) mod recurring;
pub(crate) mod split;

/// Checks the word after a one-word marker such as `delete`, which names the collection
pub(crate) fn subcommand(
    input: &str,
    family: &'static str,
    expected: &str,
) -> Result<(), ParseError> {
    match input.split_whitespace().nth(1) {
        Some(word) if word.eq_ignore_ascii_case(expected) => Ok(()),
        Some(word) => Err(ParseError::UnknownSubcommand {
            family,
            value: word.to_string(),
        }),
        None => Err(ParseError::MissingField("command type")),
    }
}

pub(crate) fn category<C: Category>(value: &str) -> Result<C, ParseError> {
    C::lookup(value).ok_or_else(|| ParseError::UnknownCategory {
        value: value.to_string(),
        valid: C::names(),
    })
}

pub(crate) fn amount(value: &str, field: &'static str) -> Result<Amount, ParseError> {
    Amount::from_str(value).map_err(|_| ParseError::MalformedNumber {
        field,
        value: value.to_string(),
    })
}

/// An amount strictly greater than zero
pub(crate) fn positive_amount(value: &str, field: &'static str) -> Result<Amount, ParseError> {
    let parsed = amount(value, field)?;
    if parsed.is_positive() {
        Ok(parsed)
    } else {
        Err(ParseError::OutOfRange {
            field,
            value: value.to_string(),
            constraint: "must be greater than zero".to_string(),
        })
    }
}

pub(crate) fn positive_integer(value: &str, field: &'static str) -> Result<u32, ParseError> {
    let parsed = value
        .parse::<i64>()
        .map_err(|_| ParseError::MalformedNumber {
            field,
            value: value.to_string(),
        })?;
    if parsed <= 0 || parsed > u32::MAX as i64 {
        return Err(ParseError::OutOfRange {
            field,
            value: value.to_string(),
            constraint: "must be a whole number greater than zero".to_string(),
        });
    }
    Ok(parsed as u32)
}

/// A 1-based position into a collection holding `len` elements called `noun`
pub(crate) fn position(
    value: &str,
    field: &'static str,
    len: usize,
    noun: &str,
) -> Result<usize, ParseError> {
    let parsed = value
        .parse::<i64>()
        .map_err(|_| ParseError::MalformedNumber {
            field,
            value: value.to_string(),
        })?;
    if parsed < 1 || parsed as u64 > len as u64 {
        let constraint = match len {
            0 => format!("there are no {}", noun),
            1 => format!("the only valid {} is 1", field),
            n => format!("must be between 1 and {}", n),
        };
        return Err(ParseError::OutOfRange {
            field,
            value: value.to_string(),
            constraint,
        });
    }
    Ok(parsed as usize)
}
