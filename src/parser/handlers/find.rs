use super::amount;
use crate::commands::Command;
use crate::parser::extract::{optional, FIND};
use crate::ParseError;

/// `find expenses [d/DESCRIPTION] [morethan/MINAMOUNT] [lessthan/MAXAMOUNT]`
///
/// The parameters can be combined freely, but at least one is needed.
pub(crate) fn find_expenses(input: &str) -> Result<Command, ParseError> {
    if FIND.iter().all(|prefix| !input.contains(prefix)) {
        return Err(ParseError::MissingField(
            "search parameter (d/, morethan/ or lessthan/)",
        ));
    }
    let description = optional(input, "d/", FIND, "description")?;
    let min = optional(input, "morethan/", FIND, "minimum amount")?
        .map(|x| amount(x, "minimum amount"))
        .transpose()?;
    let max = optional(input, "lessthan/", FIND, "maximum amount")?
        .map(|x| amount(x, "maximum amount"))
        .transpose()?;

    if let (Some(min), Some(max)) = (&min, &max) {
        if min > max {
            return Err(ParseError::OutOfRange {
                field: "amount range",
                value: format!("{} to {}", min, max),
                constraint: "maximum amount cannot be smaller than minimum amount".to_string(),
            });
        }
    }

    Ok(Command::FindExpenses {
        description: description.map(|d| d.to_string()),
        min,
        max,
    })
}
