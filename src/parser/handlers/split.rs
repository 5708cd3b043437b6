use super::{positive_amount, positive_integer};
use crate::commands::Command;
use crate::parser::extract::{required, SPLIT};
use crate::ParseError;

/// `split expenses a/AMOUNT n/NUMBER d/DESCRIPTION`
pub(crate) fn split_expense(input: &str) -> Result<Command, ParseError> {
    let amount_str = required(input, "a/", SPLIT, "amount")?;
    let people_str = required(input, "n/", SPLIT, "number of people")?;
    let description = required(input, "d/", SPLIT, "description")?;

    Ok(Command::SplitExpense {
        amount: positive_amount(amount_str, "amount")?,
        number_of_people: positive_integer(people_str, "number of people")?,
        description: description.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    #[test]
    fn multi_word_description() {
        assert_eq!(
            split_expense("split expenses a/120 n/4 d/Dinner at the hawker centre"),
            Ok(Command::SplitExpense {
                amount: Amount::from_integer(120),
                number_of_people: 4,
                description: "Dinner at the hawker centre".to_string(),
            })
        );
    }

    #[test]
    fn people_must_be_a_positive_whole_number() {
        assert!(matches!(
            split_expense("split expenses a/120 n/0 d/Dinner"),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            split_expense("split expenses a/120 n/-2 d/Dinner"),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            split_expense("split expenses a/120 n/two d/Dinner"),
            Err(ParseError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn amount_must_be_positive() {
        assert!(matches!(
            split_expense("split expenses a/0 n/2 d/Dinner"),
            Err(ParseError::OutOfRange { field: "amount", .. })
        ));
        assert_eq!(
            split_expense("split expenses n/2 d/Dinner"),
            Err(ParseError::MissingField("amount"))
        );
    }
}
