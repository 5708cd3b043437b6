use super::category;
use crate::commands::{Command, ListKind};
use crate::models::{ExpenseCategory, SavingCategory};
use crate::ParseError;

/// `list`, `list expenses [CATEGORY]`, `list savings [CATEGORY]` and `list splitted expenses`
///
/// The list family has no prefixed fields: the words after `list` are positional.
pub(crate) fn list(input: &str) -> Result<Command, ParseError> {
    let words: Vec<&str> = input.split_whitespace().collect();
    if words.first() != Some(&"list") {
        return Err(ParseError::UnknownCommand(input.to_string()));
    }
    let is = |word: &str, expected: &str| word.eq_ignore_ascii_case(expected);

    let kind = match words[1..] {
        [] => ListKind::Everything,
        [kind] if is(kind, "expenses") => ListKind::Expenses(None),
        [kind] if is(kind, "savings") => ListKind::Savings(None),
        [first, second] if is(first, "splitted") && is(second, "expenses") => {
            ListKind::SplitExpenses
        }
        [kind, filter] if is(kind, "expenses") => {
            ListKind::Expenses(Some(category::<ExpenseCategory>(filter)?))
        }
        [kind, filter] if is(kind, "savings") => {
            ListKind::Savings(Some(category::<SavingCategory>(filter)?))
        }
        [kind, ..] if ["expenses", "savings", "splitted"].iter().any(|k| is(kind, *k)) => {
            return Err(ParseError::WrongArity)
        }
        [kind, ..] => {
            return Err(ParseError::UnknownSubcommand {
                family: "list",
                value: kind.to_string(),
            })
        }
    };
    Ok(Command::List(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("list", ListKind::Everything)]
    #[case("list expenses", ListKind::Expenses(None))]
    #[case("list Expenses", ListKind::Expenses(None))]
    #[case("list expenses housing", ListKind::Expenses(Some(ExpenseCategory::Housing)))]
    #[case("list savings", ListKind::Savings(None))]
    #[case("list savings salary", ListKind::Savings(Some(SavingCategory::Salary)))]
    #[case("list splitted expenses", ListKind::SplitExpenses)]
    #[case("list   savings    GIFTS", ListKind::Savings(Some(SavingCategory::Gifts)))]
    fn valid(#[case] input: &str, #[case] kind: ListKind) {
        assert_eq!(list(input), Ok(Command::List(kind)));
    }

    #[rstest]
    #[case("list expenses qweqwe")]
    #[case("list savings qweqwe")]
    #[case("list savings housing")]
    fn invalid_category(#[case] input: &str) {
        assert!(matches!(
            list(input),
            Err(ParseError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn malformed() {
        assert_eq!(
            list("list expenses housing now"),
            Err(ParseError::WrongArity)
        );
        assert_eq!(
            list("list budgets"),
            Err(ParseError::UnknownSubcommand {
                family: "list",
                value: "budgets".to_string(),
            })
        );
        assert_eq!(
            list("listing"),
            Err(ParseError::UnknownCommand("listing".to_string()))
        );
    }
}
