use super::{category, positive_amount};
use crate::commands::Command;
use crate::models::ExpenseCategory;
use crate::parser::extract::{required, BUDGET};
use crate::ParseError;

/// `set budget c/CATEGORY b/BUDGET`
pub(crate) fn set_budget(input: &str) -> Result<Command, ParseError> {
    let category_str = required(input, "c/", BUDGET, "category")?;
    let budget_str = required(input, "b/", BUDGET, "budget")?;

    Ok(Command::SetBudget {
        category: category::<ExpenseCategory>(category_str)?,
        budget: positive_amount(budget_str, "budget")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    #[test]
    fn set() {
        assert_eq!(
            set_budget("set budget c/groceries b/400"),
            Ok(Command::SetBudget {
                category: ExpenseCategory::Groceries,
                budget: Amount::from_integer(400),
            })
        );
        assert_eq!(
            set_budget("set budget b/400 c/ Transport"),
            Ok(Command::SetBudget {
                category: ExpenseCategory::Transport,
                budget: Amount::from_integer(400),
            })
        );
    }

    #[test]
    fn rejected() {
        assert_eq!(
            set_budget("set budget c/Groceries"),
            Err(ParseError::MissingField("budget"))
        );
        assert!(matches!(
            set_budget("set budget c/Salary b/400"),
            Err(ParseError::UnknownCategory { .. })
        ));
        assert!(matches!(
            set_budget("set budget c/Groceries b/lots"),
            Err(ParseError::MalformedNumber { field: "budget", .. })
        ));
    }
}
