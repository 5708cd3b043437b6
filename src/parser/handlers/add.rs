use super::{category, positive_amount};
use crate::commands::Command;
use crate::models::{ExpenseCategory, SavingCategory};
use crate::parser::extract::{required, ADD};
use crate::ParseError;

/// `add expense c/CATEGORY a/AMOUNT d/DESCRIPTION`
pub(crate) fn add_expense(input: &str) -> Result<Command, ParseError> {
    let category_str = required(input, "c/", ADD, "category")?;
    let amount_str = required(input, "a/", ADD, "amount")?;
    let description = required(input, "d/", ADD, "description")?;

    Ok(Command::AddExpense {
        category: category::<ExpenseCategory>(category_str)?,
        amount: positive_amount(amount_str, "amount")?,
        description: description.to_string(),
    })
}

/// `add savings c/CATEGORY a/AMOUNT`
pub(crate) fn add_saving(input: &str) -> Result<Command, ParseError> {
    let category_str = required(input, "c/", ADD, "category")?;
    let amount_str = required(input, "a/", ADD, "amount")?;

    Ok(Command::AddSaving {
        category: category::<SavingCategory>(category_str)?,
        amount: positive_amount(amount_str, "amount")?,
    })
}
