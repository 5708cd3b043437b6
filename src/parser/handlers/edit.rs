//! Changes to existing entries: `edit`, `delete` and `reduce`
use super::{category, position, positive_amount, subcommand};
use crate::commands::Command;
use crate::models::{Books, ExpenseCategory, SavingCategory};
use crate::parser::extract::{optional, required, DELETE, EDIT, REDUCE};
use crate::ParseError;

/// `edit expense i/INDEX [c/CATEGORY] [a/AMOUNT] [d/DESCRIPTION]`, at least one change
pub(crate) fn edit_expense(input: &str, books: &Books) -> Result<Command, ParseError> {
    let index_str = required(input, "i/", EDIT, "index")?;
    let category_str = optional(input, "c/", EDIT, "category")?;
    let amount_str = optional(input, "a/", EDIT, "amount")?;
    let description = optional(input, "d/", EDIT, "description")?;
    if category_str.is_none() && amount_str.is_none() && description.is_none() {
        return Err(ParseError::MissingField("new category, amount or description"));
    }

    Ok(Command::EditExpense {
        index: position(index_str, "index", books.expenses.len(), "expenses")?,
        category: category_str.map(category::<ExpenseCategory>).transpose()?,
        amount: amount_str
            .map(|a| positive_amount(a, "amount"))
            .transpose()?,
        description: description.map(|d| d.to_string()),
    })
}

/// `edit savings i/INDEX [c/CATEGORY] [a/AMOUNT]`, at least one change
pub(crate) fn edit_saving(input: &str, books: &Books) -> Result<Command, ParseError> {
    let index_str = required(input, "i/", EDIT, "index")?;
    let category_str = optional(input, "c/", EDIT, "category")?;
    let amount_str = optional(input, "a/", EDIT, "amount")?;
    if category_str.is_none() && amount_str.is_none() {
        return Err(ParseError::MissingField("new category or amount"));
    }

    Ok(Command::EditSaving {
        index: position(index_str, "index", books.savings.len(), "savings")?,
        category: category_str.map(category::<SavingCategory>).transpose()?,
        amount: amount_str
            .map(|a| positive_amount(a, "amount"))
            .transpose()?,
    })
}

/// `delete expense i/INDEX`
pub(crate) fn delete_expense(input: &str, books: &Books) -> Result<Command, ParseError> {
    subcommand(input, "delete", "expense")?;
    let index_str = required(input, "i/", DELETE, "index")?;
    Ok(Command::DeleteExpense {
        index: position(index_str, "index", books.expenses.len(), "expenses")?,
    })
}

/// `reduce savings i/INDEX a/AMOUNT`
pub(crate) fn reduce_saving(input: &str, books: &Books) -> Result<Command, ParseError> {
    subcommand(input, "reduce", "savings")?;
    let index_str = required(input, "i/", REDUCE, "index")?;
    let amount_str = required(input, "a/", REDUCE, "amount")?;
    Ok(Command::ReduceSaving {
        index: position(index_str, "index", books.savings.len(), "savings")?,
        amount: positive_amount(amount_str, "amount")?,
    })
}
