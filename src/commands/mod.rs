//! Commands: what a parsed line asks for, and how it is carried out on the books
use std::rc::Rc;

use crate::models::{
    Amount, Books, Currency, CurrencyConverter, ExpenseCategory, SavingCategory,
};
use crate::{ui, Error};

pub mod budget;
pub mod currency;
pub mod expenses;
pub mod recurring;
pub mod savings;
pub mod splits;

/// A validated command, ready to be executed
///
/// Indices are 1-based, as typed by the user, and were checked against the books when the line
/// was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Menu {
        index: usize,
    },
    AddExpense {
        category: ExpenseCategory,
        amount: Amount,
        description: String,
    },
    AddSaving {
        category: SavingCategory,
        amount: Amount,
    },
    EditExpense {
        index: usize,
        category: Option<ExpenseCategory>,
        amount: Option<Amount>,
        description: Option<String>,
    },
    EditSaving {
        index: usize,
        category: Option<SavingCategory>,
        amount: Option<Amount>,
    },
    DeleteExpense {
        index: usize,
    },
    ReduceSaving {
        index: usize,
        amount: Amount,
    },
    List(ListKind),
    FindExpenses {
        description: Option<String>,
        min: Option<Amount>,
        max: Option<Amount>,
    },
    ChangeCurrency {
        currency: Rc<Currency>,
    },
    Recurring(RecurringCommand),
    SplitExpense {
        amount: Amount,
        number_of_people: u32,
        description: String,
    },
    SetBudget {
        category: ExpenseCategory,
        budget: Amount,
    },
    PrintBudgets,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Everything,
    Expenses(Option<ExpenseCategory>),
    Savings(Option<SavingCategory>),
    SplitExpenses,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurringCommand {
    NewList {
        name: String,
    },
    ViewLists,
    RemoveList {
        list: usize,
    },
    NewExpense {
        list: usize,
        category: ExpenseCategory,
        amount: Amount,
        description: String,
    },
    AddToExpenses {
        list: usize,
    },
    ViewExpenses {
        list: usize,
    },
}

/// Whether the read loop should go on after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Exit,
}

impl Command {
    /// Carries out the command
    ///
    /// An error leaves the books as they were.
    pub fn execute(
        &self,
        books: &mut Books,
        converter: &CurrencyConverter,
    ) -> Result<Status, Error> {
        match self {
            Command::Menu { index } => ui::show_menu(*index),
            Command::AddExpense {
                category,
                amount,
                description,
            } => expenses::add(&mut books.expenses, *category, amount, description),
            Command::EditExpense {
                index,
                category,
                amount,
                description,
            } => expenses::edit(
                &mut books.expenses,
                *index,
                *category,
                amount.as_ref(),
                description.as_deref(),
            )?,
            Command::DeleteExpense { index } => expenses::delete(&mut books.expenses, *index)?,
            Command::FindExpenses {
                description,
                min,
                max,
            } => expenses::find(
                &books.expenses,
                description.as_deref(),
                min.as_ref(),
                max.as_ref(),
            ),
            Command::AddSaving { category, amount } => {
                savings::add(&mut books.savings, *category, amount)
            }
            Command::EditSaving {
                index,
                category,
                amount,
            } => savings::edit(&mut books.savings, *index, *category, amount.as_ref())?,
            Command::ReduceSaving { index, amount } => {
                savings::reduce(&mut books.savings, *index, amount)?
            }
            Command::List(kind) => list(books, *kind),
            Command::SplitExpense {
                amount,
                number_of_people,
                description,
            } => splits::add(&mut books.splits, amount, *number_of_people, description),
            Command::Recurring(command) => {
                recurring::execute(&mut books.recurring, &mut books.expenses, command)?
            }
            Command::SetBudget { category, budget } => {
                budget::set(&mut books.budgets, *category, budget)
            }
            Command::PrintBudgets => budget::print(&books.budgets, &books.expenses),
            Command::ChangeCurrency { currency } => {
                currency::change(books, currency.clone(), converter)?
            }
            Command::Exit => {
                ui::goodbye();
                return Ok(Status::Exit);
            }
        }
        Ok(Status::Continue)
    }
}

fn list(books: &Books, kind: ListKind) {
    match kind {
        ListKind::Everything => {
            expenses::list(&books.expenses, None);
            savings::list(&books.savings, &books.expenses, None);
            if !books.splits.is_empty() {
                splits::list(&books.splits);
            }
        }
        ListKind::Expenses(category) => expenses::list(&books.expenses, category),
        ListKind::Savings(category) => savings::list(&books.savings, &books.expenses, category),
        ListKind::SplitExpenses => splits::list(&books.splits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Books {
        Books::new(Rc::new(Currency::new("SGD", "Singapore Dollar")))
    }

    #[test]
    fn bye_stops_the_loop() {
        let mut books = books();
        let converter = CurrencyConverter::new();
        assert_eq!(
            Command::Exit.execute(&mut books, &converter).unwrap(),
            Status::Exit
        );
        assert_eq!(
            Command::Menu { index: 3 }
                .execute(&mut books, &converter)
                .unwrap(),
            Status::Continue
        );
    }

    #[test]
    fn add_then_delete() {
        let mut books = books();
        let converter = CurrencyConverter::new();
        Command::AddExpense {
            category: ExpenseCategory::Transport,
            amount: Amount::from_integer(3),
            description: "Bus".to_string(),
        }
        .execute(&mut books, &converter)
        .unwrap();
        assert_eq!(books.expenses.len(), 1);
        Command::DeleteExpense { index: 1 }
            .execute(&mut books, &converter)
            .unwrap();
        assert!(books.expenses.is_empty());
    }
}
