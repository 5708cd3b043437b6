//! The books: everything the interpreter keeps track of
use std::collections::HashSet;
use std::rc::Rc;

pub use budget::Budgets;
pub use category::{Category, ExpenseCategory, SavingCategory};
pub use currency::{currencies, Currency, CurrencyConverter};
pub use expense::{Expense, ExpenseList};
pub use money::{Amount, InvalidAmount};
pub use recurring::{RecurringExpenseList, RecurringExpensesList};
pub use saving::{Saving, SavingList};
pub use split::{SplitExpense, SplitExpenseList};

mod budget;
mod category;
mod currency;
mod expense;
mod money;
mod recurring;
mod saving;
mod split;

/// The collections commands act upon
///
/// The parser only ever gets a shared reference to validate positions against; commands get
/// the mutable reference when they are executed.
#[derive(Debug, Clone)]
pub struct Books {
    pub expenses: ExpenseList,
    pub savings: SavingList,
    pub splits: SplitExpenseList,
    pub recurring: RecurringExpensesList,
    pub budgets: Budgets,
    currency: Rc<Currency>,
}

impl Books {
    pub fn new(currency: Rc<Currency>) -> Self {
        Books {
            expenses: ExpenseList::new(),
            savings: SavingList::new(),
            splits: SplitExpenseList::new(),
            recurring: RecurringExpensesList::new(),
            budgets: Budgets::new(),
            currency,
        }
    }

    /// The currency every stored amount is expressed in
    pub fn get_currency(&self) -> &Rc<Currency> {
        &self.currency
    }
    pub(crate) fn set_currency(&mut self, currency: Rc<Currency>) {
        self.currency = currency;
    }

    /// Every stored amount, for operations that rewrite them all at once
    pub(crate) fn amounts_mut(&mut self) -> Vec<&mut Amount> {
        let mut amounts: Vec<&mut Amount> = vec![];
        for expense in self.expenses.iter_mut() {
            amounts.push(expense.amount_mut());
        }
        for saving in self.savings.iter_mut() {
            amounts.push(saving.amount_mut());
        }
        for split in self.splits.iter_mut() {
            amounts.push(split.amount_mut());
        }
        for list in self.recurring.iter_mut() {
            for expense in list.get_expenses_mut().iter_mut() {
                amounts.push(expense.amount_mut());
            }
        }
        for (_, budget) in self.budgets.iter_mut() {
            amounts.push(budget);
        }
        amounts
    }
}

pub trait HasName {
    fn get_name(&self) -> &str;
}

pub trait HasAliases {
    fn get_aliases(&self) -> &HashSet<String>;
}
