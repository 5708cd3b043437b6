use std::fmt;
use std::fmt::{Display, Formatter};
use std::slice::Iter;

use chrono::{Local, NaiveDate};

use crate::models::{Amount, ExpenseCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    date_added: NaiveDate,
    category: ExpenseCategory,
    amount: Amount,
    description: String,
}

impl Expense {
    /// A new expense, dated today
    pub fn new(category: ExpenseCategory, amount: Amount, description: String) -> Self {
        Expense::with_date(Local::now().date_naive(), category, amount, description)
    }
    pub fn with_date(
        date_added: NaiveDate,
        category: ExpenseCategory,
        amount: Amount,
        description: String,
    ) -> Self {
        Expense {
            date_added,
            category,
            amount,
            description,
        }
    }
    pub fn get_date_added(&self) -> NaiveDate {
        self.date_added
    }
    pub fn get_category(&self) -> ExpenseCategory {
        self.category
    }
    pub fn get_amount(&self) -> &Amount {
        &self.amount
    }
    pub fn get_description(&self) -> &str {
        self.description.as_str()
    }
    pub fn set_category(&mut self, category: ExpenseCategory) {
        self.category = category;
    }
    pub fn set_amount(&mut self, amount: Amount) {
        self.amount = amount;
    }
    pub(crate) fn amount_mut(&mut self) -> &mut Amount {
        &mut self.amount
    }
    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }
}

impl Display for Expense {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {} Category: {} Amount: {} Description: {}",
            self.date_added, self.category, self.amount, self.description
        )
    }
}

/// Expenses, addressed by their 1-based position
#[derive(Debug, Clone, Default)]
pub struct ExpenseList {
    expenses: Vec<Expense>,
}

impl ExpenseList {
    pub fn new() -> Self {
        ExpenseList { expenses: vec![] }
    }
    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }
    pub fn get(&self, index: usize) -> Option<&Expense> {
        index.checked_sub(1).and_then(|i| self.expenses.get(i))
    }
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Expense> {
        index.checked_sub(1).and_then(move |i| self.expenses.get_mut(i))
    }
    pub fn remove(&mut self, index: usize) -> Option<Expense> {
        match index {
            i if i >= 1 && i <= self.expenses.len() => Some(self.expenses.remove(i - 1)),
            _ => None,
        }
    }
    pub fn iter(&self) -> Iter<'_, Expense> {
        self.expenses.iter()
    }
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Expense> {
        self.expenses.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.expenses.len()
    }
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Expenses of one category, or all of them
    pub fn filter(&self, category: Option<ExpenseCategory>) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .collect()
    }

    /// Expenses whose description contains `description` (ignoring case) and whose amount
    /// lies within the inclusive bounds given
    pub fn find(
        &self,
        description: Option<&str>,
        min: Option<&Amount>,
        max: Option<&Amount>,
    ) -> Vec<&Expense> {
        let needle = description.map(|d| d.to_lowercase());
        self.expenses
            .iter()
            .filter(|e| match &needle {
                Some(n) => e.description.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .filter(|e| min.map_or(true, |m| &e.amount >= m))
            .filter(|e| max.map_or(true, |m| &e.amount <= m))
            .collect()
    }

    pub fn total(&self, category: Option<ExpenseCategory>) -> Amount {
        self.filter(category).iter().map(|e| &e.amount).sum()
    }
}
