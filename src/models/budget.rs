use std::collections::btree_map::{Iter, IterMut};
use std::collections::BTreeMap;

use crate::models::{Amount, ExpenseCategory};

/// Monthly budget per expense category
#[derive(Debug, Clone, Default)]
pub struct Budgets {
    budgets: BTreeMap<ExpenseCategory, Amount>,
}

impl Budgets {
    pub fn new() -> Self {
        Budgets {
            budgets: BTreeMap::new(),
        }
    }
    /// Sets the budget of a category, returning the previous one
    pub fn set(&mut self, category: ExpenseCategory, budget: Amount) -> Option<Amount> {
        self.budgets.insert(category, budget)
    }
    pub fn get(&self, category: ExpenseCategory) -> Option<&Amount> {
        self.budgets.get(&category)
    }
    pub fn iter(&self) -> Iter<'_, ExpenseCategory, Amount> {
        self.budgets.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, ExpenseCategory, Amount> {
        self.budgets.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.budgets.len()
    }
    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}
