use std::slice::Iter;

use crate::models::{Expense, ExpenseList};

/// A named list of expenses that come back periodically
#[derive(Debug, Clone)]
pub struct RecurringExpenseList {
    name: String,
    expenses: ExpenseList,
}

impl RecurringExpenseList {
    pub fn new(name: String) -> Self {
        RecurringExpenseList {
            name,
            expenses: ExpenseList::new(),
        }
    }
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }
    pub fn get_expenses(&self) -> &ExpenseList {
        &self.expenses
    }
    pub fn get_expenses_mut(&mut self) -> &mut ExpenseList {
        &mut self.expenses
    }
    pub fn add(&mut self, expense: Expense) {
        self.expenses.add(expense);
    }
}

/// Every recurring list, addressed by its 1-based position
#[derive(Debug, Clone, Default)]
pub struct RecurringExpensesList {
    lists: Vec<RecurringExpenseList>,
}

impl RecurringExpensesList {
    pub fn new() -> Self {
        RecurringExpensesList { lists: vec![] }
    }
    pub fn add_list(&mut self, name: String) {
        self.lists.push(RecurringExpenseList::new(name));
    }
    pub fn get(&self, number: usize) -> Option<&RecurringExpenseList> {
        number.checked_sub(1).and_then(|i| self.lists.get(i))
    }
    pub fn get_mut(&mut self, number: usize) -> Option<&mut RecurringExpenseList> {
        number.checked_sub(1).and_then(move |i| self.lists.get_mut(i))
    }
    pub fn remove_list(&mut self, number: usize) -> Option<RecurringExpenseList> {
        match number {
            n if n >= 1 && n <= self.lists.len() => Some(self.lists.remove(n - 1)),
            _ => None,
        }
    }
    pub fn iter(&self) -> Iter<'_, RecurringExpenseList> {
        self.lists.iter()
    }
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, RecurringExpenseList> {
        self.lists.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.lists.len()
    }
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseCategory};

    #[test]
    fn lists_by_number() {
        let mut lists = RecurringExpensesList::new();
        lists.add_list("Monthly".to_string());
        lists.add_list("Yearly".to_string());
        lists.get_mut(2).unwrap().add(Expense::new(
            ExpenseCategory::Utility,
            Amount::from_integer(120),
            "Insurance".to_string(),
        ));

        assert_eq!(lists.get(2).unwrap().get_expenses().len(), 1);
        assert!(lists.get(0).is_none());
        assert!(lists.remove_list(3).is_none());
        assert_eq!(lists.remove_list(1).unwrap().get_name(), "Monthly");
        assert_eq!(lists.get(1).unwrap().get_name(), "Yearly");
    }
}
