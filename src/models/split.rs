use std::fmt;
use std::fmt::{Display, Formatter};
use std::slice::Iter;

use crate::models::Amount;

/// An expense shared between a number of people
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitExpense {
    amount: Amount,
    number_of_people: u32,
    description: String,
}

impl SplitExpense {
    pub fn new(amount: Amount, number_of_people: u32, description: String) -> Self {
        SplitExpense {
            amount,
            number_of_people,
            description,
        }
    }
    pub fn get_amount(&self) -> &Amount {
        &self.amount
    }
    pub fn get_number_of_people(&self) -> u32 {
        self.number_of_people
    }
    pub fn get_description(&self) -> &str {
        self.description.as_str()
    }
    pub(crate) fn amount_mut(&mut self) -> &mut Amount {
        &mut self.amount
    }
    pub fn set_amount(&mut self, amount: Amount) {
        self.amount = amount;
    }

    /// What each person owes
    pub fn share(&self) -> Amount {
        self.amount.clone() / self.number_of_people.max(1)
    }
}

impl Display for SplitExpense {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Amount: {} Number of People: {} Description: {} Amount per person: {}",
            self.amount,
            self.number_of_people,
            self.description,
            self.share()
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct SplitExpenseList {
    splits: Vec<SplitExpense>,
}

impl SplitExpenseList {
    pub fn new() -> Self {
        SplitExpenseList { splits: vec![] }
    }
    pub fn add(&mut self, split: SplitExpense) {
        self.splits.push(split);
    }
    pub fn iter(&self) -> Iter<'_, SplitExpense> {
        self.splits.iter()
    }
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, SplitExpense> {
        self.splits.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.splits.len()
    }
    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_per_person() {
        let split = SplitExpense::new(Amount::from_integer(100), 3, "Dinner".to_string());
        assert_eq!(format!("{}", split.share()), "33.33");
        assert_eq!(
            format!("{}", split),
            "Amount: 100.00 Number of People: 3 Description: Dinner Amount per person: 33.33"
        );
    }
}
