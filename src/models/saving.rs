use std::fmt;
use std::fmt::{Display, Formatter};
use std::slice::Iter;

use chrono::{Local, NaiveDate};

use crate::models::{Amount, SavingCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saving {
    date_added: NaiveDate,
    category: SavingCategory,
    amount: Amount,
}

impl Saving {
    pub fn new(category: SavingCategory, amount: Amount) -> Self {
        Saving {
            date_added: Local::now().date_naive(),
            category,
            amount,
        }
    }
    pub fn get_date_added(&self) -> NaiveDate {
        self.date_added
    }
    pub fn get_category(&self) -> SavingCategory {
        self.category
    }
    pub fn get_amount(&self) -> &Amount {
        &self.amount
    }
    pub fn set_category(&mut self, category: SavingCategory) {
        self.category = category;
    }
    pub(crate) fn amount_mut(&mut self) -> &mut Amount {
        &mut self.amount
    }
    pub fn set_amount(&mut self, amount: Amount) {
        self.amount = amount;
    }
}

impl Display for Saving {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Category: {} Amount: {}", self.category, self.amount)
    }
}

/// Savings, addressed by their 1-based position
#[derive(Debug, Clone, Default)]
pub struct SavingList {
    savings: Vec<Saving>,
}

impl SavingList {
    pub fn new() -> Self {
        SavingList { savings: vec![] }
    }
    pub fn add(&mut self, saving: Saving) {
        self.savings.push(saving);
    }
    pub fn get(&self, index: usize) -> Option<&Saving> {
        index.checked_sub(1).and_then(|i| self.savings.get(i))
    }
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Saving> {
        index.checked_sub(1).and_then(move |i| self.savings.get_mut(i))
    }
    pub fn iter(&self) -> Iter<'_, Saving> {
        self.savings.iter()
    }
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Saving> {
        self.savings.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.savings.len()
    }
    pub fn is_empty(&self) -> bool {
        self.savings.is_empty()
    }
    pub fn filter(&self, category: Option<SavingCategory>) -> Vec<&Saving> {
        self.savings
            .iter()
            .filter(|s| category.map_or(true, |c| s.category == c))
            .collect()
    }
    pub fn total(&self, category: Option<SavingCategory>) -> Amount {
        self.filter(category).iter().map(|s| &s.amount).sum()
    }
}
