use colored::Colorize;

use crate::models::{Amount, Budgets, ExpenseCategory, ExpenseList};
use crate::ui;

pub fn set(budgets: &mut Budgets, category: ExpenseCategory, budget: &Amount) {
    match budgets.set(category, budget.clone()) {
        Some(previous) => println!(
            "Budget for {} updated from {} to {}",
            category, previous, budget
        ),
        None => println!("Budget for {} set to {}", category, budget),
    }
}

/// Prints every budget next to what has been spent in its category
pub fn print(budgets: &Budgets, expenses: &ExpenseList) {
    if budgets.is_empty() {
        println!("No budgets set.");
        return;
    }
    let rows: Vec<Vec<String>> = budgets
        .iter()
        .map(|(category, budget)| {
            let spent = expenses.total(Some(*category));
            let left = budget.clone() - spent.clone();
            let left = if left.is_negative() {
                left.to_string().red().to_string()
            } else {
                left.to_string()
            };
            vec![
                category.to_string(),
                budget.to_string(),
                spent.to_string(),
                left,
            ]
        })
        .collect();
    ui::table(&["Category", "Budget", "Spent", "Left"], rows, &[1, 2, 3]).printstd();
}
