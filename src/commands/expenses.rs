use colored::Colorize;
use log::info;

use crate::models::{Amount, Expense, ExpenseCategory, ExpenseList};
use crate::{ui, Error};

pub fn add(expenses: &mut ExpenseList, category: ExpenseCategory, amount: &Amount, description: &str) {
    let expense = Expense::new(category, amount.clone(), description.to_string());
    println!("Expense added: {}", expense);
    expenses.add(expense);
    info!("{} expenses recorded", expenses.len());
}

pub fn edit(
    expenses: &mut ExpenseList,
    index: usize,
    category: Option<ExpenseCategory>,
    amount: Option<&Amount>,
    description: Option<&str>,
) -> Result<(), Error> {
    let expense = expenses.get_mut(index).ok_or_else(|| no_expense(index))?;
    if let Some(category) = category {
        expense.set_category(category);
    }
    if let Some(amount) = amount {
        expense.set_amount(amount.clone());
    }
    if let Some(description) = description {
        expense.set_description(description.to_string());
    }
    println!("Expense edited: {}", expense);
    Ok(())
}

pub fn delete(expenses: &mut ExpenseList, index: usize) -> Result<(), Error> {
    let expense = expenses.remove(index).ok_or_else(|| no_expense(index))?;
    println!("Expense deleted: {}", expense);
    Ok(())
}

pub fn list(expenses: &ExpenseList, category: Option<ExpenseCategory>) {
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .enumerate()
        .filter(|(_, e)| category.map_or(true, |c| e.get_category() == c))
        .map(|(i, e)| row(i + 1, e))
        .collect();
    match category {
        Some(c) => println!("{}", format!("Expenses ({})", c).bold()),
        None => println!("{}", "Expenses".bold()),
    }
    if rows.is_empty() {
        println!("No expenses found.");
    } else {
        ui::table(&TITLES, rows, &[0, 3]).printstd();
    }
    println!("Total Expenses: {}", expenses.total(category));
}

pub fn find(
    expenses: &ExpenseList,
    description: Option<&str>,
    min: Option<&Amount>,
    max: Option<&Amount>,
) {
    let found = expenses.find(description, min, max);
    if found.is_empty() {
        println!("No matching expenses found.");
        return;
    }
    // Numbers refer to the full list, so they can be used with edit and delete
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .enumerate()
        .filter(|(_, e)| found.iter().any(|f| std::ptr::eq(*f, *e)))
        .map(|(i, e)| row(i + 1, e))
        .collect();
    println!("Matching expenses:");
    ui::table(&TITLES, rows, &[0, 3]).printstd();
}

const TITLES: [&str; 5] = ["#", "Date", "Category", "Amount", "Description"];

fn row(number: usize, expense: &Expense) -> Vec<String> {
    vec![
        number.to_string(),
        expense.get_date_added().format("%Y-%m-%d").to_string(),
        expense.get_category().to_string(),
        expense.get_amount().to_string(),
        expense.get_description().to_string(),
    ]
}

fn no_expense(index: usize) -> Error {
    Error::new(format!("There is no expense number {}", index).as_str())
}
