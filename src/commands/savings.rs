use colored::Colorize;

use crate::models::{Amount, ExpenseList, Saving, SavingCategory, SavingList};
use crate::{ui, Error};

pub fn add(savings: &mut SavingList, category: SavingCategory, amount: &Amount) {
    let saving = Saving::new(category, amount.clone());
    println!("Savings added: {}", saving);
    savings.add(saving);
}

pub fn edit(
    savings: &mut SavingList,
    index: usize,
    category: Option<SavingCategory>,
    amount: Option<&Amount>,
) -> Result<(), Error> {
    let saving = savings.get_mut(index).ok_or_else(|| no_saving(index))?;
    if let Some(category) = category {
        saving.set_category(category);
    }
    if let Some(amount) = amount {
        saving.set_amount(amount.clone());
    }
    println!("Savings edited: {}", saving);
    Ok(())
}

/// Takes `amount` out of a saving, which cannot go below zero
pub fn reduce(savings: &mut SavingList, index: usize, amount: &Amount) -> Result<(), Error> {
    let saving = savings.get_mut(index).ok_or_else(|| no_saving(index))?;
    let remaining = saving.get_amount().clone() - amount.clone();
    if remaining.is_negative() {
        return Err(Error::new(
            format!(
                "Cannot reduce savings {} by {}: only {} left",
                index,
                amount,
                saving.get_amount()
            )
            .as_str(),
        ));
    }
    saving.set_amount(remaining);
    println!("Savings reduced: {}", saving);
    Ok(())
}

/// Prints the savings, their total and what is left of them once expenses are paid
pub fn list(savings: &SavingList, expenses: &ExpenseList, category: Option<SavingCategory>) {
    let rows: Vec<Vec<String>> = savings
        .iter()
        .enumerate()
        .filter(|(_, s)| category.map_or(true, |c| s.get_category() == c))
        .map(|(i, s)| {
            vec![
                (i + 1).to_string(),
                s.get_category().to_string(),
                s.get_amount().to_string(),
            ]
        })
        .collect();
    match category {
        Some(c) => println!("{}", format!("Savings ({})", c).bold()),
        None => println!("{}", "Savings".bold()),
    }
    if rows.is_empty() {
        println!("No savings found.");
    } else {
        ui::table(&["#", "Category", "Amount"], rows, &[0, 2]).printstd();
    }
    let total = savings.total(category);
    println!("Total Savings: {}", total);
    let remaining = total - expenses.total(None);
    if remaining.is_negative() {
        println!("Remaining Amount: {}", remaining.to_string().red());
    } else {
        println!("Remaining Amount: {}", remaining);
    }
}

fn no_saving(index: usize) -> Error {
    Error::new(format!("There is no savings number {}", index).as_str())
}
