use colored::Colorize;

use crate::models::{Amount, SplitExpense, SplitExpenseList};
use crate::ui;

pub fn add(splits: &mut SplitExpenseList, amount: &Amount, number_of_people: u32, description: &str) {
    let split = SplitExpense::new(amount.clone(), number_of_people, description.to_string());
    println!("Split expense added: {}", split);
    splits.add(split);
}

pub fn list(splits: &SplitExpenseList) {
    println!("{}", "Split Expenses".bold());
    if splits.is_empty() {
        println!("No split expenses found.");
        return;
    }
    let rows: Vec<Vec<String>> = splits
        .iter()
        .enumerate()
        .map(|(i, s)| {
            vec![
                (i + 1).to_string(),
                s.get_description().to_string(),
                s.get_amount().to_string(),
                s.get_number_of_people().to_string(),
                s.share().to_string(),
            ]
        })
        .collect();
    ui::table(
        &["#", "Description", "Amount", "People", "Per person"],
        rows,
        &[0, 2, 3, 4],
    )
    .printstd();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_records_the_split() {
        let mut splits = SplitExpenseList::new();
        add(&mut splits, &Amount::from_integer(100), 3, "Dinner");
        assert_eq!(splits.len(), 1);
        let split = splits.iter().next().unwrap();
        assert_eq!(split.share().to_string(), "33.33");
    }
}
