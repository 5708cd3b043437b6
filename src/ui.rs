//! What the interpreter prints around commands: banners, the menu and tables
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

pub const DIVIDER: &str = "__________________________________________________";

const MENU_TITLES: &[&str] = &[
    "1. Manage Expenses     3. View Expenses",
    "2. Manage Savings      4. View Savings",
    "5. Find Expenses       6. Split Expenses",
];

/// The commands listed under each menu index, title first
const MENU_ITEMS: &[&[&str]] = &[
    &[
        "Manage Expenses",
        "add expense c/CATEGORY a/AMOUNT d/DESCRIPTION",
        "edit expense i/INDEX c/CATEGORY a/AMOUNT d/DESCRIPTION",
        "delete expense i/INDEX",
    ],
    &[
        "Manage Savings",
        "add savings c/CATEGORY a/AMOUNT",
        "edit savings i/INDEX c/CATEGORY a/AMOUNT",
        "reduce savings i/INDEX a/AMOUNT",
    ],
    &["View Expenses", "list expenses [CATEGORY]"],
    &["View Savings", "list savings [CATEGORY]"],
    &[
        "Find Expenses",
        "find expenses d/DESCRIPTION morethan/MINAMOUNT lessthan/MAXAMOUNT \
         (Choose the parameters according to what you wish to search for)",
    ],
    &[
        "Split Expenses",
        "split expenses a/AMOUNT n/NUMBER d/DESCRIPTION",
        "list splitted expenses",
    ],
];

pub fn welcome() {
    println!("{}", DIVIDER);
    println!("                     {}", "BudgetBuddy".bold());
    println!("{}", DIVIDER);
    println!(
        "Welcome to BudgetBuddy, to start, please type \"menu INDEX\" \
         to view commands for the respective functions"
    );
    println!("To view all menu items again, type \"menu\".");
    println!("{}", DIVIDER);
    for line in MENU_TITLES {
        println!("{}", line);
    }
    println!("{}", DIVIDER);
}

pub fn goodbye() {
    println!("Goodbye! Thank you for using BudgetBuddy.");
}

/// The lines shown for `menu INDEX`, if the index is a menu item
pub fn menu_item(index: usize) -> Option<&'static [&'static str]> {
    match index {
        0 => None,
        i => MENU_ITEMS.get(i - 1).copied(),
    }
}

/// Prints `menu` (index 0) or one of its items
pub fn show_menu(index: usize) {
    println!("{}", DIVIDER);
    if index == 0 {
        println!("Menu Options:");
        for line in MENU_TITLES {
            println!("{}", line);
        }
        println!("Use 'menu INDEX' to select an option");
    } else {
        match menu_item(index) {
            Some(lines) => {
                println!("{}", lines[0].bold());
                for line in &lines[1..] {
                    println!("{}", line);
                }
            }
            None => println!("{}", "Invalid menu index.".red()),
        }
    }
    println!("{}", DIVIDER);
}

/// A table with a title row and one row per item, amounts aligned to the right
pub fn table(titles: &[&str], rows: Vec<Vec<String>>, right_aligned: &[usize]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(
        titles
            .iter()
            .map(|t| Cell::new(t).style_spec("b"))
            .collect(),
    ));
    for row in rows {
        table.add_row(Row::new(
            row.iter()
                .enumerate()
                .map(|(i, content)| {
                    let cell = Cell::new(content);
                    if right_aligned.contains(&i) {
                        cell.style_spec("r")
                    } else {
                        cell
                    }
                })
                .collect(),
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_menu_items() {
        assert!(menu_item(0).is_none());
        assert_eq!(menu_item(1).unwrap()[0], "Manage Expenses");
        assert_eq!(menu_item(6).unwrap()[2], "list splitted expenses");
        assert!(menu_item(7).is_none());
    }

    #[test]
    fn table_has_one_row_per_item() {
        let table = table(
            &["#", "Amount"],
            vec![
                vec!["1".to_string(), "3.00".to_string()],
                vec!["2".to_string(), "4.50".to_string()],
            ],
            &[1],
        );
        assert_eq!(table.len(), 2);
    }
}
