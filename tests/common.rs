use std::rc::Rc;

use budgetbuddy::commands::Command;
use budgetbuddy::models::{
    Amount, Books, Currency, Expense, ExpenseCategory, Saving, SavingCategory,
};
use budgetbuddy::parser::Parser;
use budgetbuddy::Rejection;

/// Books with the given number of expenses, savings and recurring lists
pub fn books(expenses: usize, savings: usize, lists: usize) -> Books {
    let mut books = Books::new(Rc::new(Currency::new("SGD", "Singapore Dollar")));
    for i in 0..expenses {
        books.expenses.add(Expense::new(
            ExpenseCategory::Others,
            Amount::from_integer(i as i64 + 1),
            format!("Expense {}", i + 1),
        ));
    }
    for i in 0..savings {
        books.savings.add(Saving::new(
            SavingCategory::Salary,
            Amount::from_integer(100 * (i as i64 + 1)),
        ));
    }
    for i in 0..lists {
        books.recurring.add_list(format!("List {}", i + 1));
    }
    books
}

#[allow(dead_code)]
pub fn parse(input: &str) -> Result<Command, Rejection> {
    parse_with(input, &books(3, 3, 2))
}

pub fn parse_with(input: &str, books: &Books) -> Result<Command, Rejection> {
    let parser = Parser::new().unwrap();
    parser.try_parse(input, books)
}
