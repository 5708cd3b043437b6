use log::info;
use std::rc::Rc;

use crate::models::{Books, Currency, CurrencyConverter};
use crate::Error;

/// Converts every amount in the books to `to` and makes it the default currency
///
/// All the new amounts are computed before any of them is stored, so a missing rate leaves the
/// books untouched.
pub fn change(
    books: &mut Books,
    to: Rc<Currency>,
    converter: &CurrencyConverter,
) -> Result<(), Error> {
    let from = books.get_currency().clone();
    if from == to {
        println!("The default currency is already {}", to);
        return Ok(());
    }
    let mut amounts = books.amounts_mut();
    let converted = amounts
        .iter()
        .map(|amount| converter.convert(amount, &from, &to))
        .collect::<Result<Vec<_>, Error>>()?;
    let count = converted.len();
    for (amount, new_amount) in amounts.iter_mut().zip(converted) {
        **amount = new_amount;
    }
    books.set_currency(to.clone());
    info!("{} amounts converted from {} to {}", count, from, to);
    println!(
        "Default currency changed from {} to {} ({})",
        from,
        to,
        to.get_full_name()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{currencies, Amount, Expense, ExpenseCategory, Saving, SavingCategory};

    fn books() -> Books {
        let list = currencies().unwrap();
        let mut books = Books::new(list.get("SGD").unwrap().clone());
        books.expenses.add(Expense::new(
            ExpenseCategory::Groceries,
            Amount::from_integer(135),
            "Food".to_string(),
        ));
        books
            .savings
            .add(Saving::new(SavingCategory::Salary, Amount::from_integer(270)));
        books
    }

    #[test]
    fn converts_everything() {
        let list = currencies().unwrap();
        let mut books = books();
        change(&mut books, list.get("USD").unwrap().clone(), &CurrencyConverter::new()).unwrap();
        assert_eq!(books.get_currency().get_code(), "USD");
        assert_eq!(
            books.expenses.get(1).unwrap().get_amount(),
            &Amount::from_integer(100)
        );
        assert_eq!(
            books.savings.get(1).unwrap().get_amount(),
            &Amount::from_integer(200)
        );
    }

    #[test]
    fn no_rate_leaves_the_books_alone() {
        let mut books = books();
        let shilling = currencies().unwrap().get("KES").unwrap().clone();
        assert!(change(&mut books, shilling, &CurrencyConverter::new()).is_err());
        assert_eq!(books.get_currency().get_code(), "SGD");
        assert_eq!(
            books.expenses.get(1).unwrap().get_amount(),
            &Amount::from_integer(135)
        );
    }
}
