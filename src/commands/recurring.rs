use log::info;

use super::{expenses, RecurringCommand};
use crate::models::{Expense, ExpenseList, RecurringExpensesList};
use crate::{ui, Error};

pub fn execute(
    lists: &mut RecurringExpensesList,
    expense_list: &mut ExpenseList,
    command: &RecurringCommand,
) -> Result<(), Error> {
    match command {
        RecurringCommand::NewList { name } => {
            lists.add_list(name.clone());
            println!("Recurring list {} created: {}", lists.len(), name);
        }
        RecurringCommand::ViewLists => view_lists(lists),
        RecurringCommand::RemoveList { list } => {
            let removed = lists.remove_list(*list).ok_or_else(|| no_list(*list))?;
            println!("Recurring list removed: {}", removed.get_name());
        }
        RecurringCommand::NewExpense {
            list,
            category,
            amount,
            description,
        } => {
            let target = lists.get_mut(*list).ok_or_else(|| no_list(*list))?;
            let expense = Expense::new(*category, amount.clone(), description.clone());
            println!("Added to {}: {}", target.get_name(), expense);
            target.add(expense);
        }
        RecurringCommand::AddToExpenses { list } => {
            let source = lists.get(*list).ok_or_else(|| no_list(*list))?;
            for expense in source.get_expenses().iter() {
                expenses::add(
                    expense_list,
                    expense.get_category(),
                    expense.get_amount(),
                    expense.get_description(),
                );
            }
            info!(
                "{} expenses copied from recurring list {}",
                source.get_expenses().len(),
                list
            );
        }
        RecurringCommand::ViewExpenses { list } => {
            let source = lists.get(*list).ok_or_else(|| no_list(*list))?;
            println!("Recurring list: {}", source.get_name());
            expenses::list(source.get_expenses(), None);
        }
    }
    Ok(())
}

fn view_lists(lists: &RecurringExpensesList) {
    if lists.is_empty() {
        println!("No recurring lists yet.");
        return;
    }
    let rows: Vec<Vec<String>> = lists
        .iter()
        .enumerate()
        .map(|(i, l)| {
            vec![
                (i + 1).to_string(),
                l.get_name().to_string(),
                l.get_expenses().len().to_string(),
            ]
        })
        .collect();
    ui::table(&["#", "Name", "Expenses"], rows, &[0, 2]).printstd();
}

fn no_list(number: usize) -> Error {
    Error::new(format!("There is no recurring list number {}", number).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseCategory};

    #[test]
    fn add_to_expenses_copies_every_expense() {
        let mut lists = RecurringExpensesList::new();
        let mut expense_list = ExpenseList::new();
        let commands = vec![
            RecurringCommand::NewList {
                name: "Monthly".to_string(),
            },
            RecurringCommand::NewExpense {
                list: 1,
                category: ExpenseCategory::Utility,
                amount: Amount::from_integer(80),
                description: "Phone".to_string(),
            },
            RecurringCommand::NewExpense {
                list: 1,
                category: ExpenseCategory::Housing,
                amount: Amount::from_integer(1500),
                description: "Rent".to_string(),
            },
            RecurringCommand::AddToExpenses { list: 1 },
            RecurringCommand::AddToExpenses { list: 1 },
        ];
        for command in commands.iter() {
            execute(&mut lists, &mut expense_list, command).unwrap();
        }
        assert_eq!(expense_list.len(), 4);
        assert_eq!(lists.get(1).unwrap().get_expenses().len(), 2);
        assert_eq!(expense_list.total(None), Amount::from_integer(3160));
    }

    #[test]
    fn remove_list() {
        let mut lists = RecurringExpensesList::new();
        let mut expense_list = ExpenseList::new();
        lists.add_list("A".to_string());
        lists.add_list("B".to_string());
        execute(
            &mut lists,
            &mut expense_list,
            &RecurringCommand::RemoveList { list: 1 },
        )
        .unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists.get(1).unwrap().get_name(), "B");
        assert!(execute(
            &mut lists,
            &mut expense_list,
            &RecurringCommand::ViewExpenses { list: 2 }
        )
        .is_err());
    }
}
