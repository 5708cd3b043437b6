use budgetbuddy::commands::Status;
use budgetbuddy::models::{Amount, ExpenseCategory};
use budgetbuddy::repl::Session;

fn run(lines: &[&str]) -> Session {
    let mut session = Session::new("SGD").unwrap();
    for line in lines {
        let _ = session.handle(line);
    }
    session
}

#[test]
fn expenses_lifecycle() {
    let session = run(&[
        "add expense c/Groceries a/20 d/Milk",
        "add expense c/Transport a/3 d/Bus",
        "add expense c/Housing a/1500 d/Rent",
        "edit expense i/2 a/4.5",
        "delete expense i/1",
        "list expenses",
        "find expenses d/rent",
    ]);
    let expenses = &session.books().expenses;
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses.get(1).unwrap().get_description(), "Bus");
    assert_eq!(
        expenses.get(1).unwrap().get_amount(),
        &"4.5".parse::<Amount>().unwrap()
    );
    assert_eq!(
        expenses.total(Some(ExpenseCategory::Housing)),
        Amount::from_integer(1500)
    );
}

#[test]
fn rejected_lines_change_nothing() {
    let session = run(&[
        "add expense c/Groceries a/20",
        "add expense c/Food a/20 d/Milk",
        "delete expense i/1",
        "add savings c/Salary a/-5",
        "rec newexpense to/1 c/Utility a/80 d/Phone",
    ]);
    let books = session.books();
    assert!(books.expenses.is_empty());
    assert!(books.savings.is_empty());
    assert!(books.recurring.is_empty());
}

#[test]
fn commands_only_touch_the_collection_they_name() {
    let mut session = run(&[
        "add expense c/Housing a/1500 d/Rent",
        "add savings c/Salary a/3000",
        "delete savings i/1",
        "reduce expense i/1 a/5",
    ]);
    assert_eq!(session.books().expenses.len(), 1);
    assert_eq!(
        session.books().savings.total(None),
        Amount::from_integer(3000)
    );

    assert!(session.handle("change currency KES").is_err());
    assert_eq!(session.books().get_currency().get_code(), "SGD");
    assert_eq!(
        session.books().expenses.total(None),
        Amount::from_integer(1500)
    );
}

#[test]
fn savings_cannot_go_negative() {
    let mut session = Session::new("SGD").unwrap();
    session.handle("add savings c/Salary a/100").unwrap();
    assert!(session.handle("reduce savings i/1 a/150").is_err());
    session.handle("reduce savings i/1 a/30").unwrap();
    assert_eq!(
        session.books().savings.total(None),
        Amount::from_integer(70)
    );
    session.handle("list savings").unwrap();
}

#[test]
fn recurring_lists() {
    let session = run(&[
        "rec newlist Monthly bills",
        "rec newexpense to/1 c/Utility a/80 d/Phone bill",
        "rec newexpense to/1 c/Housing a/1500 d/Rent",
        "rec viewlists",
        "rec viewexpenses 1",
        "rec addrec 1",
    ]);
    let books = session.books();
    assert_eq!(books.recurring.get(1).unwrap().get_name(), "Monthly bills");
    assert_eq!(books.expenses.len(), 2);
    assert_eq!(books.expenses.total(None), Amount::from_integer(1580));
}

#[test]
fn change_currency_converts_every_amount() {
    let session = run(&[
        "add expense c/Groceries a/27 d/Market",
        "add savings c/Salary a/135",
        "split expenses a/13.5 n/3 d/Coffee",
        "set budget c/Groceries b/270",
        "change currency usd",
    ]);
    let books = session.books();
    assert_eq!(books.get_currency().get_code(), "USD");
    assert_eq!(books.expenses.total(None), Amount::from_integer(20));
    assert_eq!(books.savings.total(None), Amount::from_integer(100));
    assert_eq!(
        books.splits.iter().next().unwrap().get_amount(),
        &Amount::from_integer(10)
    );
    assert_eq!(
        books.budgets.get(ExpenseCategory::Groceries),
        Some(&Amount::from_integer(200))
    );
}

#[test]
fn budgets() {
    let mut session = Session::new("SGD").unwrap();
    session.handle("set budget c/Groceries b/100").unwrap();
    session.handle("set budget c/groceries b/120").unwrap();
    session.handle("add expense c/Groceries a/130 d/Party").unwrap();
    assert_eq!(session.handle("budget print").unwrap(), Status::Continue);
    assert_eq!(session.books().budgets.len(), 1);
}

#[test]
fn bye_exits() {
    let mut session = Session::new("SGD").unwrap();
    assert_eq!(session.handle("menu").unwrap(), Status::Continue);
    assert_eq!(session.handle("menu 42").unwrap(), Status::Continue);
    assert_eq!(session.handle("  bye  ").unwrap(), Status::Exit);
}
