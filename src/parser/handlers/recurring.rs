use super::{category, position, positive_amount};
use crate::commands::{Command, RecurringCommand};
use crate::models::{Books, ExpenseCategory};
use crate::parser::extract::{required, RECURRING};
use crate::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandType {
    NewList,
    ViewLists,
    RemoveList,
    NewExpense,
    AddRec,
    ViewExpenses,
}

/// `rec` sub-types, matched ignoring case
const COMMAND_TYPES: &[(&str, CommandType)] = &[
    ("newlist", CommandType::NewList),
    ("viewlists", CommandType::ViewLists),
    ("removelist", CommandType::RemoveList),
    ("newexpense", CommandType::NewExpense),
    ("addrec", CommandType::AddRec),
    ("viewexpenses", CommandType::ViewExpenses),
];

fn command_type(word: &str) -> Option<CommandType> {
    COMMAND_TYPES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(word))
        .map(|(_, kind)| *kind)
}

/// `rec COMMANDTYPE ...`
pub(crate) fn recurring(input: &str, books: &Books) -> Result<Command, ParseError> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let word = *words.get(1).ok_or(ParseError::MissingField("command type"))?;
    let kind = command_type(word).ok_or_else(|| ParseError::UnknownSubcommand {
        family: "rec",
        value: word.to_string(),
    })?;
    let lists = books.recurring.len();

    let command = match kind {
        CommandType::NewList => {
            let name = rest_after(input, word);
            if name.is_empty() {
                return Err(ParseError::MissingField("list name"));
            }
            RecurringCommand::NewList {
                name: name.to_string(),
            }
        }
        CommandType::ViewLists => RecurringCommand::ViewLists,
        CommandType::RemoveList => RecurringCommand::RemoveList {
            list: list_number(&words, lists)?,
        },
        CommandType::AddRec => RecurringCommand::AddToExpenses {
            list: list_number(&words, lists)?,
        },
        CommandType::ViewExpenses => RecurringCommand::ViewExpenses {
            list: list_number(&words, lists)?,
        },
        CommandType::NewExpense => {
            let list_str = required(input, "to/", RECURRING, "list number")?;
            let category_str = required(input, "c/", RECURRING, "category")?;
            let amount_str = required(input, "a/", RECURRING, "amount")?;
            let description = required(input, "d/", RECURRING, "description")?;
            RecurringCommand::NewExpense {
                list: position(list_str, "list number", lists, "recurring lists")?,
                category: category::<ExpenseCategory>(category_str)?,
                amount: positive_amount(amount_str, "amount")?,
                description: description.to_string(),
            }
        }
    };
    Ok(Command::Recurring(command))
}

/// How a `rec` line should look, given the command type it starts with
pub(crate) fn usage(input: &str) -> &'static str {
    match input.split_whitespace().nth(1).and_then(command_type) {
        Some(CommandType::NewList) => "rec newlist LISTNAME",
        Some(CommandType::ViewLists) => "rec viewlists",
        Some(CommandType::RemoveList) => "rec removelist LISTNUMBER",
        Some(CommandType::NewExpense) => {
            "rec newexpense to/LISTNUMBER c/CATEGORY a/AMOUNT d/DESCRIPTION"
        }
        Some(CommandType::AddRec) => "rec addrec LISTNUMBER",
        Some(CommandType::ViewExpenses) => "rec viewexpenses LISTNUMBER",
        None => "rec [newlist|viewlists|removelist|newexpense|addrec|viewexpenses] ...",
    }
}

/// The text following the command type as typed, e.g. a list name made of several words
fn rest_after<'a>(input: &'a str, word: &str) -> &'a str {
    let after_rec = input.strip_prefix("rec").unwrap_or(input).trim_start();
    after_rec.strip_prefix(word).unwrap_or("").trim()
}

fn list_number(words: &[&str], lists: usize) -> Result<usize, ParseError> {
    let number = words
        .get(2)
        .ok_or(ParseError::MissingField("list number"))?;
    position(number, "list number", lists, "recurring lists")
}
