//! Parser module
//!
//! The parser takes one command line and turns it into a [`Command`]. It works in two steps:
//! - Classification: the start of the line is matched against a ranked table of markers,
//!   which gives the command family
//! - Handling: the handler of that family extracts the fields, validates them and builds the
//!   command
//!
//! Nothing is ever written to the books while parsing.
use log::{debug, info, warn};

use crate::commands::Command;
use crate::models::{currencies, Books, Currency};
use crate::{Error, List, ParseError, Rejection};

pub mod extract;
mod handlers;

/// The top-level intent of a command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Menu,
    AddExpense,
    AddSaving,
    EditExpense,
    EditSaving,
    Delete,
    Reduce,
    List,
    FindExpenses,
    Recurring,
    ChangeCurrency,
    SplitExpenses,
    SetBudget,
    PrintBudget,
    Exit,
}

/// Markers, in the order they are tried
///
/// Sub-forms such as `list splitted expenses` are told apart inside their handler, never here.
/// `rec ` keeps its trailing space so that other words starting with "rec" are not taken.
pub const FAMILIES: &[(&str, Family)] = &[
    ("menu", Family::Menu),
    ("add expense", Family::AddExpense),
    ("add savings", Family::AddSaving),
    ("edit expense", Family::EditExpense),
    ("edit savings", Family::EditSaving),
    ("delete", Family::Delete),
    ("reduce", Family::Reduce),
    ("list", Family::List),
    ("find expenses", Family::FindExpenses),
    ("rec ", Family::Recurring),
    ("change currency", Family::ChangeCurrency),
    ("split expenses", Family::SplitExpenses),
    ("set budget", Family::SetBudget),
    ("budget print", Family::PrintBudget),
    ("bye", Family::Exit),
];

/// The family of a trimmed command line, if any
pub fn classify(input: &str) -> Option<Family> {
    FAMILIES
        .iter()
        .find(|(marker, _)| input.starts_with(marker))
        .map(|(_, family)| *family)
}

/// Makes sure no marker is a prefix of another one, so that the order of the table does not
/// matter for any input
pub fn check_markers(markers: &[(&str, Family)]) -> Result<(), Error> {
    for (i, (a, _)) in markers.iter().enumerate() {
        for (j, (b, _)) in markers.iter().enumerate() {
            if i != j && b.starts_with(a) {
                return Err(Error::new(
                    format!("Ambiguous command markers: {:?} is a prefix of {:?}", a, b).as_str(),
                ));
            }
        }
    }
    Ok(())
}

impl Family {
    /// How a line of this family should look, to go with an error message
    pub fn usage(&self, input: &str) -> Option<&'static str> {
        match self {
            Family::Menu => Some("menu [INDEX]"),
            Family::AddExpense => Some("add expense c/CATEGORY a/AMOUNT d/DESCRIPTION"),
            Family::AddSaving => Some("add savings c/CATEGORY a/AMOUNT"),
            Family::EditExpense => {
                Some("edit expense i/INDEX [c/CATEGORY] [a/AMOUNT] [d/DESCRIPTION]")
            }
            Family::EditSaving => Some("edit savings i/INDEX [c/CATEGORY] [a/AMOUNT]"),
            Family::Delete => Some("delete expense i/INDEX"),
            Family::Reduce => Some("reduce savings i/INDEX a/AMOUNT"),
            Family::List => Some(
                "list | list expenses [CATEGORY] | list savings [CATEGORY] | list splitted expenses",
            ),
            Family::FindExpenses => Some(
                "find expenses [d/DESCRIPTION] [morethan/MINAMOUNT] [lessthan/MAXAMOUNT]",
            ),
            Family::Recurring => Some(handlers::recurring::usage(input)),
            Family::ChangeCurrency => Some("change currency <currency_code>"),
            Family::SplitExpenses => Some("split expenses a/AMOUNT n/NUMBER d/DESCRIPTION"),
            Family::SetBudget => Some("set budget c/CATEGORY b/BUDGET"),
            Family::PrintBudget | Family::Exit => None,
        }
    }
}

/// Turns command lines into commands
///
/// The parser owns the reference data names are checked against: the categories (through
/// their types) and the list of known currencies.
#[derive(Debug, Clone)]
pub struct Parser {
    currencies: List<Currency>,
}

impl Parser {
    pub fn new() -> Result<Self, Error> {
        check_markers(FAMILIES)?;
        Ok(Parser {
            currencies: currencies()?,
        })
    }

    pub fn currencies(&self) -> &List<Currency> {
        &self.currencies
    }

    /// Parses a line, printing the reason when it is rejected
    ///
    /// This is what the read loop calls. Rejections are never fatal: they are reported and
    /// `None` is returned.
    pub fn parse(&self, input: &str, books: &Books) -> Option<Command> {
        match self.try_parse(input, books) {
            Ok(command) => Some(command),
            Err(rejection) => {
                println!("{}", rejection);
                None
            }
        }
    }

    /// Parses a line, returning why it was rejected instead of printing it
    pub fn try_parse(&self, input: &str, books: &Books) -> Result<Command, Rejection> {
        let input = input.trim();
        let family = match classify(input) {
            Some(family) => family,
            None => {
                warn!("Unrecognized command {:?}", input);
                return Err(Rejection {
                    error: ParseError::UnknownCommand(input.to_string()),
                    usage: None,
                });
            }
        };
        debug!("{:?} classified as {:?}", input, family);

        let result = match family {
            Family::Menu => handlers::menu::menu(input),
            Family::AddExpense => handlers::add::add_expense(input),
            Family::AddSaving => handlers::add::add_saving(input),
            Family::EditExpense => handlers::edit::edit_expense(input, books),
            Family::EditSaving => handlers::edit::edit_saving(input, books),
            Family::Delete => handlers::edit::delete_expense(input, books),
            Family::Reduce => handlers::edit::reduce_saving(input, books),
            Family::List => handlers::list::list(input),
            Family::FindExpenses => handlers::find::find_expenses(input),
            Family::Recurring => handlers::recurring::recurring(input, books),
            Family::ChangeCurrency => {
                handlers::currency::change_currency(input, &self.currencies)
            }
            Family::SplitExpenses => handlers::split::split_expense(input),
            Family::SetBudget => handlers::budget::set_budget(input),
            Family::PrintBudget => Ok(Command::PrintBudgets),
            Family::Exit => Ok(Command::Exit),
        };

        match result {
            Ok(command) => {
                info!("Parsed {:?} into {:?}", input, command);
                Ok(command)
            }
            Err(error) => {
                warn!("Rejected {:?}: {}", input, error);
                let usage = match error {
                    // Not a command of this family after all
                    ParseError::UnknownCommand(_) => None,
                    _ => family.usage(input),
                };
                Err(Rejection { error, usage })
            }
        }
    }
}
