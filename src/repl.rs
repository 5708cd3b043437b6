//! The read loop
use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::Editor;

use crate::commands::Status;
use crate::models::{Books, CurrencyConverter};
use crate::parser::Parser;
use crate::{ui, Error};

/// One run of the interpreter: the parser, the books it works on and the exchange rates
pub struct Session {
    parser: Parser,
    books: Books,
    converter: CurrencyConverter,
}

impl Session {
    /// A session with empty books in the given default currency
    pub fn new(currency: &str) -> Result<Self, Error> {
        let parser = Parser::new()?;
        let currency = match parser.currencies().get(currency) {
            Some(currency) => currency.clone(),
            None => {
                return Err(Error::new(
                    format!("Unknown default currency {}", currency).as_str(),
                ))
            }
        };
        info!("Default currency is {}", currency);
        Ok(Session {
            parser,
            books: Books::new(currency),
            converter: CurrencyConverter::new(),
        })
    }

    pub fn books(&self) -> &Books {
        &self.books
    }

    /// Parses and executes one line
    ///
    /// Lines that do not parse are reported and skipped. The error returned is that of a
    /// command that could not be carried out.
    pub fn handle(&mut self, line: &str) -> Result<Status, Error> {
        if line.trim().is_empty() {
            return Ok(Status::Continue);
        }
        match self.parser.parse(line, &self.books) {
            Some(command) => command.execute(&mut self.books, &self.converter),
            None => Ok(Status::Continue),
        }
    }

    /// Reads lines until `bye` or the end of the input
    pub fn run(&mut self, prompt: &str) -> Result<(), Error> {
        let mut rl = Editor::<()>::new();
        ui::welcome();
        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    rl.add_history_entry(line.as_str());
                    match self.handle(line.as_str()) {
                        Ok(Status::Exit) => break,
                        Ok(Status::Continue) => (),
                        Err(e) => println!("{}", e),
                    }
                }
                Err(ReadlineError::Interrupted) => debug!("Line cancelled"),
                Err(ReadlineError::Eof) => {
                    ui::goodbye();
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}
