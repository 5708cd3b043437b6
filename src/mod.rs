mod app;
pub mod commands;
mod error;
mod list;
pub mod models;
pub mod parser;
pub mod repl;
pub mod ui;

pub use app::{run_app, with_init_file, CommonOpts};
pub use error::{Error, ParseError, Rejection};
pub use list::List;
