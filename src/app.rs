//! Command line interface
//!
//! Options come from the command line and from an init file, with one option per line:
//!
//! ```text
//! ; my preferences
//! --currency EUR
//! --prompt budget>
//! --force-color
//! ```
//!
//! Options given on the command line win over those in the file.
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use colored::Colorize;
use log::{debug, info};
use structopt::clap::ErrorKind;
use structopt::StructOpt;

use crate::repl::Session;
use crate::Error;

/// Command line options
#[derive(Debug, StructOpt, Clone)]
#[structopt(
    about = "Keep track of your expenses, savings and budgets",
    version = env!("CARGO_PKG_VERSION"),
    name = "budgetbuddy"
)]
pub struct CommonOpts {
    /// Default currency, every amount is expressed in it
    #[structopt(long = "--currency", default_value = "SGD")]
    pub currency: String,

    /// Ignore init file if it exists
    #[structopt(long = "--args-only")]
    args_only: bool,

    /// Init file
    #[structopt(long = "--init-file", parse(from_os_str))]
    init_file: Option<PathBuf>,

    #[structopt(long = "--force-color")]
    pub force_color: bool,

    #[structopt(long = "--no-color")]
    pub no_color: bool,

    /// Text shown when waiting for a command
    #[structopt(long = "--prompt", default_value = ">> ")]
    pub prompt: String,
}

const INIT_FILE_FLAG: &str = "--init-file";
const NO_INIT_FILE_FLAG: &str = "--args-only";
const INIT_PATHS_UNDER_DIR: &str = "~/.budgetbuddyrc";
const INIT_PATHS: &str = ".budgetbuddyrc";

fn init_paths(args: &[String]) -> Vec<String> {
    let mut possible_paths: Vec<String> = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        if arg == NO_INIT_FILE_FLAG {
            return vec![];
        } else if arg == INIT_FILE_FLAG {
            if let Some(path) = args.get(i + 1) {
                possible_paths.push(path.clone());
            }
        }
    }
    possible_paths.push(shellexpand::tilde(INIT_PATHS_UNDER_DIR).to_string());
    possible_paths.push(INIT_PATHS.to_string());
    possible_paths
}

/// Adds the options of the first init file found to the arguments
///
/// An option already present in `args` is not added again.
pub fn with_init_file(mut args: Vec<String>) -> Result<Vec<String>, Error> {
    let config_file = init_paths(&args)
        .into_iter()
        .map(PathBuf::from)
        .find(|path| path.exists());
    let file = match config_file {
        Some(file) => file,
        None => return Ok(args),
    };
    info!("Reading options from {:?}", file);
    let contents = read_to_string(&file)?;
    for line in contents.lines() {
        let option = line.trim_start();
        match option.chars().next() {
            Some('-') if option.starts_with("--") => {
                let mut iter = option.split_whitespace();
                let name = match iter.next() {
                    Some(name) => name,
                    None => continue,
                };
                if args.iter().any(|x| x == name) {
                    debug!("{} given on the command line, ignoring the init file", name);
                    continue;
                }
                args.push(name.to_string());
                let rest = iter.collect::<Vec<&str>>().join(" ");
                if !rest.is_empty() {
                    args.push(rest);
                }
            }
            Some(';') | Some('#') | Some('!') | Some('%') | None => (), // a comment
            Some(_) => return Err(bad_init_file(&file, line)),
        }
    }
    Ok(args)
}

fn bad_init_file(file: &Path, line: &str) -> Error {
    Error {
        message: vec![
            format!("Bad init file {:?}", file).bold().bright_red(),
            "\n".normal(),
            line.normal(),
        ],
    }
}

/// Entry point for the command line app
///
/// Loads the options, from the arguments and the init file, and runs the interpreter until the
/// user leaves.
pub fn run_app(args: Vec<String>) -> Result<(), Error> {
    let args = with_init_file(args)?;
    let options = match CommonOpts::from_iter_safe(args.iter()) {
        Ok(options) => options,
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => {
                println!("{}", e.message);
                return Ok(());
            }
            _ => return Err(Error::new(e.message.as_str())),
        },
    };
    if options.force_color {
        colored::control::set_override(true);
    } else if options.no_color {
        colored::control::set_override(false);
    }
    debug!("Options: {:?}", options);

    let mut session = Session::new(options.currency.as_str())?;
    session.run(options.prompt.as_str())
}
