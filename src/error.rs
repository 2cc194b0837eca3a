use std::error::Error as _;
use std::result;

use colored::Colorize;

use crate::{config, form, period};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Period(#[from] period::Error),
    #[error("{0}")]
    Config(#[from] config::Error),
    #[error("{0}")]
    Form(#[from] form::Error),
}

pub type Result<T> = result::Result<T, Error>;

pub fn eprint_error(e: &Error) {
    eprintln!("{} {}", "error:".red().bold(), e);
    // The wrapped error is already part of the message.
    let mut source = e.source().and_then(|s| s.source());
    while let Some(cause) = source {
        eprintln!("  {} {}", "caused by:".bright_black(), cause);
        source = cause.source();
    }
}
