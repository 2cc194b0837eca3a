use std::process;

mod cli;
mod clock;
mod config;
mod error;
mod form;
mod logging;
mod period;
mod range;
mod weeks;

fn main() {
    if let Err(e) = cli::run() {
        error::eprint_error(&e);
        process::exit(1);
    }
}
