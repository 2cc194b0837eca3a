use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::form::Format;
use crate::logging;
use crate::period::{self, YearMonth};
use crate::weeks;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Overwrite the current date
    #[arg(short, long)]
    date: Option<NaiveDate>,
    /// Use this month (YYYY-MM) instead of the previous one
    #[arg(short, long)]
    month: Option<YearMonth>,
    /// Config file to load
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log more, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the month [default]
    Show,
    /// Prints the values to pre-fill the month and year fields with
    Form {
        /// Output format, overrides the config
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },
    /// Prints the first and last day of the month
    Range,
    /// Prints every date of the month
    Days,
    /// Prints the month's days grouped by calendar week
    Weeks,
}

/// The month to report on: the one before today unless one was given.
fn target_month(args: &Args, clock: &dyn Clock) -> Result<YearMonth> {
    if let Some(month) = args.month {
        debug!(%month, "using month from command line");
        return Ok(month);
    }
    let today = clock.today();
    let current = YearMonth::from_date(today);
    let (month, year) = period::previous_month(current.month(), current.year())?;
    let month = YearMonth::new(year, month)?;
    debug!(%today, %month, "computed previous month");
    Ok(month)
}

fn fmt_show(month: YearMonth) -> String {
    format!(
        "{} {}\n",
        format!("{} {}", month.name(), month.year()).bold(),
        format!("({month}, {} days)", month.length()).bright_black()
    )
}

fn fmt_range(month: YearMonth) -> String {
    let range = month.range();
    format!("{} {}\n", range.from(), range.until())
}

fn fmt_days(month: YearMonth) -> String {
    month
        .range()
        .days()
        .map(|date| format!("{date}\n"))
        .collect()
}

fn fmt_weeks(month: YearMonth) -> String {
    weeks::weeks(month)
        .iter()
        .map(|week| {
            let suffix = if week.following_year {
                " (following year)"
            } else {
                ""
            };
            format!(
                "KW {:2}  {} .. {}{suffix}\n",
                week.week,
                week.first(),
                week.last()
            )
        })
        .collect()
}

pub fn execute(args: &Args, config: &Config, clock: &dyn Clock) -> Result<String> {
    let month = target_month(args, clock)?;
    Ok(match &args.command {
        None | Some(Command::Show) => fmt_show(month),
        Some(Command::Form { format }) => {
            let format = format.unwrap_or(config.format);
            config.fields().fill(month).render(format)?
        }
        Some(Command::Range) => fmt_range(month),
        Some(Command::Days) => fmt_days(month),
        Some(Command::Weeks) => fmt_weeks(month),
    })
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let clock: Box<dyn Clock> = match args.date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let config = Config::load(args.config.as_deref())?;

    print!("{}", execute(&args, &config, clock.as_ref())?);
    Ok(())
}
