use chrono::{Local, NaiveDate};

/// Where the current date comes from.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local date of the machine. Time zones are not handled beyond that.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
