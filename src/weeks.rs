use chrono::{Datelike, NaiveDate};

use crate::period::YearMonth;

/// The days of a month that fall into one ISO week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    /// ISO week-based year, which differs from the calendar year at the edges.
    pub year: i32,
    pub week: u32,
    pub dates: Vec<NaiveDate>,
    /// Week 1 days at the end of December, shown after the month's last week.
    pub following_year: bool,
}

impl Week {
    pub fn first(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }
}

pub fn weeks(month: YearMonth) -> Vec<Week> {
    let mut result: Vec<Week> = vec![];
    for date in month.range().days() {
        let iso = date.iso_week();
        if let Some(week) = result.last_mut() {
            if week.year == iso.year() && week.week == iso.week() {
                week.dates.push(date);
                continue;
            }
        }
        result.push(Week {
            year: iso.year(),
            week: iso.week(),
            dates: vec![date],
            following_year: false,
        });
    }

    // Late December days can already belong to week 1 of the next ISO year.
    let has_late_week = result.iter().any(|w| w.week >= 52);
    if let Some(last) = result.last_mut() {
        if has_late_week && last.week == 1 && last.year > month.year() {
            last.following_year = true;
        }
    }

    result
}
