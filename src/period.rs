use std::fmt;
use std::result;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::range::DateRange;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The clock handed us a month outside of `1..=12`.
    #[error("invalid input: month {month} is not in 1..=12")]
    InvalidInput { month: u32 },
    #[error("month {month} of year {year} does not exist")]
    InvalidMonth { year: i32, month: u32 },
    #[error("there is no year before {year}")]
    YearOverflow { year: i32 },
    #[error("could not parse {0:?} as YYYY-MM")]
    ParseYearMonth(String),
}

pub type Result<T> = result::Result<T, Error>;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The month before `(month, year)`, as a `(month, year)` pair.
///
/// January rolls over to December of the previous year.
pub fn previous_month(month: u32, year: i32) -> Result<(u32, i32)> {
    match month {
        1 => year
            .checked_sub(1)
            .map(|year| (12, year))
            .ok_or(Error::YearOverflow { year }),
        2..=12 => Ok((month - 1, year)),
        _ => Err(Error::InvalidInput { month }),
    }
}

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Fails for months outside of `1..=12`, and for months whose first or
    /// last day chrono can't represent.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let err = Error::InvalidMonth { year, month };
        if !(1..=12).contains(&month) {
            return Err(err);
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(err);
        }
        let ym = Self { year, month };
        let next = ym.succ();
        if NaiveDate::from_ymd_opt(next.year, next.month, 1).is_none() {
            return Err(err);
        }
        Ok(ym)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    pub fn succ(self) -> Self {
        let (month, year) = match self.month {
            12 => (1, self.year + 1),
            m => (m + 1, self.year),
        };
        Self { year, month }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("day 1 exists in every month")
    }

    pub fn last_day(&self) -> NaiveDate {
        self.succ()
            .first_day()
            .pred_opt()
            .expect("every month is preceded by a day")
    }

    /// Number of days in the month.
    pub fn length(&self) -> u32 {
        self.range().length()
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.first_day(), self.last_day()).expect("first day precedes last day")
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}", self.year.unsigned_abs(), self.month)
        } else {
            write!(f, "{:04}-{:02}", self.year, self.month)
        }
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::ParseYearMonth(s.to_string());
        let (year, month) = s.rsplit_once('-').ok_or_else(err)?;
        let digits = year.strip_prefix('-').unwrap_or(year);
        if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        if month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let year = year.parse::<i32>().map_err(|_| err())?;
        let month = month.parse::<u32>().map_err(|_| err())?;
        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{previous_month, Error, YearMonth};

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn january_rolls_back_to_december() {
        assert_eq!(previous_month(1, 2024).unwrap(), (12, 2023));
    }

    #[test]
    fn ordinary_months_decrement() {
        assert_eq!(previous_month(6, 2024).unwrap(), (5, 2024));
        assert_eq!(previous_month(12, 2024).unwrap(), (11, 2024));
        for year in [-1, 0, 1999, 2024] {
            for month in 2..=12 {
                assert_eq!(previous_month(month, year).unwrap(), (month - 1, year));
            }
            assert_eq!(previous_month(1, year).unwrap(), (12, year - 1));
        }
    }

    #[test]
    fn january_of_earliest_year_has_no_predecessor() {
        assert!(matches!(
            previous_month(1, i32::MIN),
            Err(Error::YearOverflow { year: i32::MIN })
        ));
        assert_eq!(previous_month(2, i32::MIN).unwrap(), (1, i32::MIN));
        assert_eq!(previous_month(1, i32::MAX).unwrap(), (12, i32::MAX - 1));
    }

    #[test]
    fn applying_twice_goes_back_two_months() {
        let (m, y) = previous_month(3, 2024).unwrap();
        assert_eq!(previous_month(m, y).unwrap(), previous_month(2, 2024).unwrap());
        assert_eq!(previous_month(m, y).unwrap(), (1, 2024));
    }

    #[test]
    fn out_of_range_month_is_invalid_input() {
        assert!(matches!(
            previous_month(0, 2024),
            Err(Error::InvalidInput { month: 0 })
        ));
        assert!(matches!(
            previous_month(13, 2024),
            Err(Error::InvalidInput { month: 13 })
        ));
    }

    #[test]
    fn from_date_ignores_day_of_month() {
        let early = YearMonth::from_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let late = YearMonth::from_date(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(early, ym(2024, 3));
        assert_eq!(late, ym(2024, 3));
    }

    #[test]
    fn succ_rolls_over_into_january() {
        assert_eq!(ym(2024, 12).succ(), ym(2025, 1));
        assert_eq!(ym(2024, 6).succ(), ym(2024, 7));
        for month in 1..=12 {
            let next = ym(2024, month).succ();
            assert_eq!(
                previous_month(next.month(), next.year()).unwrap(),
                (month, 2024)
            );
        }
    }

    #[test]
    fn month_lengths() {
        assert_eq!(ym(2024, 2).length(), 29);
        assert_eq!(ym(2023, 2).length(), 28);
        assert_eq!(ym(1900, 2).length(), 28);
        assert_eq!(ym(2000, 2).length(), 29);
        assert_eq!(ym(2024, 4).length(), 30);
        assert_eq!(ym(2024, 12).length(), 31);
        assert_eq!(
            ym(2024, 12).last_day(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn range_spans_whole_month() {
        let range = ym(2026, 9).range();
        assert_eq!(range.from(), NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        assert_eq!(range.until(), NaiveDate::from_ymd_opt(2026, 9, 30).unwrap());
        assert_eq!(range.days().count(), 30);
    }

    #[test]
    fn new_rejects_invalid_months() {
        assert!(matches!(
            YearMonth::new(2024, 13),
            Err(Error::InvalidMonth {
                year: 2024,
                month: 13
            })
        ));
        assert!(YearMonth::new(2024, 0).is_err());
        assert!(YearMonth::new(1_000_000, 1).is_err());
        assert!(YearMonth::new(i32::MAX, 12).is_err());
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(ym(2026, 9).to_string(), "2026-09");
        assert_eq!("2026-09".parse::<YearMonth>().unwrap(), ym(2026, 9));
        assert_eq!("1999-12".parse::<YearMonth>().unwrap(), ym(1999, 12));
        assert!(matches!(
            "2026".parse::<YearMonth>(),
            Err(Error::ParseYearMonth(_))
        ));
        assert!(matches!(
            "2026-xx".parse::<YearMonth>(),
            Err(Error::ParseYearMonth(_))
        ));
        assert!(matches!(
            "2026-13".parse::<YearMonth>(),
            Err(Error::InvalidMonth { .. })
        ));
    }

    #[test]
    fn parse_requires_four_digit_year_and_two_digit_month() {
        for input in [
            "24-05",
            "2024-5",
            "+2024-05",
            "2024-+5",
            " 2024-05",
            "2024-05 ",
            "2024-005",
            "2024--05",
            "-24-05",
        ] {
            assert!(
                matches!(input.parse::<YearMonth>(), Err(Error::ParseYearMonth(_))),
                "{input:?} should not parse"
            );
        }
        assert_eq!("12024-05".parse::<YearMonth>().unwrap(), ym(12024, 5));
        assert_eq!("-0044-03".parse::<YearMonth>().unwrap(), ym(-44, 3));
    }

    #[test]
    fn negative_years_display_and_parse_back() {
        assert_eq!(ym(-44, 3).to_string(), "-0044-03");
        assert_eq!(ym(-44, 3).to_string().parse::<YearMonth>().unwrap(), ym(-44, 3));
    }

    #[test]
    fn names() {
        assert_eq!(ym(2024, 1).name(), "January");
        assert_eq!(ym(2024, 12).name(), "December");
    }
}
