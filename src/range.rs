use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    until: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, until: NaiveDate) -> Option<Self> {
        if from <= until {
            Some(Self { from, until })
        } else {
            None
        }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn until(&self) -> NaiveDate {
        self.until
    }

    /// Number of days in the range, counting both ends.
    pub fn length(&self) -> u32 {
        (self.until.num_days_from_ce() - self.from.num_days_from_ce()) as u32 + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        (self.from.num_days_from_ce()..=self.until.num_days_from_ce())
            .filter_map(NaiveDate::from_num_days_from_ce_opt)
    }
}
