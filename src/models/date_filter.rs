//! Date filter derived from the `--date` flag
//!
//! Three precisions: no filter at all, a calendar year, or a year-month.
//! Parsing is strict; "2020-13" is rejected just like "20-12".

use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

use crate::error::TallyError;

/// The precision-tagged date-matching rule for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    /// Accept every transaction
    #[default]
    Unfiltered,
    /// Accept transactions within one calendar year
    Year(i32),
    /// Accept transactions within one month of one year
    Month { year: i32, month: u32 },
}

impl DateFilter {
    /// Whether a transaction dated `date` falls inside this filter
    pub fn accepts(&self, date: NaiveDate) -> bool {
        match *self {
            DateFilter::Unfiltered => true,
            DateFilter::Year(year) => date.year() == year,
            DateFilter::Month { year, month } => date.year() == year && date.month() == month,
        }
    }
}

impl FromStr for DateFilter {
    type Err = TallyError;

    /// Parse a `--date` value: empty for no filter, `YYYY`, or `YYYY-MM`
    ///
    /// Calendar validation is delegated to chrono by anchoring the value to
    /// the first day it covers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TallyError::DateFilter(s.to_string());

        match s.len() {
            0 => Ok(DateFilter::Unfiltered),
            4 => {
                let date = NaiveDate::parse_from_str(&format!("{s}-01-01"), "%Y-%m-%d")
                    .map_err(|_| invalid())?;
                Ok(DateFilter::Year(date.year()))
            }
            7 => {
                let date = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
                    .map_err(|_| invalid())?;
                Ok(DateFilter::Month {
                    year: date.year(),
                    month: date.month(),
                })
            }
            _ => Err(invalid()),
        }
    }
}
