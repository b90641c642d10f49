//! Month periods and their inclusive calendar-day bounds.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::BookkeepingError;

/// Earliest supported year.
pub const MIN_YEAR: i32 = 1;
/// Latest supported year, keeping dates in four-digit ISO form.
pub const MAX_YEAR: i32 = 9999;

/// A calendar month of a given year.
///
/// Both bounds are inclusive and resolved when the period is built, so a
/// `Period` value always denotes a real month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Period {
    month: u32,
    year: i32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl Period {
    /// Resolves `month` (1-12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the month is outside 1..=12 or the year is
    /// outside the supported range. Values are never clamped.
    pub fn new(month: u32, year: i32) -> Result<Self, BookkeepingError> {
        if !(1..=12).contains(&month) {
            return Err(BookkeepingError::InvalidPeriod(format!(
                "Month must be between 1 and 12, got {month}"
            )));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(BookkeepingError::InvalidPeriod(format!(
                "Year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
            )));
        }

        let invalid = || BookkeepingError::InvalidPeriod(format!("Invalid period {year}-{month:02}"));

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        // Day zero of the next month.
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            month,
            year,
            first_day,
            last_day,
        })
    }

    /// Parses the `month`/`year` query parameters of a period request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when either value is absent, blank, or not a number,
    /// or when the parsed values do not form a valid period.
    pub fn from_query(month: Option<&str>, year: Option<&str>) -> Result<Self, BookkeepingError> {
        let (Some(month), Some(year)) = (
            month.map(str::trim).filter(|m| !m.is_empty()),
            year.map(str::trim).filter(|y| !y.is_empty()),
        ) else {
            return Err(BookkeepingError::InvalidPeriod(
                "Month and year are required".to_string(),
            ));
        };

        let month: u32 = month
            .parse()
            .map_err(|_| BookkeepingError::InvalidPeriod(format!("Invalid month: {month}")))?;
        let year: i32 = year
            .parse()
            .map_err(|_| BookkeepingError::InvalidPeriod(format!("Invalid year: {year}")))?;

        Self::new(month, year)
    }

    /// Returns the period containing `date`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` if the date's year is outside the supported range.
    pub fn containing(date: NaiveDate) -> Result<Self, BookkeepingError> {
        Self::new(date.month(), date.year())
    }

    /// Month number, 1-indexed.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// First day of the month.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last day of the month.
    #[must_use]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Inclusive `(first_day, last_day)` bounds.
    #[must_use]
    pub const fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.first_day, self.last_day)
    }

    /// Returns true if `date` falls inside the period, both ends inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
