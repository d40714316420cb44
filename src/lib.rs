mod consts;
mod grid;
mod prelude;
mod range;
mod types;

pub use consts::*;
pub use grid::{CellOrigin, DateCell, MonthPage};
pub use range::DateRange;
pub use types::{
    days_in_month, is_leap_year, normalize_month, weekday, DayOfMonth, MonthIndex, Weekday,
};

use chrono::Datelike;
use std::fmt;
use std::str::FromStr;

/// A calendar date with no time-of-day component: signed year, zero-based
/// month, validated day. Two dates are equal iff year, month and day are
/// all equal; ordering is by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalDate {
    year: i32,
    month: MonthIndex,
    day: DayOfMonth,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid date format: {0} (expected DD-MM-YYYY)")]
    InvalidFormat(String),
    #[error("invalid month: {0} (must be 01-12)")]
    InvalidMonthNumber(u8),
    #[error("invalid month index: {0} (must be 0-11)")]
    InvalidMonthIndex(u8),
    #[error("invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[error("empty date string")]
    EmptyInput,
}

impl CalDate {
    /// Creates a new date, validating the day against the year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the day is 0 or exceeds the
    /// month's day count.
    pub fn new(year: i32, month: MonthIndex, day: u8) -> Result<Self, ParseError> {
        let day = DayOfMonth::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw parts: signed year, zero-based month index,
    /// 1-based day
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonthIndex` or `ParseError::InvalidDay`
    /// when a component is out of range.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let month = MonthIndex::new(month)?;
        Self::new(year, month, day)
    }

    /// Callers must supply a day already valid for the year and month.
    pub(crate) const fn from_valid_parts(year: i32, month: MonthIndex, day: u8) -> Self {
        Self {
            year,
            month,
            day: DayOfMonth::from_valid(day),
        }
    }

    /// The current date on the local wall clock. Capture this once per
    /// grid render and pass it to every cell classified in that render.
    pub fn today() -> Self {
        let now = chrono::Local::now().date_naive();
        Self {
            year: now.year(),
            month: MonthIndex::from_valid(now.month0() as u8),
            day: DayOfMonth::from_valid(now.day() as u8),
        }
    }

    /// Returns the signed year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the zero-based month
    #[inline]
    pub const fn month(&self) -> MonthIndex {
        self.month
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> DayOfMonth {
        self.day
    }

    /// Weekday of this date, Monday-start
    pub const fn weekday(&self) -> Weekday {
        types::weekday(self.year, self.month, self.day.get())
    }
}

impl fmt::Display for CalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{sep}{:02}{sep}{:04}",
            self.day.get(),
            self.month.number(),
            self.year,
            sep = DATE_SEPARATOR
        )
    }
}

impl FromStr for CalDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Structural check: DD-MM-YYYY, day and month exactly two digits,
        // year four or more
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }
        let (day_part, month_part, year_part) = (parts[0], parts[1], parts[2]);
        if day_part.len() != DAY_DIGITS
            || month_part.len() != MONTH_DIGITS
            || year_part.len() < YEAR_MIN_DIGITS
            || !Self::is_digits(day_part)
            || !Self::is_digits(month_part)
            || !Self::is_digits(year_part)
        {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        // Numeric decomposition - InvalidFormat if not representable
        let day_num = Self::parse_u8(day_part)?;
        let month_num = Self::parse_u8(month_part)?;
        let year = Self::parse_year(year_part)?;

        // Component validation: 1-based month token, then the day against
        // the month's true day count
        if !(1..=MONTHS_PER_YEAR).contains(&month_num) {
            return Err(ParseError::InvalidMonthNumber(month_num));
        }
        let month = MonthIndex::new(month_num - 1)?;
        let day = DayOfMonth::new(day_num, year, month)?;

        Ok(Self { year, month, day })
    }
}

impl CalDate {
    fn is_digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse a year field with better error messages
    fn parse_year(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for CalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
