use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY_DAYS_LEAP, FEBRUARY_INDEX, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_DAYS_IN_MONTH, MIN_DAY, MONTHS_PER_YEAR, MONTH_NAMES,
    SUNDAY_START_TO_MONDAY_START, WEEKDAY_NAMES,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A zero-based month index guaranteed to be in the range `0..=11`
/// (0 = January .. 11 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MonthIndex(u8);

impl MonthIndex {
    /// Creates a new `MonthIndex`, validating that it's below 12
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonthIndex` if the value is > 11.
    pub fn new(index: u8) -> Result<Self, ParseError> {
        if index >= MONTHS_PER_YEAR {
            return Err(ParseError::InvalidMonthIndex(index));
        }
        Ok(Self(index))
    }

    /// Callers must supply an index already in `0..=11`.
    pub(crate) const fn from_valid(index: u8) -> Self {
        debug_assert!(index < MONTHS_PER_YEAR);
        Self(index % MONTHS_PER_YEAR)
    }

    /// Returns the zero-based index as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the 1-based month number (1 = January .. 12 = December)
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Returns the abbreviated English month name
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }
}

impl TryFrom<u8> for MonthIndex {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonthIndex> for u8 {
    fn from(month: MonthIndex) -> Self {
        month.0
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day-of-month value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfMonth(NonZeroU8);

impl DayOfMonth {
    /// Creates a new `DayOfMonth`, validating that it's non-zero and valid
    /// for the given year and month (leap years included)
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or exceeds the
    /// month's day count.
    pub fn new(value: u8, year: i32, month: MonthIndex) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay {
            year,
            month: month.number(),
            day: value,
        })?;

        let max_day = days_in_month(year, i32::from(month.get()));
        if value > max_day {
            return Err(ParseError::InvalidDay {
                year,
                month: month.number(),
                day: value,
            });
        }

        Ok(Self(non_zero))
    }

    /// Callers must supply a day already in `1..=days_in_month`.
    pub(crate) const fn from_valid(value: u8) -> Self {
        debug_assert!(value >= MIN_DAY && value <= MAX_DAYS_IN_MONTH);
        match NonZeroU8::new(value) {
            Some(day) => Self(day),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for DayOfMonth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check the
        // calendar-wide bounds
        if !(MIN_DAY..=MAX_DAYS_IN_MONTH).contains(&value) {
            return Err(ParseError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<DayOfMonth> for u8 {
    fn from(day: DayOfMonth) -> Self {
        day.0.get()
    }
}

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const BY_MONDAY_INDEX: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Converts a native weekday number (0 = Sunday .. 6 = Saturday)
    /// through the fixed Monday-start remap table.
    pub const fn from_sunday_start(native: u8) -> Self {
        let monday_start = SUNDAY_START_TO_MONDAY_START[(native % 7) as usize];
        Self::BY_MONDAY_INDEX[monday_start as usize]
    }

    /// Returns the Monday-start index (0 = Monday .. 6 = Sunday)
    #[inline]
    pub const fn days_from_monday(self) -> u8 {
        self as u8
    }

    /// Returns the abbreviated English weekday name
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Wraps an arbitrary month offset into `0..=11`, adjusting the year by
/// euclidean division (so -1 is December of the previous year, 12 is
/// January of the next).
pub const fn normalize_month(year: i32, month: i32) -> (i32, MonthIndex) {
    let months = MONTHS_PER_YEAR as i32;
    let year = year + month.div_euclid(months);
    let index = month.rem_euclid(months) as u8;
    (year, MonthIndex::from_valid(index))
}

/// Day count of the (normalized) month, leap years included. Total over
/// any integer year and month offset.
pub const fn days_in_month(year: i32, month: i32) -> u8 {
    let (year, month) = normalize_month(year, month);
    if month.get() == FEBRUARY_INDEX && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Weekday of a calendar date, via Sakamoto's method. The raw result
/// numbers days Sunday-first; the Monday-start remap is applied last.
pub const fn weekday(year: i32, month: MonthIndex, day: u8) -> Weekday {
    const MONTH_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let number = month.number() as i32;
    let year = if number < 3 { year - 1 } else { year };
    let native = (year + year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)
        + MONTH_OFFSETS[(number - 1) as usize]
        + day as i32)
        .rem_euclid(7);
    Weekday::from_sunday_start(native as u8)
}
