// Civil date module
// Calendar dates without time-of-day or timezone, proleptic Gregorian

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weekdays indexed by their distance from Monday.
const WEEKDAYS_FROM_MONDAY: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Errors raised when building dates from raw numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("month {month} is outside 1-12")]
    InvalidMonth { month: u32 },
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    #[error("{0} is outside the range supported by chrono")]
    OutOfChronoRange(CivilDate),
}

/// Gregorian leap-year rule: every fourth year, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` if the month is not 1-12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    (1..=12).contains(&month).then(|| month_length(year, month))
}

/// Length of a month already known to be 1-12
fn month_length(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Days since 1970-01-01 for a valid civil date.
///
/// Works on eras of 400 years so any `i32` year is handled without overflow.
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = i64::from(month);
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// A displayed month: a year plus a month that is always 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month, or `None` past December of `i32::MAX`.
    pub fn succ(&self) -> Option<Self> {
        if self.month == 12 {
            let year = self.year.checked_add(1)?;
            Some(Self { year, month: 1 })
        } else {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    /// The preceding month, or `None` before January of `i32::MIN`.
    pub fn pred(&self) -> Option<Self> {
        if self.month == 1 {
            let year = self.year.checked_sub(1)?;
            Some(Self { year, month: 12 })
        } else {
            Some(Self {
                year: self.year,
                month: self.month - 1,
            })
        }
    }

    /// Same month shifted by `delta` years, or `None` on overflow.
    pub fn shift_years(&self, delta: i32) -> Option<Self> {
        let year = self.year.checked_add(delta)?;
        Some(Self {
            year,
            month: self.month,
        })
    }

    pub fn day_count(&self) -> u32 {
        month_length(self.year, self.month)
    }

    pub fn first_day(&self) -> CivilDate {
        CivilDate {
            year: self.year,
            month: self.month,
            day: 1,
        }
    }

    pub fn with_day(&self, day: u32) -> Result<CivilDate, DateError> {
        CivilDate::new(self.year, self.month, day)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Immutable calendar date, validated on construction.
///
/// Field order gives chronological `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCivilDate")]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Deserialize)]
struct RawCivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawCivilDate> for CivilDate {
    type Error = DateError;

    fn try_from(raw: RawCivilDate) -> Result<Self, Self::Error> {
        CivilDate::new(raw.year, raw.month, raw.day)
    }
}

impl CivilDate {
    /// Create a date, rejecting months outside 1-12 and days the month does not have
    ///
    /// # Examples
    /// ```
    /// use weather_history::models::civil_date::CivilDate;
    ///
    /// assert!(CivilDate::new(2024, 2, 29).is_ok());
    /// assert!(CivilDate::new(2023, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let max_day = days_in_month(year, month).ok_or(DateError::InvalidMonth { month })?;
        if day == 0 || day > max_day {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }

    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday
        let from_monday = (days_from_civil(self.year, self.month, self.day) + 3).rem_euclid(7);
        WEEKDAYS_FROM_MONDAY[from_monday as usize]
    }

    /// Convert to chrono; fails for years chrono cannot represent.
    pub fn to_naive_date(&self) -> Result<NaiveDate, DateError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or(DateError::OutOfChronoRange(*self))
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl TryFrom<CivilDate> for NaiveDate {
    type Error = DateError;

    fn try_from(date: CivilDate) -> Result<Self, Self::Error> {
        date.to_naive_date()
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
