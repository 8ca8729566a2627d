use std::{cmp::Ordering, fmt};

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How a number of days is added to a [`CalendarDate`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateArithmetic {
    /// Real calendar addition with month and year rollover
    #[default]
    Calendar,
    /// Adds to the day field only; the day may run past the end of the month
    DayField,
}

/// A day/month/year triple.
///
/// Construction is not validated, so a `CalendarDate` may hold values that
/// do not name a real day (for example 39/1/2023 after day-field addition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CalendarDate {
    /// Day of the month
    day: u32,
    /// Month of the year, 1-based
    month: u32,
    /// Calendar year
    year: i32,
}

impl CalendarDate {
    /// Create a date from raw parts
    #[must_use]
    pub const fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// The local date according to the system clock
    #[must_use]
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    /// Day of the month
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Month of the year
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Calendar year
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Whether the parts name a real calendar day
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.to_naive().is_some()
    }

    /// Advance the date by `days` using calendar arithmetic.
    ///
    /// Dates that are not real calendar days cannot be rolled over, so they
    /// fall back to day-field addition.
    pub fn add_days(&mut self, days: u32) {
        let next = self
            .to_naive()
            .and_then(|date| date.checked_add_days(Days::new(u64::from(days))));

        match next {
            Some(date) => *self = Self::from(date),
            None => {
                warn!(date = %self, days, "date cannot be rolled over; adding to the day field");
                self.add_days_day_field(days);
            }
        }
    }

    /// Advance the day field by `days` without touching month or year
    pub fn add_days_day_field(&mut self, days: u32) {
        self.day = self.day.saturating_add(days);
    }

    /// Advance the date by `days` with the given arithmetic
    pub fn add_days_with(&mut self, days: u32, arithmetic: DateArithmetic) {
        match arithmetic {
            DateArithmetic::Calendar => self.add_days(days),
            DateArithmetic::DayField => self.add_days_day_field(days),
        }
    }

    /// Convert to a chrono date when the parts are valid
    fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// The placeholder "today" of the catalog: 1/1/2023
impl Default for CalendarDate {
    fn default() -> Self {
        Self::new(1, 1, 2023)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.day(), date.month(), date.year())
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}
