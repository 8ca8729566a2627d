use crate::date::{CalendarDate, DateArithmetic};

/// Default number of days a book may be kept
pub const DEFAULT_LOAN_PERIOD_DAYS: u32 = 14;

/// Where "today" comes from when a book is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Always the same date
    Fixed(CalendarDate),
    /// The local system date
    System,
}

impl Clock {
    /// The current date according to this clock
    #[must_use]
    pub fn today(&self) -> CalendarDate {
        match self {
            Self::Fixed(date) => *date,
            Self::System => CalendarDate::today(),
        }
    }
}

/// Rules applied when a book is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPolicy {
    /// Length of a loan in days
    pub period_days: u32,
    /// How the due date is computed from the issue date
    pub arithmetic: DateArithmetic,
    /// Source of the issue date
    pub clock: Clock,
}

impl LoanPolicy {
    /// The issue date for a loan starting now
    #[must_use]
    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    /// The due date of a loan issued on `issued`
    #[must_use]
    pub fn due_date(&self, issued: CalendarDate) -> CalendarDate {
        let mut due = issued;
        due.add_days_with(self.period_days, self.arithmetic);
        due
    }
}

/// Fourteen-day loans from the placeholder date 1/1/2023
impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            period_days: DEFAULT_LOAN_PERIOD_DAYS,
            arithmetic: DateArithmetic::Calendar,
            clock: Clock::Fixed(CalendarDate::default()),
        }
    }
}
