use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// Loan status of a catalog entry, without loan details
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LoanStatus {
    /// Book is on the shelf
    #[default]
    Available,
    /// Book is lent to a borrower
    Issued,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::Issued => f.write_str("Issued"),
        }
    }
}

/// An open loan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Loan {
    /// Name of the borrower
    borrower: String,
    /// Day the book was issued
    issue_date: CalendarDate,
    /// Day the book is due back
    due_date: CalendarDate,
}

impl Loan {
    /// Create a loan record
    #[must_use]
    pub fn new(
        borrower: impl Into<String>,
        issue_date: CalendarDate,
        due_date: CalendarDate,
    ) -> Self {
        Self { borrower: borrower.into(), issue_date, due_date }
    }

    /// Name of the borrower
    #[must_use]
    pub fn borrower(&self) -> &str {
        &self.borrower
    }

    /// Day the book was issued
    #[must_use]
    pub const fn issue_date(&self) -> CalendarDate {
        self.issue_date
    }

    /// Day the book is due back
    #[must_use]
    pub const fn due_date(&self) -> CalendarDate {
        self.due_date
    }
}

/// Current loan state of a catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LoanState {
    /// Book can be issued
    #[default]
    Available,
    /// Book is lent out under the given loan
    Issued(Loan),
}

impl LoanState {
    /// Status without loan details
    #[must_use]
    pub const fn status(&self) -> LoanStatus {
        match self {
            Self::Available => LoanStatus::Available,
            Self::Issued(_) => LoanStatus::Issued,
        }
    }

    /// The open loan, if any
    #[must_use]
    pub const fn loan(&self) -> Option<&Loan> {
        match self {
            Self::Available => None,
            Self::Issued(loan) => Some(loan),
        }
    }

    /// Get a human-readable description of the state
    #[must_use]
    pub fn get_description(&self) -> String {
        match self {
            Self::Available => "Book is available for issue".to_string(),
            Self::Issued(loan) => {
                format!("Book is issued to {} until {}", loan.borrower, loan.due_date)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_state_has_no_loan() {
        let state = LoanState::default();
        assert_eq!(state.status(), LoanStatus::Available);
        assert!(state.loan().is_none());
        assert_eq!(state.get_description(), "Book is available for issue");
    }

    #[test]
    fn issued_state_describes_loan() {
        let loan =
            Loan::new("Alice", CalendarDate::new(1, 1, 2023), CalendarDate::new(15, 1, 2023));
        let state = LoanState::Issued(loan.clone());

        assert_eq!(state.status(), LoanStatus::Issued);
        assert_eq!(state.loan(), Some(&loan));
        assert_eq!(state.get_description(), "Book is issued to Alice until 15/1/2023");
    }

    #[test]
    fn status_display() {
        assert_eq!(LoanStatus::Available.to_string(), "Available");
        assert_eq!(LoanStatus::Issued.to_string(), "Issued");
    }
}
