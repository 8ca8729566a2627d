use serde::{Deserialize, Serialize};

use crate::{
    date::CalendarDate,
    loan_state::{Loan, LoanState, LoanStatus},
    policy::LoanPolicy,
};

/// One book in the catalog together with its loan state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CatalogEntry {
    /// Unique key, fixed at creation
    id: String,
    /// Book title
    title: String,
    /// Book author
    author: String,
    /// Shelf category
    category: String,
    /// Whether and to whom the book is lent
    state: LoanState,
}

impl CatalogEntry {
    /// Create an available entry
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            category: category.into(),
            state: LoanState::Available,
        }
    }

    /// Unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Book title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Book author
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Shelf category
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Full loan state
    #[must_use]
    pub const fn state(&self) -> &LoanState {
        &self.state
    }

    /// Loan status without details
    #[must_use]
    pub const fn status(&self) -> LoanStatus {
        self.state.status()
    }

    /// Whether the book is lent out
    #[must_use]
    pub const fn is_issued(&self) -> bool {
        matches!(self.state, LoanState::Issued(_))
    }

    /// Current borrower, or the empty string when available
    #[must_use]
    pub fn borrower(&self) -> &str {
        self.state.loan().map_or("", Loan::borrower)
    }

    /// Issue date of the open loan
    #[must_use]
    pub fn issue_date(&self) -> Option<CalendarDate> {
        self.state.loan().map(Loan::issue_date)
    }

    /// Due date of the open loan
    #[must_use]
    pub fn due_date(&self) -> Option<CalendarDate> {
        self.state.loan().map(Loan::due_date)
    }

    /// Lend the book under the default policy.
    ///
    /// No state check is made: issuing an issued book replaces its loan.
    /// Use [`crate::Catalog::issue`] for the guarded operation.
    pub fn issue(&mut self, borrower: impl Into<String>) {
        self.issue_with(borrower, &LoanPolicy::default());
    }

    /// Lend the book under `policy`, replacing any open loan
    pub fn issue_with(&mut self, borrower: impl Into<String>, policy: &LoanPolicy) {
        let issue_date = policy.today();
        let due_date = policy.due_date(issue_date);
        self.state = LoanState::Issued(Loan::new(borrower, issue_date, due_date));
    }

    /// Put the book back on the shelf and drop the loan
    pub fn return_item(&mut self) {
        self.state = LoanState::Available;
    }

    /// Case-sensitive substring match over title, author and category
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.author.contains(query) || self.category.contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{date::DateArithmetic, policy::Clock};

    fn gatsby() -> CatalogEntry {
        CatalogEntry::new("B001", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction")
    }

    #[test]
    fn new_entry_is_available() {
        let entry = gatsby();
        assert_eq!(entry.id(), "B001");
        assert_eq!(entry.title(), "The Great Gatsby");
        assert_eq!(entry.author(), "F. Scott Fitzgerald");
        assert_eq!(entry.category(), "Fiction");
        assert!(!entry.is_issued());
        assert_eq!(entry.status(), LoanStatus::Available);
        assert_eq!(entry.borrower(), "");
        assert_eq!(entry.issue_date(), None);
        assert_eq!(entry.due_date(), None);
    }

    #[test]
    fn issue_sets_borrower_and_dates() {
        let mut entry = gatsby();
        entry.issue("Alice");

        assert!(entry.is_issued());
        assert_eq!(entry.borrower(), "Alice");
        assert_eq!(entry.issue_date(), Some(CalendarDate::new(1, 1, 2023)));
        assert_eq!(entry.due_date(), Some(CalendarDate::new(15, 1, 2023)));
    }

    #[test]
    fn issue_twice_overwrites_borrower() {
        let mut entry = gatsby();
        entry.issue("Alice");
        entry.issue("Bob");

        assert!(entry.is_issued());
        assert_eq!(entry.borrower(), "Bob");
    }

    #[test]
    fn issue_with_day_field_policy() {
        let policy = LoanPolicy {
            arithmetic: DateArithmetic::DayField,
            clock: Clock::Fixed(CalendarDate::new(25, 1, 2023)),
            ..LoanPolicy::default()
        };
        let mut entry = gatsby();
        entry.issue_with("Alice", &policy);

        assert_eq!(entry.issue_date(), Some(CalendarDate::new(25, 1, 2023)));
        assert_eq!(entry.due_date(), Some(CalendarDate::new(39, 1, 2023)));
    }

    #[test]
    fn issue_date_never_after_due_date() {
        let policy = LoanPolicy {
            clock: Clock::Fixed(CalendarDate::new(25, 12, 2023)),
            ..LoanPolicy::default()
        };
        let mut entry = gatsby();
        entry.issue_with("Alice", &policy);

        assert!(entry.issue_date() <= entry.due_date());
        assert_eq!(entry.due_date(), Some(CalendarDate::new(8, 1, 2024)));
    }

    #[test]
    fn return_clears_loan() {
        let mut entry = gatsby();
        entry.issue("Alice");
        entry.return_item();

        assert!(!entry.is_issued());
        assert_eq!(entry.borrower(), "");
        assert_eq!(entry.due_date(), None);
    }

    #[test]
    fn return_on_available_entry_is_harmless() {
        let mut entry = gatsby();
        entry.return_item();
        assert_eq!(entry, gatsby());
    }

    #[test]
    fn matches_any_text_field_case_sensitively() {
        let entry = gatsby();
        assert!(entry.matches("Great"));
        assert!(entry.matches("Fitzgerald"));
        assert!(entry.matches("Fic"));
        assert!(entry.matches(""));
        assert!(!entry.matches("great"));
        assert!(!entry.matches("B001"));
    }
}
