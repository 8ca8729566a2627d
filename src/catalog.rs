use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    date::CalendarDate,
    entry::CatalogEntry,
    error::CatalogError,
    events::CatalogEvent,
    loan_state::{LoanState, LoanStatus},
    observers::CatalogObserver,
    policy::LoanPolicy,
};

/// Default number of loan transitions kept in the history
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// A loan state change of one entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StateTransition {
    /// Identifier of the entry
    pub entry_id: String,
    /// The status before the transition
    pub from: LoanStatus,
    /// The status after the transition
    pub to: LoanStatus,
    /// Borrower involved in the loan
    pub borrower: String,
    /// Date the transition took place
    pub date: CalendarDate,
}

/// Ordered, in-memory collection of catalog entries
pub struct Catalog {
    /// Entries in insertion order
    entries: Vec<CatalogEntry>,
    /// Rules used by guarded issue
    policy: LoanPolicy,
    /// Record of loan transitions
    history: Vec<StateTransition>,
    /// Maximum number of history entries to keep
    max_history_size: usize,
    /// Registered change observers
    observers: Vec<Box<dyn CatalogObserver>>,
}

// Manual implementation of Debug for Catalog
impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("entries", &self.entries)
            .field("policy", &self.policy)
            .field("history", &self.history)
            .field("max_history_size", &self.max_history_size)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog with the default loan policy
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(LoanPolicy::default())
    }

    /// Create an empty catalog that issues books under `policy`
    #[must_use]
    pub fn with_policy(policy: LoanPolicy) -> Self {
        Self {
            entries: Vec::new(),
            policy,
            history: Vec::new(),
            max_history_size: DEFAULT_HISTORY_LIMIT,
            observers: Vec::new(),
        }
    }

    /// Keep at most `limit` loan transitions
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.max_history_size = limit;
        self.trim_history();
        self
    }

    /// Register an observer to be notified of catalog changes
    pub fn register_observer(&mut self, observer: Box<dyn CatalogObserver>) {
        self.observers.push(observer);
    }

    /// The loan policy used by [`Catalog::issue`]
    #[must_use]
    pub const fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyIdentifier` if the id is blank and
    /// `CatalogError::DuplicateIdentifier` if the id is already taken.
    pub fn add(&mut self, entry: CatalogEntry) -> Result<(), CatalogError> {
        if entry.id().trim().is_empty() {
            return Err(CatalogError::EmptyIdentifier);
        }
        if self.contains(entry.id()) {
            return Err(CatalogError::DuplicateIdentifier { id: entry.id().to_string() });
        }

        debug!(id = entry.id(), title = entry.title(), "adding entry");
        let event = CatalogEvent::Added { id: entry.id().to_string() };
        self.entries.push(entry);
        notify(&self.observers, &event);
        Ok(())
    }

    /// Remove the first entry with `id` and hand it back.
    ///
    /// Returns `None` and leaves the catalog untouched when no entry matches.
    pub fn remove(&mut self, id: &str) -> Option<CatalogEntry> {
        let idx = self.position(id)?;
        let entry = self.entries.remove(idx);

        debug!(id, "removed entry");
        notify(&self.observers, &CatalogEvent::Removed { id: entry.id().to_string() });
        Some(entry)
    }

    /// Whether an entry with `id` exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Index of the first entry with `id`
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    /// First entry with `id`
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// First entry with `id`, mutably.
    ///
    /// Changes made through this handle bypass history and observers.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut CatalogEntry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    /// Entries whose title, author or category contains `query`, in
    /// insertion order. An empty query matches every entry.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| e.matches(query)).collect()
    }

    /// All entries in insertion order
    #[must_use]
    pub fn list_all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All entries in insertion order, mutably.
    ///
    /// Changes made through this view bypass history and observers.
    pub fn list_all_mut(&mut self) -> &mut [CatalogEntry] {
        &mut self.entries
    }

    /// Issue the book `id` to `borrower` under the catalog's loan policy.
    ///
    /// # Errors
    ///
    /// - `CatalogError::EmptyBorrower` if the borrower name is blank
    /// - `CatalogError::NotFound` if no entry has the id
    /// - `CatalogError::AlreadyIssued` if the book is lent out
    pub fn issue(&mut self, id: &str, borrower: &str) -> Result<&CatalogEntry, CatalogError> {
        let borrower = borrower.trim();
        if borrower.is_empty() {
            return Err(CatalogError::EmptyBorrower { id: id.to_string() });
        }

        let policy = self.policy;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

        if let LoanState::Issued(loan) = entry.state() {
            return Err(CatalogError::AlreadyIssued {
                id: id.to_string(),
                borrower: loan.borrower().to_string(),
            });
        }

        entry.issue_with(borrower, &policy);
        let issue_date = entry.issue_date().unwrap_or_else(|| policy.today());
        let due_date = entry.due_date().unwrap_or(issue_date);
        debug!(id, borrower, %issue_date, %due_date, "issued entry");

        let transition = StateTransition {
            entry_id: id.to_string(),
            from: LoanStatus::Available,
            to: LoanStatus::Issued,
            borrower: borrower.to_string(),
            date: issue_date,
        };
        record(&mut self.history, self.max_history_size, transition);

        let event =
            CatalogEvent::Issued { id: id.to_string(), borrower: borrower.to_string(), due_date };
        notify(&self.observers, &event);

        Ok(&*entry)
    }

    /// Return the book `id` to the shelf.
    ///
    /// # Errors
    ///
    /// - `CatalogError::NotFound` if no entry has the id
    /// - `CatalogError::NotIssued` if the book is not lent out
    pub fn return_item(&mut self, id: &str) -> Result<&CatalogEntry, CatalogError> {
        let today = self.policy.today();
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

        let borrower = match entry.state() {
            LoanState::Issued(loan) => loan.borrower().to_string(),
            LoanState::Available => return Err(CatalogError::NotIssued { id: id.to_string() }),
        };

        entry.return_item();
        debug!(id, %borrower, "returned entry");

        let transition = StateTransition {
            entry_id: id.to_string(),
            from: LoanStatus::Issued,
            to: LoanStatus::Available,
            borrower: borrower.clone(),
            date: today,
        };
        record(&mut self.history, self.max_history_size, transition);

        let event = CatalogEvent::Returned { id: id.to_string(), borrower };
        notify(&self.observers, &event);

        Ok(&*entry)
    }

    /// Loan transitions, oldest first
    #[must_use]
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Number of entries currently lent out
    #[must_use]
    pub fn issued_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_issued()).count()
    }

    /// Drop the oldest transitions beyond the history limit
    fn trim_history(&mut self) {
        let excess = self.history.len().saturating_sub(self.max_history_size);
        drop(self.history.drain(..excess));
    }
}

/// Append `transition`, dropping the oldest entry once `limit` is exceeded
fn record(history: &mut Vec<StateTransition>, limit: usize, transition: StateTransition) {
    history.push(transition);
    let excess = history.len().saturating_sub(limit);
    drop(history.drain(..excess));
}

/// Tell every observer about `event`
fn notify(observers: &[Box<dyn CatalogObserver>], event: &CatalogEvent) {
    for observer in observers {
        observer.on_event(event);
    }
}
