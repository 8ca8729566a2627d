//! In-memory library catalog with loan tracking.
//!
//! This crate provides the catalog engine (books, loans, due dates) and a
//! line-oriented console front end that drives it.

pub mod catalog;
pub mod config;
pub mod console;
pub mod date;
pub mod entry;
pub mod error;
pub mod events;
pub mod loan_state;
pub mod observers;
pub mod policy;
pub mod render;
pub mod sample;

pub use catalog::{Catalog, StateTransition};
pub use config::LibraryConfig;
pub use console::Console;
pub use date::{CalendarDate, DateArithmetic};
pub use entry::CatalogEntry;
pub use error::{CatalogError, ConfigError};
pub use events::CatalogEvent;
pub use loan_state::{Loan, LoanState, LoanStatus};
pub use observers::{CatalogObserver, TransitionLogger};
pub use policy::{Clock, LoanPolicy};
