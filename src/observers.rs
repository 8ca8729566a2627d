use std::fmt;

use tracing::info;

use crate::events::CatalogEvent;

/// Trait for catalog change observation
pub trait CatalogObserver: fmt::Debug {
    /// Called after a change has been applied to the catalog
    fn on_event(&self, event: &CatalogEvent);
}

/// Logs every catalog change through `tracing`
#[derive(Debug)]
pub struct TransitionLogger;

impl CatalogObserver for TransitionLogger {
    fn on_event(&self, event: &CatalogEvent) {
        match event {
            CatalogEvent::Added { id } => info!(%id, "book added"),
            CatalogEvent::Removed { id } => info!(%id, "book removed"),
            CatalogEvent::Issued { id, borrower, due_date } => {
                info!(%id, %borrower, %due_date, "book issued");
            }
            CatalogEvent::Returned { id, borrower } => info!(%id, %borrower, "book returned"),
        }
    }
}
