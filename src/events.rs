use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// Changes made to a catalog, reported to observers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CatalogEvent {
    /// A new entry was appended
    Added {
        /// Identifier of the new entry
        id: String,
    },
    /// An entry was removed
    Removed {
        /// Identifier of the removed entry
        id: String,
    },
    /// An entry was lent out
    Issued {
        /// Identifier of the issued entry
        id: String,
        /// Who borrowed it
        borrower: String,
        /// When it is due back
        due_date: CalendarDate,
    },
    /// An issued entry came back
    Returned {
        /// Identifier of the returned entry
        id: String,
        /// Who had borrowed it
        borrower: String,
    },
}
