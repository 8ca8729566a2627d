//! Error types for the library catalog.

use std::path::PathBuf;

/// Failures of guarded catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No entry carries the identifier.
    #[error("no book with id {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// An entry with the identifier is already in the catalog.
    #[error("a book with id {id} already exists")]
    DuplicateIdentifier {
        /// The conflicting identifier.
        id: String,
    },

    /// The identifier is empty or only whitespace.
    #[error("book id must not be empty")]
    EmptyIdentifier,

    /// The borrower name is empty or only whitespace.
    #[error("borrower name for book {id} must not be empty")]
    EmptyBorrower {
        /// Identifier of the book being issued.
        id: String,
    },

    /// The entry is already lent out.
    #[error("book {id} is already issued to {borrower}")]
    AlreadyIssued {
        /// Identifier of the book.
        id: String,
        /// Current borrower.
        borrower: String,
    },

    /// The entry is not lent out.
    #[error("book {id} is not issued to anyone")]
    NotIssued {
        /// Identifier of the book.
        id: String,
    },
}

/// Failures while loading the TOML configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}", path.display())]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("failed to parse config {}", path.display())]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}
