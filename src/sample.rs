//! The books a fresh catalog starts with.

use crate::{catalog::Catalog, entry::CatalogEntry, error::CatalogError};

/// The five sample books, in shelf order
#[must_use]
pub fn sample_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("B001", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction"),
        CatalogEntry::new("B002", "To Kill a Mockingbird", "Harper Lee", "Fiction"),
        CatalogEntry::new("B003", "1984", "George Orwell", "Science Fiction"),
        CatalogEntry::new("B004", "The Hobbit", "J.R.R. Tolkien", "Fantasy"),
        CatalogEntry::new("B005", "Pride and Prejudice", "Jane Austen", "Romance"),
    ]
}

/// Add the sample books to `catalog`
///
/// # Errors
///
/// Returns `CatalogError::DuplicateIdentifier` if a sample id is already taken.
pub fn seed(catalog: &mut Catalog) -> Result<(), CatalogError> {
    for entry in sample_entries() {
        catalog.add(entry)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_five_books_in_order() {
        let mut catalog = Catalog::new();
        assert!(seed(&mut catalog).is_ok());

        let ids: Vec<&str> = catalog.list_all().iter().map(CatalogEntry::id).collect();
        assert_eq!(ids, ["B001", "B002", "B003", "B004", "B005"]);
        assert_eq!(catalog.issued_count(), 0);
    }

    #[test]
    fn seeding_twice_hits_duplicate() {
        let mut catalog = Catalog::new();
        assert!(seed(&mut catalog).is_ok());
        assert_eq!(
            seed(&mut catalog),
            Err(CatalogError::DuplicateIdentifier { id: "B001".to_string() })
        );
        assert_eq!(catalog.len(), 5);
    }
}
