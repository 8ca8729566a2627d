use crate::{
    catalog::{Catalog, StateTransition},
    entry::CatalogEntry,
};

/// Horizontal rule framing the catalog table
pub const TABLE_RULE: &str =
    "----------------------------------------------------------------------";

/// Fixed-width table of entries: ID, title, author, category, then status
#[must_use]
pub fn catalog_table(entries: &[&CatalogEntry]) -> String {
    let mut table = format!("{TABLE_RULE}\n");
    table.push_str(&format!(
        "{:<10}{:<30}{:<20}{:<15}Status\n",
        "ID", "Title", "Author", "Category"
    ));
    table.push_str(&format!("{TABLE_RULE}\n"));
    for entry in entries {
        table.push_str(&format!(
            "{:<10}{:<30}{:<20}{:<15}{}\n",
            entry.id(),
            entry.title(),
            entry.author(),
            entry.category(),
            entry.status()
        ));
    }
    table.push_str(&format!("{TABLE_RULE}\n"));
    table
}

/// Generate a markdown table of the loan history
#[must_use]
pub fn history_table(transitions: &[StateTransition]) -> String {
    if transitions.is_empty() {
        return "No loans recorded yet.".to_string();
    }

    let mut table = String::from("| # | Book | Borrower | From | To | Date |\n");
    table.push_str("|---|------|----------|------|----|------|\n");

    for (n, transition) in (1_usize..).zip(transitions) {
        table.push_str(&format!(
            "| {n} | {} | {} | {} | {} | {} |\n",
            transition.entry_id,
            transition.borrower,
            transition.from,
            transition.to,
            transition.date
        ));
    }

    table
}

/// One-line count of books by loan status
#[must_use]
pub fn summary(catalog: &Catalog) -> String {
    let issued = catalog.issued_count();
    let available = catalog.len().saturating_sub(issued);
    format!("Total books: {}, issued: {issued}, available: {available}", catalog.len())
}
