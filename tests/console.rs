//! Scripted console sessions against a sample catalog.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::io::Cursor;

use library_catalog::{Catalog, CatalogEntry, Console, sample};

fn session(catalog: Catalog, script: &str) -> (Catalog, String) {
    let mut console = Console::new(catalog, Cursor::new(script.to_string()), Vec::new());
    console.run().expect("session runs");
    let (catalog, output) = console.into_parts();
    (catalog, String::from_utf8(output).expect("output is utf-8"))
}

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    sample::seed(&mut catalog).expect("samples seed");
    catalog
}

#[test]
fn exit_prints_farewell() {
    let (_, output) = session(sample_catalog(), "0\n");
    assert!(output.contains("MAIN MENU"));
    assert!(output.contains("7. View Loan History"));
    assert!(output.contains("Thank you for using the Library Management System!"));
}

#[test]
fn end_of_input_ends_session() {
    let (catalog, output) = session(sample_catalog(), "");
    assert!(output.contains("Enter your choice: "));
    assert!(!output.contains("Thank you"));
    assert_eq!(catalog.len(), 5);
}

#[test]
fn invalid_choice_is_reported() {
    let (_, output) = session(sample_catalog(), "9\n0\n");
    assert!(output.contains("Invalid choice. Please try again."));
}

#[test]
fn add_book_appends_entry() {
    let script = "1\nB006\nDune\nFrank Herbert\nScience Fiction\n0\n";
    let (catalog, output) = session(sample_catalog(), script);

    assert!(output.contains("Book added successfully!"));
    assert_eq!(catalog.len(), 6);
    assert_eq!(
        catalog.list_all().last(),
        Some(&CatalogEntry::new("B006", "Dune", "Frank Herbert", "Science Fiction"))
    );
}

#[test]
fn add_book_rejects_existing_id_before_asking_title() {
    let (catalog, output) = session(sample_catalog(), "1\nB001\n0\n");

    assert!(output.contains("Error: A book with this ID already exists!"));
    assert!(!output.contains("Enter Title: "));
    assert_eq!(catalog.len(), 5);
}

#[test]
fn add_book_keeps_first_word_of_id() {
    let script = "1\nB007 extra words\nEmma\nJane Austen\nRomance\n0\n";
    let (catalog, _) = session(sample_catalog(), script);
    assert!(catalog.contains("B007"));
}

#[test]
fn remove_book_reports_outcome() {
    let (catalog, output) = session(sample_catalog(), "2\nB003\n2\nB003\n0\n");

    assert!(output.contains("Book removed successfully!"));
    assert!(output.contains("Error: Book not found!"));
    assert!(catalog.find("B003").is_none());
    assert_eq!(catalog.len(), 4);
}

#[test]
fn search_lists_matches_in_table() {
    let (_, output) = session(sample_catalog(), "3\nFiction\n0\n");

    assert!(output.contains("Search Results:"));
    assert!(output.contains("The Great Gatsby"));
    assert!(output.contains("To Kill a Mockingbird"));
    assert!(output.contains("1984"));
    assert!(!output.contains("The Hobbit"));
}

#[test]
fn search_without_matches() {
    let (_, output) = session(sample_catalog(), "3\nTolstoy\n0\n");
    assert!(output.contains("No books found matching your search."));
}

#[test]
fn display_all_on_empty_catalog() {
    let (_, output) = session(Catalog::new(), "4\n0\n");
    assert!(output.contains("No books in the library."));
}

#[test]
fn display_all_shows_every_book_and_summary() {
    let (_, output) = session(sample_catalog(), "4\n0\n");

    for title in ["The Great Gatsby", "To Kill a Mockingbird", "1984", "The Hobbit"] {
        assert!(output.contains(title), "missing {title}");
    }
    assert!(output.contains("Pride and Prejudice"));
    assert!(output.contains("Total books: 5, issued: 0, available: 5"));
}

#[test]
fn issue_book_prints_dates() {
    let (catalog, output) = session(sample_catalog(), "5\nB001\nAlice\n0\n");

    assert!(output.contains("Book issued successfully!"));
    assert!(output.contains("Issue Date: 1/1/2023"));
    assert!(output.contains("Return Date: 15/1/2023"));
    assert!(output.contains("Status: Book is issued to Alice until 15/1/2023"));
    assert_eq!(catalog.find("B001").map(CatalogEntry::borrower), Some("Alice"));
}

#[test]
fn issue_book_already_issued() {
    let (catalog, output) = session(sample_catalog(), "5\nB001\nAlice\n5\nB001\n0\n");

    assert!(output.contains("Error: Book is already issued to Alice!"));
    assert_eq!(catalog.find("B001").map(CatalogEntry::borrower), Some("Alice"));
}

#[test]
fn issue_book_missing_id() {
    let (_, output) = session(sample_catalog(), "5\nB404\n0\n");
    assert!(output.contains("Error: Book not found!"));
    assert!(!output.contains("Enter Student Name: "));
}

#[test]
fn issue_book_rejects_blank_name() {
    let (catalog, output) = session(sample_catalog(), "5\nB002\n   \n0\n");
    assert!(output.contains("Error: borrower name for book B002 must not be empty"));
    assert!(catalog.find("B002").is_some_and(|e| !e.is_issued()));
}

#[test]
fn return_book_confirmed() {
    let script = "5\nB004\nBob\n6\nB004\ny\n0\n";
    let (catalog, output) = session(sample_catalog(), script);

    assert!(output.contains("Book Details:"));
    assert!(output.contains("Title: The Hobbit"));
    assert!(output.contains("Issued To: Bob"));
    assert!(output.contains("Book returned successfully!"));
    assert!(output.contains("Status: Book is available for issue"));
    assert!(catalog.find("B004").is_some_and(|e| !e.is_issued()));
}

#[test]
fn return_book_cancelled() {
    let script = "5\nB004\nBob\n6\nB004\nN\n0\n";
    let (catalog, output) = session(sample_catalog(), script);

    assert!(output.contains("Return cancelled."));
    assert!(!output.contains("Status: Book is available for issue"));
    assert_eq!(catalog.find("B004").map(CatalogEntry::borrower), Some("Bob"));
}

#[test]
fn return_book_not_issued() {
    let (_, output) = session(sample_catalog(), "6\nB005\n0\n");
    assert!(output.contains("Error: Book is not issued to anyone!"));
    assert!(!output.contains("Confirm return"));
}

#[test]
fn loan_history_screen() {
    let script = "5\nB002\nCarol\n6\nB002\nY\n7\n0\n";
    let (catalog, output) = session(sample_catalog(), script);

    assert_eq!(catalog.history().len(), 2);
    assert!(output.contains("LOAN HISTORY"));
    assert!(output.contains("| 1 | B002 | Carol | Available | Issued | 1/1/2023 |"));
    assert!(output.contains("| 2 | B002 | Carol | Issued | Available | 1/1/2023 |"));
}

#[test]
fn loan_history_empty() {
    let (_, output) = session(sample_catalog(), "7\n0\n");
    assert!(output.contains("No loans recorded yet."));
}

#[test]
fn console_exposes_catalog_during_session() {
    let console = Console::new(sample_catalog(), Cursor::new(String::new()), Vec::new());
    assert_eq!(console.catalog().len(), 5);
    assert!(console.catalog().history().is_empty());
}
