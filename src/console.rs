//! Interactive text menu over a [`Catalog`].
//!
//! The console reads operator input line by line from any [`BufRead`] and
//! writes prompts and tables to any [`Write`], so a session can be scripted.
//! End of input ends the session.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::{
    catalog::Catalog,
    entry::CatalogEntry,
    render::{catalog_table, history_table, summary},
};

/// Frame of the banner printed above every screen
const HEADER_RULE: &str = "========================================";

/// Main menu lines, in display order
const MENU: [&str; 8] = [
    "1. Add a New Book",
    "2. Remove a Book",
    "3. Search Books",
    "4. Display All Books",
    "5. Issue a Book",
    "6. Return a Book",
    "7. View Loan History",
    "0. Exit",
];

/// Menu-driven front end owning the catalog for the length of a session
#[derive(Debug)]
pub struct Console<R, W> {
    /// The catalog being managed
    catalog: Catalog,
    /// Operator input
    input: R,
    /// Screen output
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over `catalog`
    pub const fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self { catalog, input, output }
    }

    /// The catalog being managed
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Take back the catalog and the output sink
    pub fn into_parts(self) -> (Catalog, W) {
        (self.catalog, self.output)
    }

    /// Show the main menu until the operator exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading input or writing output.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.header()?;
            writeln!(self.output, "{}\n", "MAIN MENU".yellow().bold())?;
            for line in MENU {
                writeln!(self.output, "{line}")?;
            }
            writeln!(self.output)?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            match choice.trim() {
                "1" => self.add_book()?,
                "2" => self.remove_book()?,
                "3" => self.search_books()?,
                "4" => self.display_all_books()?,
                "5" => self.issue_book()?,
                "6" => self.return_book()?,
                "7" => self.loan_history()?,
                "0" => {
                    self.header()?;
                    writeln!(self.output, "Thank you for using the Library Management System!")?;
                    return Ok(());
                }
                _ => self.error("Invalid choice. Please try again.")?,
            }
        }
    }

    /// Add flow: the id is checked before the remaining fields are asked for
    fn add_book(&mut self) -> io::Result<()> {
        self.title("ADD NEW BOOK")?;

        let Some(id) = self.prompt_token("Enter Book ID: ")? else {
            return Ok(());
        };
        if id.is_empty() {
            return self.error("Error: Book ID must not be empty!");
        }
        if self.catalog.contains(&id) {
            return self.error("Error: A book with this ID already exists!");
        }

        let Some(title) = self.prompt("Enter Title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter Author: ")? else {
            return Ok(());
        };
        let Some(category) = self.prompt("Enter Category: ")? else {
            return Ok(());
        };

        match self.catalog.add(CatalogEntry::new(id, title, author, category)) {
            Ok(()) => self.success("Book added successfully!"),
            Err(e) => self.error(&format!("Error: {e}")),
        }
    }

    /// Remove flow
    fn remove_book(&mut self) -> io::Result<()> {
        self.title("REMOVE BOOK")?;

        let Some(id) = self.prompt_token("Enter Book ID to remove: ")? else {
            return Ok(());
        };

        if self.catalog.remove(&id).is_some() {
            self.success("Book removed successfully!")
        } else {
            self.error("Error: Book not found!")
        }
    }

    /// Search flow: the whole line is the query
    fn search_books(&mut self) -> io::Result<()> {
        self.title("SEARCH BOOKS")?;

        let Some(query) = self.prompt("Enter search term (title/author/category): ")? else {
            return Ok(());
        };

        let results = self.catalog.search(&query);
        if results.is_empty() {
            writeln!(self.output, "\nNo books found matching your search.")
        } else {
            writeln!(self.output, "\nSearch Results:")?;
            write!(self.output, "{}", catalog_table(&results))
        }
    }

    /// Listing flow
    fn display_all_books(&mut self) -> io::Result<()> {
        self.title("ALL BOOKS")?;

        if self.catalog.is_empty() {
            return writeln!(self.output, "No books in the library.");
        }

        let entries: Vec<&CatalogEntry> = self.catalog.list_all().iter().collect();
        write!(self.output, "{}", catalog_table(&entries))?;
        writeln!(self.output, "{}", summary(&self.catalog))
    }

    /// Issue flow
    fn issue_book(&mut self) -> io::Result<()> {
        self.title("ISSUE BOOK")?;

        let Some(id) = self.prompt_token("Enter Book ID: ")? else {
            return Ok(());
        };

        let Some(entry) = self.catalog.find(&id) else {
            return self.error("Error: Book not found!");
        };
        if entry.is_issued() {
            let message = format!("Error: Book is already issued to {}!", entry.borrower());
            return self.error(&message);
        }

        let Some(student) = self.prompt("Enter Student Name: ")? else {
            return Ok(());
        };

        let issued = self
            .catalog
            .issue(&id, &student)
            .map(|entry| (entry.issue_date(), entry.due_date(), entry.state().get_description()));
        match issued {
            Ok((issue_date, due_date, status)) => {
                self.success("Book issued successfully!")?;
                if let (Some(issue_date), Some(due_date)) = (issue_date, due_date) {
                    writeln!(self.output, "Issue Date: {issue_date}")?;
                    writeln!(self.output, "Return Date: {due_date}")?;
                }
                writeln!(self.output, "Status: {status}")
            }
            Err(e) => self.error(&format!("Error: {e}")),
        }
    }

    /// Return flow with Y/N confirmation
    fn return_book(&mut self) -> io::Result<()> {
        self.title("RETURN BOOK")?;

        let Some(id) = self.prompt_token("Enter Book ID: ")? else {
            return Ok(());
        };

        let Some(entry) = self.catalog.find(&id) else {
            return self.error("Error: Book not found!");
        };
        let Some(loan) = entry.state().loan() else {
            return self.error("Error: Book is not issued to anyone!");
        };

        writeln!(self.output, "\nBook Details:")?;
        writeln!(self.output, "Title: {}", entry.title())?;
        writeln!(self.output, "Issued To: {}", loan.borrower())?;
        writeln!(self.output, "Issue Date: {}", loan.issue_date())?;
        writeln!(self.output, "Return Date: {}", loan.due_date())?;
        writeln!(self.output)?;

        let Some(confirm) = self.prompt_token("Confirm return (Y/N): ")? else {
            return Ok(());
        };
        if !confirm.starts_with(['Y', 'y']) {
            return writeln!(self.output, "\nReturn cancelled.");
        }

        let returned = self.catalog.return_item(&id).map(|entry| entry.state().get_description());
        match returned {
            Ok(status) => {
                self.success("Book returned successfully!")?;
                writeln!(self.output, "Status: {status}")
            }
            Err(e) => self.error(&format!("Error: {e}")),
        }
    }

    /// Loan history screen
    fn loan_history(&mut self) -> io::Result<()> {
        self.title("LOAN HISTORY")?;
        writeln!(self.output, "{}\n", summary(&self.catalog))?;
        writeln!(self.output, "{}", history_table(self.catalog.history()))
    }

    /// Banner shown above every screen
    fn header(&mut self) -> io::Result<()> {
        writeln!(self.output, "{HEADER_RULE}")?;
        writeln!(self.output, "{}", "       LIBRARY MANAGEMENT SYSTEM        ".bold())?;
        writeln!(self.output, "{HEADER_RULE}\n")
    }

    /// Banner followed by a screen title
    fn title(&mut self, title: &str) -> io::Result<()> {
        self.header()?;
        writeln!(self.output, "{}\n", title.yellow().bold())
    }

    /// Print a success message
    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "\n{}", message.green())
    }

    /// Print an error message
    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "\n{}", message.red())
    }

    /// Show `label` and read one line without its line ending
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`Console::prompt`], keeping only the first whitespace-separated word
    fn prompt_token(&mut self, label: &str) -> io::Result<Option<String>> {
        Ok(self
            .prompt(label)?
            .map(|line| line.split_whitespace().next().unwrap_or_default().to_string()))
    }
}
