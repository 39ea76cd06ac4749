//! Interactive menu loop over a [`Catalog`].
//!
//! Reads one line per prompt from any `BufRead` and writes to any `Write`,
//! so the binary drives it with stdin/stdout and tests with byte buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::library::{Catalog, Describable, ElectronicBook, PhysicalBook};

/// Presentation settings for the shell
#[derive(Debug, Clone)]
pub struct ShellSettings {
    /// Heading printed above the menu
    pub banner: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            banner: crate::config::DEFAULT_BANNER.to_string(),
        }
    }
}

/// Menu entries, numbered as printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    AddEBook,
    Remove,
    Search,
    List,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection; `None` for anything that is not a listed number
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuChoice::AddBook),
            2 => Some(MenuChoice::AddEBook),
            3 => Some(MenuChoice::Remove),
            4 => Some(MenuChoice::Search),
            5 => Some(MenuChoice::List),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Coerce a yes/no answer. Unrecognized input is `false`.
pub fn parse_bool(input: &str) -> bool {
    match input.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => true,
        "0" | "f" | "F" | "FALSE" | "false" | "False" => false,
        other => {
            debug!(input = other, "Unrecognized boolean, using false");
            false
        }
    }
}

/// Coerce a file size. Unparsable input is `0`.
pub fn parse_file_size(input: &str) -> u32 {
    input.trim().parse().unwrap_or_else(|_| {
        debug!(input = input.trim(), "Unparsable file size, using 0");
        0
    })
}

/// Whether the loop should keep going after a command
enum Flow {
    Continue,
    Stop,
}

/// Read-eval loop that owns the catalog
pub struct Shell<R, W> {
    catalog: Catalog,
    input: R,
    output: W,
    settings: ShellSettings,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W, settings: ShellSettings) -> Self {
        Self {
            catalog,
            input,
            output,
            settings,
        }
    }

    /// Give back the catalog once the loop is done
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Run until the exit command or end of input
    pub fn run(&mut self) -> Result<()> {
        info!(records = self.catalog.len(), "Shell started");

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("End of input at menu");
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Stop = flow {
                break;
            }
        }

        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!(?choice, "Menu selection");

        match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::AddEBook => self.add_ebook(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::Search => self.search(),
            MenuChoice::List => {
                self.list()?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => {
                writeln!(
                    self.output,
                    "Exiting the Library Management System. Goodbye!"
                )?;
                Ok(Flow::Stop)
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.settings.banner)?;
        writeln!(self.output, "1. Add a Book")?;
        writeln!(self.output, "2. Add an EBook")?;
        writeln!(self.output, "3. Remove a Book/EBook")?;
        writeln!(self.output, "4. Search for Books by Title")?;
        writeln!(self.output, "5. List all Books/EBooks")?;
        writeln!(self.output, "6. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Next line without its terminator, `None` at end of input.
    /// Invalid UTF-8 is replaced rather than rejected.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush().context("Failed to flush output")?;
        self.read_line()
    }

    /// Title, author and ISBN, in prompt order
    fn prompt_common(&mut self) -> Result<Option<(String, String, String)>> {
        let Some(title) = self.prompt("Enter Title: ")? else {
            return Ok(None);
        };
        let Some(author) = self.prompt("Enter Author: ")? else {
            return Ok(None);
        };
        let Some(isbn) = self.prompt("Enter ISBN: ")? else {
            return Ok(None);
        };
        Ok(Some((title, author, isbn)))
    }

    fn add_book(&mut self) -> Result<Flow> {
        let Some((title, author, isbn)) = self.prompt_common()? else {
            return Ok(Flow::Stop);
        };
        let Some(available) = self.prompt("Is the book available (true/false): ")? else {
            return Ok(Flow::Stop);
        };

        let book = PhysicalBook::new(title, author, isbn, parse_bool(&available));
        match self.catalog.add(book) {
            Ok(()) => writeln!(self.output, "Book added successfully!")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn add_ebook(&mut self) -> Result<Flow> {
        let Some((title, author, isbn)) = self.prompt_common()? else {
            return Ok(Flow::Stop);
        };
        let Some(file_size) = self.prompt("Enter File Size (in MB): ")? else {
            return Ok(Flow::Stop);
        };
        let Some(available) = self.prompt("Is the eBook available (true/false): ")? else {
            return Ok(Flow::Stop);
        };

        let ebook = ElectronicBook::new(
            title,
            author,
            isbn,
            parse_bool(&available),
            parse_file_size(&file_size),
        );
        match self.catalog.add(ebook) {
            Ok(()) => writeln!(self.output, "EBook added successfully!")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow> {
        let Some(isbn) = self.prompt("Enter ISBN to remove: ")? else {
            return Ok(Flow::Stop);
        };

        match self.catalog.remove(&isbn) {
            Ok(_) => writeln!(self.output, "Book/EBook removed successfully!")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("Enter Title to search: ")? else {
            return Ok(Flow::Stop);
        };

        let mut found = false;
        for record in self.catalog.search_by_title(&query) {
            writeln!(self.output, "{}", record.describe())?;
            found = true;
        }

        if !found {
            writeln!(self.output, "No books found with the given title.")?;
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(self.output, "No books in the library.")?;
            return Ok(());
        }

        for record in self.catalog.list() {
            writeln!(self.output, "{}", record.describe())?;
        }
        Ok(())
    }
}
