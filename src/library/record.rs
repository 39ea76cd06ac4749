//! Book records held by the catalog.
//!
//! Two variants share one capability surface ([`Describable`]):
//! physical books carry the four base attributes, electronic books add a
//! file size. [`Record`] is the tagged union the catalog stores.

use std::fmt;

use serde::Deserialize;

/// Capabilities every book-like record exposes
pub trait Describable {
    /// Human-readable rendering of every attribute
    fn describe(&self) -> String;

    /// The unique key (ISBN)
    fn identifier(&self) -> &str;

    /// The book title
    fn title(&self) -> &str;
}

/// A printed book
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhysicalBook {
    title: String,
    author: String,
    isbn: String,
    available: bool,
}

impl PhysicalBook {
    /// Create a new physical book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}

impl Describable for PhysicalBook {
    fn describe(&self) -> String {
        format!(
            "Title: {}, Author: {}, ISBN: {}, Available: {}",
            self.title, self.author, self.isbn, self.available
        )
    }

    fn identifier(&self) -> &str {
        &self.isbn
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// An electronic book with a download size
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ElectronicBook {
    title: String,
    author: String,
    isbn: String,
    available: bool,

    /// File size in megabytes
    file_size_mb: u32,
}

impl ElectronicBook {
    /// Create a new electronic book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        available: bool,
        file_size_mb: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available,
            file_size_mb,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn file_size_mb(&self) -> u32 {
        self.file_size_mb
    }
}

impl Describable for ElectronicBook {
    fn describe(&self) -> String {
        format!(
            "Title: {}, Author: {}, ISBN: {}, Available: {}, FileSize: {}MB",
            self.title, self.author, self.isbn, self.available, self.file_size_mb
        )
    }

    fn identifier(&self) -> &str {
        &self.isbn
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Any record the catalog can hold
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    /// Printed book
    Physical(PhysicalBook),

    /// Electronic book
    Electronic(ElectronicBook),
}

impl Record {
    pub fn author(&self) -> &str {
        match self {
            Record::Physical(book) => book.author(),
            Record::Electronic(book) => book.author(),
        }
    }

    pub fn is_available(&self) -> bool {
        match self {
            Record::Physical(book) => book.is_available(),
            Record::Electronic(book) => book.is_available(),
        }
    }

    /// Short label for the variant, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Physical(_) => "physical",
            Record::Electronic(_) => "electronic",
        }
    }
}

impl Describable for Record {
    fn describe(&self) -> String {
        match self {
            Record::Physical(book) => book.describe(),
            Record::Electronic(book) => book.describe(),
        }
    }

    fn identifier(&self) -> &str {
        match self {
            Record::Physical(book) => book.identifier(),
            Record::Electronic(book) => book.identifier(),
        }
    }

    fn title(&self) -> &str {
        match self {
            Record::Physical(book) => book.title(),
            Record::Electronic(book) => book.title(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<PhysicalBook> for Record {
    fn from(book: PhysicalBook) -> Self {
        Record::Physical(book)
    }
}

impl From<ElectronicBook> for Record {
    fn from(book: ElectronicBook) -> Self {
        Record::Electronic(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_describe() {
        let book = PhysicalBook::new("1984", "Orwell", "111", true);

        assert_eq!(
            book.describe(),
            "Title: 1984, Author: Orwell, ISBN: 111, Available: true"
        );
        assert_eq!(book.identifier(), "111");
        assert_eq!(book.title(), "1984");
    }

    #[test]
    fn test_electronic_describe_includes_file_size() {
        let book = ElectronicBook::new("Dune", "Herbert", "222", false, 12);

        assert_eq!(
            book.describe(),
            "Title: Dune, Author: Herbert, ISBN: 222, Available: false, FileSize: 12MB"
        );
        assert_eq!(book.file_size_mb(), 12);
    }

    #[test]
    fn test_record_delegates_to_variant() {
        let record: Record = ElectronicBook::new("Dune", "Herbert", "222", false, 12).into();

        assert_eq!(record.identifier(), "222");
        assert_eq!(record.title(), "Dune");
        assert_eq!(record.author(), "Herbert");
        assert!(!record.is_available());
        assert_eq!(record.kind(), "electronic");
        assert_eq!(record.to_string(), record.describe());
    }

    #[test]
    fn test_record_deserializes_with_kind_tag() {
        let yaml = r#"
kind: electronic
title: Dune
author: Herbert
isbn: "222"
available: false
file_size_mb: 12
"#;
        let record: Record = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            record,
            Record::Electronic(ElectronicBook::new("Dune", "Herbert", "222", false, 12))
        );
    }
}
