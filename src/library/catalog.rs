//! Catalog of book records.
//!
//! Keeps records in insertion order and enforces identifier uniqueness.
//! Lookups are linear scans over a `Vec`; at the size of a personal
//! library an index would cost more than it saves.

use thiserror::Error;
use tracing::debug;

use super::record::{Describable, Record};

/// Errors returned by catalog mutations. The catalog is unchanged on either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("book with the same ISBN already exists")]
    DuplicateIdentifier(String),

    #[error("book not found")]
    NotFound(String),
}

impl CatalogError {
    /// The identifier the failed operation was called with
    pub fn identifier(&self) -> &str {
        match self {
            CatalogError::DuplicateIdentifier(id) | CatalogError::NotFound(id) => id,
        }
    }
}

/// In-memory catalog of books and ebooks
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog by adding each record in turn.
    ///
    /// Records rejected by [`Catalog::add`] are returned alongside the
    /// catalog instead of aborting the whole batch.
    pub fn with_records(
        records: impl IntoIterator<Item = Record>,
    ) -> (Self, Vec<CatalogError>) {
        let mut catalog = Self::new();
        let rejected = records
            .into_iter()
            .filter_map(|record| catalog.add(record).err())
            .collect();

        (catalog, rejected)
    }

    /// Append a record unless its identifier is already present
    pub fn add(&mut self, record: impl Into<Record>) -> Result<(), CatalogError> {
        let record = record.into();

        if self.get(record.identifier()).is_some() {
            debug!(isbn = record.identifier(), "Rejected duplicate identifier");
            return Err(CatalogError::DuplicateIdentifier(
                record.identifier().to_string(),
            ));
        }

        debug!(
            isbn = record.identifier(),
            kind = record.kind(),
            "Added record"
        );
        self.records.push(record);
        Ok(())
    }

    /// Remove the record with the given identifier, returning it
    pub fn remove(&mut self, identifier: &str) -> Result<Record, CatalogError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.identifier() == identifier)
            .ok_or_else(|| CatalogError::NotFound(identifier.to_string()))?;

        debug!(isbn = identifier, "Removed record");
        Ok(self.records.remove(pos))
    }

    /// Get a record by identifier (exact match)
    pub fn get(&self, identifier: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.identifier() == identifier)
    }

    /// Records whose title contains `query` (case-insensitive), in catalog order
    pub fn search_by_title<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Record> + 'a {
        let query_lower = query.to_lowercase();

        self.records
            .iter()
            .filter(move |r| r.title().to_lowercase().contains(&query_lower))
    }

    /// All records in insertion order
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::record::{ElectronicBook, PhysicalBook};

    #[test]
    fn test_catalog_add_and_get() {
        let mut catalog = Catalog::new();
        catalog
            .add(PhysicalBook::new("1984", "Orwell", "111", true))
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("111").unwrap().title(), "1984");
        assert!(catalog.get("222").is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicate() {
        let mut catalog = Catalog::new();
        catalog
            .add(PhysicalBook::new("1984", "Orwell", "111", true))
            .unwrap();

        let result = catalog.add(ElectronicBook::new("Other", "Someone", "111", false, 3));

        assert_eq!(
            result,
            Err(CatalogError::DuplicateIdentifier("111".to_string()))
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list()[0].title(), "1984");
    }

    #[test]
    fn test_identifier_match_is_case_sensitive() {
        let mut catalog = Catalog::new();
        catalog
            .add(PhysicalBook::new("A", "X", "isbn-a", true))
            .unwrap();

        assert!(catalog.add(PhysicalBook::new("B", "Y", "ISBN-A", true)).is_ok());
        assert!(matches!(
            catalog.remove("Isbn-A"),
            Err(CatalogError::NotFound(_))
        ));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_search() {
        let mut catalog = Catalog::new();
        catalog
            .add(PhysicalBook::new("Dune Messiah", "Herbert", "1", true))
            .unwrap();
        catalog
            .add(ElectronicBook::new("Children of Dune", "Herbert", "2", true, 4))
            .unwrap();
        catalog
            .add(PhysicalBook::new("Neuromancer", "Gibson", "3", false))
            .unwrap();

        let ids: Vec<_> = catalog.search_by_title("DUNE").map(|r| r.identifier()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        assert_eq!(catalog.search_by_title("python").count(), 0);
        assert_eq!(catalog.search_by_title("").count(), 3);
    }

    #[test]
    fn test_catalog_remove_preserves_order() {
        let mut catalog = Catalog::new();
        for id in ["a", "b", "c"] {
            catalog.add(PhysicalBook::new(id, "Author", id, true)).unwrap();
        }

        let removed = catalog.remove("b").unwrap();
        assert_eq!(removed.identifier(), "b");

        let ids: Vec<_> = catalog.iter().map(|r| r.identifier()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_with_records_reports_duplicates() {
        let (catalog, rejected) = Catalog::with_records([
            PhysicalBook::new("1984", "Orwell", "111", true).into(),
            ElectronicBook::new("Dune", "Herbert", "222", false, 12).into(),
            PhysicalBook::new("Again", "Someone", "111", true).into(),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].identifier(), "111");
    }
}
