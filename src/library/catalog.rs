//! Catalog of personal records.
//!
//! Simple JSON-based index holding every record across the three
//! categories. Queries borrow from the in-memory collection; persistence
//! is a whole-file read or write.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::config;
use crate::domain::{Category, Record, RecordId};

use super::query::{self, SortKey};

/// Errors raised by catalog mutations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),
}

/// Catalog of all records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog format version
    pub version: u32,

    /// All records, in insertion order
    pub records: Vec<Record>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            version: 1,
            records: Vec::new(),
        }
    }

    /// Load the catalog from the configured path
    pub async fn load() -> Result<Self> {
        Self::load_from(&config::catalog_path()?).await
    }

    /// Save the catalog to the configured path
    pub async fn save(&self) -> Result<()> {
        self.save_to(&config::catalog_path()?).await
    }

    /// Load a catalog from a specific file; a missing file is an empty catalog
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No catalog file, starting empty");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse catalog JSON")
    }

    /// Save the catalog to a specific file
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;

        debug!(path = %path.display(), records = self.records.len(), "Catalog saved");
        Ok(())
    }

    /// Add a record, rejecting a duplicate id
    pub fn add(&mut self, record: Record) -> Result<(), CatalogError> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(CatalogError::DuplicateId(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    /// Get a record by id; `None` is the normal "not found" outcome
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Remove a record by id
    pub fn remove(&mut self, id: &RecordId) -> Option<Record> {
        let pos = self.records.iter().position(|r| &r.id == id)?;
        Some(self.records.remove(pos))
    }

    /// All records of a category, in insertion order
    pub fn list(&self, category: Category) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.category() == category)
            .collect()
    }

    /// All records across categories, in insertion order
    pub fn all(&self) -> Vec<&Record> {
        self.records.iter().collect()
    }

    /// Number of records in a category
    pub fn count(&self, category: Category) -> usize {
        self.records.iter().filter(|r| r.category() == category).count()
    }

    /// Search all records by case-insensitive substring on title/description
    pub fn search(&self, term: &str) -> Vec<&Record> {
        query::filter_by_search_term(self.all(), term)
    }

    /// Most recent records across all categories
    pub fn recent(&self, limit: usize) -> Vec<&Record> {
        let mut records = query::sort_records(self.all(), SortKey::Latest);
        records.truncate(limit);
        records
    }

    /// Total number of records
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
    use crate::domain::{Details, DocumentKind};

    fn document(id: &str, title: &str, date: &str, kind: DocumentKind) -> Record {
        Record::new(
            RecordId::new(id),
            title,
            date.parse().unwrap(),
            Details::Document {
                kind,
                document_number: format!("{}-0001", id.to_uppercase()),
                expiry_date: None,
                issuing_authority: "Test Authority".to_string(),
                location: "Test City".to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_catalog_add_and_get() {
        let mut catalog = Catalog::new();
        let record = document("doc-1", "Passport", "2023-02-10", DocumentKind::Identification);
        let id = record.id.clone();

        catalog.add(record).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&id).unwrap().title, "Passport");
    }

    #[test]
    fn test_catalog_rejects_duplicate_id() {
        let mut catalog = Catalog::new();
        catalog
            .add(document("doc-1", "Passport", "2023-02-10", DocumentKind::Identification))
            .unwrap();

        let result = catalog.add(document(
            "doc-1",
            "Driver's License",
            "2022-05-15",
            DocumentKind::Identification,
        ));

        assert!(matches!(result, Err(CatalogError::DuplicateId(_))));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_get_unknown_id_is_none() {
        let catalog = Catalog::new();
        assert!(catalog.get(&RecordId::new("does-not-exist")).is_none());
    }

    #[test]
    fn test_catalog_remove() {
        let mut catalog = Catalog::new();
        let record = document("doc-1", "Passport", "2023-02-10", DocumentKind::Identification);
        let id = record.id.clone();

        catalog.add(record).unwrap();
        assert_eq!(catalog.len(), 1);

        let removed = catalog.remove(&id);
        assert!(removed.is_some());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_catalog_list_preserves_insertion_order() {
        let mut catalog = Catalog::new();
        catalog
            .add(document("doc-2", "B", "2022-01-01", DocumentKind::Insurance))
            .unwrap();
        catalog
            .add(document("doc-1", "A", "2023-01-01", DocumentKind::Identification))
            .unwrap();

        let listed = catalog.list(Category::Document);
        assert_eq!(listed[0].id.as_str(), "doc-2");
        assert_eq!(listed[1].id.as_str(), "doc-1");

        // Empty category yields an empty sequence
        assert!(catalog.list(Category::Semester).is_empty());
    }
}
