//! Catalog Persistence Tests
//!
//! Tests for the JSON catalog file: save/load round trips, the
//! empty-catalog behavior for a missing file, and mutation rules.

use recvault::library::fixtures::sample_catalog;
use recvault::{Catalog, CatalogError, Category, Details, DocumentKind, Record, RecordId};
use tempfile::TempDir;

fn document(id: &str, title: &str, date: &str) -> Record {
    Record::new(
        RecordId::new(id),
        title,
        date.parse().unwrap(),
        Details::Document {
            kind: DocumentKind::Identification,
            document_number: "AB123456".to_string(),
            expiry_date: Some("2028-02-10".parse().unwrap()),
            issuing_authority: "Department of State".to_string(),
            location: "Washington DC".to_string(),
        },
    )
    .unwrap()
}

#[tokio::test]
async fn test_missing_file_loads_empty_catalog() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");

    let catalog = Catalog::load_from(&path).await.unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.version, 1);
}

#[tokio::test]
async fn test_save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");

    let mut catalog = Catalog::new();
    let record = document("doc-1", "Passport", "2023-02-10")
        .with_description("Valid until 2028. Document number: AB123456.");
    catalog.add(record).unwrap();
    catalog.save_to(&path).await.unwrap();

    let loaded = Catalog::load_from(&path).await.unwrap();
    assert_eq!(loaded.len(), 1);

    let record = loaded.get(&RecordId::new("doc-1")).unwrap();
    assert_eq!(record.title, "Passport");
    assert_eq!(record.category(), Category::Document);
    assert_eq!(record.date.to_string(), "2023-02-10");
    assert_eq!(
        record.description.as_deref(),
        Some("Valid until 2028. Document number: AB123456.")
    );
}

#[tokio::test]
async fn test_sample_catalog_round_trip_preserves_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");

    let catalog = sample_catalog().unwrap();
    catalog.save_to(&path).await.unwrap();

    let loaded = Catalog::load_from(&path).await.unwrap();
    assert_eq!(loaded.len(), catalog.len());

    // Insertion order is the catalog's natural order and must survive disk
    let original_ids: Vec<&str> = catalog.records.iter().map(|r| r.id.as_str()).collect();
    let loaded_ids: Vec<&str> = loaded.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(original_ids, loaded_ids);
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("vault").join("catalog.json");

    let catalog = Catalog::new();
    catalog.save_to(&path).await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn test_duplicate_id_rejected_across_categories() {
    let mut catalog = sample_catalog().unwrap();

    let result = catalog.add(document("doc-1", "Another Passport", "2024-01-01"));
    assert!(matches!(result, Err(CatalogError::DuplicateId(_))));
}

#[tokio::test]
async fn test_remove_then_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");

    let mut catalog = sample_catalog().unwrap();
    let removed = catalog.remove(&RecordId::new("doc-8")).unwrap();
    assert_eq!(removed.title, "Rental Agreement");

    catalog.save_to(&path).await.unwrap();

    let loaded = Catalog::load_from(&path).await.unwrap();
    assert!(loaded.get(&RecordId::new("doc-8")).is_none());
    assert_eq!(loaded.count(Category::Document), 7);
}

#[tokio::test]
async fn test_catalog_file_carries_category_tag() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");

    let mut catalog = Catalog::new();
    catalog.add(document("doc-1", "Passport", "2023-02-10")).unwrap();
    catalog.save_to(&path).await.unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(json["version"], 1);
    assert_eq!(json["records"][0]["details"]["category"], "document");
    assert_eq!(json["records"][0]["date"], "2023-02-10");
}
