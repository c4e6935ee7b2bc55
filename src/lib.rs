//! recvault - Personal record catalog
//!
//! A catalog of personal records in three categories: academic semesters,
//! personal documents, and achievements. Each record carries a
//! category-specific detail payload, modeled as a tagged union so the
//! payload shape can never disagree with the record's category.
//!
//! # Architecture
//!
//! The core is a pure, synchronous query model over an in-memory catalog:
//! - Listing and lookup are reads in insertion order
//! - Filtering and sorting are total pure functions, composed as
//!   tab filter, then search filter, then sort
//! - "Not found" is a normal outcome (`Option`), never an error
//!
//! Persistence is a single JSON index file; the CLI is a thin
//! presentation layer over the catalog.
//!
//! # Modules
//!
//! - `domain`: Data structures (Record, Category, Details)
//! - `library`: Catalog, query functions, sample fixtures
//! - `config`: Path resolution (env var, config file, defaults)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Seed the catalog with sample records
//! recvault seed
//!
//! # Browse
//! recvault list semesters --sort name
//! recvault list documents --tab insurance
//! recvault search hackathon
//! recvault show sem-1
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use domain::{Category, Course, Details, DocumentKind, Record, RecordError, RecordId};
pub use library::{
    filter_by_category_tab, filter_by_search_term, sort_records, Catalog, CatalogError, SortKey,
};
