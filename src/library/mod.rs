//! Record catalog and its query operations.
//!
//! The catalog is an in-memory collection of records persisted as a single
//! JSON index file. All list views go through the same pure query pipeline:
//!
//! ```text
//! catalog.list(category)
//!     -> filter_by_category_tab(records, tab)      (documents only)
//!     -> filter_by_search_term(records, term)
//!     -> sort_records(records, key)                (always last)
//! ```
//!
//! # Storage Layout
//!
//! ```text
//! ~/.recvault/
//! └── catalog.json              # Index of all records, all categories
//! ```

pub mod catalog;
pub mod fixtures;
pub mod query;

pub use catalog::{Catalog, CatalogError};
pub use query::{filter_by_category_tab, filter_by_search_term, sort_records, SortKey};
