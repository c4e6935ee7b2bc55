//! Domain types for the record catalog.
//!
//! This module contains the core data structures:
//! - Record: a unit of stored personal information
//! - Category: closed classification (semester, document, achievement)
//! - Details: category-specific payload, tagged by variant

pub mod details;
pub mod record;

// Re-export commonly used types
pub use details::{Course, Details, DocumentKind};
pub use record::{Category, Record, RecordError, RecordId};
