//! Record entity and its category classification.
//!
//! A `Record` is a unit of stored personal information belonging to exactly
//! one category. The category is derived from the `Details` payload, never
//! stored separately, so the two cannot drift apart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::details::Details;

/// Errors raised when constructing a record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Record title must not be empty")]
    EmptyTitle,
}

/// Record identifier (category prefix + unique suffix, e.g. "sem-1")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an existing identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier for a category
    pub fn generate(category: Category) -> Self {
        let suffix = &Uuid::new_v4().to_string()[..8];
        Self(format!("{}-{}", category.id_prefix(), suffix))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed classification of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Academic semester record
    Semester,

    /// Personal document
    Document,

    /// Achievement or award
    Achievement,
}

impl Category {
    /// All categories, in dashboard display order
    pub const ALL: [Category; 3] = [
        Category::Semester,
        Category::Document,
        Category::Achievement,
    ];

    /// Identifier prefix for this category
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Category::Semester => "sem",
            Category::Document => "doc",
            Category::Achievement => "ach",
        }
    }

    /// Plural display label
    pub fn plural(&self) -> &'static str {
        match self {
            Category::Semester => "semesters",
            Category::Document => "documents",
            Category::Achievement => "achievements",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Semester => write!(f, "semester"),
            Category::Document => write!(f, "document"),
            Category::Achievement => write!(f, "achievement"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "semester" | "semesters" | "sem" => Ok(Category::Semester),
            "document" | "documents" | "doc" => Ok(Category::Document),
            "achievement" | "achievements" | "ach" => Ok(Category::Achievement),
            _ => anyhow::bail!("Unknown category: {}", s),
        }
    }
}

/// A unit of stored personal information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier across all categories
    pub id: RecordId,

    /// Display name
    pub title: String,

    /// Optional free-text summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Primary chronological anchor (drives latest/oldest ordering)
    pub date: NaiveDate,

    /// Category-specific payload; its variant tag is the record's category
    pub details: Details,
}

impl Record {
    /// Create a new record, validating the title
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        date: NaiveDate,
        details: Details,
    ) -> Result<Self, RecordError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(RecordError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            description: None,
            date,
            details,
        })
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The record's category, derived from its payload
    pub fn category(&self) -> Category {
        self.details.category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::details::DocumentKind;

    fn document_details() -> Details {
        Details::Document {
            kind: DocumentKind::Identification,
            document_number: "AB123456".to_string(),
            expiry_date: Some("2028-02-10".parse().unwrap()),
            issuing_authority: "Department of State".to_string(),
            location: "Washington DC".to_string(),
        }
    }

    #[test]
    fn test_record_category_follows_details() {
        let record = Record::new(
            RecordId::new("doc-1"),
            "Passport",
            "2023-02-10".parse().unwrap(),
            document_details(),
        )
        .unwrap();

        assert_eq!(record.category(), Category::Document);
    }

    #[test]
    fn test_empty_title_rejected() {
        let result = Record::new(
            RecordId::new("doc-1"),
            "   ",
            "2023-02-10".parse().unwrap(),
            document_details(),
        );

        assert_eq!(result.unwrap_err(), RecordError::EmptyTitle);
    }

    #[test]
    fn test_generated_id_prefix() {
        let id = RecordId::generate(Category::Semester);
        assert!(id.as_str().starts_with("sem-"));

        let id = RecordId::generate(Category::Achievement);
        assert!(id.as_str().starts_with("ach-"));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("semester".parse::<Category>().unwrap(), Category::Semester);
        assert_eq!("documents".parse::<Category>().unwrap(), Category::Document);
        assert_eq!("ach".parse::<Category>().unwrap(), Category::Achievement);
        assert!("invalid".parse::<Category>().is_err());
    }
}
