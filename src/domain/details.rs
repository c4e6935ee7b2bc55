//! Category-specific detail payloads.
//!
//! `Details` is a tagged union: the enum variant is the single source of
//! truth for a record's category, so a record can never carry a payload
//! inconsistent with its classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::Category;

/// Variant payload attached to a record, tagged by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Details {
    /// Academic semester: GPA, course table, free-form notes
    Semester {
        /// Grade point average as displayed (e.g. "3.8")
        gpa: String,

        /// Courses taken this semester, in enrollment order
        #[serde(default)]
        courses: Vec<Course>,

        /// Free-form notes
        #[serde(default)]
        notes: String,
    },

    /// Personal document: passport, insurance policy, lease, etc.
    Document {
        /// Sub-classification driving the document tab filter
        kind: DocumentKind,

        /// Official document number
        document_number: String,

        /// Expiry date, if the document expires
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expiry_date: Option<NaiveDate>,

        /// Issuing authority
        issuing_authority: String,

        /// Where the document was issued or is kept
        location: String,
    },

    /// Achievement: award, publication, competition result
    Achievement {
        /// Awarding or hosting organization
        organization: String,

        /// Role held (e.g. "Team Lead")
        position: String,

        /// Other people involved, in listing order
        #[serde(default)]
        team_members: Vec<String>,

        /// Name of the project or program
        project_name: String,

        /// Whether a certificate was issued
        #[serde(default)]
        certificate: bool,
    },
}

impl Details {
    /// The category this payload belongs to
    pub fn category(&self) -> Category {
        match self {
            Details::Semester { .. } => Category::Semester,
            Details::Document { .. } => Category::Document,
            Details::Achievement { .. } => Category::Achievement,
        }
    }

    /// The document sub-classification, if this is a document payload
    pub fn document_kind(&self) -> Option<DocumentKind> {
        match self {
            Details::Document { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// A single course entry in a semester record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g. "CS201")
    pub code: String,

    /// Course name
    pub name: String,

    /// Letter grade received
    pub grade: String,
}

impl Course {
    /// Create a course entry
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            grade: grade.into(),
        }
    }
}

/// Sub-classification of a document record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Identity documents (passport, license, birth certificate)
    Identification,

    /// Insurance policies
    Insurance,

    /// Career documents (resume, cover letters)
    Career,

    /// Housing documents (leases, agreements)
    Housing,
}

impl DocumentKind {
    /// The stable string form used by tab filters
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Identification => "identification",
            DocumentKind::Insurance => "insurance",
            DocumentKind::Career => "career",
            DocumentKind::Housing => "housing",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "identification" | "id" => Ok(DocumentKind::Identification),
            "insurance" => Ok(DocumentKind::Insurance),
            "career" => Ok(DocumentKind::Career),
            "housing" => Ok(DocumentKind::Housing),
            _ => anyhow::bail!("Unknown document kind: {}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_category() {
        let details = Details::Semester {
            gpa: "3.8".to_string(),
            courses: vec![Course::new("CS201", "Data Structures", "A")],
            notes: String::new(),
        };
        assert_eq!(details.category(), Category::Semester);

        let details = Details::Achievement {
            organization: "Tech University".to_string(),
            position: "Team Lead".to_string(),
            team_members: vec![],
            project_name: "EcoTrack".to_string(),
            certificate: true,
        };
        assert_eq!(details.category(), Category::Achievement);
    }

    #[test]
    fn test_document_kind_from_str() {
        assert_eq!(
            "identification".parse::<DocumentKind>().unwrap(),
            DocumentKind::Identification
        );
        assert_eq!(
            "id".parse::<DocumentKind>().unwrap(),
            DocumentKind::Identification
        );
        assert_eq!(
            "insurance".parse::<DocumentKind>().unwrap(),
            DocumentKind::Insurance
        );
        assert!("invalid".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_details_serde_tag() {
        let details = Details::Document {
            kind: DocumentKind::Identification,
            document_number: "AB123456".to_string(),
            expiry_date: "2028-02-10".parse().ok(),
            issuing_authority: "Department of State".to_string(),
            location: "Washington DC".to_string(),
        };

        let json = serde_json::to_string(&details).unwrap();
        assert!(json.contains("\"category\":\"document\""));

        let parsed: Details = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, details);
    }
}
