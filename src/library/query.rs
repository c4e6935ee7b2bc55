//! Pure query functions shared by all list views.
//!
//! Each function takes and returns a borrowed record sequence, so filters
//! and sorting compose without copying records. The contract used by every
//! view is: tab filter, then search filter, then sort.

use crate::domain::{Details, Record};

/// Ordering applied to a record listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Most recent date first
    Latest,

    /// Oldest date first
    Oldest,

    /// Ascending by title, case-insensitive
    Name,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Latest => write!(f, "latest"),
            SortKey::Oldest => write!(f, "oldest"),
            SortKey::Name => write!(f, "name"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "latest" => Ok(SortKey::Latest),
            "oldest" => Ok(SortKey::Oldest),
            "name" => Ok(SortKey::Name),
            _ => anyhow::bail!("Unknown sort key: {}", s),
        }
    }
}

/// Keep records whose title or description contains `term`, case-insensitively.
///
/// An empty or whitespace-only term is the identity: the input comes back
/// unchanged. Matching is purely textual; there is no tokenization or ranking.
pub fn filter_by_search_term<'a>(records: Vec<&'a Record>, term: &str) -> Vec<&'a Record> {
    let term = term.trim();
    if term.is_empty() {
        return records;
    }

    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Keep documents whose sub-classification matches `tab`.
///
/// The `"all"` tab is the identity. Any other tab keeps only document
/// records whose kind equals the tab; non-document records never match.
pub fn filter_by_category_tab<'a>(records: Vec<&'a Record>, tab: &str) -> Vec<&'a Record> {
    if tab == "all" {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            matches!(&record.details, Details::Document { kind, .. } if kind.as_str() == tab)
        })
        .collect()
}

/// Sort records by the given key.
///
/// The sort is stable: records comparing equal keep their input order, so a
/// date tie is broken by catalog order.
pub fn sort_records<'a>(mut records: Vec<&'a Record>, key: SortKey) -> Vec<&'a Record> {
    match key {
        SortKey::Latest => records.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Oldest => records.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::Name => records.sort_by_cached_key(|r| r.title.to_lowercase()),
    }
    records
}
