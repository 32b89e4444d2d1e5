use std::collections::HashSet;

use serde::Serialize;

use crate::errors::DirectoryError;
use crate::models::{AssetCategory, AssetRecord, CategoryFilter};

use super::catalog::DIRECTORY;
use super::text::{normalize_query, strip_diacritics};

/// Queries shorter than this (in characters, after trimming) match nothing.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Upper bound on the number of records returned by a search.
pub const MAX_SEARCH_RESULTS: usize = 10;

struct DirectoryEntry {
    record: AssetRecord,
    /// Uppercased display name
    name_upper: String,
    /// Uppercased display name without diacritics
    name_folded: String,
}

/// Outcome of checking ticker input as the user types it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "asset", rename_all = "camelCase")]
pub enum TickerCheck<'a> {
    /// Too short to judge yet.
    Incomplete,
    Known(&'a AssetRecord),
    Unknown,
}

impl TickerCheck<'_> {
    pub fn is_known(&self) -> bool {
        matches!(self, TickerCheck::Known(_))
    }
}

/// Immutable, in-memory table of tradable instruments.
///
/// Lookups preserve the order records were loaded in. All methods are pure
/// reads, so a directory can be shared freely across threads.
pub struct AssetDirectory {
    entries: Vec<DirectoryEntry>,
}

impl AssetDirectory {
    /// The process-wide directory built from the embedded catalog.
    pub fn global() -> &'static AssetDirectory {
        &DIRECTORY
    }

    /// Builds a directory from an explicit record list.
    ///
    /// Tickers are trimmed and uppercased; they must be non-empty and unique.
    pub fn from_records(
        records: impl IntoIterator<Item = AssetRecord>,
    ) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for mut record in records {
            record.ticker = normalize_query(&record.ticker);
            if record.ticker.is_empty() {
                return Err(DirectoryError::InvalidCatalog(format!(
                    "record '{}' has an empty ticker",
                    record.display_name
                )));
            }
            if !seen.insert(record.ticker.clone()) {
                return Err(DirectoryError::DuplicateTicker(record.ticker));
            }

            let name_upper = record.display_name.to_uppercase();
            let name_folded = strip_diacritics(&name_upper);
            entries.push(DirectoryEntry {
                record,
                name_upper,
                name_folded,
            });
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All records, in load order.
    pub fn records(&self) -> impl Iterator<Item = &AssetRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    fn candidates(&self, filter: CategoryFilter) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries
            .iter()
            .filter(move |e| filter.matches(e.record.category))
    }

    /// Finds records whose ticker or name contains the query.
    ///
    /// Matching is case-insensitive, and the name is also compared with
    /// diacritics removed from both sides. Queries under
    /// [`MIN_QUERY_LENGTH`] characters return nothing; at most
    /// [`MAX_SEARCH_RESULTS`] records are returned, in directory order.
    pub fn search(&self, query: &str, filter: CategoryFilter) -> Vec<&AssetRecord> {
        let needle = normalize_query(query);
        if needle.chars().count() < MIN_QUERY_LENGTH {
            return Vec::new();
        }
        let folded_needle = strip_diacritics(&needle);

        self.candidates(filter)
            .filter(|e| {
                e.record.ticker.contains(needle.as_str())
                    || e.name_upper.contains(needle.as_str())
                    || e.name_folded.contains(folded_needle.as_str())
            })
            .take(MAX_SEARCH_RESULTS)
            .map(|e| &e.record)
            .collect()
    }

    /// Exact, case-insensitive ticker lookup. `None` means unknown asset.
    pub fn validate(&self, ticker: &str, filter: CategoryFilter) -> Option<&AssetRecord> {
        let wanted = normalize_query(ticker);
        self.candidates(filter)
            .find(|e| e.record.ticker == wanted)
            .map(|e| &e.record)
    }

    /// Category of the record with this exact ticker, in any category.
    pub fn category_of(&self, ticker: &str) -> Option<AssetCategory> {
        self.validate(ticker, CategoryFilter::All)
            .map(|record| record.category)
    }

    /// Classifies typed input: no verdict below [`MIN_QUERY_LENGTH`]
    /// characters, otherwise known or unknown.
    pub fn check_ticker(&self, input: &str, filter: CategoryFilter) -> TickerCheck<'_> {
        if input.trim().chars().count() < MIN_QUERY_LENGTH {
            return TickerCheck::Incomplete;
        }
        match self.validate(input, filter) {
            Some(record) => TickerCheck::Known(record),
            None => TickerCheck::Unknown,
        }
    }
}

/// Searches the shared directory. See [`AssetDirectory::search`].
pub fn search_assets(query: &str, filter: CategoryFilter) -> Vec<&'static AssetRecord> {
    AssetDirectory::global().search(query, filter)
}

/// Validates a ticker against the shared directory.
pub fn validate_ticker(ticker: &str, filter: CategoryFilter) -> Option<&'static AssetRecord> {
    AssetDirectory::global().validate(ticker, filter)
}

/// Looks up the category of a ticker in the shared directory.
pub fn asset_category_by_ticker(ticker: &str) -> Option<AssetCategory> {
    AssetDirectory::global().category_of(ticker)
}
