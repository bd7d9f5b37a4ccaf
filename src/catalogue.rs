//! Loading and validating the documentation catalogue.
//!
//! The catalogue is a JSON file mapping dataset keys to a destination URL and
//! a list of documents:
//!
//! ```json
//! {
//!   "datasets": {
//!     "validations": { "url": "/docs/validations", "data": [ { "title": "length", ... } ] }
//!   }
//! }
//! ```
//!
//! Dataset order is kept exactly as written, since search ties fall back to
//! it. Every document is checked here once so the matcher and renderer can
//! assume a non-empty title.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::types::{Catalogue, Dataset, Document};
use crate::utils::slugify;

/// Validator catalogue shipped with the crate.
pub const BUNDLED_CATALOGUE: &str = include_str!("../data/catalogue.json");

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalogue JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("document {index} in dataset '{dataset}' has an empty title")]
    EmptyTitle { dataset: String, index: usize },

    #[error("dataset keys must not be empty")]
    EmptyDatasetKey,

    #[error("dataset '{0}' is defined more than once")]
    DuplicateDatasetKey(String),
}

// =============================================================================
// FILE FORMAT
// =============================================================================

#[derive(Deserialize)]
struct CatalogueFile {
    datasets: DatasetMap,
}

#[derive(Deserialize)]
struct DatasetEntry {
    url: String,
    #[serde(default)]
    data: Vec<Document>,
}

/// JSON object of datasets, in document order.
struct DatasetMap(Vec<(String, DatasetEntry)>);

impl<'de> Deserialize<'de> for DatasetMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = DatasetMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of dataset key to { url, data }")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<DatasetMap, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, entry)) = map.next_entry::<String, DatasetEntry>()? {
                    entries.push((key, entry));
                }
                Ok(DatasetMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Parse and validate a catalogue from JSON text.
pub fn parse_catalogue(json: &str) -> Result<Catalogue, CatalogueError> {
    let file: CatalogueFile = serde_json::from_str(json)?;
    let datasets = file
        .datasets
        .0
        .into_iter()
        .map(|(key, entry)| Dataset::new(key, entry.url, entry.data))
        .collect();
    let catalogue = Catalogue::new(datasets);
    validate_catalogue(&catalogue)?;

    tracing::debug!(
        datasets = catalogue.datasets.len(),
        documents = catalogue.document_count(),
        "catalogue loaded"
    );
    Ok(catalogue)
}

/// Read, parse and validate a catalogue file.
pub fn load_catalogue(path: &Path) -> Result<Catalogue, CatalogueError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalogue(&content)
}

impl Catalogue {
    /// The validator catalogue compiled into the crate.
    pub fn bundled() -> Result<Catalogue, CatalogueError> {
        parse_catalogue(BUNDLED_CATALOGUE)
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Reject entries the matcher and renderer can't handle.
///
/// Empty titles and empty or repeated dataset keys are errors. Titles that
/// slugify to the same anchor only get a warning: the page links collide,
/// but search still works.
pub fn validate_catalogue(catalogue: &Catalogue) -> Result<(), CatalogueError> {
    let mut keys = HashSet::new();
    for dataset in &catalogue.datasets {
        if dataset.key.trim().is_empty() {
            return Err(CatalogueError::EmptyDatasetKey);
        }
        if !keys.insert(dataset.key.as_str()) {
            return Err(CatalogueError::DuplicateDatasetKey(dataset.key.clone()));
        }
        if let Some(index) = dataset
            .documents
            .iter()
            .position(|doc| doc.title.trim().is_empty())
        {
            return Err(CatalogueError::EmptyTitle {
                dataset: dataset.key.clone(),
                index,
            });
        }
        for title in duplicate_titles(dataset) {
            tracing::warn!(dataset = %dataset.key, title, "duplicate title, anchors will collide");
        }
    }
    Ok(())
}

/// Titles whose anchor repeats an earlier title's anchor, in document order.
///
/// Anchors are `slugify(title)`, so `isEmail` and `isemail` collide. Each
/// colliding title is listed once.
pub fn duplicate_titles(dataset: &Dataset) -> Vec<&str> {
    let mut anchors = HashSet::new();
    let mut reported = HashSet::new();
    dataset
        .documents
        .iter()
        .map(|doc| doc.title.as_str())
        .filter(|title| !anchors.insert(slugify(title)) && reported.insert(*title))
        .collect()
}
