// Copyright 2025-present MaplePHP
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the documentation catalogue.
//!
//! A catalogue is a list of datasets. A dataset is a list of documents plus the
//! page URL they live on. Search results point back into the catalogue and
//! carry a link built from that URL and the document's anchor.
//!
//! # Invariants
//!
//! - **Document**: `title` is non-empty. The loader in `catalogue` rejects
//!   anything else, so the matcher and renderer never have to check.
//!
//! - **Catalogue**: dataset order is the order of the source file. Search ties
//!   are broken by this order, so don't sort it.
//!
//! - **SearchResult**: `score > 0`. Zero-score documents never leave `search`.

use serde::{Deserialize, Serialize};

// =============================================================================
// CATALOGUE ENTRIES
// =============================================================================

/// One validator argument as documented on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Free-text type descriptor (`int`, `string|array`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

/// A searchable, renderable catalogue entry.
///
/// Only `title` is mandatory in the source data. Everything else degrades to
/// empty: no tags means no tag matches, no args means no parameter table, no
/// code means an example with empty argument slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    /// Markdown. Rendered by `render::markdown`, matched as plain text.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub args: Vec<Parameter>,
    /// PHP source containing the canonical `value(...)->method(...)` call.
    #[serde(default)]
    pub code: String,
    /// Expected output of `code`, shown under the example.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// A named group of documents that share one destination page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub key: String,
    /// Base URL of the page the documents are rendered on.
    pub url: String,
    pub documents: Vec<Document>,
}

impl Dataset {
    pub fn new(key: impl Into<String>, url: impl Into<String>, documents: Vec<Document>) -> Self {
        Dataset {
            key: key.into(),
            url: url.into(),
            documents,
        }
    }
}

/// The complete, immutable set of datasets.
///
/// Built once at startup (see `catalogue::load_catalogue`) and handed to
/// `search` and `render_sections` by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalogue {
    pub datasets: Vec<Dataset>,
}

impl Catalogue {
    pub fn new(datasets: Vec<Dataset>) -> Self {
        Catalogue { datasets }
    }

    /// Look up a dataset by key.
    pub fn dataset(&self, key: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.key == key)
    }

    /// Total number of documents across all datasets.
    pub fn document_count(&self) -> usize {
        self.datasets.iter().map(|d| d.documents.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.document_count() == 0
    }
}

// =============================================================================
// SEARCH OUTPUT
// =============================================================================

/// A document that matched a query, with its score and link.
///
/// Borrows the document from the catalogue; results live only as long as the
/// query that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<'a> {
    pub document: &'a Document,
    pub score: u32,
    /// `dataset.url` + `#` + anchor of the title.
    pub url: String,
    /// Key of the dataset the document came from.
    pub dataset: &'a str,
}
