// Copyright 2025-present MaplePHP
// SPDX-License-Identifier: Apache-2.0

//! Search: score every document, keep the hits, best first.
//!
//! The catalogue is small (a hundred-odd validators), so there is no index.
//! Every keystroke rescans every document. That keeps the matcher a pure
//! function of `(catalogue, query)` with nothing to invalidate.
//!
//! # Ordering
//!
//! Results are sorted by descending score with a stable sort. Equal scores
//! keep the order they were encountered in: dataset order first, then the
//! order of documents within the dataset.

use crate::scoring::score_document;
use crate::types::{Catalogue, SearchResult};
use crate::utils::{is_searchable_query, slugify, tokenize};

/// Search the whole catalogue for `query`.
///
/// Returns an empty list for queries shorter than `MIN_QUERY_LEN` once
/// trimmed, for blank queries, and when nothing matches. Never fails.
pub fn search<'a>(catalogue: &'a Catalogue, query: &str) -> Vec<SearchResult<'a>> {
    if !is_searchable_query(query) {
        return Vec::new();
    }
    let tokens = tokenize(query);
    let results = rank(catalogue, &tokens);
    tracing::debug!(
        query,
        tokens = tokens.len(),
        hits = results.len(),
        "search complete"
    );
    results
}

/// Score, filter and sort with pre-tokenized input.
///
/// Tokens must already be lowercase (see `tokenize`). No length policy is
/// applied here.
pub fn rank<'a>(catalogue: &'a Catalogue, tokens: &[String]) -> Vec<SearchResult<'a>> {
    let mut results: Vec<SearchResult<'a>> = catalogue
        .datasets
        .iter()
        .flat_map(move |dataset| {
            dataset.documents.iter().filter_map(move |document| {
                let score = score_document(document, tokens);
                (score > 0).then(|| SearchResult {
                    document,
                    score,
                    url: result_url(&dataset.url, &document.title),
                    dataset: dataset.key.as_str(),
                })
            })
        })
        .collect();

    // sort_by is stable: ties stay in encounter order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Link for a result: the dataset page plus the title anchor.
pub fn result_url(base: &str, title: &str) -> String {
    format!("{}#{}", base, slugify(title))
}
