// Copyright 2025-present MaplePHP
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at `search` over the bundled catalogue and
//! checks it never panics, never returns a zero score, and never breaks the
//! descending order.

#![no_main]

use libfuzzer_sys::fuzz_target;
use unitary_docs::{search, Catalogue};

fuzz_target!(|query: &[u8]| {
    static CATALOGUE: std::sync::OnceLock<Catalogue> = std::sync::OnceLock::new();
    let catalogue = CATALOGUE.get_or_init(|| Catalogue::bundled().expect("bundled catalogue"));

    let query = String::from_utf8_lossy(query);
    let results = search(catalogue, &query);

    if query.trim().chars().count() < 2 {
        assert!(results.is_empty(), "short query {:?} returned results", query);
    }
    for result in &results {
        assert!(result.score > 0, "zero score for {}", result.document.title);
    }
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results out of order");
    }
});
