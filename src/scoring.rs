// Copyright 2025-present MaplePHP
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Each query token is checked against three fields of a document. A hit in a
//! field adds that field's weight; the checks are independent, so one token
//! can add anywhere from 0 to 6 points.
//!
//! # Constants
//!
//! | Field       | Weight | Haystack                               |
//! |-------------|--------|----------------------------------------|
//! | Title       | 3      | lowercased title                       |
//! | Tags        | 2      | lowercased tags joined with `,`        |
//! | Description | 1      | lowercased description                 |
//!
//! The tags are matched as one joined string. A token like `"a,b"` can span
//! two adjacent tags. Existing links and muscle memory depend on that, so it
//! stays.

use crate::types::Document;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Weight of a token found in the title.
pub const TITLE_WEIGHT: u32 = 3;

/// Weight of a token found in the joined tag string.
pub const TAGS_WEIGHT: u32 = 2;

/// Weight of a token found in the description.
pub const DESCRIPTION_WEIGHT: u32 = 1;

/// Most a single token can contribute to one document.
pub const MAX_TOKEN_SCORE: u32 = TITLE_WEIGHT + TAGS_WEIGHT + DESCRIPTION_WEIGHT;

const _: () = {
    assert!(TITLE_WEIGHT > TAGS_WEIGHT);
    assert!(TAGS_WEIGHT > DESCRIPTION_WEIGHT);
    assert!(DESCRIPTION_WEIGHT > 0);
};

/// Which field a token landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Title,
    Tags,
    Description,
}

/// Weight by field type: Title (3) > Tags (2) > Description (1).
#[inline]
pub fn field_weight(field: FieldType) -> u32 {
    match field {
        FieldType::Title => TITLE_WEIGHT,
        FieldType::Tags => TAGS_WEIGHT,
        FieldType::Description => DESCRIPTION_WEIGHT,
    }
}

/// Lowercased haystacks for one document, built once per query.
#[derive(Debug, Clone)]
pub struct Haystacks {
    title: String,
    tags: String,
    description: String,
}

impl Haystacks {
    pub fn new(document: &Document) -> Self {
        Haystacks {
            title: document.title.to_lowercase(),
            tags: document.tags.join(",").to_lowercase(),
            description: document.description.to_lowercase(),
        }
    }

    /// Fields containing `token` as a substring, in weight order.
    pub fn matched_fields<'s>(&'s self, token: &'s str) -> impl Iterator<Item = FieldType> + 's {
        [
            (FieldType::Title, &self.title),
            (FieldType::Tags, &self.tags),
            (FieldType::Description, &self.description),
        ]
        .into_iter()
        .filter(move |(_, haystack)| haystack.contains(token))
        .map(|(field, _)| field)
    }

    /// Points one token earns against these haystacks.
    pub fn token_score(&self, token: &str) -> u32 {
        self.matched_fields(token).map(field_weight).sum()
    }
}

/// Score a document against already-lowercased tokens.
///
/// Per-token points add up with no cap. An empty token list scores 0.
pub fn score_document(document: &Document, tokens: &[String]) -> u32 {
    if tokens.is_empty() {
        return 0;
    }
    let haystacks = Haystacks::new(document);
    tokens.iter().map(|t| haystacks.token_score(t)).sum()
}
