//! Search invariants over random catalogues and queries.

use proptest::prelude::*;
use unitary_docs::{
    score_document, search, slugify, tokenize, Catalogue, Dataset, Document, MAX_TOKEN_SCORE,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so random queries actually hit something.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dA-D]{1,4}").unwrap()
}

fn document_strategy() -> impl Strategy<Value = Document> {
    (
        word_strategy(),
        prop::collection::vec(word_strategy(), 0..3),
        prop::collection::vec(word_strategy(), 0..5),
    )
        .prop_map(|(title, tags, words)| Document {
            title,
            description: words.join(" "),
            tags,
            args: vec![],
            code: String::new(),
            result: None,
        })
}

fn catalogue_strategy() -> impl Strategy<Value = Catalogue> {
    prop::collection::vec(prop::collection::vec(document_strategy(), 0..6), 1..4).prop_map(
        |datasets| {
            Catalogue::new(
                datasets
                    .into_iter()
                    .enumerate()
                    .map(|(i, docs)| Dataset::new(format!("set{}", i), format!("/set{}", i), docs))
                    .collect(),
            )
        },
    )
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("".to_string()),
        Just(" ".to_string()),
        "[a-d]".prop_map(|s| s.to_string()),
        "[a-dA-D]{2,4}".prop_map(|s| s.to_string()),
        "[a-d]{1,3} [a-d]{1,3}".prop_map(|s| s.to_string()),
        " [a-d]{1,3}  [a-dA-D]{1,3} ".prop_map(|s| s.to_string()),
    ]
}

proptest! {
    /// Queries of at most one non-blank character never return anything.
    #[test]
    fn prop_short_queries_empty(catalogue in catalogue_strategy(), c in "[a-zA-Z]?", pad in " {0,3}") {
        let query = format!("{}{}{}", pad, c, pad);
        prop_assert!(search(&catalogue, &query).is_empty());
    }

    /// Every result scores above zero and matches its document's score.
    #[test]
    fn prop_scores_positive_and_consistent(catalogue in catalogue_strategy(), query in query_strategy()) {
        let tokens = tokenize(&query);
        for result in search(&catalogue, &query) {
            prop_assert!(result.score > 0);
            prop_assert_eq!(result.score, score_document(result.document, &tokens));
            prop_assert!(result.score <= MAX_TOKEN_SCORE * tokens.len() as u32);
        }
    }

    /// Nothing with a positive score is dropped.
    #[test]
    fn prop_all_hits_returned(catalogue in catalogue_strategy(), query in "[a-d]{2,3}") {
        let tokens = tokenize(&query);
        let expected = catalogue
            .datasets
            .iter()
            .flat_map(|d| &d.documents)
            .filter(|doc| score_document(doc, &tokens) > 0)
            .count();
        prop_assert_eq!(search(&catalogue, &query).len(), expected);
    }

    /// Descending by score; equal scores in (dataset, document) order.
    #[test]
    fn prop_sorted_and_stable(catalogue in catalogue_strategy(), query in query_strategy()) {
        let encounter = |doc: &Document| {
            catalogue
                .datasets
                .iter()
                .flat_map(|d| &d.documents)
                .position(|x| std::ptr::eq(x, doc))
                .unwrap()
        };
        let results = search(&catalogue, &query);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(encounter(pair[0].document) < encounter(pair[1].document));
            }
        }
    }

    /// Matching ignores case on both sides.
    #[test]
    fn prop_case_insensitive(catalogue in catalogue_strategy(), query in "[a-d]{2,4}") {
        let lower = search(&catalogue, &query);
        let upper = search(&catalogue, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    /// A document containing the token in its title ranks at least 3.
    #[test]
    fn prop_title_hit_at_least_title_weight(doc in document_strategy()) {
        let title = doc.title.to_lowercase();
        prop_assume!(title.chars().count() >= 2);
        let catalogue = Catalogue::new(vec![Dataset::new("v", "/v", vec![doc])]);
        let results = search(&catalogue, &title);
        prop_assert_eq!(results.len(), 1);
        prop_assert!(results[0].score >= 3);
        prop_assert_eq!(results[0].url.clone(), format!("/v#{}", slugify(&title)));
    }
}
