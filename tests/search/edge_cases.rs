//! Inputs that must produce empty or degraded, but valid, output.

use super::common::{make_catalogue, make_doc, make_doc_with};
use unitary_docs::{search, Catalogue, Dataset};

#[test]
fn test_blank_and_short_queries() {
    let catalogue = make_catalogue(vec![make_doc_with("a", &["a"], "a")]);
    for query in ["", " ", "\t\n", "a", " a ", "\u{e9}"] {
        assert!(search(&catalogue, query).is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_empty_catalogue() {
    assert!(search(&Catalogue::default(), "email").is_empty());
    let empty_dataset = Catalogue::new(vec![Dataset::new("v", "/v", vec![])]);
    assert!(search(&empty_dataset, "email").is_empty());
}

#[test]
fn test_no_match() {
    let catalogue = make_catalogue(vec![make_doc_with("isEmail", &["email"], "email")]);
    assert!(search(&catalogue, "zzzz").is_empty());
}

#[test]
fn test_document_without_tags_or_description() {
    let catalogue = make_catalogue(vec![make_doc("isString")]);
    let results = search(&catalogue, "string");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 3);
}

#[test]
fn test_title_with_spaces_builds_hyphenated_anchor() {
    let catalogue = make_catalogue(vec![make_doc("Getting  Started")]);
    let results = search(&catalogue, "started");
    assert_eq!(results[0].url, "/docs/validations#getting-started");
}

#[test]
fn test_non_ascii_query() {
    let catalogue = make_catalogue(vec![make_doc_with("Ünïcode", &[], "Straße")]);
    assert_eq!(search(&catalogue, "ünï")[0].score, 3);
    assert_eq!(search(&catalogue, "STRASSE").len(), 0);
    assert_eq!(search(&catalogue, "straße")[0].score, 1);
}

#[test]
fn test_repeated_searches_are_independent() {
    let catalogue = make_catalogue(vec![make_doc_with("isEmail", &["email"], "")]);
    let first = search(&catalogue, "email");
    let second = search(&catalogue, "email");
    assert_eq!(first, second);
}
