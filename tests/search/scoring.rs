//! Field weights as seen through `search`.

use super::common::{make_catalogue, make_doc_with};
use unitary_docs::{search, DESCRIPTION_WEIGHT, TAGS_WEIGHT, TITLE_WEIGHT};

#[test]
fn test_title_tags_description_sum_to_six() {
    let catalogue = make_catalogue(vec![make_doc_with(
        "isEmail",
        &["email", "validation"],
        "Validates that the value is a properly formatted email address.",
    )]);
    let results = search(&catalogue, "email");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 6);
}

#[test]
fn test_each_field_alone() {
    let catalogue = make_catalogue(vec![
        make_doc_with("alpha", &[], ""),
        make_doc_with("x1", &["alpha"], ""),
        make_doc_with("x2", &[], "alpha"),
    ]);
    let scores: Vec<u32> = search(&catalogue, "alpha").iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![TITLE_WEIGHT, TAGS_WEIGHT, DESCRIPTION_WEIGHT]);
}

#[test]
fn test_tokens_add_up() {
    let catalogue = make_catalogue(vec![make_doc_with(
        "isDeliverableEmail",
        &["email", "DNS"],
        "verifies the MX DNS record of an email domain",
    )]);
    // email: 3 + 2 + 1, dns: 0 + 2 + 1
    assert_eq!(search(&catalogue, "email dns")[0].score, 9);
    assert_eq!(search(&catalogue, "EMAIL DNS")[0].score, 9);
}

#[test]
fn test_repeated_token_counts_twice() {
    let catalogue = make_catalogue(vec![make_doc_with("length", &[], "")]);
    assert_eq!(search(&catalogue, "length")[0].score, 3);
    assert_eq!(search(&catalogue, "length length")[0].score, 6);
}

#[test]
fn test_substring_matching() {
    let catalogue = make_catalogue(vec![make_doc_with("isLengthEqualTo", &[], "")]);
    assert_eq!(search(&catalogue, "length")[0].score, TITLE_WEIGHT);
    assert_eq!(search(&catalogue, "gtheq")[0].score, TITLE_WEIGHT);
}

#[test]
fn test_joined_tags_match_across_boundary() {
    let catalogue = make_catalogue(vec![make_doc_with("x", &["ab", "cd"], "")]);
    assert_eq!(search(&catalogue, "b,c")[0].score, TAGS_WEIGHT);
    assert!(search(&catalogue, "bc").is_empty());
}
