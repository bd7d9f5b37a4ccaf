//! Utility functions for string processing.

/// Queries shorter than this (after trimming, in characters) never search.
///
/// One keystroke matches half the catalogue, so the search box waits for a
/// second character.
pub const MIN_QUERY_LEN: usize = 2;

/// Whether a raw query is long enough to run.
pub fn is_searchable_query(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Split a query into lowercase tokens.
///
/// Splits on runs of whitespace and drops empty pieces. Duplicates are kept:
/// `"email email"` scores every document twice.
///
/// - `"Email  DNS"` → `["email", "dns"]`
/// - `"   "` → `[]`
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Turn a title into a URL fragment: lowercase, whitespace runs become `-`.
///
/// - `"isEmail"` → `"isemail"`
/// - `"Not  Empty"` → `"not-empty"`
///
/// Leading and trailing whitespace also become a hyphen, same as the page
/// anchors the site generates.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_space = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}
