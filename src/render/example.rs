//! Generated PHP examples.
//!
//! Catalogue entries carry a plain validator call:
//!
//! ```text
//! $isValid = Validator::value("Lorem ipsum dolor")->length(1, 200);
//! ```
//!
//! The docs page shows the same check written as a Unitary test case, so the
//! value and the method arguments are lifted out of the first two
//! parenthesized groups and dropped into a fixed template:
//!
//! ```text
//! $case->expect("Lorem ipsum dolor")
//!      ->length(1, 200)
//!      ->validate();
//! ```

/// Every innermost parenthesized group in `code`, left to right.
///
/// A group is the text between a `(` and the nearest following `)` with no
/// other parenthesis in between. Unbalanced parentheses are skipped: a stray
/// `)` closes nothing, and a `(` followed by another `(` is abandoned for the
/// later one. Groups never overlap.
///
/// - `"value(1)->length(2, 3)"` → `["1", "2, 3"]`
/// - `"f(g(x))"` → `["x"]`
/// - `"no parens"` → `[]`
pub fn extract_parenthesized(code: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut open: Option<usize> = None;

    for (i, c) in code.char_indices() {
        match c {
            '(' => open = Some(i + 1),
            ')' => {
                if let Some(start) = open.take() {
                    groups.push(&code[start..i]);
                }
            }
            _ => {}
        }
    }
    groups
}

/// Build the test-case snippet for a section.
///
/// The first group becomes the `expect` value, the second the method
/// arguments. Missing groups leave the slot empty.
pub fn generate_example(title: &str, code: &str) -> String {
    let groups = extract_parenthesized(code);
    let value = groups.first().copied().unwrap_or("");
    let args = groups.get(1).copied().unwrap_or("");
    format!(
        "$case->expect({})\n     ->{}({})\n     ->validate();",
        value, title, args
    )
}
