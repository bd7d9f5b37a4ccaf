//! Description markdown to HTML.
//!
//! CommonMark only, no extensions: descriptions use inline code, emphasis and
//! the odd link, nothing else.

use pulldown_cmark::{html, Options, Parser};

/// Render a markdown fragment to HTML.
pub fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty());
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    html::push_html(&mut out, parser);
    out
}
