//! Standalone HTML for a rendered page.
//!
//! Same structure as the docs site: anchor list, then one block per section
//! with the description, an optional parameter list, the generated example
//! and the expected result. No styling beyond class names.

use std::fmt::Write;

use super::{RenderedSection, SectionPage};

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole page as an HTML fragment.
pub fn page_html(page: &SectionPage) -> String {
    let mut out = String::new();

    out.push_str("<nav>\n<ul class=\"column-list\">\n");
    for item in &page.nav {
        let _ = writeln!(
            out,
            "<li><a href=\"#{}\">{}</a></li>",
            escape_html(&item.anchor_id),
            escape_html(&item.label)
        );
    }
    out.push_str("</ul>\n</nav>\n");

    for section in &page.sections {
        push_section(&mut out, section);
    }
    out
}

fn push_section(out: &mut String, section: &RenderedSection) {
    let _ = writeln!(out, "<div class=\"item\" id=\"{}\">", escape_html(&section.anchor_id));
    let _ = writeln!(out, "<section>\n<h2>{}</h2>", escape_html(&section.title));
    out.push_str(&section.body_html);
    out.push_str("</section>\n");

    if let Some(rows) = &section.parameters {
        out.push_str("<aside class=\"parameters\">\n<h3>Parameters</h3>\n");
        for row in rows {
            let _ = writeln!(
                out,
                "<div><h4>{}</h4><p>{}</p></div>",
                escape_html(&row.name),
                escape_html(&row.description)
            );
        }
        out.push_str("</aside>\n");
    }

    let _ = writeln!(
        out,
        "<aside class=\"example\">\n<h3>Example</h3>\n<pre><code class=\"language-php\">{}</code></pre>\n</aside>",
        escape_html(&section.example)
    );

    if let Some(result) = &section.result {
        let _ = writeln!(
            out,
            "<aside class=\"result\">\n<h3>Result</h3>\n<pre><code>{}</code></pre>\n</aside>",
            escape_html(result)
        );
    }
    out.push_str("</div>\n");
}
