//! Page models built from section lists.

use super::common::{make_param, make_section, BUNDLED};
use unitary_docs::render::html::page_html;
use unitary_docs::{render_sections, Document, Parameter};

#[test]
fn test_nav_and_sections_line_up() {
    let page = render_sections(&[
        make_section("length", "", vec![]),
        make_section("Is Email", "", vec![]),
    ]);
    assert_eq!(page.nav.len(), 2);
    assert_eq!(page.sections.len(), 2);
    for (nav, section) in page.nav.iter().zip(&page.sections) {
        assert_eq!(nav.label, section.title);
        assert_eq!(nav.anchor_id, section.anchor_id);
    }
    assert_eq!(page.nav[1].anchor_id, "is-email");
}

#[test]
fn test_parameter_rows_show_name_and_description() {
    let page = render_sections(&[make_section(
        "length",
        "",
        vec![
            make_param("$min", "The minimum allowed length of the string."),
            Parameter {
                kind: "int".to_string(),
                name: "$max".to_string(),
                required: false,
                description: "The maximum allowed length.".to_string(),
            },
        ],
    )]);
    let rows = page.sections[0].parameters.as_ref().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].name, "$max");
    assert_eq!(rows[1].description, "The maximum allowed length.");
}

#[test]
fn test_no_parameter_table_for_empty_args() {
    let page = render_sections(&[make_section("isRequired", "", vec![])]);
    assert!(page.sections[0].parameters.is_none());
}

#[test]
fn test_description_rendered_as_markdown() {
    let doc = Document {
        description: "Checks for *exactly* `false`.".to_string(),
        ..make_section("isFalse", "", vec![])
    };
    let page = render_sections(&[doc]);
    assert_eq!(
        page.sections[0].body_html,
        "<p>Checks for <em>exactly</em> <code>false</code>.</p>\n"
    );
}

#[test]
fn test_render_model_serializes() {
    let page = render_sections(&[make_section("isTrue", "value(true)->isTrue()", vec![])]);
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["nav"][0]["anchor_id"], "istrue");
    assert_eq!(json["sections"][0]["parameters"], serde_json::Value::Null);
    assert!(json["sections"][0].get("result").is_none());
}

#[test]
fn test_bundled_dataset_renders_every_section() {
    let docs = &BUNDLED.dataset("validations").unwrap().documents;
    let page = render_sections(docs);
    assert_eq!(page.sections.len(), docs.len());
    assert!(page.sections.iter().all(|s| s.example.starts_with("$case->expect(")));
    assert!(page.sections.iter().all(|s| s.example.ends_with("\n     ->validate();")));

    let with_args = docs.iter().filter(|d| !d.args.is_empty()).count();
    let with_table = page.sections.iter().filter(|s| s.parameters.is_some()).count();
    assert_eq!(with_args, with_table);

    let html = page_html(&page);
    assert!(html.contains("<div class=\"item\" id=\"length\">"));
    assert!(html.contains("<h3>Result</h3>"));
}
