// Copyright 2025-present MaplePHP
// SPDX-License-Identifier: Apache-2.0

//! Documentation sections: from catalogue entries to a render model.
//!
//! The docs page for a dataset is a list of anchors followed by one section
//! per document. This module builds the data for that page and nothing else;
//! turning it into pixels is the host's job. `html::page_html` is a plain
//! fallback for the CLI.
//!
//! ```text
//! ┌──────────────┐     ┌────────────────────┐     ┌──────────────┐
//! │ &[Document]  │────▶│  render_sections   │────▶│  SectionPage │
//! └──────────────┘     │  markdown, example │     │  nav +       │
//!                      └────────────────────┘     │  sections    │
//!                                                 └──────────────┘
//! ```
//!
//! Rendering is stateless. Change the input, render the whole page again.

pub mod example;
pub mod html;
pub mod markdown;

use serde::Serialize;

use crate::types::{Document, Parameter};
use crate::utils::slugify;

pub use example::{extract_parenthesized, generate_example};
pub use markdown::markdown_to_html;

/// One entry of the page's anchor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub anchor_id: String,
}

/// A row of the parameter table. Only name and description are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRow {
    pub name: String,
    pub description: String,
}

impl From<&Parameter> for ParameterRow {
    fn from(param: &Parameter) -> Self {
        ParameterRow {
            name: param.name.clone(),
            description: param.description.clone(),
        }
    }
}

/// Everything the page needs to draw one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    pub anchor_id: String,
    pub title: String,
    pub body_html: String,
    /// `None` when the document takes no arguments.
    pub parameters: Option<Vec<ParameterRow>>,
    pub example: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Render model for a whole page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionPage {
    pub nav: Vec<NavItem>,
    pub sections: Vec<RenderedSection>,
}

/// Anchor entry for a section.
pub fn nav_item(section: &Document) -> NavItem {
    NavItem {
        label: section.title.clone(),
        anchor_id: slugify(&section.title),
    }
}

/// Render a single section.
pub fn render_section(section: &Document) -> RenderedSection {
    let parameters = if section.args.is_empty() {
        None
    } else {
        Some(section.args.iter().map(ParameterRow::from).collect())
    };

    RenderedSection {
        anchor_id: slugify(&section.title),
        title: section.title.clone(),
        body_html: markdown_to_html(&section.description),
        parameters,
        example: generate_example(&section.title, &section.code),
        result: section.result.clone(),
    }
}

/// Render a page of sections, keeping input order.
pub fn render_sections(sections: &[Document]) -> SectionPage {
    let page = SectionPage {
        nav: sections.iter().map(nav_item).collect(),
        sections: sections.iter().map(render_section).collect(),
    };
    tracing::debug!(sections = page.sections.len(), "sections rendered");
    page
}
