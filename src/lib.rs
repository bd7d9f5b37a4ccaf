//! Catalogue search and section rendering for the PHP Unitary documentation.
//!
//! Two independent pieces share one data model:
//!
//! - **search**: weighted substring matching of query tokens against every
//!   document's title, tags and description.
//! - **render**: turns a list of documents into a page model with anchors,
//!   markdown bodies, parameter tables and generated test-case examples.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ catalogue.rs │────▶│  types.rs    │────▶│  search.rs  │
//! │ (load JSON,  │     │ (Catalogue,  │     │  (search,   │
//! │  validate)   │     │  Document)   │     │   rank)     │
//! └──────────────┘     └──────────────┘     └─────────────┘
//!                             │                    │
//!                             ▼                    ▼
//!                      ┌──────────────┐     ┌─────────────┐
//!                      │  render/     │     │ scoring.rs  │
//!                      │ (SectionPage)│     │ (3 / 2 / 1) │
//!                      └──────────────┘     └─────────────┘
//! ```
//!
//! Both are pure functions over an immutable `Catalogue` built once at
//! startup. Nothing is cached between calls.
//!
//! # Usage
//!
//! ```no_run
//! use unitary_docs::{render_sections, search, Catalogue};
//!
//! let catalogue = Catalogue::bundled().expect("bundled catalogue");
//!
//! for hit in search(&catalogue, "email dns") {
//!     println!("{} ({}) -> {}", hit.document.title, hit.score, hit.url);
//! }
//!
//! let docs = &catalogue.dataset("validations").unwrap().documents;
//! let page = render_sections(docs);
//! println!("{}", page.sections[0].example);
//! ```

// Module declarations
pub mod catalogue;
pub mod render;
mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use catalogue::{load_catalogue, parse_catalogue, CatalogueError};
pub use render::{
    render_section, render_sections, NavItem, ParameterRow, RenderedSection, SectionPage,
};
pub use scoring::{
    field_weight, score_document, FieldType, DESCRIPTION_WEIGHT, MAX_TOKEN_SCORE, TAGS_WEIGHT,
    TITLE_WEIGHT,
};
pub use search::{rank, result_url, search};
pub use types::{Catalogue, Dataset, Document, Parameter, SearchResult};
pub use utils::{is_searchable_query, slugify, tokenize, MIN_QUERY_LEN};
