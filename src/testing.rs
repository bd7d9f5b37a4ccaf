//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Catalogue, Dataset, Document, Parameter};

/// Dataset key used by `make_catalogue`.
pub const TEST_DATASET: &str = "validations";

/// Destination URL used by `make_catalogue`.
pub const TEST_URL: &str = "/docs/validations";

/// Create a simple test document with only a title.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(title: &str) -> Document {
    Document {
        title: title.to_string(),
        description: String::new(),
        tags: vec![],
        args: vec![],
        code: String::new(),
        result: None,
    }
}

/// Create a test document with tags and a description.
pub fn make_doc_with(title: &str, tags: &[&str], description: &str) -> Document {
    Document {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        description: description.to_string(),
        ..make_doc(title)
    }
}

/// Create a renderable section with code and arguments.
pub fn make_section(title: &str, code: &str, args: Vec<Parameter>) -> Document {
    Document {
        code: code.to_string(),
        args,
        ..make_doc(title)
    }
}

/// Create a required parameter.
pub fn make_param(name: &str, description: &str) -> Parameter {
    Parameter {
        kind: "mixed".to_string(),
        name: name.to_string(),
        required: true,
        description: description.to_string(),
    }
}

/// Wrap documents in a single-dataset catalogue.
pub fn make_catalogue(documents: Vec<Document>) -> Catalogue {
    Catalogue::new(vec![Dataset::new(TEST_DATASET, TEST_URL, documents)])
}
