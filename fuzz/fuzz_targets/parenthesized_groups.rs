// Copyright 2025-present MaplePHP
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the parenthesis scanner and example generator.
//!
//! Arbitrary code strings must never panic on slicing (multi-byte input is
//! the usual suspect), and every group must be free of parentheses.

#![no_main]

use libfuzzer_sys::fuzz_target;
use unitary_docs::render::{extract_parenthesized, generate_example};

fuzz_target!(|code: &str| {
    let groups = extract_parenthesized(code);
    for group in &groups {
        assert!(!group.contains('(') && !group.contains(')'));
    }

    let example = generate_example("method", code);
    assert!(example.starts_with("$case->expect("));
    assert!(example.ends_with("->validate();"));
});
