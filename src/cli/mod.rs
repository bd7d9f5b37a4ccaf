// Copyright 2025-present MaplePHP
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the unitary-docs command-line interface.
//!
//! Three subcommands: `search` to query the catalogue the way the site's
//! search box does, `render` to produce the page model for one dataset, and
//! `inspect` to summarize what a catalogue file contains. Without
//! `--catalogue` everything runs against the bundled validator catalogue.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "unitary-docs",
    about = "Search and render the PHP Unitary documentation catalogue",
    version
)]
pub struct Cli {
    /// Catalogue JSON file (defaults to the bundled validator catalogue)
    #[arg(long, global = true, env = "UNITARY_DOCS_CATALOGUE")]
    pub catalogue: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalogue and display ranked results
    Search {
        /// Search query (at least two characters)
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render the documentation sections of one dataset
    Render {
        /// Dataset key, e.g. "validations"
        dataset: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = RenderFormat::Json)]
        format: RenderFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize the datasets in a catalogue
    Inspect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Render model as pretty-printed JSON
    Json,
    /// Standalone HTML fragment
    Html,
}
