use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use unitary_docs::catalogue::duplicate_titles;
use unitary_docs::render::html::page_html;
use unitary_docs::{
    is_searchable_query, load_catalogue, render_sections, search, Catalogue, SearchResult,
    MIN_QUERY_LEN,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands, RenderFormat};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalogue = open_catalogue(cli.catalogue.as_deref())?;

    match cli.command {
        Commands::Search { query, limit, json } => run_search(&catalogue, &query, limit, json),
        Commands::Render {
            dataset,
            format,
            output,
        } => run_render(&catalogue, &dataset, format, output.as_deref()),
        Commands::Inspect => {
            inspect_catalogue(&catalogue);
            Ok(())
        }
    }
}

fn open_catalogue(path: Option<&Path>) -> Result<Catalogue> {
    match path {
        Some(path) => load_catalogue(path)
            .with_context(|| format!("Failed to load catalogue {}", path.display())),
        None => Catalogue::bundled().context("Bundled catalogue is invalid"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(catalogue: &Catalogue, query: &str, limit: usize, json: bool) -> Result<()> {
    let mut results = search(catalogue, query);
    results.truncate(limit);

    if json {
        let out = serde_json::to_string_pretty(&results).context("Failed to encode results")?;
        println!("{}", out);
        return Ok(());
    }

    print_results(query, &results);
    Ok(())
}

fn print_results(query: &str, results: &[SearchResult<'_>]) {
    double_header();
    title(&format!("SEARCH \"{}\"", truncate(query, 60)));
    double_footer();

    section_top("RESULTS");
    if !is_searchable_query(query) {
        row(&format!(
            "  {}",
            dim(&format!("Type at least {} characters to search", MIN_QUERY_LEN))
        ));
    } else if results.is_empty() {
        row(&format!("  {}", dim("No matches")));
    } else {
        row(&format!(
            "  {}  {}  {}",
            dim("score"),
            pad_right(&dim("title"), 26),
            dim("link")
        ));
        for result in results {
            row(&format!(
                "  {}  {}  {}",
                score_value(result.score),
                pad_right(&truncate(&result.document.title, 26), 26),
                truncate(&result.url, 42)
            ));
        }
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDER
// ═══════════════════════════════════════════════════════════════════════════

fn run_render(
    catalogue: &Catalogue,
    key: &str,
    format: RenderFormat,
    output: Option<&Path>,
) -> Result<()> {
    let dataset = catalogue.dataset(key).ok_or_else(|| {
        let known: Vec<&str> = catalogue.datasets.iter().map(|d| d.key.as_str()).collect();
        anyhow!("Unknown dataset '{}' (available: {})", key, known.join(", "))
    })?;

    let page = render_sections(&dataset.documents);
    let rendered = match format {
        RenderFormat::Json => {
            serde_json::to_string_pretty(&page).context("Failed to encode render model")?
        }
        RenderFormat::Html => page_html(&page),
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("  ✓ {} ({} sections)", path.display(), page.sections.len());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn inspect_catalogue(catalogue: &Catalogue) {
    double_header();
    title("UNITARY DOCS CATALOGUE");
    double_footer();

    section_top("DATASETS");
    if catalogue.datasets.is_empty() {
        row(&format!("  {}", dim("No datasets")));
    }
    for dataset in &catalogue.datasets {
        let with_args = dataset.documents.iter().filter(|d| !d.args.is_empty()).count();
        let untagged = dataset.documents.iter().filter(|d| d.tags.is_empty()).count();
        row(&format!(
            "  {} {}",
            pad_right(&dataset_badge(&dataset.key), 20),
            truncate(&dataset.url, 56)
        ));
        row(&format!(
            "      {} documents │ {} with parameters │ {} untagged",
            dataset.documents.len(),
            with_args,
            untagged
        ));
    }

    let duplicates: Vec<(&str, &str)> = catalogue
        .datasets
        .iter()
        .flat_map(|d| duplicate_titles(d).into_iter().map(move |t| (d.key.as_str(), t)))
        .collect();
    if !duplicates.is_empty() {
        section_mid("DUPLICATE TITLES");
        for (key, title) in duplicates {
            row(&format!("  {} {}", dataset_badge(key), title));
        }
    }
    section_bot();

    println!(
        "{} datasets │ {} documents",
        catalogue.datasets.len(),
        catalogue.document_count()
    );
}
