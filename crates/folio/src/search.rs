//! `folio search` and `folio suggest` — the typed-query surfaces.

use anyhow::Result;

use folio_core::{index, search, suggest};

use crate::catalog;
use crate::config::Config;

/// Rank the index against a query and print the results.
pub fn run_search(config: &Config, query: &str, limit: Option<usize>) -> Result<()> {
    let cat = catalog::load(config)?;
    let documents = index::build(&cat);
    let mut results = search::search(query, &documents);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        let doc = result.document;
        println!("{}. [{}] {} / {}", i + 1, result.score, doc.kind, doc.title);
        if !doc.description.is_empty() {
            println!("    about: {}", doc.description);
        }
        if let Some(url) = &doc.url {
            println!("    url: {url}");
        }
        println!("    id: {}", doc.id);
        println!();
    }

    Ok(())
}

/// Propose completions for a partial query and print them.
pub fn run_suggest(config: &Config, prefix: &str) -> Result<()> {
    let cat = catalog::load(config)?;
    let documents = index::build(&cat);
    let suggestions = suggest::suggest(prefix, &documents);

    if suggestions.is_empty() {
        println!("No suggestions.");
        return Ok(());
    }

    for s in &suggestions {
        println!("- {} [{}] ({})", s.text, s.kind, s.icon);
    }

    Ok(())
}
