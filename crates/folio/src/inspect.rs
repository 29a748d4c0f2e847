//! `folio index` — inspect the built document index.

use std::collections::BTreeMap;

use anyhow::Result;

use folio_core::index;

use crate::catalog;
use crate::config::Config;

/// Print per-kind counts and every document in index order.
pub fn run_index(config: &Config) -> Result<()> {
    let cat = catalog::load(config)?;
    let documents = index::build(&cat);

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in &documents {
        *counts.entry(doc.kind.as_str()).or_insert(0) += 1;
    }

    println!("{} documents", documents.len());
    for (kind, count) in &counts {
        println!("  {kind:<14} {count}");
    }
    println!();

    for doc in &documents {
        println!("{:<14} {:<36} {}", doc.kind.as_str(), doc.id, doc.title);
    }

    Ok(())
}
