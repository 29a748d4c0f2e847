//! Additive-point relevance scorer.
//!
//! Given a query and the document index, computes an integer score
//! per document and returns a ranked, capped result list. This is the
//! precision-oriented sibling of [`suggest`](crate::suggest): every
//! applicable bonus is summed, zero-score documents are dropped, and
//! ties keep catalog insertion order.
//!
//! # Scoring
//!
//! | Signal | Points |
//! |--------|--------|
//! | Exact title match | +100 |
//! | Title starts with query | +50 |
//! | Title contains query | +30 |
//! | Description contains query | +10 |
//! | Metadata scalar contains query | +5 each |
//! | Metadata list contains query | +15 each |
//! | `features`/`challenges`/`outcomes` list contains query | +20 each |
//! | Kind is project or skill | +5 |
//!
//! The title bonuses are mutually exclusive; everything else stacks.
//! `search` is a pure function: same query + same documents → same
//! ordered result, every call.

use tracing::debug;

use crate::models::{DocKind, Document, MetaValue, ScoredDocument};

/// Maximum number of results returned per query.
pub const MAX_RESULTS: usize = 12;

/// Project-narrative lists weighted above generic list matches, so
/// that a hit inside a project's story outranks a plain tag match.
const NARRATIVE_LISTS: [&str; 3] = ["features", "challenges", "outcomes"];

/// Score one document against an already-lowercased, trimmed query.
pub fn score(query_lc: &str, doc: &Document) -> u32 {
    let mut points = 0;

    let title_lc = doc.title.to_lowercase();
    if title_lc == query_lc {
        points += 100;
    } else if title_lc.starts_with(query_lc) {
        points += 50;
    } else if title_lc.contains(query_lc) {
        points += 30;
    }

    if doc.description.to_lowercase().contains(query_lc) {
        points += 10;
    }

    for (key, value) in &doc.metadata {
        match value {
            MetaValue::Text(s) => {
                if s.to_lowercase().contains(query_lc) {
                    points += 5;
                }
            }
            MetaValue::List(items) => {
                let hit = items.iter().any(|i| i.to_lowercase().contains(query_lc));
                if hit {
                    if NARRATIVE_LISTS.contains(&key.as_str()) {
                        points += 20;
                    } else {
                        points += 15;
                    }
                }
            }
        }
    }

    if matches!(doc.kind, DocKind::Project | DocKind::Skill) {
        points += 5;
    }

    points
}

/// Rank documents against a query.
///
/// Returns at most [`MAX_RESULTS`] documents with score > 0, ordered
/// by descending score. The sort is stable, so equal scores keep
/// their index (catalog insertion) order.
pub fn search<'a>(query: &str, documents: &'a [Document]) -> Vec<ScoredDocument<'a>> {
    let query_lc = query.trim().to_lowercase();
    if query_lc.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<ScoredDocument<'a>> = documents
        .iter()
        .filter_map(|doc| {
            let s = score(&query_lc, doc);
            (s > 0).then_some(ScoredDocument { document: doc, score: s })
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(MAX_RESULTS);

    debug!(query = %query_lc, results = hits.len(), "search complete");
    hits
}
