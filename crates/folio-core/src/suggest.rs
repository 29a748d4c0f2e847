//! Suggestion generator — the recall-oriented sibling of the scorer.
//!
//! Given a partial query of at least two characters, proposes up to
//! eight completions drawn from three sources, in order:
//!
//! 1. the curated popular-query and quick-action lists (two-way
//!    substring containment, plus a few fixed keyword aliases),
//! 2. the document index, scanned in index order for substring
//!    containment (first six hits, not re-scored),
//!
//! then de-duplicated case-insensitively by text, first occurrence
//! wins. Intentionally cheap and unranked: this feeds a live
//! "did you mean" dropdown, not the results list.

use std::collections::HashSet;

use crate::models::{DocKind, Document, MetaValue, Suggestion};

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 8;

/// Suggestions only activate at this query length.
const MIN_QUERY_LEN: usize = 2;

/// How many index matches are taken, in index order.
const INDEX_TAKE: usize = 6;

struct Curated {
    text: &'static str,
    kind: DocKind,
    icon: &'static str,
}

const POPULAR: &[Curated] = &[
    Curated { text: "Projects", kind: DocKind::Page, icon: "folder" },
    Curated { text: "Skills", kind: DocKind::Page, icon: "wrench" },
    Curated { text: "Experience", kind: DocKind::Page, icon: "briefcase" },
    Curated { text: "Achievements", kind: DocKind::Page, icon: "trophy" },
    Curated { text: "Certifications", kind: DocKind::Page, icon: "ribbon" },
    Curated { text: "Blog", kind: DocKind::Blog, icon: "pen" },
    Curated { text: "Contact", kind: DocKind::Contact, icon: "mail" },
];

const QUICK_ACTIONS: &[Curated] = &[
    Curated { text: "Download Resume", kind: DocKind::Page, icon: "download" },
    Curated { text: "Contact Me", kind: DocKind::Contact, icon: "mail" },
    Curated { text: "View GitHub", kind: DocKind::Page, icon: "github" },
    Curated { text: "Open LinkedIn", kind: DocKind::Page, icon: "linkedin" },
    Curated { text: "Toggle Theme", kind: DocKind::Page, icon: "theme" },
];

/// Keyword aliases: if the query contains the key, the aliased
/// suggestion is offered even though the texts share no substring.
const ALIASES: &[(&str, Curated)] = &[
    ("ai", Curated { text: "AI Chat Assistant", kind: DocKind::Chat, icon: "bot" }),
    ("voice", Curated { text: "Voice Assistant", kind: DocKind::Voice, icon: "mic" }),
    ("linkedin", Curated { text: "Open LinkedIn", kind: DocKind::Page, icon: "linkedin" }),
    ("github", Curated { text: "View GitHub", kind: DocKind::Page, icon: "github" }),
];

fn icon_for(kind: DocKind) -> &'static str {
    match kind {
        DocKind::Project => "folder",
        DocKind::Skill => "wrench",
        DocKind::Experience => "briefcase",
        DocKind::Achievement => "trophy",
        DocKind::Certification => "ribbon",
        DocKind::Education => "book",
        DocKind::Blog => "pen",
        DocKind::Page => "page",
        DocKind::Contact => "mail",
        DocKind::Chat => "bot",
        DocKind::Voice => "mic",
    }
}

fn curated_matches(entry: &Curated, query_lc: &str) -> bool {
    let text_lc = entry.text.to_lowercase();
    if text_lc.contains(query_lc) {
        return true;
    }
    // Reverse containment on the first word: "download my resume"
    // still suggests "Download Resume".
    match text_lc.split_whitespace().next() {
        Some(first) => query_lc.contains(first),
        None => false,
    }
}

fn document_matches(doc: &Document, query_lc: &str) -> bool {
    if doc.title.to_lowercase().contains(query_lc)
        || doc.description.to_lowercase().contains(query_lc)
    {
        return true;
    }
    doc.metadata.values().any(|v| match v {
        MetaValue::Text(s) => s.to_lowercase().contains(query_lc),
        MetaValue::List(items) => items.iter().any(|i| i.to_lowercase().contains(query_lc)),
    })
}

/// Propose completions for a partial query.
pub fn suggest(partial: &str, documents: &[Document]) -> Vec<Suggestion> {
    let query_lc = partial.trim().to_lowercase();
    if query_lc.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut out: Vec<Suggestion> = Vec::new();

    for entry in POPULAR.iter().chain(QUICK_ACTIONS.iter()) {
        if curated_matches(entry, &query_lc) {
            out.push(Suggestion {
                text: entry.text.to_string(),
                kind: entry.kind,
                icon: entry.icon,
            });
        }
    }

    for (key, entry) in ALIASES {
        if query_lc.contains(key) {
            out.push(Suggestion {
                text: entry.text.to_string(),
                kind: entry.kind,
                icon: entry.icon,
            });
        }
    }

    let mut taken = 0;
    for doc in documents {
        if taken == INDEX_TAKE {
            break;
        }
        if document_matches(doc, &query_lc) {
            out.push(Suggestion {
                text: doc.title.clone(),
                kind: doc.kind,
                icon: icon_for(doc.kind),
            });
            taken += 1;
        }
    }

    let mut seen = HashSet::new();
    out.retain(|s| seen.insert(s.text.to_lowercase()));
    out.truncate(MAX_SUGGESTIONS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::index;

    #[test]
    fn inactive_below_two_chars() {
        let docs = index::build(&Catalog::sample());
        assert!(suggest("s", &docs).is_empty());
        assert!(suggest("", &docs).is_empty());
    }

    #[test]
    fn capped_at_eight() {
        let docs = index::build(&Catalog::sample());
        for q in ["an", "re", "co", "pro"] {
            assert!(suggest(q, &docs).len() <= MAX_SUGGESTIONS, "query {q}");
        }
    }

    #[test]
    fn deduplicates_by_text_first_wins() {
        // "Skills" is both a popular suggestion and close to the
        // skill document titles; "ski" must surface it exactly once.
        let docs = index::build(&Catalog::sample());
        let suggestions = suggest("ski", &docs);
        let skills: Vec<_> = suggestions
            .iter()
            .filter(|s| s.text.eq_ignore_ascii_case("skills"))
            .collect();
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn aliases_fire_on_keyword() {
        let docs = index::build(&Catalog::sample());
        let suggestions = suggest("ai assistant", &docs);
        assert!(suggestions.iter().any(|s| s.text == "AI Chat Assistant"));

        let suggestions = suggest("voice", &docs);
        assert!(suggestions.iter().any(|s| s.text == "Voice Assistant"));
    }

    #[test]
    fn reverse_containment_on_first_word() {
        let docs = index::build(&Catalog::sample());
        let suggestions = suggest("download my resume", &docs);
        assert!(suggestions.iter().any(|s| s.text == "Download Resume"));
    }

    #[test]
    fn index_matches_surface_titles() {
        let docs = index::build(&Catalog::sample());
        let suggestions = suggest("nexus", &docs);
        assert!(suggestions.iter().any(|s| s.text == "Nexus"));
    }
}
