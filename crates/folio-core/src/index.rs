//! Search index builder.
//!
//! Flattens the [`Catalog`](crate::catalog::Catalog) into a single
//! ordered list of [`Document`]s. Each catalog entity produces one
//! primary document; projects additionally produce one auxiliary
//! document per technology, so that searching a single technology
//! name surfaces the specific project using it rather than a generic
//! skills hit.
//!
//! # Guarantees
//!
//! - Rebuilding from an unchanged catalog is idempotent: same ids,
//!   same count, same order (auxiliary ids are derived
//!   deterministically from `parent id + item`).
//! - Missing or malformed catalog fields become empty strings/lists,
//!   never errors.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::{Catalog, Project};
use crate::models::{DocKind, Document, MetaValue};

/// Lowercase a string and replace every non-alphanumeric run with a
/// single hyphen. Used for deriving stable document ids.
pub fn slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_dash = false;
    for c in s.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

fn text(s: &str) -> MetaValue {
    MetaValue::Text(s.to_string())
}

fn list(items: &[String]) -> MetaValue {
    MetaValue::List(items.to_vec())
}

/// Build the full document list from a catalog.
pub fn build(catalog: &Catalog) -> Vec<Document> {
    let mut docs = Vec::new();

    push_pages(catalog, &mut docs);

    for project in &catalog.projects {
        push_project(project, &mut docs);
    }

    for skill in &catalog.skills {
        let mut metadata = BTreeMap::new();
        metadata.insert("category".to_string(), text(&skill.category));
        metadata.insert("level".to_string(), text(&skill.level));
        docs.push(Document {
            id: format!("skill-{}", slug(&skill.name)),
            kind: DocKind::Skill,
            title: skill.name.clone(),
            description: skill.description.clone(),
            url: Some("#skills".to_string()),
            metadata,
        });
    }

    for exp in &catalog.experience {
        let mut metadata = BTreeMap::new();
        metadata.insert("company".to_string(), text(&exp.company));
        metadata.insert("period".to_string(), text(&exp.period));
        metadata.insert("highlights".to_string(), list(&exp.highlights));
        docs.push(Document {
            id: format!("experience-{}", slug(&exp.company)),
            kind: DocKind::Experience,
            title: format!("{} at {}", exp.role, exp.company),
            description: exp.description.clone(),
            url: Some("#experience".to_string()),
            metadata,
        });
    }

    for ach in &catalog.achievements {
        let mut metadata = BTreeMap::new();
        metadata.insert("year".to_string(), text(&ach.year));
        docs.push(Document {
            id: format!("achievement-{}", slug(&ach.title)),
            kind: DocKind::Achievement,
            title: ach.title.clone(),
            description: ach.description.clone(),
            url: Some("#achievements".to_string()),
            metadata,
        });
    }

    for cert in &catalog.certifications {
        let mut metadata = BTreeMap::new();
        metadata.insert("issuer".to_string(), text(&cert.issuer));
        metadata.insert("year".to_string(), text(&cert.year));
        docs.push(Document {
            id: format!("certification-{}", slug(&cert.name)),
            kind: DocKind::Certification,
            title: cert.name.clone(),
            description: cert_description(cert),
            url: non_empty(&cert.url),
            metadata,
        });
    }

    for post in &catalog.posts {
        let mut metadata = BTreeMap::new();
        metadata.insert("tags".to_string(), list(&post.tags));
        docs.push(Document {
            id: format!("blog-{}", slug(&post.title)),
            kind: DocKind::Blog,
            title: post.title.clone(),
            description: post.summary.clone(),
            url: non_empty(&post.url),
            metadata,
        });
    }

    debug!(documents = docs.len(), "search index built");
    docs
}

fn push_pages(catalog: &Catalog, docs: &mut Vec<Document>) {
    let profile = &catalog.profile;
    docs.push(Document {
        id: "page-home".to_string(),
        kind: DocKind::Page,
        title: "Welcome".to_string(),
        description: format!("{} — {}. {}", profile.name, profile.title, profile.summary),
        url: Some("#home".to_string()),
        metadata: BTreeMap::new(),
    });
    docs.push(Document {
        id: "page-contact".to_string(),
        kind: DocKind::Contact,
        title: "Contact".to_string(),
        description: format!("Email {} or find me in {}.", profile.email, profile.location),
        url: non_empty(&profile.email).map(|e| format!("mailto:{e}")),
        metadata: BTreeMap::new(),
    });
    docs.push(Document {
        id: "page-chat".to_string(),
        kind: DocKind::Chat,
        title: "AI Chat Assistant".to_string(),
        description: "Ask questions about projects, skills, and experience in plain text.".to_string(),
        url: Some("#chat".to_string()),
        metadata: BTreeMap::new(),
    });
    docs.push(Document {
        id: "page-voice".to_string(),
        kind: DocKind::Voice,
        title: "Voice Assistant".to_string(),
        description: "Talk to the portfolio — speech in, spoken answers out.".to_string(),
        url: Some("#voice".to_string()),
        metadata: BTreeMap::new(),
    });
}

fn push_project(project: &Project, docs: &mut Vec<Document>) {
    let base_id = non_empty(&project.id)
        .unwrap_or_else(|| format!("project-{}", slug(&project.name)));

    let mut metadata = BTreeMap::new();
    metadata.insert("technologies".to_string(), list(&project.technologies));
    metadata.insert("features".to_string(), list(&project.features));
    metadata.insert("challenges".to_string(), list(&project.challenges));
    metadata.insert("outcomes".to_string(), list(&project.outcomes));
    metadata.insert("tags".to_string(), list(&project.tags));
    metadata.insert("period".to_string(), text(&project.period));

    docs.push(Document {
        id: base_id.clone(),
        kind: DocKind::Project,
        title: project.name.clone(),
        description: project.description.clone(),
        url: non_empty(&project.url),
        metadata,
    });

    // One auxiliary document per technology so a query for a single
    // technology name surfaces the project that uses it.
    for tech in &project.technologies {
        let mut metadata = BTreeMap::new();
        metadata.insert("project".to_string(), text(&project.name));
        metadata.insert("technologies".to_string(), MetaValue::List(vec![tech.clone()]));
        docs.push(Document {
            id: format!("{}-tech-{}", base_id, slug(tech)),
            kind: DocKind::Project,
            title: tech.clone(),
            description: format!("Technology used in {}.", project.name),
            url: non_empty(&project.url),
            metadata,
        });
    }
}

fn cert_description(cert: &crate::catalog::Certification) -> String {
    match (cert.issuer.is_empty(), cert.year.is_empty()) {
        (false, false) => format!("{}, {}", cert.issuer, cert.year),
        (false, true) => cert.issuer.clone(),
        _ => String::new(),
    }
}
