//! Core data models used throughout Folio.
//!
//! These types represent the searchable documents, scored results,
//! suggestions, and command records that flow through the engine.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of entity a [`Document`] was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Project,
    Skill,
    Experience,
    Achievement,
    Certification,
    Education,
    Blog,
    Page,
    Contact,
    Chat,
    Voice,
}

impl DocKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocKind::Project => "project",
            DocKind::Skill => "skill",
            DocKind::Experience => "experience",
            DocKind::Achievement => "achievement",
            DocKind::Certification => "certification",
            DocKind::Education => "education",
            DocKind::Blog => "blog",
            DocKind::Page => "page",
            DocKind::Contact => "contact",
            DocKind::Chat => "chat",
            DocKind::Voice => "voice",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metadata value attached to a [`Document`]: either a scalar or a
/// list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    List(Vec<String>),
}

/// A searchable index entry, generated once per catalog build and
/// immutable afterwards.
///
/// Metadata uses a `BTreeMap` so iteration order — and therefore
/// scoring and suggestion output — is deterministic across runs.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: String,
    pub kind: DocKind,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub metadata: BTreeMap<String, MetaValue>,
}

/// A document paired with its relevance score for one query.
/// Ephemeral: produced per search call, discarded after display.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,
    pub score: u32,
}

/// A query completion proposed by the suggestion generator.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub kind: DocKind,
    /// Icon identifier for the hosting UI.
    pub icon: &'static str,
}

/// The action category a dispatched intent falls into. Recorded on
/// [`CommandRecord`]s and used by front-ends to style history entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Navigate,
    Download,
    Info,
    Settings,
    External,
    Contact,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Navigate => "navigate",
            ActionKind::Download => "download",
            ActionKind::Info => "info",
            ActionKind::Settings => "settings",
            ActionKind::External => "external",
            ActionKind::Contact => "contact",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One executed utterance/response pair in the command history.
/// Never mutated after creation; evicted FIFO when the history ring
/// is full.
#[derive(Debug, Clone, Serialize)]
pub struct CommandRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub utterance: String,
    pub response: String,
    /// `None` for response-only outcomes (help and the fallbacks).
    pub action: Option<ActionKind>,
}
