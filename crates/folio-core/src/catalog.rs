//! Read-only portfolio content catalog.
//!
//! The catalog is the engine's single data source: profile, projects,
//! skills, experience, achievements, certifications, and blog posts.
//! It is loaded once (from JSON, or the embedded sample) and treated
//! as immutable by every downstream component.
//!
//! Every field carries `#[serde(default)]`, so absent or malformed
//! data degrades to empty strings/lists rather than an error — "data
//! absent" is an empty catalog, never an exception.

use anyhow::{Context, Result};
use serde::Deserialize;

/// The site owner's profile record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub resume_url: String,
}

/// A portfolio project, with the structured lists the index expands
/// into auxiliary documents and the scorer weights individually.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub period: String,
    pub url: String,
    pub featured: bool,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub outcomes: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub level: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub title: String,
    pub summary: String,
    pub url: String,
    pub tags: Vec<String>,
}

/// The full read-only content catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<Certification>,
    pub posts: Vec<BlogPost>,
}

impl Catalog {
    /// Parse a catalog from a JSON string. Unknown fields are ignored
    /// and missing fields default to empty.
    pub fn from_json(raw: &str) -> Result<Catalog> {
        serde_json::from_str(raw).context("failed to parse catalog JSON")
    }

    /// The embedded demo catalog, used when no catalog file is
    /// configured.
    pub fn sample() -> Catalog {
        Catalog::from_json(include_str!("../data/sample_catalog.json"))
            .expect("embedded sample catalog is valid JSON")
    }

    /// The flagship project: the first one marked `featured`, falling
    /// back to the first project.
    pub fn flagship(&self) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.featured)
            .or_else(|| self.projects.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_empty_catalog() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.projects.is_empty());
        assert!(catalog.profile.name.is_empty());
    }

    #[test]
    fn missing_fields_default() {
        let catalog = Catalog::from_json(r#"{"projects": [{"name": "Nexus"}]}"#).unwrap();
        assert_eq!(catalog.projects[0].name, "Nexus");
        assert!(catalog.projects[0].technologies.is_empty());
        assert!(!catalog.projects[0].featured);
    }

    #[test]
    fn sample_catalog_parses() {
        let catalog = Catalog::sample();
        assert!(!catalog.projects.is_empty());
        assert!(!catalog.profile.name.is_empty());
    }

    #[test]
    fn flagship_prefers_featured() {
        let catalog = Catalog::from_json(
            r#"{"projects": [{"name": "A"}, {"name": "B", "featured": true}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.flagship().unwrap().name, "B");
    }
}
