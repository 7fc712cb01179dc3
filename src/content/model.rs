//! Data model for the portfolio content file.
//!
//! Everything here is deserialized once at startup and never mutated.
//! Field-level `default` attributes keep deserialization permissive; the
//! store's validation pass decides what is actually required.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full immutable data graph backing every rendered section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub personal: Person,
    /// Platform name -> profile URL. BTreeMap keeps render order stable.
    #[serde(default)]
    pub social: BTreeMap<String, String>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certificates: Vec<Credential>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// Biographical data. One instance per content file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Skill lists keyed by the four fixed categories. Display order within a
/// category is source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Other,
}

impl SkillCategory {
    /// Fixed display order of the category cards.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend Development",
            SkillCategory::Backend => "Backend Development",
            SkillCategory::Tools => "Tools & Technologies",
            SkillCategory::Other => "Design & Other",
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Skills {
    pub fn category(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Other => &self.other,
        }
    }

    /// Every skill across all categories, in category order. Feeds the
    /// marquee strip.
    pub fn all(&self) -> Vec<&str> {
        SkillCategory::ALL
            .iter()
            .flat_map(|c| self.category(*c).iter().map(String::as_str))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        SkillCategory::ALL.iter().all(|c| self.category(*c).is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "github")]
    pub repo_url: Option<String>,
    #[serde(default, rename = "live")]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// A certification entry with issuer and date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credential {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// An award or recognition entry. Same shape as [`Credential`] but kept as
/// its own collection so the two panels validate and render independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Project list filter. Filtering derives a view; the source collection is
/// never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
}

impl ProjectFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Featured => "Featured",
        }
    }

    pub fn next(&self) -> ProjectFilter {
        match self {
            ProjectFilter::All => ProjectFilter::Featured,
            ProjectFilter::Featured => ProjectFilter::All,
        }
    }

    /// Apply the filter, preserving source order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|p| match self {
                ProjectFilter::All => true,
                ProjectFilter::Featured => p.featured,
            })
            .collect()
    }
}
