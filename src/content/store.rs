//! Loading and validation of the content file.
//!
//! The content file is read exactly once, at startup. Validation is
//! fail-fast: a portfolio without the required fields cannot render
//! anything meaningful, so there is no recovery path past this point.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::model::Portfolio;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Cannot read content file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Content file {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Required field is missing or empty: {0}")]
    MissingField(&'static str),

    #[error("At least one skill category must be non-empty")]
    NoSkills,

    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: String },
}

/// Load the portfolio from `path`, validating the required fields and the
/// uniqueness invariants. Returns the immutable data graph.
pub fn load(path: &Path) -> Result<Portfolio, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let portfolio: Portfolio =
        serde_json::from_str(&raw).map_err(|source| ContentError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&portfolio)?;

    info!(
        path = %path.display(),
        projects = portfolio.projects.len(),
        certificates = portfolio.certificates.len(),
        achievements = portfolio.achievements.len(),
        "Loaded portfolio content"
    );
    Ok(portfolio)
}

/// Check the invariants the renderers rely on. Called by `load` and by the
/// `--check` CLI mode.
pub fn validate(portfolio: &Portfolio) -> Result<(), ContentError> {
    if portfolio.personal.name.trim().is_empty() {
        return Err(ContentError::MissingField("personal.name"));
    }
    if portfolio.personal.email.trim().is_empty() {
        return Err(ContentError::MissingField("personal.email"));
    }
    if portfolio.skills.is_empty() {
        return Err(ContentError::NoSkills);
    }

    check_unique_ids("projects", portfolio.projects.iter().map(|p| p.id.as_str()))?;
    check_unique_ids(
        "certificates",
        portfolio.certificates.iter().map(|c| c.id.as_str()),
    )?;
    check_unique_ids(
        "achievements",
        portfolio.achievements.iter().map(|a| a.id.as_str()),
    )?;

    Ok(())
}

fn check_unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
