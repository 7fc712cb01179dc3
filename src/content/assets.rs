//! Load-time asset resolution.
//!
//! Image references in the content file are relative path strings. They are
//! resolved against the asset directory exactly once, when the content
//! loads; renderers look references up in the resulting map and fall back
//! to a placeholder when the file was not there. Resolution failure is a
//! warning, never an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::model::Portfolio;

/// Outcome of resolving one image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    /// The referenced file exists at this path.
    Found(PathBuf),
    /// The reference did not resolve; render a placeholder.
    Missing,
}

impl Asset {
    pub fn is_found(&self) -> bool {
        matches!(self, Asset::Found(_))
    }
}

/// Static map from reference string to resolution outcome, built once at
/// load. Unknown references (never registered) behave as missing.
#[derive(Debug, Default)]
pub struct AssetMap {
    entries: HashMap<String, Asset>,
}

impl AssetMap {
    /// Resolve every image reference in the portfolio against `asset_dir`.
    pub fn build(portfolio: &Portfolio, asset_dir: &Path) -> Self {
        let mut map = AssetMap::default();

        if let Some(photo) = &portfolio.personal.photo {
            map.register(photo, asset_dir);
        }
        for project in &portfolio.projects {
            if let Some(image) = &project.image {
                map.register(image, asset_dir);
            }
        }
        for credential in &portfolio.certificates {
            if let Some(image) = &credential.image {
                map.register(image, asset_dir);
            }
        }
        for achievement in &portfolio.achievements {
            if let Some(image) = &achievement.image {
                map.register(image, asset_dir);
            }
        }

        map
    }

    fn register(&mut self, reference: &str, asset_dir: &Path) {
        if self.entries.contains_key(reference) {
            return;
        }
        // References may carry a leading slash or an assets/ prefix from
        // the source data; both resolve inside the asset directory.
        let cleaned = reference
            .trim_start_matches('/')
            .trim_start_matches("assets/");
        let candidate = asset_dir.join(cleaned);

        let asset = if candidate.is_file() {
            debug!(reference, path = %candidate.display(), "Resolved asset");
            Asset::Found(candidate)
        } else {
            warn!(reference, path = %candidate.display(), "Asset not found, using placeholder");
            Asset::Missing
        };
        self.entries.insert(reference.to_string(), asset);
    }

    /// Look up a reference. `None` references and unresolved strings both
    /// yield `Missing`.
    pub fn resolve(&self, reference: Option<&str>) -> Asset {
        reference
            .and_then(|r| self.entries.get(r).cloned())
            .unwrap_or(Asset::Missing)
    }

    pub fn missing_count(&self) -> usize {
        self.entries.values().filter(|a| !a.is_found()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{Person, Project};

    fn portfolio_with_images(photo: Option<&str>, image: Option<&str>) -> Portfolio {
        Portfolio {
            personal: Person {
                name: "A".into(),
                email: "a@b.c".into(),
                photo: photo.map(String::from),
                ..Person::default()
            },
            projects: vec![Project {
                id: "p1".into(),
                image: image.map(String::from),
                ..Project::default()
            }],
            ..Portfolio::default()
        }
    }

    #[test]
    fn existing_asset_resolves_to_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("me.png"), b"png").unwrap();

        let portfolio = portfolio_with_images(Some("me.png"), None);
        let map = AssetMap::build(&portfolio, dir.path());

        match map.resolve(Some("me.png")) {
            Asset::Found(path) => assert_eq!(path, dir.path().join("me.png")),
            Asset::Missing => panic!("expected Found"),
        }
        assert_eq!(map.missing_count(), 0);
    }

    #[test]
    fn missing_asset_degrades_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let portfolio = portfolio_with_images(None, Some("shot.png"));
        let map = AssetMap::build(&portfolio, dir.path());

        assert_eq!(map.resolve(Some("shot.png")), Asset::Missing);
        assert_eq!(map.missing_count(), 1);
    }

    #[test]
    fn prefixed_references_resolve_into_asset_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shot.png"), b"png").unwrap();

        let portfolio = portfolio_with_images(None, Some("/assets/shot.png"));
        let map = AssetMap::build(&portfolio, dir.path());
        assert!(map.resolve(Some("/assets/shot.png")).is_found());
    }

    #[test]
    fn unknown_reference_is_missing() {
        let map = AssetMap::default();
        assert_eq!(map.resolve(Some("never-registered.png")), Asset::Missing);
        assert_eq!(map.resolve(None), Asset::Missing);
    }
}
