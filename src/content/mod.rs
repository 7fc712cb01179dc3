//! The content store: the immutable data graph behind every section.
//!
//! This module covers everything between the content file on disk and the
//! renderers:
//!
//! - `model`: the deserialized entities (`Portfolio`, `Person`, `Skills`,
//!   `Project`, `Credential`) and the `ProjectFilter` view
//! - `store`: one-shot loading with fail-fast validation
//! - `assets`: load-time image reference resolution with a `Missing`
//!   sentinel for graceful placeholder rendering

pub mod assets;
pub mod model;
pub mod store;

pub use assets::{Asset, AssetMap};
pub use model::{
    Achievement, Credential, Person, Portfolio, Project, ProjectFilter, SkillCategory, Skills,
};
pub use store::{load, validate, ContentError};
