//! Shared types for the earpack workspace.
//!
//! This crate holds the value types passed between the resolver and the
//! packaging front end:
//!
//! - [`Artifact`] - a concrete build output with a total ordering
//! - [`ArtifactQuery`] - a logical dependency reference to resolve
//! - [`CoordinateError`] - parse failures for `group:artifact:...` strings
//! - [`env_utils`] - typed environment variable access

pub mod artifact;
pub mod coordinates;
pub mod env_utils;
pub mod query;

pub use artifact::Artifact;
pub use coordinates::CoordinateError;
pub use env_utils::{env_bool, env_string, env_var};
pub use query::{ArtifactQuery, DEFAULT_ARTIFACT_TYPE};
