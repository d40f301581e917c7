//! earpack
//!
//! Front end of the EAR module resolver:
//!
//! - **Manifests**: load the resolved artifacts of a project ([`manifest`])
//! - **Configuration**: main artifact id and classifier scope from env and flags ([`config`])
//! - **Batch resolution**: resolve many module references in parallel ([`batch`])
//!
//! The resolution rules themselves live in [`earpack_resolver`]; this crate
//! re-exports the types needed to drive it.

pub mod batch;
pub mod config;
pub mod manifest;

pub use batch::{resolve_all, resolve_all_with_threads, BatchReport, ResolveOutcome};
pub use config::ResolverConfig;
pub use manifest::{ArtifactManifest, ManifestEntry};

pub use earpack_resolver::{
    ArtifactRepository, ClassifierScope, ExactTypeMapping, FnTypeMapping, ResolveError,
    ResolveErrorKind, TypeMapping,
};
pub use earpack_types::{Artifact, ArtifactQuery};
