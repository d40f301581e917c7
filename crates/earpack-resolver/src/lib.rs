//! Earpack Resolver
//!
//! Resolution of logical dependency references against the fixed artifact
//! set of a packaging session.
//!
//! This crate provides:
//! - [`repository`]: the [`ArtifactRepository`] and its lookup operations
//! - [`type_mapping`]: the [`TypeMapping`] capability consulted for type compatibility
//! - [`scope`]: the [`ClassifierScope`] of classifier lookups
//! - [`errors`]: the typed [`ResolveError`]
//!
//! # Disambiguation
//!
//! Several artifacts can share group, name and type and differ only by
//! classifier. By convention the unclassified one is the *main* artifact;
//! queries name it with the repository's main artifact id. A query without
//! classifier only resolves when exactly one candidate exists, otherwise the
//! caller gets a [`ResolveError::AmbiguousArtifact`] telling them to add one.

pub mod errors;
pub mod repository;
pub mod scope;
pub mod type_mapping;

pub use errors::{ResolveError, ResolveErrorKind};
pub use repository::ArtifactRepository;
pub use scope::{ClassifierScope, UnknownScope};
pub use type_mapping::{from_fn, ExactTypeMapping, FnTypeMapping, TypeMapping};
