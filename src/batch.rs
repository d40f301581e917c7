//! Batch resolution of module references.
//!
//! An EAR descriptor typically lists dozens of modules. They are resolved
//! against the same immutable repository, so the lookups run in parallel on
//! the rayon pool; results keep the order of the input queries.

use anyhow::{Context, Result};
use earpack_resolver::{ArtifactRepository, ResolveError, ResolveErrorKind, TypeMapping};
use earpack_types::{Artifact, ArtifactQuery};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

pub type ResolveOutcome<'r> = std::result::Result<&'r Artifact, ResolveError>;

/// Resolve every query on the global rayon pool.
pub fn resolve_all<'r, M: TypeMapping>(
    repo: &'r ArtifactRepository<M>,
    queries: &[ArtifactQuery],
) -> Vec<ResolveOutcome<'r>> {
    queries
        .par_iter()
        .map(|query| repo.resolve_query(query))
        .collect()
}

/// Resolve every query on a dedicated pool of `threads` workers, or on the
/// global pool when `threads` is `None`.
pub fn resolve_all_with_threads<'r, M: TypeMapping>(
    repo: &'r ArtifactRepository<M>,
    queries: &[ArtifactQuery],
    threads: Option<usize>,
) -> Result<Vec<ResolveOutcome<'r>>> {
    let Some(threads) = threads else {
        return Ok(resolve_all(repo, queries));
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("failed to build resolution thread pool")?;
    debug!(threads, queries = queries.len(), "resolving batch");
    Ok(pool.install(|| resolve_all(repo, queries)))
}

/// Outcome counts of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub resolved: usize,
    pub ambiguous: usize,
    pub not_found: usize,
    pub invalid: usize,
}

impl BatchReport {
    pub fn from_outcomes(outcomes: &[ResolveOutcome<'_>]) -> Self {
        let mut report = BatchReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(_) => report.resolved += 1,
                Err(err) => match err.kind() {
                    ResolveErrorKind::AmbiguousArtifact => report.ambiguous += 1,
                    ResolveErrorKind::ArtifactNotFound => report.not_found += 1,
                    ResolveErrorKind::InvalidRequest => report.invalid += 1,
                },
            }
        }
        report
    }

    pub fn failed(&self) -> usize {
        self.ambiguous + self.not_found + self.invalid
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}
