//! Artifact resolution against a fixed artifact set.
//!
//! An [`ArtifactRepository`] is built once per packaging session from the
//! project's resolved dependencies and answers any number of lookups:
//!
//! - [`find_candidates`](ArtifactRepository::find_candidates): every artifact
//!   matching group, name and type
//! - [`find_unique`](ArtifactRepository::find_unique): the single artifact a
//!   query designates, or `None`
//! - [`resolve`](ArtifactRepository::resolve): like `find_unique`, but reports
//!   why nothing was returned
//!
//! The repository never mutates its artifacts. Lookups borrow from it, so it
//! can be shared between threads as long as the type mapping can.

use std::collections::btree_set;
use std::collections::BTreeSet;

use earpack_types::{Artifact, ArtifactQuery};
use tracing::{debug, trace, warn};

use crate::errors::ResolveError;
use crate::scope::ClassifierScope;
use crate::type_mapping::{ExactTypeMapping, TypeMapping};

/// Resolver over an immutable set of artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactRepository<M = ExactTypeMapping> {
    /// Sorted by the artifact total order; iteration order is part of the
    /// lookup semantics.
    artifacts: BTreeSet<Artifact>,
    /// Classifier value that designates the unclassified artifact.
    main_artifact_id: String,
    type_mapping: M,
    classifier_scope: ClassifierScope,
}

impl<M: TypeMapping> ArtifactRepository<M> {
    /// Create a repository. Duplicate artifacts collapse into one entry.
    pub fn new<I>(artifacts: I, main_artifact_id: impl Into<String>, type_mapping: M) -> Self
    where
        I: IntoIterator<Item = Artifact>,
    {
        let artifacts: BTreeSet<Artifact> = artifacts.into_iter().collect();
        let main_artifact_id = main_artifact_id.into();
        debug!(
            artifacts = artifacts.len(),
            main_artifact_id = %main_artifact_id,
            "artifact repository created"
        );
        Self {
            artifacts,
            main_artifact_id,
            type_mapping,
            classifier_scope: ClassifierScope::default(),
        }
    }

    pub fn with_classifier_scope(mut self, scope: ClassifierScope) -> Self {
        self.classifier_scope = scope;
        self
    }

    /// Artifacts with the given group and artifact id whose type satisfies
    /// `artifact_type` according to the type mapping.
    ///
    /// Returns an empty set when nothing matches; absence and ambiguity are
    /// for the caller to judge.
    pub fn find_candidates(
        &self,
        group_id: &str,
        artifact_id: &str,
        artifact_type: &str,
    ) -> BTreeSet<&Artifact> {
        self.artifacts
            .iter()
            .filter(|a| {
                a.matches_coordinates(group_id, artifact_id)
                    && self
                        .type_mapping
                        .is_mapped_to_type(artifact_type, &a.artifact_type)
            })
            .collect()
    }

    /// The artifact designated by group, name, type and optional classifier.
    ///
    /// - no candidates: `None`
    /// - no classifier: the candidate if it is the only one, `None` otherwise
    /// - classifier: the first artifact (in total order) whose classifier
    ///   equals it, or that is unclassified when the classifier equals the
    ///   main artifact id. The search covers the candidates or the whole set
    ///   depending on the [`ClassifierScope`].
    pub fn find_unique(
        &self,
        group_id: &str,
        artifact_id: &str,
        artifact_type: &str,
        classifier: Option<&str>,
    ) -> Option<&Artifact> {
        let candidates = self.find_candidates(group_id, artifact_id, artifact_type);
        if candidates.is_empty() {
            trace!(group_id, artifact_id, artifact_type, "no candidates");
            return None;
        }

        let Some(classifier) = classifier else {
            if candidates.len() == 1 {
                return candidates.into_iter().next();
            }
            trace!(
                group_id,
                artifact_id,
                artifact_type,
                candidates = candidates.len(),
                "several candidates and no classifier"
            );
            return None;
        };

        let found = match self.classifier_scope {
            ClassifierScope::Candidates => candidates
                .iter()
                .copied()
                .find(|a| self.classifier_matches(a, classifier)),
            ClassifierScope::Repository => {
                let found = self
                    .artifacts
                    .iter()
                    .find(|a| self.classifier_matches(a, classifier));
                if let Some(artifact) = found {
                    if !candidates.contains(artifact) {
                        warn!(
                            group_id,
                            artifact_id,
                            artifact_type,
                            classifier,
                            matched = %artifact,
                            "classifier matched an artifact outside the requested coordinates"
                        );
                    }
                }
                found
            }
        };
        trace!(
            group_id,
            artifact_id,
            artifact_type,
            classifier,
            found = found.is_some(),
            "classifier lookup"
        );
        found
    }

    /// [`find_unique`](Self::find_unique) without a classifier.
    pub fn find_single(
        &self,
        group_id: &str,
        artifact_id: &str,
        artifact_type: &str,
    ) -> Option<&Artifact> {
        self.find_unique(group_id, artifact_id, artifact_type, None)
    }

    /// Resolve a dependency reference to exactly one artifact.
    ///
    /// Fails with [`ResolveError::InvalidRequest`] when the group or artifact
    /// id is missing or empty, [`ResolveError::AmbiguousArtifact`] when more
    /// than one candidate remains, and [`ResolveError::ArtifactNotFound`]
    /// otherwise.
    pub fn resolve(
        &self,
        group_id: Option<&str>,
        artifact_id: Option<&str>,
        artifact_type: &str,
        classifier: Option<&str>,
    ) -> Result<&Artifact, ResolveError> {
        let (Some(group), Some(artifact)) = (
            group_id.filter(|g| !g.is_empty()),
            artifact_id.filter(|a| !a.is_empty()),
        ) else {
            return Err(ResolveError::InvalidRequest {
                artifact_type: artifact_type.to_string(),
                group_id: group_id.map(str::to_string),
                artifact_id: artifact_id.map(str::to_string),
            });
        };

        if let Some(found) = self.find_unique(group, artifact, artifact_type, classifier) {
            debug!(
                artifact_type,
                group_id = group,
                artifact_id = artifact,
                resolved = %found,
                "artifact resolved"
            );
            return Ok(found);
        }

        let candidates = self.find_candidates(group, artifact, artifact_type);
        let err = if candidates.len() > 1 {
            ResolveError::AmbiguousArtifact {
                artifact_type: artifact_type.to_string(),
                group_id: group.to_string(),
                artifact_id: artifact.to_string(),
                candidates: candidates.len(),
            }
        } else {
            ResolveError::ArtifactNotFound {
                artifact_type: artifact_type.to_string(),
                group_id: group.to_string(),
                artifact_id: artifact.to_string(),
            }
        };
        debug!(error = %err, "artifact resolution failed");
        Err(err)
    }

    pub fn resolve_query(&self, query: &ArtifactQuery) -> Result<&Artifact, ResolveError> {
        self.resolve(
            query.group_id(),
            query.artifact_id(),
            &query.artifact_type,
            query.classifier(),
        )
    }

    fn classifier_matches(&self, artifact: &Artifact, classifier: &str) -> bool {
        match artifact.classifier() {
            None => classifier == self.main_artifact_id,
            Some(own) => own == classifier,
        }
    }
}

impl<M> ArtifactRepository<M> {
    /// All artifacts in total order.
    pub fn artifacts(&self) -> btree_set::Iter<'_, Artifact> {
        self.artifacts.iter()
    }

    pub fn contains(&self, artifact: &Artifact) -> bool {
        self.artifacts.contains(artifact)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn main_artifact_id(&self) -> &str {
        &self.main_artifact_id
    }

    pub fn classifier_scope(&self) -> ClassifierScope {
        self.classifier_scope
    }

    pub fn type_mapping(&self) -> &M {
        &self.type_mapping
    }
}
