//! Resolution failures.
//!
//! Every failure carries the offending `(type, group, artifact)` tuple so a
//! caller can tell "add a classifier" apart from "this dependency does not
//! exist" without parsing messages. None of them is retryable: the resolver
//! state is immutable, so the same query fails the same way again.

use std::fmt;

/// Discriminant of a [`ResolveError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveErrorKind {
    InvalidRequest,
    AmbiguousArtifact,
    ArtifactNotFound,
}

impl ResolveErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveErrorKind::InvalidRequest => "invalid_request",
            ResolveErrorKind::AmbiguousArtifact => "ambiguous_artifact",
            ResolveErrorKind::ArtifactNotFound => "artifact_not_found",
        }
    }
}

impl fmt::Display for ResolveErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`ArtifactRepository::resolve`](crate::ArtifactRepository::resolve).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The query is missing its group id or artifact id.
    InvalidRequest {
        artifact_type: String,
        group_id: Option<String>,
        artifact_id: Option<String>,
    },

    /// Several artifacts share group/name/type and the query did not pin one.
    AmbiguousArtifact {
        artifact_type: String,
        group_id: String,
        artifact_id: String,
        /// Number of group/name/type candidates found.
        candidates: usize,
    },

    /// No artifact in the set satisfies group/name/type.
    ArtifactNotFound {
        artifact_type: String,
        group_id: String,
        artifact_id: String,
    },
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            ResolveError::InvalidRequest { .. } => ResolveErrorKind::InvalidRequest,
            ResolveError::AmbiguousArtifact { .. } => ResolveErrorKind::AmbiguousArtifact,
            ResolveError::ArtifactNotFound { .. } => ResolveErrorKind::ArtifactNotFound,
        }
    }

    /// The `(type, group, artifact)` tuple of the failed query.
    pub fn coordinates(&self) -> (&str, Option<&str>, Option<&str>) {
        match self {
            ResolveError::InvalidRequest {
                artifact_type,
                group_id,
                artifact_id,
            } => (
                artifact_type.as_str(),
                group_id.as_deref(),
                artifact_id.as_deref(),
            ),
            ResolveError::AmbiguousArtifact {
                artifact_type,
                group_id,
                artifact_id,
                ..
            }
            | ResolveError::ArtifactNotFound {
                artifact_type,
                group_id,
                artifact_id,
            } => (
                artifact_type.as_str(),
                Some(group_id.as_str()),
                Some(artifact_id.as_str()),
            ),
        }
    }

    /// Candidate count for ambiguity failures.
    pub fn candidate_count(&self) -> Option<usize> {
        match self {
            ResolveError::AmbiguousArtifact { candidates, .. } => Some(*candidates),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::InvalidRequest {
                artifact_type,
                group_id,
                artifact_id,
            } => write!(
                f,
                "Could not resolve artifact[{}:{}:{}]",
                artifact_type,
                group_id.as_deref().unwrap_or("null"),
                artifact_id.as_deref().unwrap_or("null")
            ),
            ResolveError::AmbiguousArtifact {
                artifact_type,
                group_id,
                artifact_id,
                candidates,
            } => write!(
                f,
                "Artifact[{}:{}:{}] has {} candidates, please provide a classifier.",
                artifact_type, group_id, artifact_id, candidates
            ),
            ResolveError::ArtifactNotFound {
                artifact_type,
                group_id,
                artifact_id,
            } => write!(
                f,
                "Artifact[{}:{}:{}] is not a dependency of the project.",
                artifact_type, group_id, artifact_id
            ),
        }
    }
}

impl std::error::Error for ResolveError {}
