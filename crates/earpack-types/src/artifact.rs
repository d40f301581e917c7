//! Artifact records handed to the resolver.
//!
//! An artifact is identified by its coordinates:
//! - **group_id** / **artifact_id**: the logical name of the dependency
//! - **type**: the concrete packaging (`jar`, `war`, `ejb`, ...)
//! - **classifier**: optional secondary qualifier (`sources`, `tests`, ...)
//! - **version**: only used for ordering and display
//!
//! The derived ordering follows the field declaration order, which gives the
//! total order group → artifact → type → classifier → version. An absent
//! classifier sorts before any classifier, so the main artifact of a
//! group/name/type always comes first.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coordinates::{split_segments, CoordinateError};

/// A resolved build artifact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    /// Concrete packaging type of the file.
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    pub version: String,
    /// Location of the artifact file, when the caller knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Artifact {
    /// Create an unclassified artifact.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        artifact_type: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            artifact_type: artifact_type.into(),
            classifier: None,
            version: version.into(),
            file: None,
        }
    }

    /// Set the classifier. Empty classifiers are stored as absent.
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        let classifier = classifier.into();
        self.classifier = if classifier.is_empty() {
            None
        } else {
            Some(classifier)
        };
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// True for the conventional main artifact (no classifier).
    pub fn is_main(&self) -> bool {
        self.classifier.is_none()
    }

    /// Exact (case-sensitive) match on group and artifact id.
    pub fn matches_coordinates(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group_id == group_id && self.artifact_id == artifact_id
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group_id, self.artifact_id, self.artifact_type
        )?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}

/// Parses `group:artifact:type[:classifier]:version`.
impl FromStr for Artifact {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = split_segments(s)?;
        match segments.as_slice() {
            [group, artifact, ty, version] => {
                Ok(Artifact::new(*group, *artifact, *ty, *version))
            }
            [group, artifact, ty, classifier, version] => {
                Ok(Artifact::new(*group, *artifact, *ty, *version).with_classifier(*classifier))
            }
            _ => Err(CoordinateError::SegmentCount {
                input: s.to_string(),
                found: segments.len(),
                expected: "group:artifact:type[:classifier]:version",
            }),
        }
    }
}
