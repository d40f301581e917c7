//! Lookup requests against an artifact set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::coordinates::{split_segments, CoordinateError};

/// Packaging assumed when a query does not name a type.
pub const DEFAULT_ARTIFACT_TYPE: &str = "jar";

/// A logical dependency reference to resolve.
///
/// `group_id` and `artifact_id` are optional so that malformed references
/// coming from a project model can still be represented and rejected by the
/// resolver with a typed error. Empty ids are normalized to `None`.
///
/// The classifier is kept verbatim: `Some("")` is a real request that selects
/// the main artifact when the main artifact id is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactQuery {
    #[serde(default, deserialize_with = "non_empty_id")]
    pub group_id: Option<String>,
    #[serde(default, deserialize_with = "non_empty_id")]
    pub artifact_id: Option<String>,
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn non_empty_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.filter(|id| !id.is_empty()))
}

impl ArtifactQuery {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        artifact_type: impl Into<String>,
    ) -> Self {
        Self {
            group_id: non_empty(group_id),
            artifact_id: non_empty(artifact_id),
            artifact_type: artifact_type.into(),
            classifier: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }
}

impl fmt::Display for ArtifactQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group_id().unwrap_or(""),
            self.artifact_id().unwrap_or(""),
            self.artifact_type
        )?;
        if let Some(classifier) = self.classifier() {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

/// Parses `group:artifact[:type[:classifier]]`.
///
/// The type defaults to [`DEFAULT_ARTIFACT_TYPE`]. Empty group or artifact
/// segments are kept as absent values rather than rejected here. A trailing
/// empty classifier (`g:a:t:`) is an explicit empty classifier.
impl FromStr for ArtifactQuery {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = split_segments(s)?;
        let (group, artifact, ty, classifier) = match segments.as_slice() {
            [group, artifact] => (*group, *artifact, DEFAULT_ARTIFACT_TYPE, None),
            [group, artifact, ty] => (*group, *artifact, *ty, None),
            [group, artifact, ty, classifier] => (*group, *artifact, *ty, Some(*classifier)),
            _ => {
                return Err(CoordinateError::SegmentCount {
                    input: s.to_string(),
                    found: segments.len(),
                    expected: "group:artifact[:type[:classifier]]",
                })
            }
        };
        if ty.is_empty() {
            return Err(CoordinateError::EmptySegment {
                input: s.to_string(),
                segment: "type",
            });
        }

        let query = ArtifactQuery::new(group, artifact, ty);
        Ok(match classifier {
            Some(classifier) => query.with_classifier(classifier),
            None => query,
        })
    }
}
