//! Output formatting for earpack CLI
//!
//! Provides human-readable and JSON output for all commands.

use anyhow::{Context, Result};
use earpack::{Artifact, ArtifactQuery, ResolveError, ResolveOutcome};
use serde::Serialize;

/// JSON view of a resolution failure.
#[derive(Serialize)]
pub struct ErrorJson<'a> {
    pub kind: &'static str,
    pub message: String,
    #[serde(rename = "type")]
    pub artifact_type: &'a str,
    pub group_id: Option<&'a str>,
    pub artifact_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<usize>,
}

impl<'a> From<&'a ResolveError> for ErrorJson<'a> {
    fn from(err: &'a ResolveError) -> Self {
        let (artifact_type, group_id, artifact_id) = err.coordinates();
        Self {
            kind: err.kind().as_str(),
            message: err.to_string(),
            artifact_type,
            group_id,
            artifact_id,
            candidates: err.candidate_count(),
        }
    }
}

/// JSON view of one resolved (or failed) query.
#[derive(Serialize)]
pub struct OutcomeJson<'a> {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<&'a Artifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorJson<'a>>,
}

impl<'a> OutcomeJson<'a> {
    pub fn new(query: &ArtifactQuery, outcome: &'a ResolveOutcome<'a>) -> Self {
        match outcome {
            Ok(artifact) => Self {
                query: query.to_string(),
                artifact: Some(*artifact),
                error: None,
            },
            Err(err) => Self {
                query: query.to_string(),
                artifact: None,
                error: Some(ErrorJson::from(err)),
            },
        }
    }
}

/// One line per artifact: coordinates, plus the file when known.
pub fn format_artifact(artifact: &Artifact) -> String {
    match &artifact.file {
        Some(file) => format!("{}  ({})", artifact, file.display()),
        None => artifact.to_string(),
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serialize output")?
    );
    Ok(())
}
