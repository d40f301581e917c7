//! Artifact manifests.
//!
//! A manifest is the JSON hand-off from the dependency resolution step to
//! the packaging step: the resolved artifacts of a project, optionally with
//! the main artifact id the project declares.
//!
//! ```json
//! {
//!   "main_artifact_id": "none",
//!   "artifacts": [
//!     "com.x:core:jar:1.0",
//!     "com.x:core:jar:sources:1.0",
//!     { "group_id": "com.x", "artifact_id": "web", "type": "war", "version": "1.0" }
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use earpack_resolver::{ArtifactRepository, TypeMapping};
use earpack_types::Artifact;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ResolverConfig;

/// One artifact entry: either a full record or compact coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ManifestEntry {
    Coordinates(String),
    Artifact(Artifact),
}

impl ManifestEntry {
    pub fn to_artifact(&self) -> Result<Artifact> {
        match self {
            ManifestEntry::Coordinates(coords) => coords
                .parse()
                .with_context(|| format!("invalid artifact entry {:?}", coords)),
            ManifestEntry::Artifact(artifact) => Ok(artifact.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_artifact_id: Option<String>,
    #[serde(default)]
    pub artifacts: Vec<ManifestEntry>,
}

impl ArtifactManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid manifest {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("failed to parse manifest JSON")
    }

    pub fn from_artifacts<I: IntoIterator<Item = Artifact>>(artifacts: I) -> Self {
        Self {
            main_artifact_id: None,
            artifacts: artifacts.into_iter().map(ManifestEntry::Artifact).collect(),
        }
    }

    /// Decode every entry; the first malformed entry fails the whole manifest.
    pub fn to_artifacts(&self) -> Result<Vec<Artifact>> {
        self.artifacts
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                entry
                    .to_artifact()
                    .with_context(|| format!("artifact #{}", idx))
            })
            .collect()
    }

    /// Build the resolver for this manifest.
    pub fn to_repository<M: TypeMapping>(
        &self,
        config: &ResolverConfig,
        type_mapping: M,
    ) -> Result<ArtifactRepository<M>> {
        let artifacts = self.to_artifacts()?;
        let declared = artifacts.len();
        let main_artifact_id =
            config.effective_main_artifact_id(self.main_artifact_id.as_deref());
        let repo = ArtifactRepository::new(artifacts, main_artifact_id, type_mapping)
            .with_classifier_scope(config.classifier_scope);
        if repo.len() < declared {
            debug!(
                declared,
                unique = repo.len(),
                "manifest contains duplicate artifacts"
            );
        }
        Ok(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use earpack_resolver::{ClassifierScope, ExactTypeMapping};

    const MANIFEST: &str = r#"{
        "main_artifact_id": "main",
        "artifacts": [
            "com.x:core:jar:1.0",
            "com.x:core:jar:sources:1.0",
            { "group_id": "com.x", "artifact_id": "web", "type": "war", "version": "1.0",
              "file": "lib/web-1.0.war" }
        ]
    }"#;

    #[test]
    fn test_parse_mixed_entries() {
        let manifest = ArtifactManifest::from_json(MANIFEST).unwrap();
        assert_eq!(manifest.main_artifact_id.as_deref(), Some("main"));

        let artifacts = manifest.to_artifacts().unwrap();
        assert_eq!(artifacts.len(), 3);
        assert_eq!(artifacts[1].classifier(), Some("sources"));
        assert_eq!(
            artifacts[2].file.as_deref(),
            Some(Path::new("lib/web-1.0.war"))
        );
    }

    #[test]
    fn test_repository_uses_manifest_main_id() {
        let manifest = ArtifactManifest::from_json(MANIFEST).unwrap();
        let repo = manifest
            .to_repository(&ResolverConfig::default(), ExactTypeMapping)
            .unwrap();
        assert_eq!(repo.main_artifact_id(), "main");
        assert!(repo
            .resolve(Some("com.x"), Some("core"), "jar", Some("main"))
            .unwrap()
            .is_main());

        let config = ResolverConfig::default()
            .with_main_artifact_id("")
            .with_classifier_scope(ClassifierScope::Repository);
        let repo = manifest.to_repository(&config, ExactTypeMapping).unwrap();
        assert_eq!(repo.main_artifact_id(), "");
        assert_eq!(repo.classifier_scope(), ClassifierScope::Repository);
    }

    #[test]
    fn test_bad_entry_reports_index() {
        let manifest =
            ArtifactManifest::from_json(r#"{ "artifacts": ["com.x:core:jar:1.0", "broken"] }"#)
                .unwrap();
        let err = manifest.to_artifacts().unwrap_err();
        let chain: Vec<String> = err.chain().map(|c| c.to_string()).collect();
        assert_eq!(chain[0], "artifact #1");
        assert!(chain[1].contains("\"broken\""));
    }

    #[test]
    fn test_from_artifacts_keeps_files() {
        let manifest = ArtifactManifest::from_artifacts([
            Artifact::new("com.x", "web", "war", "1.0").with_file("lib/web-1.0.war"),
            Artifact::new("com.x", "core", "jar", "1.0"),
        ]);
        let json = serde_json::to_string(&manifest).unwrap();
        let back = ArtifactManifest::from_json(&json).unwrap();
        assert_eq!(back, manifest);

        let repo = back
            .to_repository(&ResolverConfig::default(), ExactTypeMapping)
            .unwrap();
        let web = repo.find_single("com.x", "web", "war").unwrap();
        assert_eq!(web.file.as_deref(), Some(Path::new("lib/web-1.0.war")));
    }

    #[test]
    fn test_malformed_json() {
        let err = ArtifactManifest::from_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("failed to parse manifest JSON"));
    }

    #[test]
    fn test_missing_file() {
        let err = ArtifactManifest::load(Path::new("/nonexistent/earpack.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read manifest"));
    }
}
