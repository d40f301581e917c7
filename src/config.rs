//! Resolver configuration.
//!
//! Values come from, in increasing priority: built-in defaults, the artifact
//! manifest, environment variables, command line flags.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `EARPACK_MAIN_ARTIFACT_ID` | classifier that designates the unclassified artifact |
//! | `EARPACK_CLASSIFIER_SCOPE` | `candidates` (default) or `repository` |
//! | `EARPACK_THREADS` | worker threads for batch resolution |

use earpack_resolver::ClassifierScope;
use earpack_types::env_utils::{env_string, env_var};
use tracing::warn;

/// Main artifact id used when nothing else is configured.
pub const DEFAULT_MAIN_ARTIFACT_ID: &str = "none";

pub const MAIN_ARTIFACT_ID_ENV: &str = "EARPACK_MAIN_ARTIFACT_ID";
pub const CLASSIFIER_SCOPE_ENV: &str = "EARPACK_CLASSIFIER_SCOPE";
pub const THREADS_ENV: &str = "EARPACK_THREADS";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolverConfig {
    /// Explicitly configured main artifact id. `None` lets the manifest
    /// decide, then falls back to [`DEFAULT_MAIN_ARTIFACT_ID`].
    pub main_artifact_id: Option<String>,
    pub classifier_scope: ClassifierScope,
    /// Worker threads for batch resolution; `None` uses the rayon default.
    pub threads: Option<usize>,
}

impl ResolverConfig {
    /// Read the configuration from the environment.
    ///
    /// An unparsable scope is reported and replaced by the default rather
    /// than aborting the session.
    pub fn from_env() -> Self {
        let classifier_scope = match env_string(CLASSIFIER_SCOPE_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warn!(variable = CLASSIFIER_SCOPE_ENV, "{}; using default", err);
                ClassifierScope::default()
            }),
            None => ClassifierScope::default(),
        };
        Self {
            main_artifact_id: env_string(MAIN_ARTIFACT_ID_ENV),
            classifier_scope,
            threads: env_var::<usize>(THREADS_ENV).filter(|n| *n > 0),
        }
    }

    pub fn with_main_artifact_id(mut self, main_artifact_id: impl Into<String>) -> Self {
        self.main_artifact_id = Some(main_artifact_id.into());
        self
    }

    pub fn with_classifier_scope(mut self, scope: ClassifierScope) -> Self {
        self.classifier_scope = scope;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Main artifact id to use, given the one declared by the manifest.
    pub fn effective_main_artifact_id<'a>(&'a self, manifest: Option<&'a str>) -> &'a str {
        self.main_artifact_id
            .as_deref()
            .or(manifest)
            .unwrap_or(DEFAULT_MAIN_ARTIFACT_ID)
    }
}
