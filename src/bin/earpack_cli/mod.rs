//! CLI subcommand implementations for earpack

pub mod candidates;
pub mod list;
pub mod output;
pub mod resolve;

use earpack::{ArtifactRepository, ResolverConfig};

/// Loaded manifest and effective configuration shared by all subcommands.
pub struct Session {
    pub repo: ArtifactRepository,
    pub config: ResolverConfig,
}
