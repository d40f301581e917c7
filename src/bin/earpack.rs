//! earpack: resolve EAR module references against a project's artifacts
//!
//! The CLI loads an artifact manifest (the resolved dependencies of a
//! project) and answers lookups the way the packaging step does.
//!
//! ## Example Usage
//!
//! ```bash
//! # Resolve module references (non-zero exit if any fails)
//! earpack --manifest target/earpack.json resolve com.x:core:jar:sources com.x:web:war
//!
//! # Show every candidate for a group/name/type
//! earpack candidates com.x:core:jar
//!
//! # List the artifact set in resolution order
//! earpack list --json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use earpack::{ArtifactManifest, ClassifierScope, ExactTypeMapping, ResolverConfig};
use earpack_types::env_utils::env_bool;
use tracing_subscriber::EnvFilter;

mod earpack_cli;

use earpack_cli::{candidates::CandidatesCmd, list::ListCmd, resolve::ResolveCmd, Session};

#[derive(Parser)]
#[command(
    name = "earpack",
    author,
    version,
    about = "Resolve EAR module references against a project's artifacts",
    long_about = "Loads the resolved artifacts of a project from a JSON manifest and resolves\n\
                  module references (group:artifact[:type[:classifier]]) to exactly one artifact."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Artifact manifest (JSON)
    #[arg(long, short, global = true, default_value = "earpack.json")]
    manifest: PathBuf,

    /// Classifier that designates the unclassified main artifact
    /// (overrides EARPACK_MAIN_ARTIFACT_ID and the manifest)
    #[arg(long, global = true)]
    main_artifact_id: Option<String>,

    /// Where classifier lookups search: "candidates" or "repository"
    #[arg(long, global = true)]
    classifier_scope: Option<ClassifierScope>,

    /// Worker threads for resolving several references
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (resolver decisions on stderr)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve module references to exactly one artifact each
    Resolve(ResolveCmd),

    /// List every candidate for a group/name/type
    Candidates(CandidatesCmd),

    /// List the artifact set in resolution order
    List(ListCmd),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let Cli {
        command,
        manifest,
        main_artifact_id,
        classifier_scope,
        threads,
        json,
        verbose,
    } = Cli::parse();
    init_tracing(verbose || env_bool("EARPACK_VERBOSE"));

    let mut config = ResolverConfig::from_env();
    if let Some(main_artifact_id) = main_artifact_id {
        config = config.with_main_artifact_id(main_artifact_id);
    }
    if let Some(scope) = classifier_scope {
        config = config.with_classifier_scope(scope);
    }
    if let Some(threads) = threads {
        config = config.with_threads(threads);
    }

    let manifest = ArtifactManifest::load(&manifest)?;
    let repo = manifest.to_repository(&config, ExactTypeMapping)?;
    let session = Session { repo, config };

    match command {
        Commands::Resolve(cmd) => cmd.execute(&session, json),
        Commands::Candidates(cmd) => cmd.execute(&session, json),
        Commands::List(cmd) => cmd.execute(&session, json),
    }
}
