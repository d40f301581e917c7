use anyhow::{anyhow, Context, Result};
use clap::Parser;
use earpack::ArtifactQuery;

use super::output::{format_artifact, print_json};
use super::Session;

#[derive(Parser, Debug)]
#[command(about = "List every candidate for a group/name/type")]
pub struct CandidatesCmd {
    /// Reference as group:artifact[:type] (a classifier is ignored)
    reference: String,
}

impl CandidatesCmd {
    pub fn execute(&self, session: &Session, json_output: bool) -> Result<()> {
        let query: ArtifactQuery = self
            .reference
            .parse()
            .with_context(|| format!("invalid reference {:?}", self.reference))?;
        let (Some(group_id), Some(artifact_id)) = (query.group_id(), query.artifact_id()) else {
            return Err(anyhow!(
                "reference {:?} needs both a group id and an artifact id",
                self.reference
            ));
        };

        let candidates = session
            .repo
            .find_candidates(group_id, artifact_id, &query.artifact_type);

        if json_output {
            print_json(&candidates)?;
        } else if candidates.is_empty() {
            println!("No candidates for {}", query);
        } else {
            println!("{} candidate(s) for {}:", candidates.len(), query);
            for artifact in &candidates {
                println!("  {}", format_artifact(artifact));
            }
        }
        Ok(())
    }
}
