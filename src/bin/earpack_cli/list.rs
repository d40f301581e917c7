use anyhow::Result;
use clap::Parser;
use earpack::Artifact;
use serde::Serialize;

use super::output::{format_artifact, print_json};
use super::Session;

#[derive(Parser, Debug)]
#[command(about = "List the artifact set in resolution order")]
pub struct ListCmd {
    /// Only show unclassified (main) artifacts
    #[arg(long)]
    main_only: bool,
}

#[derive(Serialize)]
struct ListJson<'a> {
    main_artifact_id: &'a str,
    classifier_scope: String,
    artifacts: Vec<&'a Artifact>,
}

impl ListCmd {
    pub fn execute(&self, session: &Session, json_output: bool) -> Result<()> {
        let repo = &session.repo;
        let artifacts: Vec<&Artifact> = repo
            .artifacts()
            .filter(|a| !self.main_only || a.is_main())
            .collect();

        if json_output {
            return print_json(&ListJson {
                main_artifact_id: repo.main_artifact_id(),
                classifier_scope: repo.classifier_scope().to_string(),
                artifacts,
            });
        }

        println!(
            "{} artifact(s), main artifact id {:?}, classifier scope {}",
            artifacts.len(),
            repo.main_artifact_id(),
            repo.classifier_scope()
        );
        for artifact in artifacts {
            println!("  {}", format_artifact(artifact));
        }
        Ok(())
    }
}
