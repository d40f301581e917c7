use anyhow::{anyhow, Context, Result};
use clap::Parser;
use earpack::{resolve_all_with_threads, ArtifactQuery, BatchReport};
use serde::Serialize;

use super::output::{format_artifact, print_json, OutcomeJson};
use super::Session;

#[derive(Parser, Debug)]
#[command(about = "Resolve module references to exactly one artifact each")]
pub struct ResolveCmd {
    /// References as group:artifact[:type[:classifier]] (type defaults to jar)
    #[arg(required = true, num_args = 1..)]
    references: Vec<String>,
}

#[derive(Serialize)]
struct ResolveJson<'a> {
    results: Vec<OutcomeJson<'a>>,
    report: BatchReport,
}

impl ResolveCmd {
    pub fn execute(&self, session: &Session, json_output: bool) -> Result<()> {
        let queries = self
            .references
            .iter()
            .map(|r| {
                r.parse::<ArtifactQuery>()
                    .with_context(|| format!("invalid reference {:?}", r))
            })
            .collect::<Result<Vec<_>>>()?;

        let outcomes = resolve_all_with_threads(&session.repo, &queries, session.config.threads)?;
        let report = BatchReport::from_outcomes(&outcomes);

        if json_output {
            print_json(&ResolveJson {
                results: queries
                    .iter()
                    .zip(&outcomes)
                    .map(|(query, outcome)| OutcomeJson::new(query, outcome))
                    .collect(),
                report,
            })?;
        } else {
            for (query, outcome) in queries.iter().zip(&outcomes) {
                match outcome {
                    Ok(artifact) => println!("{} -> {}", query, format_artifact(artifact)),
                    Err(err) => eprintln!("{} -> error: {}", query, err),
                }
            }
        }

        if report.is_success() {
            Ok(())
        } else {
            Err(anyhow!(
                "{} of {} references failed to resolve",
                report.failed(),
                queries.len()
            ))
        }
    }
}
