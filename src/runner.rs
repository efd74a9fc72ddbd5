//! The submission loop: generate records and POST them one at a time.

use reqwest::Client;
use serde::Serialize;
use stats_generator::{PlayerStatRecord, StatsGenerator};

use crate::submit::{submit_stats, ResponseBody, SubmitError};

/// Options for a submission run.
#[derive(Debug, Clone)]
pub struct RunOpts {
    /// Statistics API endpoint URL
    pub url: String,
    /// Number of records to generate and submit
    pub count: u64,
}

/// Classified result of one iteration's HTTP exchange.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// 2xx status
    Created { status: u16, body: ResponseBody },
    /// Non-2xx status
    Rejected { status: u16, body: ResponseBody },
    /// Transport failure, no response exists
    Unreachable { message: String },
}

/// Structured record of one iteration: what was sent and what came back.
#[derive(Debug, Serialize)]
pub struct IterationReport {
    pub iteration: u64,
    pub payload: PlayerStatRecord,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Generate and submit `opts.count` records sequentially.
///
/// Submission failures are contained within their iteration: each is logged,
/// classified into the iteration's [`Outcome`], and the loop moves on. Each
/// request completes (or fails) before the next record is generated.
pub async fn run_submission_loop(
    client: &Client,
    opts: &RunOpts,
    generator: &mut StatsGenerator,
) -> anyhow::Result<Vec<IterationReport>> {
    let mut reports = Vec::with_capacity(opts.count as usize);

    for iteration in 0..opts.count {
        let record = generator.generate();
        let payload = serde_json::to_string_pretty(&record)?;

        let outcome = match submit_stats(client, &opts.url, &record).await {
            Ok((status, body)) => {
                tracing::info!("Inserted stats: {payload}");
                tracing::info!("Response: {}", body.render());
                Outcome::Created { status, body }
            }
            Err(SubmitError::Status { status, body }) => {
                tracing::error!(
                    "Error inserting player statistics: server returned status {status}"
                );
                tracing::error!("Status code: {status}");
                match &body {
                    ResponseBody::Json(value) => {
                        tracing::error!(
                            "Response body: {}",
                            serde_json::to_string_pretty(value)?
                        );
                    }
                    ResponseBody::Raw(text) => {
                        tracing::error!("Response body (not valid JSON): {text}");
                    }
                }
                Outcome::Rejected { status, body }
            }
            Err(SubmitError::Transport(e)) => {
                tracing::error!("Error inserting player statistics: {e}");
                Outcome::Unreachable {
                    message: e.to_string(),
                }
            }
        };

        reports.push(IterationReport {
            iteration,
            payload: record,
            outcome,
        });
    }

    Ok(reports)
}
