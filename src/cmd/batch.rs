use super::print_json;
use crate::reports::{self, BatchLine};
use clap::Args;
use rayon::prelude::*;
use raidscore::config::{ScoringConfig, ScoringWeights};
use raidscore::encounter::{score_report, EncounterInfo};
use raidscore::report::load_report;
use raidscore::RsResult;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Saved Elite Insights JSON reports
    #[arg(required = true)]
    pub reports: Vec<PathBuf>,

    #[command(flatten)]
    pub config: ScoringConfig,
}

#[derive(Debug, Serialize)]
struct BatchEntry {
    file: String,
    encounter: EncounterInfo,
    mvp_name: Option<String>,
    mvp_score: Option<f64>,
}

/// Each file gets its own independent pass. Files that fail to load are
/// reported and skipped.
pub fn run(args: BatchArgs, json: bool) -> RsResult<()> {
    info!("📂 Scoring {} reports", args.reports.len());
    let weights = ScoringWeights::default();

    let results: Vec<(String, RsResult<BatchEntry>)> = args
        .reports
        .par_iter()
        .map(|path| {
            let file = path.display().to_string();
            let entry = load_report(path).map(|report| {
                let scores = score_report(&report, &args.config, &weights);
                let mvp_score = scores
                    .mvp_name
                    .as_deref()
                    .and_then(|n| scores.mvp_scores.get(n).copied());
                BatchEntry {
                    file: file.clone(),
                    encounter: EncounterInfo::from_report(&report),
                    mvp_name: scores.mvp_name,
                    mvp_score,
                }
            });
            (file, entry)
        })
        .collect();

    let mut entries = Vec::with_capacity(results.len());
    for (file, result) in results {
        match result {
            Ok(entry) => entries.push(entry),
            Err(e) => error!("❌ {}: {}", file, e),
        }
    }

    if json {
        return print_json(&entries);
    }

    let lines: Vec<BatchLine> = entries
        .into_iter()
        .map(|e| BatchLine {
            file: e.file,
            boss: e.encounter.boss_name,
            success: e.encounter.success,
            mvp: e.mvp_name.zip(e.mvp_score),
        })
        .collect();
    reports::print_batch_table(&lines);
    Ok(())
}
