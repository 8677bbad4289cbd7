pub mod batch;
pub mod debug;
pub mod fail;
pub mod log;
pub mod mechs;
pub mod mvp;
pub mod support;

use clap::Args;
use raidscore::config::{ScoringConfig, ScoringWeights};
use raidscore::encounter::{score_report, EncounterScores};
use raidscore::report::{load_report, EncounterReport};
use raidscore::RsResult;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments shared by every single-report command.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Saved Elite Insights JSON report
    pub report: PathBuf,

    #[command(flatten)]
    pub config: ScoringConfig,
}

impl ReportArgs {
    pub fn load(&self) -> RsResult<(EncounterReport, EncounterScores)> {
        let report = load_report(&self.report)?;
        let scores = score_report(&report, &self.config, &ScoringWeights::default());
        Ok((report, scores))
    }

    /// Boss name used for rule lookup in this run.
    pub fn boss_name<'a>(&'a self, report: &'a EncounterReport) -> &'a str {
        self.config
            .boss
            .as_deref()
            .unwrap_or_else(|| report.boss_name())
    }
}

pub fn print_json<T: Serialize>(value: &T) -> RsResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
