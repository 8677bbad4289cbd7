//! Encounter Orchestration: one full scoring pass over one report.

use crate::aggregate::{self, MvpOutcome};
use crate::config::{ScoringConfig, ScoringWeights};
use crate::extract::{self, DpsRow, MechanicSummary, SupportMetrics};
use crate::report::EncounterReport;
use crate::table::PlayerTable;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncounterInfo {
    pub boss_name: String,
    pub success: bool,
    pub is_cm: bool,
    pub duration_seconds: Option<f64>,
}

impl EncounterInfo {
    pub fn from_report(report: &EncounterReport) -> Self {
        Self {
            boss_name: report.boss_name().to_string(),
            success: report.success,
            is_cm: report.is_cm,
            duration_seconds: report.duration_seconds(),
        }
    }
}

/// Everything the presentation layer needs, keyed by display name.
#[derive(Debug, Clone, Serialize)]
pub struct EncounterScores {
    pub player_rows: Vec<DpsRow>,
    pub mechanic_summary: MechanicSummary,
    pub fail_counts: PlayerTable<usize>,
    pub mech_success_scores: PlayerTable<f64>,
    pub fail_score_map: PlayerTable<f64>,
    pub support_metrics: PlayerTable<SupportMetrics>,
    pub support_scores: PlayerTable<f64>,
    pub damage_share: PlayerTable<f64>,
    pub mvp_name: Option<String>,
    pub mvp_scores: PlayerTable<f64>,
    pub name_prof_map: PlayerTable<String>,
}

/// Runs the extractor then the aggregator. The mechanic summary is built
/// before the support metrics that read it, and damage share before MVP.
pub fn score_encounter(
    report: &EncounterReport,
    boss_name: &str,
    phase: usize,
    target: usize,
    weights: &ScoringWeights,
) -> EncounterScores {
    debug!(
        "Scoring '{}' phase {} target {} ({} players)",
        boss_name,
        phase,
        target,
        report.players.len()
    );

    let player_rows = extract::extract_dps_rows(report, phase);

    let mechanic_summary = extract::classify_mechanics(report, Some(boss_name));
    let fail_counts = extract::fail_counts(&mechanic_summary);
    let mech_success_scores = extract::success_scores(&mechanic_summary);
    let fail_score_map = extract::fail_scores(&mechanic_summary);

    let support_metrics = extract::support_metrics(report, phase, &mechanic_summary);
    let support_scores = aggregate::support_scores(&support_metrics, &weights.support);

    let raw_damage = extract::boss_damage(report, phase, target);
    let damage_share = aggregate::damage_share(&raw_damage);

    let MvpOutcome {
        mvp_name,
        mvp_scores,
    } = aggregate::mvp_scores(
        &damage_share,
        &support_scores,
        &mech_success_scores,
        &fail_score_map,
        &weights.mvp,
    );

    if mvp_name.is_none() {
        warn!("No players in report for '{}', no MVP", boss_name);
    }

    let name_prof_map = report
        .players
        .iter()
        .map(|p| (p.name.clone(), p.profession.clone()))
        .collect();

    EncounterScores {
        player_rows,
        mechanic_summary,
        fail_counts,
        mech_success_scores,
        fail_score_map,
        support_metrics,
        support_scores,
        damage_share,
        mvp_name,
        mvp_scores,
        name_prof_map,
    }
}

/// [`score_encounter`] with the options of one run. The boss override, when
/// set, replaces the report's own boss name for rule lookup.
pub fn score_report(
    report: &EncounterReport,
    config: &ScoringConfig,
    weights: &ScoringWeights,
) -> EncounterScores {
    let boss_name = config.boss.as_deref().unwrap_or_else(|| report.boss_name());
    score_encounter(
        report,
        boss_name,
        config.phase_index,
        config.target_index,
        weights,
    )
}
