use super::boons::{boon_weight, group_boon_generation, BoonGeneration};
use super::mechanics::MechanicSummary;
use crate::report::EncounterReport;
use crate::table::PlayerTable;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SupportMetrics {
    pub healing: f64,
    /// Boon seconds weighted per boon
    pub boon_score: f64,
    pub boons_generated: BoonGeneration,
    pub mech_success: f64,
    pub breakbar: f64,
}

pub fn boon_score(generated: &BoonGeneration) -> f64 {
    generated
        .iter()
        .map(|(name, secs)| secs * boon_weight(name))
        .sum()
}

/// Raw support inputs per player. `mech_success` is read from the already
/// computed mechanic summary.
pub fn support_metrics(
    report: &EncounterReport,
    phase: usize,
    mechanic_summary: &MechanicSummary,
) -> PlayerTable<SupportMetrics> {
    let boon_gen = group_boon_generation(report, phase);

    report
        .players
        .iter()
        .map(|p| {
            let boons_generated = boon_gen.get(&p.name).cloned().unwrap_or_default();
            let metrics = SupportMetrics {
                healing: p.healing(phase),
                boon_score: boon_score(&boons_generated),
                boons_generated,
                mech_success: mechanic_summary
                    .get(&p.name)
                    .map(|t| t.success_score)
                    .unwrap_or(0.0),
                breakbar: p.breakbar(phase),
            };
            (p.name.clone(), metrics)
        })
        .collect()
}
