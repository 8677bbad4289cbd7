use crate::report::EncounterReport;
use crate::table::PlayerTable;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DpsRow {
    pub name: String,
    pub profession: String,
    pub dps: f64,
    pub breakbar: f64,
}

/// DPS table for `phase`, highest first. Equal DPS keeps report order.
/// Players with no usable entry at `phase` are left out.
pub fn extract_dps_rows(report: &EncounterReport, phase: usize) -> Vec<DpsRow> {
    let mut rows: Vec<DpsRow> = report
        .players
        .iter()
        .filter_map(|p| {
            let stats = p.dps_entry(phase).flatten()?;
            Some(DpsRow {
                name: p.name.clone(),
                profession: p.profession.clone(),
                dps: stats.dps,
                breakbar: stats.breakbar,
            })
        })
        .collect();

    // sort_by is stable
    rows.sort_by(|a, b| b.dps.total_cmp(&a.dps));
    rows
}

/// Raw damage each player dealt to `dpsTargets[target]` during `phase`.
pub fn boss_damage(report: &EncounterReport, phase: usize, target: usize) -> PlayerTable<f64> {
    report
        .players
        .iter()
        .map(|p| (p.name.clone(), p.damage_to(target, phase)))
        .collect()
}
