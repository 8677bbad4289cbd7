//! Aggregator: turns raw per-player metrics into bounded composite scores.
//!
//! All blending happens on columns scaled to [0, 1] against the current
//! encounter's own maximum, so seconds, damage and counts can be summed.
//! Scores are therefore only comparable within one encounter.

use crate::config::{MvpWeights, SupportWeights};
use crate::extract::SupportMetrics;
use crate::table::PlayerTable;
use serde::Serialize;

/// Scores closer than this are treated as tied.
pub const SCORE_EPSILON: f64 = 1e-9;

/// Divides every value by the column maximum. A maximum of zero or less
/// yields an all-zero column.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max.is_nan() || max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / max).collect()
}

fn normalize_column<T>(table: &PlayerTable<T>, f: impl Fn(&T) -> f64) -> Vec<f64> {
    let column: Vec<f64> = table.values().map(f).collect();
    normalize(&column)
}

/// Each player's fraction of the total damage. Negative damage counts as
/// zero; a total of zero yields all zeros.
pub fn damage_share(raw: &PlayerTable<f64>) -> PlayerTable<f64> {
    let total: f64 = raw.values().map(|d| d.max(0.0)).sum();
    let divisor = if total > 0.0 { total } else { 1.0 };
    raw.map(|_, d| d.max(0.0) / divisor)
}

pub fn support_scores(
    metrics: &PlayerTable<SupportMetrics>,
    weights: &SupportWeights,
) -> PlayerTable<f64> {
    let healing = normalize_column(metrics, |m| m.healing);
    let boon = normalize_column(metrics, |m| m.boon_score);
    let mech = normalize_column(metrics, |m| m.mech_success);
    let breakbar = normalize_column(metrics, |m| m.breakbar);

    metrics
        .names()
        .enumerate()
        .map(|(i, name)| {
            let score = weights.healing * healing[i]
                + weights.boon * boon[i]
                + weights.mech * mech[i]
                + weights.breakbar * breakbar[i];
            (name.to_string(), score)
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MvpOutcome {
    /// `None` only when no player has a damage entry
    pub mvp_name: Option<String>,
    pub mvp_scores: PlayerTable<f64>,
}

/// `dps * share + support * support_score - fail_penalty * normalized_fail`
/// for every player in `damage_share`, iterated in roster order.
///
/// Mechanic success reaches the MVP only through the support score.
/// `_mech_success_scores` is accepted for inspection and is never read, so
/// it cannot be counted twice.
pub fn mvp_scores(
    damage_share: &PlayerTable<f64>,
    support_scores: &PlayerTable<f64>,
    _mech_success_scores: &PlayerTable<f64>,
    fail_scores: &PlayerTable<f64>,
    weights: &MvpWeights,
) -> MvpOutcome {
    if damage_share.is_empty() {
        return MvpOutcome::default();
    }

    let fails: Vec<f64> = damage_share
        .names()
        .map(|n| fail_scores.value_or_default(n))
        .collect();
    let fail_norm = normalize(&fails);

    let scores: PlayerTable<f64> = damage_share
        .iter()
        .enumerate()
        .map(|(i, (name, share))| {
            let support = support_scores.value_or_default(name);
            let score = weights.dps * share + weights.support * support
                - weights.fail_penalty * fail_norm[i];
            (name.to_string(), score)
        })
        .collect();

    // A later player must beat the best by more than rounding noise, so
    // ties keep the first player.
    let mut best: Option<(&str, f64)> = None;
    for (name, &score) in scores.iter() {
        if best.map_or(true, |(_, s)| score > s + SCORE_EPSILON) {
            best = Some((name, score));
        }
    }

    let mvp_name = best.map(|(n, _)| n.to_string());
    MvpOutcome {
        mvp_name,
        mvp_scores: scores,
    }
}
