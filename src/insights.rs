//! Presentation-ready views derived from a finished scoring pass.

use crate::catalog::RuleSet;
use crate::extract::{MechanicTally, SupportMetrics};
use crate::table::PlayerTable;
use serde::Serialize;
use std::cmp::Ordering;

/// Cap for generated-uptime percentages. Overlapping phases can make
/// generation exceed the fight duration.
pub const MAX_UPTIME_PERCENT: f64 = 300.0;

const TOP_MECHANICS: usize = 3;

/// Highest value first. Equal values keep roster order.
pub fn rank_desc<T: PartialOrd + Copy>(table: &PlayerTable<T>) -> Vec<(&str, T)> {
    let mut ranking: Vec<(&str, T)> = table.iter().map(|(n, v)| (n, *v)).collect();
    ranking.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranking
}

/// Generated seconds as a percentage of the fight, clamped to
/// [`MAX_UPTIME_PERCENT`]. Fights shorter than a second count as one.
pub fn boon_uptime_percent(seconds: f64, fight_seconds: f64) -> f64 {
    let pct = seconds / fight_seconds.max(1.0) * 100.0;
    pct.min(MAX_UPTIME_PERCENT)
}

/// Occurrences per label, in first-seen order.
pub fn count_labels(labels: &[String]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(l, _)| *l == label.as_str()) {
            Some(entry) => entry.1 += 1,
            None => counts.push((label.as_str(), 1)),
        }
    }
    counts
}

fn is_down(label: &str) -> bool {
    label.to_lowercase().contains("downed")
}

fn is_death(label: &str) -> bool {
    let lower = label.to_lowercase();
    lower.contains("dead") || lower.contains("death")
}

fn is_res(label: &str) -> bool {
    label.to_lowercase().contains("res")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorstMechanic {
    pub label: String,
    pub count: usize,
    pub severity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FailBreakdown {
    pub total: usize,
    pub downs: usize,
    pub deaths: usize,
    /// Heaviest failed mechanic other than downs and deaths
    pub worst: Option<WorstMechanic>,
}

/// Severity of a label is `weight * count`, with the weight taken from the
/// boss fail table, then its default, then 1.0.
pub fn fail_breakdown(tally: &MechanicTally, fail_rules: &RuleSet) -> FailBreakdown {
    let default_weight = fail_rules.default_weight().unwrap_or(1.0);

    let mut worst: Option<WorstMechanic> = None;
    for (label, count) in count_labels(&tally.fails) {
        if is_down(label) || is_death(label) {
            continue;
        }
        let weight = fail_rules.weight(label).unwrap_or(default_weight);
        let severity = weight * count as f64;
        let current = worst.as_ref().map_or(0.0, |w| w.severity);
        if severity > current {
            worst = Some(WorstMechanic {
                label: label.to_string(),
                count,
                severity,
            });
        }
    }

    FailBreakdown {
        total: tally.fails.len(),
        downs: tally.fails.iter().filter(|l| is_down(l)).count(),
        deaths: tally.fails.iter().filter(|l| is_death(l)).count(),
        worst,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopBoon {
    pub name: String,
    pub seconds: f64,
    /// Present when the fight duration is known
    pub uptime_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SupportHighlight {
    pub top_boon: Option<TopBoon>,
    pub res_count: usize,
}

pub fn support_highlight(
    metrics: &SupportMetrics,
    tally: Option<&MechanicTally>,
    fight_seconds: Option<f64>,
) -> SupportHighlight {
    let mut top: Option<(&str, f64)> = None;
    for (name, &secs) in metrics.boons_generated.iter() {
        if top.map_or(true, |(_, best)| secs > best) {
            top = Some((name, secs));
        }
    }

    let top_boon = top.map(|(name, seconds)| TopBoon {
        name: name.to_string(),
        seconds,
        uptime_percent: fight_seconds.map(|f| boon_uptime_percent(seconds, f)),
    });

    SupportHighlight {
        top_boon,
        res_count: tally.map_or(0, |t| t.success.iter().filter(|l| is_res(l)).count()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MechanicHighlight {
    /// Up to three most frequent successful mechanics, res excluded
    pub top: Vec<(String, usize)>,
    pub res_count: usize,
}

pub fn mechanic_highlight(tally: &MechanicTally) -> MechanicHighlight {
    let res_count = tally.success.iter().filter(|l| is_res(l)).count();

    let mut counts: Vec<(&str, usize)> = count_labels(&tally.success)
        .into_iter()
        .filter(|(label, _)| !is_res(label))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    MechanicHighlight {
        top: counts
            .into_iter()
            .take(TOP_MECHANICS)
            .map(|(l, c)| (l.to_string(), c))
            .collect(),
        res_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_is_clamped() {
        assert_eq!(boon_uptime_percent(10.0, 20.0), 50.0);
        assert_eq!(boon_uptime_percent(100.0, 20.0), MAX_UPTIME_PERCENT);
        assert_eq!(boon_uptime_percent(0.5, 0.0), 50.0);
    }

    #[test]
    fn labels_counted_in_first_seen_order() {
        let labels: Vec<String> = ["Orb", "Res", "Orb"].iter().map(|s| s.to_string()).collect();
        assert_eq!(count_labels(&labels), vec![("Orb", 2), ("Res", 1)]);
    }

    #[test]
    fn rank_is_stable() {
        let t: PlayerTable<f64> = vec![
            ("A".to_string(), 1.0),
            ("B".to_string(), 2.0),
            ("C".to_string(), 1.0),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = rank_desc(&t).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
