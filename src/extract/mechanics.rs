use crate::catalog::{self, RuleKind, RuleSet};
use crate::report::EncounterReport;
use crate::table::PlayerTable;
use serde::Serialize;
use tracing::debug;

pub const FAIL_KEYWORDS: &[&str] = &[
    "downed",
    "death",
    "floor",
    "fail",
    "breath",
    "tantrum",
    "poison dmg",
];
pub const SUCCESS_KEYWORDS: &[&str] = &["cc", "slub", "res", "got up", "fixate"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MechanicTally {
    /// One entry per failed occurrence
    pub fails: Vec<String>,
    /// One entry per successful occurrence
    pub success: Vec<String>,
    pub fail_score: f64,
    pub success_score: f64,
}

pub type MechanicSummary = PlayerTable<MechanicTally>;

/// Weight a label counts with on each side; `None` means it does not count
/// on that side at all.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classification {
    pub success: Option<f64>,
    pub fail: Option<f64>,
}

/// Keyword match on the lowercased label: `(fail, success)`.
pub fn heuristic_match(label: &str) -> (bool, bool) {
    let lower = label.to_lowercase();
    let fail = FAIL_KEYWORDS.iter().any(|k| lower.contains(k));
    let success = SUCCESS_KEYWORDS.iter().any(|k| lower.contains(k));
    (fail, success)
}

/// Catalog entries win. A label with no entry in either table goes through
/// the keyword match and takes the boss-level default weight (0 when the
/// boss has none) on whichever side matched.
pub fn classify_label(label: &str, success_rules: &RuleSet, fail_rules: &RuleSet) -> Classification {
    let configured = Classification {
        success: success_rules.weight(label),
        fail: fail_rules.weight(label),
    };
    if configured.success.is_some() || configured.fail.is_some() {
        return configured;
    }

    let (is_fail, is_success) = heuristic_match(label);
    if is_fail || is_success {
        debug!(
            "Mechanic '{}' not catalogued, keyword match fail={} success={}",
            label, is_fail, is_success
        );
    }
    Classification {
        success: is_success.then(|| success_rules.default_weight().unwrap_or(0.0)),
        fail: is_fail.then(|| fail_rules.default_weight().unwrap_or(0.0)),
    }
}

/// Tallies every mechanic occurrence against the rules for `boss_name`
/// (the report's own boss when `None`). Occurrences by actors that are not
/// in the player list are NPCs and are skipped.
pub fn classify_mechanics(report: &EncounterReport, boss_name: Option<&str>) -> MechanicSummary {
    let boss_name = boss_name.unwrap_or_else(|| report.boss_name());
    let success_rules = catalog::success_rules_for(boss_name);
    let fail_rules = catalog::fail_rules_for(boss_name);

    if !catalog::is_catalogued(boss_name) {
        debug!("Boss '{}' not in rule catalog, using defaults", boss_name);
    }

    let mut summary: MechanicSummary = report
        .player_names()
        .map(|name| (name.to_string(), MechanicTally::default()))
        .collect();

    for mech in &report.mechanics {
        let class = classify_label(&mech.label, &success_rules, &fail_rules);
        if class == Classification::default() {
            continue;
        }

        for actor in &mech.actors {
            let Some(tally) = summary.get_mut(actor) else {
                continue;
            };
            if let Some(w) = class.fail {
                tally.fails.push(mech.label.clone());
                tally.fail_score += w;
            }
            if let Some(w) = class.success {
                tally.success.push(mech.label.clone());
                tally.success_score += w;
            }
        }
    }

    summary
}

/// Unweighted number of failed occurrences.
pub fn fail_counts(summary: &MechanicSummary) -> PlayerTable<usize> {
    summary.map(|_, t| t.fails.len())
}

pub fn success_scores(summary: &MechanicSummary) -> PlayerTable<f64> {
    summary.map(|_, t| t.success_score)
}

pub fn fail_scores(summary: &MechanicSummary) -> PlayerTable<f64> {
    summary.map(|_, t| t.fail_score)
}

/// How a label resolved against the rules of one boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSource {
    Catalog,
    Keyword,
    Unmatched,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelUsage {
    pub label: String,
    /// Occurrences by any actor, NPCs included
    pub occurrences: usize,
    pub source: LabelSource,
    pub success_weight: Option<f64>,
    pub fail_weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnusedRule {
    pub kind: RuleKind,
    pub label: &'static str,
    pub weight: f64,
}

/// Every distinct mechanic label in the report, sorted, with how it
/// classifies for `boss_name`. Labels that match nothing are listed too.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MechanicAudit {
    pub boss: String,
    pub catalogued: bool,
    pub labels: Vec<LabelUsage>,
    /// Catalog entries for this boss that never occur in the report
    pub unused_rules: Vec<UnusedRule>,
}

pub fn audit_mechanics(report: &EncounterReport, boss_name: Option<&str>) -> MechanicAudit {
    let boss_name = boss_name.unwrap_or_else(|| report.boss_name());
    let success_rules = catalog::success_rules_for(boss_name);
    let fail_rules = catalog::fail_rules_for(boss_name);

    let mut labels: Vec<LabelUsage> = Vec::new();
    for mech in &report.mechanics {
        if let Some(usage) = labels.iter_mut().find(|u| u.label == mech.label) {
            usage.occurrences += mech.actors.len();
            continue;
        }
        let class = classify_label(&mech.label, &success_rules, &fail_rules);
        let source = if success_rules.weight(&mech.label).is_some()
            || fail_rules.weight(&mech.label).is_some()
        {
            LabelSource::Catalog
        } else if class == Classification::default() {
            LabelSource::Unmatched
        } else {
            LabelSource::Keyword
        };
        labels.push(LabelUsage {
            label: mech.label.clone(),
            occurrences: mech.actors.len(),
            source,
            success_weight: class.success,
            fail_weight: class.fail,
        });
    }
    labels.sort_by(|a, b| a.label.cmp(&b.label));

    let unused_rules = [success_rules, fail_rules]
        .iter()
        .flat_map(|rules| {
            rules.labels().map(move |(label, weight)| UnusedRule {
                kind: rules.kind,
                label,
                weight,
            })
        })
        .filter(|rule| !labels.iter().any(|u| u.label == rule.label))
        .collect();

    MechanicAudit {
        boss: boss_name.to_string(),
        catalogued: catalog::is_catalogued(boss_name),
        labels,
        unused_rules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(heuristic_match("Got Up"), (false, true));
        assert_eq!(heuristic_match("Poison DMG"), (true, false));
        assert_eq!(heuristic_match("Floor Fail"), (true, false));
        assert_eq!(heuristic_match("Teleport"), (false, false));
    }

    #[test]
    fn catalog_entry_skips_keywords() {
        let s = catalog::success_rules_for("Slothasor");
        let f = catalog::fail_rules_for("Slothasor");
        // "Poison" is a success entry for Slothasor even though it looks like a fail.
        let class = classify_label("Poison", &s, &f);
        assert_eq!(class.success, Some(0.8));
        assert_eq!(class.fail, None);
    }

    #[test]
    fn default_boss_uses_sentinel_weights() {
        let s = catalog::success_rules_for("Unlisted");
        let f = catalog::fail_rules_for("Unlisted");
        let class = classify_label("Res", &s, &f);
        assert_eq!(class.success, Some(1.0));
        assert_eq!(class.fail, None);
    }
}
