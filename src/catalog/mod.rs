//! Rule Catalog: per-boss mechanic weights for the two independent
//! categories (executed correctly / failed).
//!
//! Lookups never fail. A boss that is not listed resolves to the `_default`
//! row, which carries only the sentinel default weight.

pub mod data;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

pub const DEFAULT_BOSS_KEY: &str = "_default";
pub const SUCCESS_DEFAULT_KEY: &str = "__success_default__";
pub const FAIL_DEFAULT_KEY: &str = "__fail_default__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Success,
    Fail,
}

impl RuleKind {
    fn table(self) -> &'static [(&'static str, &'static [(&'static str, f64)])] {
        match self {
            RuleKind::Success => data::SUCCESS_RULES,
            RuleKind::Fail => data::FAIL_RULES,
        }
    }

    fn default_key(self) -> &'static str {
        match self {
            RuleKind::Success => SUCCESS_DEFAULT_KEY,
            RuleKind::Fail => FAIL_DEFAULT_KEY,
        }
    }
}

/// The weights that apply to one boss in one category.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub kind: RuleKind,
    /// Table row actually used (`_default` when the boss is not listed)
    pub boss: &'static str,
    entries: &'static [(&'static str, f64)],
}

impl RuleSet {
    /// Explicitly configured weight for a mechanic label (exact match).
    pub fn weight(&self, label: &str) -> Option<f64> {
        if label == self.kind.default_key() {
            return None;
        }
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|&(_, w)| w)
    }

    /// Boss-level default weight, applied to heuristic matches.
    pub fn default_weight(&self) -> Option<f64> {
        let key = self.kind.default_key();
        self.entries
            .iter()
            .find(|(l, _)| *l == key)
            .map(|&(_, w)| w)
    }

    pub fn is_fallback(&self) -> bool {
        self.boss == DEFAULT_BOSS_KEY
    }

    /// Configured labels in table order, sentinel excluded.
    pub fn labels(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        let key = self.kind.default_key();
        self.entries
            .iter()
            .filter(move |(l, _)| *l != key)
            .copied()
    }
}

pub fn rules_for(kind: RuleKind, boss_name: &str) -> RuleSet {
    let table = kind.table();
    let row = table
        .iter()
        .find(|(boss, _)| *boss == boss_name)
        .or_else(|| table.iter().find(|(boss, _)| *boss == DEFAULT_BOSS_KEY));

    match row {
        Some(&(boss, entries)) => RuleSet {
            kind,
            boss,
            entries,
        },
        None => RuleSet {
            kind,
            boss: DEFAULT_BOSS_KEY,
            entries: &[],
        },
    }
}

pub fn success_rules_for(boss_name: &str) -> RuleSet {
    rules_for(RuleKind::Success, boss_name)
}

pub fn fail_rules_for(boss_name: &str) -> RuleSet {
    rules_for(RuleKind::Fail, boss_name)
}

/// True when the boss has its own row in at least one table.
pub fn is_catalogued(boss_name: &str) -> bool {
    !success_rules_for(boss_name).is_fallback() || !fail_rules_for(boss_name).is_fallback()
}
