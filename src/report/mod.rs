//! Typed view of an Elite Insights encounter report.
//!
//! This is the parsing boundary: the raw `serde_json::Value` is walked once
//! through the alias chains in [`fields`] and nothing untyped leaves this
//! module. Missing or malformed optional fields become zero/empty values.

pub mod fields;
pub mod loader;

pub use loader::{load_report, parse_report};

use self::fields::{f64_or_zero, first_bool, first_f64, first_list, first_str, list};
use crate::error::{ReportError, RsResult};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

pub const UNKNOWN_PLAYER: &str = "Unknown";
pub const UNKNOWN_PROFESSION: &str = "Unknown";
pub const UNKNOWN_BOSS: &str = "Unknown Boss";
pub const UNKNOWN_MECHANIC: &str = "Unknown mechanic";

const NAME_KEYS: &[&str] = &["name", "character_name"];
const PROFESSION_KEYS: &[&str] = &["profession", "professionName", "spec"];
const DPS_LIST_KEYS: &[&str] = &["dpsAll", "dpsTargets"];
const DPS_KEYS: &[&str] = &["dps", "Dps", "dpsAll"];
const BREAKBAR_KEYS: &[&str] = &["breakbarDamage", "BreakbarDamage"];
const HEALING_LIST_KEYS: &[&str] = &["extHealingStats", "healingStats"];
const HEALING_KEYS: &[&str] = &["outgoingHealing", "healing"];
const MECHANIC_LIST_KEYS: &[&str] = &["mechanics", "mechanicLogs"];
const MECHANIC_LABEL_KEYS: &[&str] = &["name", "fullName", "description"];
const DURATION_KEYS: &[&str] = &["durationMS", "encounterDuration"];
const PHASE_DURATION_KEYS: &[&str] = &["durationMS", "duration"];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseDps {
    pub dps: f64,
    pub breakbar: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupBuff {
    pub id: u64,
    /// Group generation per phase, in seconds
    pub generation: Vec<f64>,
}

impl GroupBuff {
    /// Generation for `phase`; phases past the end read entry 0.
    pub fn generation_for(&self, phase: usize) -> f64 {
        let idx = if phase < self.generation.len() { phase } else { 0 };
        self.generation.get(idx).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub profession: String,
    /// `None` where the phase entry is not an object
    pub dps_phases: Vec<Option<PhaseDps>>,
    /// `dpsTargets[target][phase].damage`
    pub target_damage: Vec<Vec<f64>>,
    /// Outgoing healing plus barrier per phase
    pub healing_phases: Vec<f64>,
    pub group_buffs: Vec<GroupBuff>,
}

impl PlayerRecord {
    pub fn from_value(p: &Value) -> Self {
        let name = first_str(p, NAME_KEYS).unwrap_or(UNKNOWN_PLAYER).to_string();
        let profession = first_str(p, PROFESSION_KEYS)
            .unwrap_or(UNKNOWN_PROFESSION)
            .to_string();

        let dps_phases = first_list(p, DPS_LIST_KEYS)
            .unwrap_or(&[])
            .iter()
            .map(parse_phase_dps)
            .collect();

        let target_damage = list(p, "dpsTargets")
            .iter()
            .map(|target| {
                target
                    .as_array()
                    .map(|phases| phases.iter().map(|s| f64_or_zero(s, "damage")).collect())
                    .unwrap_or_default()
            })
            .collect();

        let healing_phases = first_list(p, HEALING_LIST_KEYS)
            .unwrap_or(&[])
            .iter()
            .map(|phase| {
                let healing = first_f64(phase, HEALING_KEYS).unwrap_or(0.0);
                healing + f64_or_zero(phase, "outgoingBarrier")
            })
            .collect();

        let group_buffs = list(p, "groupBuffs")
            .iter()
            .filter_map(|gb| {
                let id = gb.get("id").and_then(Value::as_u64)?;
                let generation = list(gb, "buffData")
                    .iter()
                    .map(|entry| f64_or_zero(entry, "generation"))
                    .collect();
                Some(GroupBuff { id, generation })
            })
            .collect();

        Self {
            name,
            profession,
            dps_phases,
            target_damage,
            healing_phases,
            group_buffs,
        }
    }

    /// DPS entry for `phase`. Outer `None`: no entry at that index.
    pub fn dps_entry(&self, phase: usize) -> Option<Option<PhaseDps>> {
        self.dps_phases.get(phase).copied()
    }

    pub fn breakbar(&self, phase: usize) -> f64 {
        self.dps_entry(phase)
            .flatten()
            .map(|e| e.breakbar)
            .unwrap_or(0.0)
    }

    pub fn healing(&self, phase: usize) -> f64 {
        self.healing_phases.get(phase).copied().unwrap_or(0.0)
    }

    pub fn damage_to(&self, target: usize, phase: usize) -> f64 {
        self.target_damage
            .get(target)
            .and_then(|phases| phases.get(phase))
            .copied()
            .unwrap_or(0.0)
    }
}

// A null entry is an empty stats block; anything else that is not an
// object has no usable fields.
fn parse_phase_dps(stats: &Value) -> Option<PhaseDps> {
    match stats {
        Value::Null => Some(PhaseDps::default()),
        Value::Object(_) => Some(PhaseDps {
            dps: first_f64(stats, DPS_KEYS).unwrap_or(0.0),
            breakbar: first_f64(stats, BREAKBAR_KEYS).unwrap_or(0.0),
        }),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MechanicRecord {
    pub label: String,
    /// Actor of every occurrence, players and NPCs alike
    pub actors: Vec<String>,
}

impl MechanicRecord {
    pub fn from_value(m: &Value) -> Self {
        let label = first_str(m, MECHANIC_LABEL_KEYS)
            .unwrap_or(UNKNOWN_MECHANIC)
            .to_string();
        let actors = list(m, "mechanicsData")
            .iter()
            .filter_map(|entry| entry.get("actor").and_then(Value::as_str))
            .map(str::to_string)
            .collect();
        Self { label, actors }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuffInfo {
    pub name: Option<String>,
    pub classification: Option<String>,
}

impl BuffInfo {
    pub fn is_boon(&self) -> bool {
        self.classification.as_deref() == Some("Boon")
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncounterReport {
    pub fight_name: Option<String>,
    pub encounter_boss: Option<String>,
    pub success: bool,
    pub is_cm: bool,
    pub duration_ms: Option<f64>,
    pub players: Vec<PlayerRecord>,
    pub mechanics: Vec<MechanicRecord>,
    pub buff_map: HashMap<u64, BuffInfo>,
}

impl EncounterReport {
    /// Only a non-object top level is rejected.
    pub fn from_value(root: &Value) -> RsResult<Self> {
        if !root.is_object() {
            return Err(ReportError::NotAnObject(json_kind(root)));
        }

        let null = Value::Null;
        let encounter = root.get("encounter").unwrap_or(&null);

        let duration_ms = first_f64(root, DURATION_KEYS).or_else(|| {
            list(root, "phases")
                .first()
                .and_then(|phase| first_f64(phase, PHASE_DURATION_KEYS))
        });

        let buff_map = root
            .get("buffMap")
            .and_then(Value::as_object)
            .map(|raw| {
                raw.iter()
                    .filter(|(_, val)| val.is_object())
                    .filter_map(|(key, val)| {
                        let id = fields::parse_buff_key(key)?;
                        let info = BuffInfo {
                            name: first_str(val, &["name"]).map(str::to_string),
                            classification: first_str(val, &["classification"])
                                .map(str::to_string),
                        };
                        Some((id, info))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let report = Self {
            fight_name: first_str(root, &["fightName"]).map(str::to_string),
            encounter_boss: first_str(encounter, &["boss"]).map(str::to_string),
            success: first_bool(root, &["success"])
                .or_else(|| first_bool(encounter, &["success"]))
                .unwrap_or(false),
            is_cm: first_bool(root, &["isCM", "isCm"])
                .or_else(|| first_bool(encounter, &["isCm"]))
                .unwrap_or(false),
            duration_ms,
            players: list(root, "players")
                .iter()
                .map(PlayerRecord::from_value)
                .collect(),
            mechanics: first_list(root, MECHANIC_LIST_KEYS)
                .unwrap_or(&[])
                .iter()
                .map(MechanicRecord::from_value)
                .collect(),
            buff_map,
        };

        debug!(
            "Parsed report: {} players, {} mechanics, {} buffs",
            report.players.len(),
            report.mechanics.len(),
            report.buff_map.len()
        );
        Ok(report)
    }

    /// `fightName`, then `encounter.boss`, then "Unknown Boss".
    pub fn boss_name(&self) -> &str {
        self.fight_name
            .as_deref()
            .or(self.encounter_boss.as_deref())
            .unwrap_or(UNKNOWN_BOSS)
    }

    pub fn duration_seconds(&self) -> Option<f64> {
        self.duration_ms.map(|ms| ms / 1000.0)
    }

    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.name.as_str())
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
