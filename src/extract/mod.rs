//! Metric Extractor: per-player raw metrics for one phase of a report.
//!
//! Every function here is infallible. A player with a broken or missing
//! sub-structure gets zero/empty values, never an error.

pub mod boons;
pub mod dps;
pub mod mechanics;
pub mod support;

pub use boons::{boon_weight, group_boon_generation, Boon, BoonGeneration};
pub use dps::{boss_damage, extract_dps_rows, DpsRow};
pub use mechanics::{
    audit_mechanics, classify_mechanics, fail_counts, fail_scores, success_scores, LabelSource,
    LabelUsage, MechanicAudit, MechanicSummary, MechanicTally,
};
pub use support::{support_metrics, SupportMetrics};
