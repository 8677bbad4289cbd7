use clap::Args;
use serde::{Deserialize, Serialize};

/// Per-run options. Everything here selects *what* to score; the weight
/// tables below decide *how* and are not exposed as flags.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Phase to score (0 = full fight unless the report segments it)
    #[arg(long, env = "RAIDSCORE_PHASE_INDEX", default_value_t = 0)]
    pub phase_index: usize,

    /// Index into `dpsTargets` used for boss damage (0 = primary boss)
    #[arg(long, default_value_t = 0)]
    pub target_index: usize,

    /// Number of rows shown in DPS tables
    #[arg(long, env = "RAIDSCORE_TOP_N", default_value_t = 10)]
    pub top_n: usize,

    /// Override the boss name used for rule lookup
    #[arg(long)]
    pub boss: Option<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            phase_index: 0,
            target_index: 0,
            top_n: 10,
            boss: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupportWeights {
    // Healing sits at zero: most uploaded logs carry no healing stats.
    pub healing: f64,
    pub boon: f64,
    pub mech: f64,
    pub breakbar: f64,
}

impl Default for SupportWeights {
    fn default() -> Self {
        Self {
            healing: 0.0,
            boon: 0.1,
            mech: 0.5,
            breakbar: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MvpWeights {
    pub dps: f64,
    pub support: f64,
    pub fail_penalty: f64,
}

impl Default for MvpWeights {
    fn default() -> Self {
        Self {
            dps: 0.75,
            support: 0.25,
            fail_penalty: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoringWeights {
    pub support: SupportWeights,
    pub mvp: MvpWeights,
}
