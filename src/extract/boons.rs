use crate::report::EncounterReport;
use crate::table::PlayerTable;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Boons that count towards support. Names match `buffMap[*].name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum Boon {
    Might,
    Fury,
    Quickness,
    Alacrity,
    Protection,
    Stability,
}

impl Boon {
    pub fn generation_weight(self) -> f64 {
        match self {
            Boon::Might => 0.4,
            Boon::Fury => 0.2,
            Boon::Quickness => 1.5,
            Boon::Alacrity => 1.5,
            Boon::Protection => 0.5,
            Boon::Stability => 0.3,
        }
    }
}

/// Boon name -> seconds generated for the group, in `groupBuffs` order
pub type BoonGeneration = PlayerTable<f64>;

/// Weight for a boon name; anything outside [`Boon`] weighs 1.0.
pub fn boon_weight(name: &str) -> f64 {
    Boon::from_str(name)
        .map(Boon::generation_weight)
        .unwrap_or(1.0)
}

pub fn tracked_boons() -> Vec<&'static str> {
    Boon::iter().map(<&'static str>::from).collect()
}

/// Group generation for the tracked boons during `phase`.
pub fn group_boon_generation(report: &EncounterReport, phase: usize) -> PlayerTable<BoonGeneration> {
    group_boon_generation_for(report, phase, &tracked_boons())
}

/// Group generation restricted to `interest`. Only buffs classified as
/// "Boon" in the buff map count, only positive values are kept, and buff
/// ids sharing a name are summed.
pub fn group_boon_generation_for(
    report: &EncounterReport,
    phase: usize,
    interest: &[&str],
) -> PlayerTable<BoonGeneration> {
    report
        .players
        .iter()
        .map(|p| {
            let mut per_boon = BoonGeneration::new();
            for gb in &p.group_buffs {
                let Some(info) = report.buff_map.get(&gb.id) else {
                    continue;
                };
                let Some(name) = info.name.as_deref() else {
                    continue;
                };
                if !info.is_boon() || !interest.contains(&name) {
                    continue;
                }
                let generated = gb.generation_for(phase);
                if generated <= 0.0 {
                    continue;
                }
                match per_boon.get_mut(name) {
                    Some(total) => *total += generated,
                    None => per_boon.insert(name, generated),
                }
            }
            (p.name.clone(), per_boon)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights() {
        assert_eq!(boon_weight("Quickness"), 1.5);
        assert_eq!(boon_weight("Might"), 0.4);
        assert_eq!(boon_weight("Regeneration"), 1.0);
    }

    #[test]
    fn tracked_set() {
        assert_eq!(
            tracked_boons(),
            vec!["Might", "Fury", "Quickness", "Alacrity", "Protection", "Stability"]
        );
    }
}
