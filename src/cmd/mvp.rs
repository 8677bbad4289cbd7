use super::{print_json, ReportArgs};
use crate::reports;
use clap::Args;
use raidscore::encounter::{EncounterInfo, EncounterScores};
use raidscore::insights::rank_desc;
use raidscore::RsResult;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct MvpArgs {
    #[command(flatten)]
    pub input: ReportArgs,

    /// Also write the ranking to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct MvpCsvRow<'a> {
    rank: usize,
    player: &'a str,
    profession: &'a str,
    score: f64,
    damage_share: f64,
    support: f64,
    mech_success: f64,
    fail_score: f64,
}

pub fn run(args: MvpArgs, json: bool) -> RsResult<()> {
    let (report, scores) = args.input.load()?;

    if let Some(path) = &args.csv {
        write_csv(path, &scores)?;
        info!("💾 Wrote MVP ranking to {}", path.display());
    }

    if json {
        return print_json(&scores);
    }

    reports::print_encounter_header(&EncounterInfo::from_report(&report));
    reports::print_mvp_table(&scores);
    reports::print_mvp_line(&scores);
    Ok(())
}

pub fn write_csv(path: &Path, scores: &EncounterScores) -> RsResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (i, (name, score)) in rank_desc(&scores.mvp_scores).into_iter().enumerate() {
        writer.serialize(MvpCsvRow {
            rank: i + 1,
            player: name,
            profession: scores
                .name_prof_map
                .get(name)
                .map(String::as_str)
                .unwrap_or(raidscore::report::UNKNOWN_PROFESSION),
            score,
            damage_share: scores.damage_share.value_or_default(name),
            support: scores.support_scores.value_or_default(name),
            mech_success: scores.mech_success_scores.value_or_default(name),
            fail_score: scores.fail_score_map.value_or_default(name),
        })?;
    }
    writer.flush()?;
    Ok(())
}
