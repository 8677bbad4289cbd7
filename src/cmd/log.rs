use super::{print_json, ReportArgs};
use crate::reports;
use raidscore::encounter::EncounterInfo;
use raidscore::RsResult;
use serde::Serialize;

#[derive(Serialize)]
struct LogView<'a> {
    encounter: EncounterInfo,
    scores: &'a raidscore::EncounterScores,
}

pub fn run(args: ReportArgs, json: bool) -> RsResult<()> {
    let (report, scores) = args.load()?;
    let encounter = EncounterInfo::from_report(&report);

    if json {
        return print_json(&LogView {
            encounter,
            scores: &scores,
        });
    }

    reports::print_encounter_header(&encounter);
    reports::print_dps_table(&scores.player_rows, args.config.top_n);
    reports::print_fail_counts(&scores);
    reports::print_mvp_line(&scores);
    Ok(())
}
