use super::{print_json, ReportArgs};
use crate::reports;
use raidscore::encounter::EncounterInfo;
use raidscore::insights::{self, MechanicHighlight};
use raidscore::table::PlayerTable;
use raidscore::RsResult;

pub fn run(args: ReportArgs, json: bool) -> RsResult<()> {
    let (report, scores) = args.load()?;

    if json {
        let highlights: PlayerTable<MechanicHighlight> = scores
            .mechanic_summary
            .map(|_, tally| insights::mechanic_highlight(tally));
        return print_json(&highlights);
    }

    reports::print_encounter_header(&EncounterInfo::from_report(&report));
    reports::print_mechs_table(&scores);
    Ok(())
}
