use super::{print_json, ReportArgs};
use crate::reports;
use raidscore::encounter::EncounterInfo;
use raidscore::insights::{self, SupportHighlight};
use raidscore::table::PlayerTable;
use raidscore::RsResult;

pub fn run(args: ReportArgs, json: bool) -> RsResult<()> {
    let (report, scores) = args.load()?;
    let encounter = EncounterInfo::from_report(&report);

    if json {
        let highlights: PlayerTable<SupportHighlight> = scores.support_metrics.map(|name, m| {
            insights::support_highlight(
                m,
                scores.mechanic_summary.get(name),
                encounter.duration_seconds,
            )
        });
        return print_json(&highlights);
    }

    reports::print_encounter_header(&encounter);
    reports::print_support_table(&scores, encounter.duration_seconds);
    Ok(())
}
