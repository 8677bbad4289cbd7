use super::{print_json, ReportArgs};
use crate::reports;
use raidscore::catalog::fail_rules_for;
use raidscore::encounter::EncounterInfo;
use raidscore::insights::{self, FailBreakdown};
use raidscore::table::PlayerTable;
use raidscore::RsResult;

pub fn run(args: ReportArgs, json: bool) -> RsResult<()> {
    let (report, scores) = args.load()?;
    let fail_rules = fail_rules_for(args.boss_name(&report));

    if json {
        let breakdowns: PlayerTable<FailBreakdown> = scores
            .mechanic_summary
            .map(|_, tally| insights::fail_breakdown(tally, &fail_rules));
        return print_json(&breakdowns);
    }

    reports::print_encounter_header(&EncounterInfo::from_report(&report));
    reports::print_fail_table(&scores, &fail_rules);
    Ok(())
}
