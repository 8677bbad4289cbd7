use super::{print_json, ReportArgs};
use crate::reports;
use clap::{Args, Subcommand};
use raidscore::extract::{audit_mechanics, MechanicAudit, MechanicSummary};
use raidscore::RsResult;
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct DebugArgs {
    #[command(subcommand)]
    pub view: DebugView,
}

#[derive(Subcommand, Debug, Clone)]
pub enum DebugView {
    /// Every mechanic label in the report and how it classifies
    Mechanics(ReportArgs),
    /// Raw support inputs per player
    Support(ReportArgs),
}

#[derive(Serialize)]
struct MechanicsView<'a> {
    audit: MechanicAudit,
    players: &'a MechanicSummary,
}

pub fn run(args: DebugArgs, json: bool) -> RsResult<()> {
    match args.view {
        DebugView::Mechanics(input) => {
            let (report, scores) = input.load()?;
            let audit = audit_mechanics(&report, input.config.boss.as_deref());
            if json {
                return print_json(&MechanicsView {
                    audit,
                    players: &scores.mechanic_summary,
                });
            }
            reports::print_mechanic_audit(&audit);
            reports::print_mechanic_labels(&scores);
        }
        DebugView::Support(input) => {
            let (_, scores) = input.load()?;
            if json {
                return print_json(&scores.support_metrics);
            }
            reports::print_support_metrics(&scores);
        }
    }
    Ok(())
}
