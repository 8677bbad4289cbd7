use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use raidscore::catalog::RuleSet;
use raidscore::encounter::{EncounterInfo, EncounterScores};
use raidscore::extract::{DpsRow, LabelSource, MechanicAudit};
use raidscore::insights::{self, rank_desc};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn profession<'a>(scores: &'a EncounterScores, name: &str) -> &'a str {
    scores
        .name_prof_map
        .get(name)
        .map(String::as_str)
        .unwrap_or(raidscore::report::UNKNOWN_PROFESSION)
}

pub fn print_encounter_header(info: &EncounterInfo) {
    let mode = if info.is_cm { " [CM]" } else { "" };
    let result = if info.success { "Success" } else { "Fail" };
    let duration = info
        .duration_seconds
        .map(|s| format!("{}m {:02}s", (s / 60.0) as u64, (s % 60.0) as u64))
        .unwrap_or_else(|| "?".to_string());

    println!("\n=== {}{} ===", info.boss_name, mode);
    println!("Result: {}  |  Duration: {}", result, duration);
}

pub fn print_dps_table(rows: &[DpsRow], top_n: usize) {
    if rows.is_empty() {
        println!("\nCould not find player DPS data in the report.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Profession"),
        Cell::new("DPS").fg(Color::Cyan),
        Cell::new("Breakbar"),
    ]);

    for (i, row) in rows.iter().take(top_n).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&row.name),
            Cell::new(&row.profession),
            Cell::new(format!("{:.0}", row.dps)),
            Cell::new(format!("{:.1}", row.breakbar)),
        ]);
    }
    align_right(&mut table, 3..=4);
    println!("\n{}", table);
}

/// Players with at least one failed mechanic, most fails first.
pub fn print_fail_counts(scores: &EncounterScores) {
    let ranking: Vec<_> = rank_desc(&scores.fail_counts)
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    if ranking.is_empty() {
        println!("\nNo failed mechanics.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Fails").fg(Color::Red),
    ]);
    for (name, count) in ranking {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    align_right(&mut table, 1..=1);
    println!("\n{}", table);
}

pub fn print_mvp_line(scores: &EncounterScores) {
    match &scores.mvp_name {
        Some(name) => println!(
            "\n🏆 MVP: {} ({}) score {:.3}",
            name,
            profession(scores, name),
            scores.mvp_scores.value_or_default(name)
        ),
        None => println!("\nNo MVP: the report has no players."),
    }
}

pub fn print_mvp_table(scores: &EncounterScores) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Profession"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Damage %"),
        Cell::new("Support"),
        Cell::new("Mech +").fg(Color::Green),
        Cell::new("Fail -").fg(Color::Red),
    ]);

    for (i, (name, score)) in rank_desc(&scores.mvp_scores).into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(name),
            Cell::new(profession(scores, name)),
            Cell::new(format!("{:.3}", score)),
            Cell::new(format!(
                "{:.1}",
                scores.damage_share.value_or_default(name) * 100.0
            )),
            Cell::new(format!("{:.3}", scores.support_scores.value_or_default(name))),
            Cell::new(format!(
                "{:.1}",
                scores.mech_success_scores.value_or_default(name)
            )),
            Cell::new(format!("{:.1}", scores.fail_score_map.value_or_default(name))),
        ]);
    }
    align_right(&mut table, 3..=7);
    println!("\n{}", table);
}

/// Players with a positive weighted fail score, worst first.
pub fn print_fail_table(scores: &EncounterScores, fail_rules: &RuleSet) {
    let ranking: Vec<_> = rank_desc(&scores.fail_score_map)
        .into_iter()
        .filter(|(_, weighted)| *weighted > 0.0)
        .collect();
    if ranking.is_empty() {
        println!("\nNo failed mechanics recorded.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Weighted").fg(Color::Red),
        Cell::new("Fails"),
        Cell::new("Downs"),
        Cell::new("Deaths"),
        Cell::new("Worst mechanic"),
    ]);

    for (name, weighted) in ranking {
        let Some(tally) = scores.mechanic_summary.get(name) else {
            continue;
        };
        let breakdown = insights::fail_breakdown(tally, fail_rules);
        let worst = breakdown
            .worst
            .map(|w| format!("{} x{}", w.label, w.count))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.1}", weighted)),
            Cell::new(breakdown.total),
            Cell::new(breakdown.downs),
            Cell::new(breakdown.deaths),
            Cell::new(worst),
        ]);
    }
    align_right(&mut table, 1..=4);
    println!("\n{}", table);
}

pub fn print_support_table(scores: &EncounterScores, fight_seconds: Option<f64>) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Profession"),
        Cell::new("Support").fg(Color::Cyan),
        Cell::new("Breakbar"),
        Cell::new("Top boon").fg(Color::Green),
        Cell::new("Res"),
    ]);

    for (name, score) in rank_desc(&scores.support_scores) {
        let Some(metrics) = scores.support_metrics.get(name) else {
            continue;
        };
        let highlight = insights::support_highlight(
            metrics,
            scores.mechanic_summary.get(name),
            fight_seconds,
        );
        let top_boon = match highlight.top_boon {
            Some(b) => match b.uptime_percent {
                Some(pct) => format!("{} {:.0}%", b.name, pct),
                None => format!("{} {:.0}s", b.name, b.seconds),
            },
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(profession(scores, name)),
            Cell::new(format!("{:.3}", score)),
            Cell::new(format!("{:.1}", metrics.breakbar)),
            Cell::new(top_boon),
            Cell::new(highlight.res_count),
        ]);
    }
    align_right(&mut table, 2..=3);
    align_right(&mut table, 5..=5);
    println!("\n{}", table);
}

pub fn print_mechs_table(scores: &EncounterScores) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Mech +").fg(Color::Green),
        Cell::new("Top mechanics"),
        Cell::new("Res"),
    ]);

    for (name, score) in rank_desc(&scores.mech_success_scores) {
        let Some(tally) = scores.mechanic_summary.get(name) else {
            continue;
        };
        let highlight = insights::mechanic_highlight(tally);
        let top = if highlight.top.is_empty() {
            "-".to_string()
        } else {
            highlight
                .top
                .iter()
                .map(|(label, count)| format!("{} x{}", label, count))
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.1}", score)),
            Cell::new(top),
            Cell::new(highlight.res_count),
        ]);
    }
    align_right(&mut table, 1..=1);
    align_right(&mut table, 3..=3);
    println!("\n{}", table);
}

pub fn print_mechanic_audit(audit: &MechanicAudit) {
    let row = if audit.catalogued { "own rule row" } else { "default rules" };
    println!("\nMechanics for {} ({})", audit.boss, row);
    if audit.labels.is_empty() {
        println!("No mechanics section found in the report.");
        return;
    }

    let weight = |w: Option<f64>| w.map_or_else(|| "-".to_string(), |w| format!("{}", w));

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Source"),
        Cell::new("Success").fg(Color::Green),
        Cell::new("Fail").fg(Color::Red),
    ]);
    for usage in &audit.labels {
        let source = match usage.source {
            LabelSource::Catalog => Cell::new("catalog"),
            LabelSource::Keyword => Cell::new("keyword"),
            LabelSource::Unmatched => Cell::new("unmatched").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(&usage.label),
            Cell::new(usage.occurrences),
            source,
            Cell::new(weight(usage.success_weight)),
            Cell::new(weight(usage.fail_weight)),
        ]);
    }
    align_right(&mut table, 1..=1);
    align_right(&mut table, 3..=4);
    println!("\n{}", table);

    if !audit.unused_rules.is_empty() {
        println!("\nCatalog entries not seen in this report:");
        for rule in &audit.unused_rules {
            println!("  [{}] {} ({})", rule.kind, rule.label, rule.weight);
        }
    }
}

pub fn print_mechanic_labels(scores: &EncounterScores) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Success").fg(Color::Green),
        Cell::new("Fail").fg(Color::Red),
    ]);
    for (name, tally) in scores.mechanic_summary.iter() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(tally.success.join(", ")),
            Cell::new(tally.fails.join(", ")),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_support_metrics(scores: &EncounterScores) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Healing"),
        Cell::new("Boon score"),
        Cell::new("Mech success"),
        Cell::new("Breakbar"),
        Cell::new("Boons generated (s)"),
    ]);
    for (name, m) in scores.support_metrics.iter() {
        let boons = m
            .boons_generated
            .iter()
            .map(|(boon, secs)| format!("{}: {:.1}", boon, secs))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.0}", m.healing)),
            Cell::new(format!("{:.2}", m.boon_score)),
            Cell::new(format!("{:.1}", m.mech_success)),
            Cell::new(format!("{:.1}", m.breakbar)),
            Cell::new(boons),
        ]);
    }
    align_right(&mut table, 1..=4);
    println!("\n{}", table);
}

pub struct BatchLine {
    pub file: String,
    pub boss: String,
    pub success: bool,
    pub mvp: Option<(String, f64)>,
}

pub fn print_batch_table(lines: &[BatchLine]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Report").add_attribute(Attribute::Bold),
        Cell::new("Boss"),
        Cell::new("Result"),
        Cell::new("MVP").fg(Color::Cyan),
        Cell::new("Score"),
    ]);
    for line in lines {
        let (mvp, score) = match &line.mvp {
            Some((name, score)) => (name.clone(), format!("{:.3}", score)),
            None => ("-".to_string(), "-".to_string()),
        };
        table.add_row(vec![
            Cell::new(&line.file),
            Cell::new(&line.boss),
            Cell::new(if line.success { "Success" } else { "Fail" }),
            Cell::new(mvp),
            Cell::new(score),
        ]);
    }
    align_right(&mut table, 4..=4);
    println!("\n{}", table);
}
