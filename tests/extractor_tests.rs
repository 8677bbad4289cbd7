mod common;

use raidscore::extract::{
    boss_damage, extract_dps_rows, group_boon_generation, support_metrics, classify_mechanics,
};
use raidscore::report::EncounterReport;
use rstest::rstest;
use serde_json::{json, Value};

fn parse(doc: Value) -> EncounterReport {
    EncounterReport::from_value(&doc).unwrap()
}

fn one_player(p: Value) -> EncounterReport {
    parse(json!({"players": [p]}))
}

#[rstest]
#[case(json!({"name": "Alpha", "character_name": "Beta"}), "Alpha")]
#[case(json!({"character_name": "Beta"}), "Beta")]
#[case(json!({"name": null, "character_name": "Beta"}), "Beta")]
#[case(json!({}), "Unknown")]
fn test_name_alias(#[case] p: Value, #[case] expected: &str) {
    assert_eq!(one_player(p).players[0].name, expected);
}

#[rstest]
#[case(json!({"profession": "Firebrand", "spec": "Guardian"}), "Firebrand")]
#[case(json!({"professionName": "Chronomancer"}), "Chronomancer")]
#[case(json!({"spec": "Scourge"}), "Scourge")]
#[case(json!({}), "Unknown")]
fn test_profession_alias(#[case] p: Value, #[case] expected: &str) {
    assert_eq!(one_player(p).players[0].profession, expected);
}

#[rstest]
#[case(json!({"dps": 100, "Dps": 200}), 100.0)]
#[case(json!({"Dps": 200, "dpsAll": 300}), 200.0)]
#[case(json!({"dpsAll": 300}), 300.0)]
#[case(json!({"dps": 0, "Dps": 200}), 0.0)]
#[case(json!({}), 0.0)]
fn test_dps_field_alias(#[case] stats: Value, #[case] expected: f64) {
    let report = one_player(json!({"name": "A", "dpsAll": [stats]}));
    let rows = extract_dps_rows(&report, 0);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].dps, expected);
}

#[rstest]
#[case(json!({"breakbarDamage": 50.5}), 50.5)]
#[case(json!({"BreakbarDamage": 12}), 12.0)]
#[case(json!({}), 0.0)]
fn test_breakbar_alias(#[case] stats: Value, #[case] expected: f64) {
    let report = one_player(json!({"name": "A", "dpsAll": [stats]}));
    assert_eq!(extract_dps_rows(&report, 0)[0].breakbar, expected);
}

#[test]
fn test_dps_targets_fallback() {
    let report = one_player(json!({
        "name": "A",
        "dpsAll": [],
        "dpsTargets": [{"dps": 900}]
    }));
    assert_eq!(extract_dps_rows(&report, 0)[0].dps, 900.0);
}

#[test]
fn test_phase_out_of_range_excluded() {
    let report = one_player(json!({"name": "A", "dpsAll": [{"dps": 1}]}));
    assert!(extract_dps_rows(&report, 3).is_empty());
}

#[test]
fn test_non_object_phase_entry_excluded() {
    let report = parse(json!({"players": [
        {"name": "A", "dpsAll": ["oops"]},
        {"name": "B", "dpsAll": [null]}
    ]}));
    let rows = extract_dps_rows(&report, 0);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "B");
    assert_eq!(rows[0].dps, 0.0);
}

#[test]
fn test_healing_sums_barrier() {
    let report = one_player(json!({
        "name": "A",
        "extHealingStats": [{"outgoingHealing": 1000, "outgoingBarrier": 250}],
        "healingStats": [{"healing": 5}]
    }));
    let metrics = support_metrics(&report, 0, &classify_mechanics(&report, None));
    assert_eq!(metrics.get("A").unwrap().healing, 1250.0);

    let report = one_player(json!({
        "name": "A",
        "healingStats": [{"healing": 5}]
    }));
    let metrics = support_metrics(&report, 0, &classify_mechanics(&report, None));
    assert_eq!(metrics.get("A").unwrap().healing, 5.0);
}

#[rstest]
#[case(json!({"durationMS": 90000}), Some(90.0))]
#[case(json!({"encounterDuration": 45000}), Some(45.0))]
#[case(json!({"phases": [{"durationMS": 30000}]}), Some(30.0))]
#[case(json!({"phases": [{"duration": 15000}]}), Some(15.0))]
#[case(json!({}), None)]
fn test_duration_alias(#[case] doc: Value, #[case] expected: Option<f64>) {
    assert_eq!(parse(doc).duration_seconds(), expected);
}

#[rstest]
#[case(json!({"fightName": "Slothasor", "encounter": {"boss": "Other"}}), "Slothasor")]
#[case(json!({"encounter": {"boss": "Gorseval the Multifarious"}}), "Gorseval the Multifarious")]
#[case(json!({}), "Unknown Boss")]
fn test_boss_name(#[case] doc: Value, #[case] expected: &str) {
    assert_eq!(parse(doc).boss_name(), expected);
}

#[test]
fn test_boss_damage_by_target() {
    let report = parse(json!({"players": [
        {"name": "A", "dpsTargets": [[{"damage": 100}, {"damage": 40}], [{"damage": 7}]]},
        {"name": "B"}
    ]}));
    assert_eq!(boss_damage(&report, 0, 0).get("A"), Some(&100.0));
    assert_eq!(boss_damage(&report, 1, 0).get("A"), Some(&40.0));
    assert_eq!(boss_damage(&report, 0, 1).get("A"), Some(&7.0));
    assert_eq!(boss_damage(&report, 0, 5).get("A"), Some(&0.0));
    assert_eq!(boss_damage(&report, 0, 0).get("B"), Some(&0.0));
}

#[test]
fn test_boon_generation_filtering() {
    let report = parse(json!({
        "players": [{
            "name": "A",
            "groupBuffs": [
                {"id": 1187, "buffData": [{"generation": 6.0}]},
                {"id": 30328, "buffData": [{"generation": 4.0}]},
                {"id": 740, "buffData": [{"generation": 0.0}]},
                {"id": 717, "buffData": [{"generation": 3.0}]},
                {"id": 999, "buffData": [{"generation": 9.0}]}
            ]
        }],
        "buffMap": {
            "b1187": {"name": "Quickness", "classification": "Boon"},
            "b30328": {"name": "Quickness", "classification": "Boon"},
            "b740": {"name": "Might", "classification": "Boon"},
            "b717": {"name": "Protection", "classification": "Offensive"}
        }
    }));
    let generated = group_boon_generation(&report, 0);
    let a = generated.get("A").unwrap();
    assert_eq!(a.len(), 1);
    assert_eq!(a.get("Quickness"), Some(&10.0));
}

#[test]
fn test_boon_phase_falls_back_to_first() {
    let report = parse(json!({
        "players": [{
            "name": "A",
            "groupBuffs": [{"id": 1187, "buffData": [{"generation": 6.0}]}]
        }],
        "buffMap": {"b1187": {"name": "Quickness", "classification": "Boon"}}
    }));
    let generated = group_boon_generation(&report, 2);
    assert_eq!(generated.get("A").unwrap().get("Quickness"), Some(&6.0));
}

#[test]
fn test_boon_score_weighted() {
    let doc = common::raid_report();
    let report = parse(doc);
    let metrics = support_metrics(&report, 0, &classify_mechanics(&report, None));

    // Player 5: quickness (5 % 3) * 4 = 8s, might 5s.
    let p5 = metrics.get("Player 5").unwrap();
    assert_eq!(p5.boons_generated.get("Quickness"), Some(&8.0));
    assert!((p5.boon_score - (8.0 * 1.5 + 5.0 * 0.4)).abs() < 1e-9);

    // Player 4 hit Slub on Slothasor.
    assert_eq!(metrics.get("Player 4").unwrap().mech_success, 3.0);
}
