use raidscore::report::{load_report, parse_report};
use raidscore::ReportError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_loader_reads_saved_report() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"fightName": "Slothasor", "durationMS": 65000, "players": [{{"name": "A"}}]}}"#
    )
    .unwrap();

    let report = load_report(file.path()).unwrap();
    assert_eq!(report.boss_name(), "Slothasor");
    assert_eq!(report.duration_seconds(), Some(65.0));
    assert_eq!(report.players.len(), 1);
}

#[test]
fn test_loader_rejects_garbage() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "<html>502 Bad Gateway</html>").unwrap();

    let err = load_report(file.path()).unwrap_err();
    assert!(matches!(err, ReportError::Json(_)), "got {:?}", err);
}

#[test]
fn test_loader_missing_file() {
    let err = load_report("does/not/exist.json").unwrap_err();
    assert!(matches!(err, ReportError::Io(_)));
}

#[test]
fn test_top_level_must_be_object() {
    for text in ["[]", "42", "\"report\"", "null"] {
        let err = parse_report(text).unwrap_err();
        assert!(matches!(err, ReportError::NotAnObject(_)), "{} gave {:?}", text, err);
    }
}

#[test]
fn test_malformed_fields_degrade() {
    let report = parse_report(
        r#"{
            "fightName": 12,
            "success": "yes",
            "players": [
                {"name": "A", "dpsAll": "broken", "groupBuffs": {"id": 1}},
                "not a player",
                {"name": "B", "dpsTargets": [[{"damage": "lots"}]]}
            ],
            "mechanics": {"name": "Downed"},
            "buffMap": {"nope": {"name": "Quickness"}, "b1187": "bad"}
        }"#,
    )
    .unwrap();

    assert_eq!(report.boss_name(), "Unknown Boss");
    assert!(!report.success);
    assert_eq!(report.players.len(), 3);
    assert_eq!(report.players[1].name, "Unknown");
    assert_eq!(report.players[2].damage_to(0, 0), 0.0);
    assert!(report.mechanics.is_empty());
    assert!(report.buff_map.is_empty());
}

#[test]
fn test_encounter_flags() {
    let report = parse_report(
        r#"{"encounter": {"boss": "Samarog", "success": true, "isCm": true}, "players": []}"#,
    )
    .unwrap();
    assert!(report.success);
    assert!(report.is_cm);
    assert_eq!(report.boss_name(), "Samarog");
}
