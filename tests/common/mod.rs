#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const QUICKNESS_ID: u64 = 1187;
pub const MIGHT_ID: u64 = 740;

/// Player entry with one full-fight phase.
pub fn player(name: &str, profession: &str, dps: f64, boss_damage: f64) -> Value {
    json!({
        "name": name,
        "profession": profession,
        "dpsAll": [{"dps": dps, "breakbarDamage": 0.0}],
        "dpsTargets": [[{"damage": boss_damage}]],
        "groupBuffs": []
    })
}

/// Mechanic entry; each actor yields one occurrence.
pub fn mechanic(label: &str, actors: &[&str]) -> Value {
    let data: Vec<Value> = actors.iter().map(|a| json!({"actor": a})).collect();
    json!({"name": label, "mechanicsData": data})
}

pub fn boon_buff_map() -> Value {
    let mut map = serde_json::Map::new();
    map.insert(
        format!("b{}", QUICKNESS_ID),
        json!({"name": "Quickness", "classification": "Boon"}),
    );
    map.insert(
        format!("b{}", MIGHT_ID),
        json!({"name": "Might", "classification": "Boon"}),
    );
    Value::Object(map)
}

pub fn report(boss: &str, players: Vec<Value>, mechanics: Vec<Value>) -> Value {
    json!({
        "fightName": boss,
        "success": true,
        "isCM": false,
        "durationMS": 20000,
        "players": players,
        "mechanics": mechanics,
        "buffMap": boon_buff_map()
    })
}

/// Ten players with a spread of damage, boons and mechanics.
pub fn raid_report() -> Value {
    let professions = [
        "Firebrand", "Chronomancer", "Scourge", "Weaver", "Renegade",
        "Soulbeast", "Holosmith", "Daredevil", "Berserker", "Druid",
    ];
    let players: Vec<Value> = professions
        .iter()
        .enumerate()
        .map(|(i, prof)| {
            let mut p = player(
                &format!("Player {}", i),
                prof,
                10_000.0 + 1_500.0 * i as f64,
                1_000_000.0 + 100_000.0 * i as f64,
            );
            p["groupBuffs"] = json!([
                {"id": QUICKNESS_ID, "buffData": [{"generation": (i % 3) as f64 * 4.0}]},
                {"id": MIGHT_ID, "buffData": [{"generation": i as f64}]}
            ]);
            p
        })
        .collect();
    let mechanics = vec![
        mechanic("Slub", &["Player 1", "Player 4"]),
        mechanic("Tantrum", &["Player 2", "Player 2", "Player 7"]),
        mechanic("Downed", &["Player 7"]),
        mechanic("Res", &["Player 0"]),
        mechanic("Fixate", &["Slubling", "Player 3"]),
    ];
    report("Slothasor", players, mechanics)
}

pub fn write_json(dir: &Path, file_name: &str, value: &Value) -> PathBuf {
    let path = dir.join(file_name);
    let mut file = File::create(&path).unwrap();
    write!(file, "{}", value).unwrap();
    path
}
