use criterion::{criterion_group, criterion_main, Criterion};
use raidscore::config::ScoringWeights;
use raidscore::encounter::score_encounter;
use raidscore::report::EncounterReport;
use serde_json::{json, Value};
use std::hint::black_box;

fn setup_report() -> Value {
    let players: Vec<Value> = (0..10)
        .map(|i| {
            let phases: Vec<Value> = (0..4)
                .map(|p| json!({"dps": 20_000 + i * 1_000 + p * 10, "breakbarDamage": i * 50}))
                .collect();
            let damage: Vec<Value> = (0..4)
                .map(|p| json!({"damage": 1_000_000 + i * 50_000 + p}))
                .collect();
            json!({
                "name": format!("Player {}", i),
                "profession": "Firebrand",
                "dpsAll": phases,
                "dpsTargets": [damage],
                "extHealingStats": [{"outgoingHealing": i * 1_000, "outgoingBarrier": 100}],
                "groupBuffs": [
                    {"id": 1187, "buffData": [{"generation": i as f64}]},
                    {"id": 30328, "buffData": [{"generation": 10.0 - i as f64}]},
                    {"id": 740, "buffData": [{"generation": 25.0}]}
                ]
            })
        })
        .collect();

    // 40 mechanic types, each hitting half the squad plus an NPC
    let labels = ["Slub", "Tantrum", "Breath", "Downed", "Dead", "Fixate", "Res", "Shake"];
    let mechanics: Vec<Value> = (0..40)
        .map(|m| {
            let data: Vec<Value> = (0..5)
                .map(|k| json!({"actor": format!("Player {}", (m + k * 2) % 10)}))
                .chain(std::iter::once(json!({"actor": "Slubling"})))
                .collect();
            json!({"name": labels[m % labels.len()], "mechanicsData": data})
        })
        .collect();

    json!({
        "fightName": "Slothasor",
        "durationMS": 180_000,
        "players": players,
        "mechanics": mechanics,
        "buffMap": {
            "b1187": {"name": "Quickness", "classification": "Boon"},
            "b30328": {"name": "Alacrity", "classification": "Boon"},
            "b740": {"name": "Might", "classification": "Boon"}
        }
    })
}

fn criterion_benchmark(c: &mut Criterion) {
    let doc = setup_report();
    let report = EncounterReport::from_value(&doc).expect("Failed to parse report");
    let weights = ScoringWeights::default();

    c.bench_function("parse_report (10 players)", |b| {
        b.iter(|| EncounterReport::from_value(black_box(&doc)))
    });

    c.bench_function("score_encounter (10 players, 40 mechanics)", |b| {
        b.iter(|| score_encounter(black_box(&report), "Slothasor", 0, 0, &weights))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
