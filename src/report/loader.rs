use super::EncounterReport;
use crate::error::RsResult;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Reads and decodes a saved report. Fails only on I/O, invalid JSON, or a
/// top level that is not an object.
pub fn load_report<P: AsRef<Path>>(path: P) -> RsResult<EncounterReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let root: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    let report = EncounterReport::from_value(&root)?;
    info!(
        "📂 Loaded report {:?}: {} ({} players)",
        path,
        report.boss_name(),
        report.players.len()
    );
    Ok(report)
}

pub fn parse_report(text: &str) -> RsResult<EncounterReport> {
    let root: serde_json::Value = serde_json::from_str(text)?;
    EncounterReport::from_value(&root)
}
