pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod encounter;
pub mod error;
pub mod extract;
pub mod insights;
pub mod report;
pub mod table;
// cmd and reports are modules of the binary crate (main.rs).

pub use encounter::{score_encounter, score_report, EncounterInfo, EncounterScores};
pub use error::{ReportError, RsResult};
pub use table::PlayerTable;
