//! Output
//!
//! Console rendering of a run and persistence of the final report.

pub mod report;

pub use report::{ansi, Palette};

use battle_events::FinalReport;
use std::fs;
use std::path::Path;

use crate::BattleError;

/// Writes the final report as pretty JSON, creating parent directories.
pub fn write_final_report(path: impl AsRef<Path>, report: &FinalReport) -> Result<(), BattleError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = report.to_json_pretty()?;
    fs::write(path, json)?;
    Ok(())
}
