//! Snapshot Types
//!
//! Point-in-time views of a Human and the final judgment of a run.

use serde::{Deserialize, Serialize};

/// Attribute values of a Human at one moment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HumanSnapshot {
    pub good: f64,
    pub evil: f64,
    pub faith: f64,
    pub intelligence: f64,
    pub soul: f64,
}

/// Final classification of a Human
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Saved,
    InDanger,
}

impl Verdict {
    pub fn is_saved(&self) -> bool {
        matches!(self, Verdict::Saved)
    }

    /// Label used in console reports
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Saved => "SAVED",
            Verdict::InDanger => "IN DANGER",
        }
    }
}

/// Verdict for one Human together with the state it was judged on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanVerdict {
    pub human: usize,
    pub verdict: Verdict,
    pub state: HumanSnapshot,
}

/// Outcome of a complete run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalReport {
    /// Seed that reproduces this run
    pub seed: u64,
    pub rounds: u32,
    pub humans: usize,
    pub angels: usize,
    pub demons: usize,
    pub verdicts: Vec<HumanVerdict>,
}

impl FinalReport {
    /// Number of Humans judged saved
    pub fn saved_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.verdict.is_saved()).count()
    }

    pub fn in_danger_count(&self) -> usize {
        self.verdicts.len() - self.saved_count()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
