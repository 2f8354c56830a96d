//! Console Report
//!
//! Text lines printed while a run progresses. Every function returns the
//! line instead of printing it so the binary decides where it goes.

use battle_events::{ConflictRecord, FinalReport, HumanSnapshot, HumanVerdict, Verdict, Winner};

/// ANSI escape codes used by the report
pub mod ansi {
    pub const RESET: &str = "\u{1b}[0m";
    pub const RED: &str = "\u{1b}[31m";
    pub const GREEN: &str = "\u{1b}[32m";
    pub const YELLOW: &str = "\u{1b}[33m";
    pub const PURPLE: &str = "\u{1b}[35m";
    pub const CYAN: &str = "\u{1b}[36m";
}

const SEPARATOR: &str = "-------------------------------------------";
const ROUND_FOOTER: &str = "===================================================";

/// Wraps text in colors, or passes it through when colors are off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn banner(&self) -> String {
        self.paint(
            ansi::CYAN,
            "========== Initializing the Battle World ==========",
        )
    }

    pub fn population(&self, humans: usize, angels: usize, demons: usize) -> String {
        self.paint(
            ansi::GREEN,
            &format!(
                "Created {} Humans, {} Angels, {} Demons.",
                humans, angels, demons
            ),
        )
    }

    pub fn start(&self, rounds: u32, seed: u64) -> String {
        self.paint(
            ansi::PURPLE,
            &format!("--- Simulation begins (Rounds: {}, Seed: {}) ---", rounds, seed),
        )
    }

    pub fn round_header(&self, round: u32, rounds: u32) -> String {
        self.paint(ansi::CYAN, &format!("===== ROUND {}/{} =====", round, rounds))
    }

    pub fn round_footer(&self) -> String {
        self.paint(ansi::PURPLE, ROUND_FOOTER)
    }

    /// All lines describing one conflict, in print order
    pub fn conflict(&self, record: &ConflictRecord) -> Vec<String> {
        vec![
            self.paint(ansi::YELLOW, &human_state(record.human, "Starts", &record.before)),
            format!(
                "  -> Conflict: Angel #{} ({}) vs Demon #{} ({})",
                record.angel, record.angel_skill, record.demon, record.demon_skill
            ),
            format!(
                "  -> Scores: Angel={:.2}, Demon={:.2}",
                record.angel_score, record.demon_score
            ),
            winner_line(record.winner).to_string(),
            prayer_line(record.prayed).to_string(),
            self.paint(ansi::YELLOW, &human_state(record.human, "Ends", &record.after)),
            self.paint(ansi::PURPLE, SEPARATOR),
        ]
    }

    pub fn end(&self) -> String {
        self.paint(ansi::PURPLE, "--- End of the Battle ---")
    }

    pub fn verdict(&self, verdict: &HumanVerdict) -> String {
        let color = match verdict.verdict {
            Verdict::Saved => ansi::GREEN,
            Verdict::InDanger => ansi::RED,
        };
        format!(
            "Human {}: {} (Good={:.0}, Evil={:.0}, Faith={:.0})",
            verdict.human,
            self.paint(color, verdict.verdict.label()),
            verdict.state.good,
            verdict.state.evil,
            verdict.state.faith
        )
    }

    pub fn summary(&self, report: &FinalReport) -> String {
        format!(
            "{}{}{}{}{}",
            self.paint(ansi::PURPLE, "SUMMARY: "),
            self.paint(ansi::GREEN, &format!("{} Humans saved", report.saved_count())),
            self.paint(ansi::PURPLE, " / "),
            self.paint(ansi::RED, &format!("{} in danger", report.in_danger_count())),
            self.paint(ansi::PURPLE, &format!(" / {} total.", report.humans))
        )
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}

fn human_state(human: usize, phase: &str, state: &HumanSnapshot) -> String {
    format!(
        "[Human {}] {} (G:{:.0}, E:{:.0}, F:{:.0})",
        human, phase, state.good, state.evil, state.faith
    )
}

fn winner_line(winner: Winner) -> &'static str {
    match winner {
        Winner::Angel => "  -> The Angel wins! Good++, Evil--",
        Winner::Demon => "  -> The Demon wins! Good--, Evil++",
        Winner::Tie => "  -> Tie. No moral change.",
    }
}

fn prayer_line(prayed: bool) -> &'static str {
    if prayed {
        "  -> The Human prays successfully. Faith++"
    } else {
        "  -> The Human cannot pray. Faith--"
    }
}
