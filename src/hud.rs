//! HUD text formatting

use crate::sim::MatchSummary;

/// Score counter, zero-padded to three digits
pub fn format_score(score: u32) -> String {
    format!("{:03}", score)
}

/// Countdown, zero-padded to two digits
pub fn format_timer(remaining_secs: u32) -> String {
    format!("{:02}", remaining_secs)
}

/// End-of-match modal text
pub fn format_summary(summary: &MatchSummary) -> String {
    format!("Blasted: {}  Missed: {}", summary.score, summary.missed)
}
