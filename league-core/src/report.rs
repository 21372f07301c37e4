//! Season-end reporting over cumulative player statistics.

use crate::player::Player;

/// Goal threshold used by the season highlight report.
pub const DEFAULT_GOAL_THRESHOLD: u32 = 5;

/// Players whose cumulative goals strictly exceed `threshold`, in input
/// order.
pub fn high_scorers(players: &[Player], threshold: u32) -> Vec<&Player> {
    players.iter().filter(|p| p.goals() > threshold).collect()
}

/// Render the highlight report for the given threshold.
pub fn high_scorers_summary(players: &[Player], threshold: u32) -> String {
    let scorers = high_scorers(players, threshold);
    if scorers.is_empty() {
        return format!("No players with more than {} goals.", threshold);
    }

    let mut out = format!("Players with more than {} goals:", threshold);
    for player in scorers {
        out.push_str(&format!("\n- {}: {} goals", player.name(), player.goals()));
    }
    out
}
