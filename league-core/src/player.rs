//! Player identity and cumulative season statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a player within a season.
///
/// All fixture and season bookkeeping is keyed by id, never by display
/// name, so two players sharing a name never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered player and the statistics accumulated across the season.
///
/// The cumulative counters only move through
/// [`apply_match_result`](Player::apply_match_result), which fixture
/// finalization drives exactly once per played match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    goals: u32,
    matches_played: u32,
}

impl Player {
    /// Create a player with zeroed season stats.
    pub fn new(name: impl Into<String>, id: PlayerId) -> Self {
        Self {
            id,
            name: name.into(),
            goals: 0,
            matches_played: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Goals scored across every finalized fixture.
    pub fn goals(&self) -> u32 {
        self.goals
    }

    /// Fixtures the player was rostered in that have been finalized.
    pub fn matches_played(&self) -> u32 {
        self.matches_played
    }

    /// Fold one fixture's tally into the cumulative counters.
    ///
    /// A zero-goal match still counts as a match played.
    pub(crate) fn apply_match_result(&mut self, goals_in_match: u32) {
        self.goals += goals_in_match;
        self.matches_played += 1;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (#{}) - {} goals in {} matches",
            self.name, self.id, self.goals, self.matches_played
        )
    }
}
