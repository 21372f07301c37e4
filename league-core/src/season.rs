//! Season-level player registry.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{LeagueError, Result};
use crate::fixture::Fixture;
use crate::player::{Player, PlayerId};

/// Owns every player for the duration of a season.
///
/// Fixtures never hold player structs, only ids into this registry, and the
/// registry is the single place cumulative stats are mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Season {
    players: Vec<Player>,
}

impl Season {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player, assigning the next sequential id (starting at 1).
    pub fn register_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = PlayerId(self.players.len() as u32 + 1);
        self.players.push(Player::new(name, id));
        id
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Every registered player, in registration order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Build a fixture between two rosters of registered players.
    ///
    /// Every id must be registered this season, and no player may appear in
    /// more than one roster slot.
    pub fn fixture(&self, roster_a: &[PlayerId], roster_b: &[PlayerId]) -> Result<Fixture> {
        let mut seen = BTreeSet::new();
        for &id in roster_a.iter().chain(roster_b) {
            if self.player(id).is_none() {
                return Err(LeagueError::UnknownPlayer { id });
            }
            if !seen.insert(id) {
                return Err(LeagueError::RosterOverlap { id });
            }
        }
        Ok(Fixture::new(roster_a.to_vec(), roster_b.to_vec()))
    }

    /// Fold one fixture tally into a player's cumulative stats.
    pub(crate) fn apply_result(&mut self, id: PlayerId, goals: u32) -> Result<()> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(LeagueError::UnknownPlayer { id })?;
        player.apply_match_result(goals);
        Ok(())
    }
}
