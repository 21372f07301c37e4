//! Round simulation: random goal draws folded into the season.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::player::PlayerId;
use crate::season::Season;

/// Re-export for callers supplying their own randomness.
pub use rand::RngCore;

/// Exclusive upper bound on a single player's random goal draw.
pub const GOAL_DRAW_BOUND: u32 = 5;

/// One scoring announcement within a round, with the display name resolved
/// at record time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvent {
    pub player: PlayerId,
    pub name: String,
    pub goals: u32,
}

/// Everything that happened in one simulated round, in playing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub events: Vec<GoalEvent>,
    pub details: String,
    pub top_scorer: Option<GoalEvent>,
}

/// Play one full round between the two rosters.
///
/// Draws a goal count in `0..GOAL_DRAW_BOUND` for every roster-A player and
/// then every roster-B player, registers the nonzero draws, and finalizes
/// the fixture into the season before returning the round's report.
pub fn play_round(
    season: &mut Season,
    roster_a: &[PlayerId],
    roster_b: &[PlayerId],
    round: u32,
    rng: &mut dyn RngCore,
) -> Result<RoundReport> {
    let mut fixture = season.fixture(roster_a, roster_b)?;
    let mut events = Vec::new();

    for &id in roster_a.iter().chain(roster_b) {
        let goals = rng.next_u32() % GOAL_DRAW_BOUND;
        if goals == 0 {
            continue;
        }
        fixture.register_goal(id, goals)?;
        events.push(GoalEvent {
            player: id,
            name: player_name(season, id),
            goals,
        });
    }

    let details = fixture.details(season);
    let top_scorer = fixture.top_scorer().map(|top| GoalEvent {
        player: top.player,
        name: player_name(season, top.player),
        goals: top.goals,
    });

    fixture.finalize(season)?;
    log::debug!(
        "round {round} finalized at {}-{}",
        fixture.goals_a(),
        fixture.goals_b()
    );

    Ok(RoundReport {
        round,
        events,
        details,
        top_scorer,
    })
}

fn player_name(season: &Season, id: PlayerId) -> String {
    season
        .player(id)
        .map(|p| p.name().to_string())
        .unwrap_or_default()
}
