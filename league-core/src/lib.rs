//! Bookkeeping for a small friendly league: players, fixtures, and the
//! season-long statistics they accumulate.
//!
//! The [`Season`] owns every [`Player`]; fixtures reference players by id
//! and fold their per-match tallies back into the season exactly once, at
//! finalization.

pub mod error;
pub mod fixture;
pub mod player;
pub mod report;
pub mod season;
pub mod sim;

pub use error::{LeagueError, Result};
pub use fixture::{Fixture, TopScorer, Winner};
pub use player::{Player, PlayerId};
pub use season::Season;
pub use sim::{play_round, GoalEvent, RoundReport, GOAL_DRAW_BOUND};
