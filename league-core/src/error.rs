//! Error types shared across the league simulation.

use thiserror::Error;

use crate::player::PlayerId;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, LeagueError>;

/// Errors raised by season bookkeeping.
///
/// All variants are usage errors: the caller paired a player with the wrong
/// fixture or drove a fixture past its single-use lifecycle. None of them
/// are retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    /// A goal was registered for a player on neither roster.
    #[error("player #{id} does not belong to either team of this fixture")]
    InvalidPlayer { id: PlayerId },

    /// An id was used that the season never registered.
    #[error("player #{id} is not registered in this season")]
    UnknownPlayer { id: PlayerId },

    /// The same player was placed on more than one roster slot.
    #[error("player #{id} appears more than once across the rosters")]
    RosterOverlap { id: PlayerId },

    /// The fixture was already folded into cumulative stats.
    #[error("fixture has already been finalized")]
    AlreadyFinalized,
}
