//! A single match between two fixed rosters.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LeagueError, Result};
use crate::player::PlayerId;
use crate::season::Season;

/// Outcome of a fixture from the team perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    TeamA,
    TeamB,
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::TeamA => write!(f, "Team A"),
            Winner::TeamB => write!(f, "Team B"),
            Winner::Draw => write!(f, "Draw"),
        }
    }
}

/// A scorer and their goal count within one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopScorer {
    pub player: PlayerId,
    pub goals: u32,
}

/// One match between roster A and roster B.
///
/// The fixture holds only player ids and its own per-match tallies;
/// cumulative stats live in the [`Season`] and are touched once, at
/// [`finalize`](Fixture::finalize). Team totals always equal the sum of the
/// corresponding roster's tallies.
#[derive(Debug, Clone)]
pub struct Fixture {
    roster_a: Vec<PlayerId>,
    roster_b: Vec<PlayerId>,
    /// Per-player goals in this fixture only, seeded at zero for every
    /// rostered player. Keyed by id so iteration is id-ordered.
    tallies: BTreeMap<PlayerId, u32>,
    goals_a: u32,
    goals_b: u32,
    finalized: bool,
}

impl Fixture {
    /// Built via [`Season::fixture`], which validates the rosters.
    pub(crate) fn new(roster_a: Vec<PlayerId>, roster_b: Vec<PlayerId>) -> Self {
        let tallies = roster_a.iter().chain(&roster_b).map(|&id| (id, 0)).collect();
        Self {
            roster_a,
            roster_b,
            tallies,
            goals_a: 0,
            goals_b: 0,
            finalized: false,
        }
    }

    pub fn goals_a(&self) -> u32 {
        self.goals_a
    }

    pub fn goals_b(&self) -> u32 {
        self.goals_b
    }

    /// This fixture's tally for one player; zero for rostered players who
    /// have not scored.
    pub fn tally(&self, id: PlayerId) -> u32 {
        self.tallies.get(&id).copied().unwrap_or(0)
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Credit `count` goals to a rostered player.
    ///
    /// Fails with [`LeagueError::InvalidPlayer`] for a player on neither
    /// roster, leaving every counter untouched. A zero `count` is accepted
    /// and changes nothing; repeat calls for the same player accumulate.
    pub fn register_goal(&mut self, player: PlayerId, count: u32) -> Result<()> {
        if self.finalized {
            return Err(LeagueError::AlreadyFinalized);
        }
        if self.roster_a.contains(&player) {
            self.goals_a += count;
        } else if self.roster_b.contains(&player) {
            self.goals_b += count;
        } else {
            return Err(LeagueError::InvalidPlayer { id: player });
        }
        *self.tallies.entry(player).or_insert(0) += count;
        log::debug!(
            "player #{player} credited with {count} goals, score now {}-{}",
            self.goals_a,
            self.goals_b
        );
        Ok(())
    }

    /// Winner by strict comparison of team totals; equal totals, including
    /// 0-0, are a draw.
    pub fn winner(&self) -> Winner {
        match self.goals_a.cmp(&self.goals_b) {
            Ordering::Greater => Winner::TeamA,
            Ordering::Less => Winner::TeamB,
            Ordering::Equal => Winner::Draw,
        }
    }

    /// The player with the strictly highest tally in this fixture.
    ///
    /// Ties go to the lowest player id; a goalless fixture has no top
    /// scorer.
    pub fn top_scorer(&self) -> Option<TopScorer> {
        let mut best: Option<TopScorer> = None;
        for (&player, &goals) in &self.tallies {
            if goals == 0 {
                continue;
            }
            // Iteration is in ascending id order, so a strictly-greater
            // test keeps the lowest id on ties.
            if best.map_or(true, |b| goals > b.goals) {
                best = Some(TopScorer { player, goals });
            }
        }
        best
    }

    /// Human-readable summary: score line, winner line, and one line per
    /// player who scored, in ascending id order.
    pub fn details(&self, season: &Season) -> String {
        let mut out = format!("Result: Team A {} - {} Team B\n", self.goals_a, self.goals_b);
        out.push_str(&format!("Winner: {}\n", self.winner()));
        out.push_str("Goals by player:\n");
        for (&player, &goals) in &self.tallies {
            if goals == 0 {
                continue;
            }
            let name = season.player(player).map(|p| p.name()).unwrap_or("unknown");
            out.push_str(&format!("- {}: {} goals\n", name, goals));
        }
        out
    }

    /// Fold every rostered player's tally into the season, roster A first.
    ///
    /// Single-use: a second call fails with
    /// [`LeagueError::AlreadyFinalized`] without touching any stats.
    pub fn finalize(&mut self, season: &mut Season) -> Result<()> {
        if self.finalized {
            return Err(LeagueError::AlreadyFinalized);
        }
        for &id in self.roster_a.iter().chain(&self.roster_b) {
            season.apply_result(id, self.tally(id))?;
        }
        self.finalized = true;
        log::debug!("fixture finalized at {}-{}", self.goals_a, self.goals_b);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season_of(names: &[&str]) -> (Season, Vec<PlayerId>) {
        let mut season = Season::new();
        let ids = names.iter().map(|name| season.register_player(*name)).collect();
        (season, ids)
    }

    fn roster_sum(fixture: &Fixture, roster: &[PlayerId]) -> u32 {
        roster.iter().map(|&id| fixture.tally(id)).sum()
    }

    #[test]
    fn team_totals_track_roster_tallies() {
        let (season, ids) = season_of(&["Ana", "Bruno", "Carla", "Dario"]);
        let (a, b) = ids.split_at(2);
        let mut fixture = season.fixture(a, b).unwrap();

        fixture.register_goal(a[0], 2).unwrap();
        fixture.register_goal(b[1], 1).unwrap();
        fixture.register_goal(a[1], 3).unwrap();
        fixture.register_goal(a[0], 1).unwrap();

        assert_eq!(fixture.goals_a(), roster_sum(&fixture, a));
        assert_eq!(fixture.goals_b(), roster_sum(&fixture, b));
        assert_eq!(fixture.goals_a(), 6);
        assert_eq!(fixture.goals_b(), 1);
    }

    #[test]
    fn equal_totals_are_a_draw() {
        let (season, ids) = season_of(&["Ana", "Bruno"]);
        let mut fixture = season.fixture(&ids[..1], &ids[1..]).unwrap();
        assert_eq!(fixture.winner(), Winner::Draw);

        fixture.register_goal(ids[0], 2).unwrap();
        fixture.register_goal(ids[1], 2).unwrap();
        assert_eq!(fixture.winner(), Winner::Draw);
    }

    #[test]
    fn strictly_greater_total_wins() {
        let (season, ids) = season_of(&["Ana", "Bruno"]);
        let mut fixture = season.fixture(&ids[..1], &ids[1..]).unwrap();

        fixture.register_goal(ids[1], 1).unwrap();
        assert_eq!(fixture.winner(), Winner::TeamB);

        fixture.register_goal(ids[0], 2).unwrap();
        assert_eq!(fixture.winner(), Winner::TeamA);
    }

    #[test]
    fn outsider_goals_are_rejected_and_change_nothing() {
        let (mut season, ids) = season_of(&["Ana", "Bruno", "Carla"]);
        let outsider = season.register_player("Dario");
        let mut fixture = season.fixture(&ids[..2], &ids[2..]).unwrap();
        fixture.register_goal(ids[0], 1).unwrap();

        let err = fixture.register_goal(outsider, 3).unwrap_err();

        assert_eq!(err, LeagueError::InvalidPlayer { id: outsider });
        assert_eq!(fixture.goals_a(), 1);
        assert_eq!(fixture.goals_b(), 0);
        assert_eq!(fixture.tally(outsider), 0);
    }

    #[test]
    fn repeat_scoring_accumulates() {
        let (season, ids) = season_of(&["Ana", "Bruno"]);
        let mut fixture = season.fixture(&ids[..1], &ids[1..]).unwrap();

        fixture.register_goal(ids[0], 1).unwrap();
        fixture.register_goal(ids[0], 2).unwrap();

        assert_eq!(fixture.tally(ids[0]), 3);
        assert_eq!(fixture.goals_a(), 3);
    }

    #[test]
    fn goalless_fixture_has_no_top_scorer() {
        let (season, ids) = season_of(&["Ana", "Bruno"]);
        let fixture = season.fixture(&ids[..1], &ids[1..]).unwrap();
        assert_eq!(fixture.top_scorer(), None);
    }

    #[test]
    fn top_scorer_tie_goes_to_the_lowest_id() {
        let (season, ids) = season_of(&["Ana", "Bruno", "Carla", "Dario"]);
        let mut fixture = season.fixture(&ids[..2], &ids[2..]).unwrap();

        fixture.register_goal(ids[3], 2).unwrap();
        fixture.register_goal(ids[0], 2).unwrap();

        assert_eq!(
            fixture.top_scorer(),
            Some(TopScorer {
                player: ids[0],
                goals: 2
            })
        );
    }

    #[test]
    fn details_list_only_players_who_scored() {
        let (season, ids) = season_of(&["Messi", "Ronaldo", "Neymar"]);
        let (messi, ronaldo, neymar) = (ids[0], ids[1], ids[2]);
        let mut fixture = season.fixture(&[messi, ronaldo], &[neymar]).unwrap();

        fixture.register_goal(messi, 2).unwrap();
        fixture.register_goal(neymar, 1).unwrap();
        fixture.register_goal(messi, 1).unwrap();

        assert_eq!(fixture.goals_a(), 3);
        assert_eq!(fixture.goals_b(), 1);
        assert_eq!(fixture.winner(), Winner::TeamA);
        assert_eq!(
            fixture.top_scorer(),
            Some(TopScorer {
                player: messi,
                goals: 3
            })
        );

        let details = fixture.details(&season);
        assert!(details.starts_with("Result: Team A 3 - 1 Team B\n"));
        assert!(details.contains("Winner: Team A\n"));
        assert!(details.contains("- Messi: 3 goals\n"));
        assert!(details.contains("- Neymar: 1 goals\n"));
        assert!(!details.contains("Ronaldo"));
    }

    #[test]
    fn finalize_counts_a_match_for_every_rostered_player() {
        let (mut season, ids) = season_of(&["Ana", "Bruno"]);
        let mut fixture = season.fixture(&ids[..1], &ids[1..]).unwrap();
        fixture.register_goal(ids[0], 3).unwrap();

        fixture.finalize(&mut season).unwrap();

        let scorer = season.player(ids[0]).unwrap();
        let blank = season.player(ids[1]).unwrap();
        assert_eq!(scorer.goals(), 3);
        assert_eq!(scorer.matches_played(), 1);
        assert_eq!(blank.goals(), 0);
        assert_eq!(blank.matches_played(), 1);
    }

    #[test]
    fn finalize_is_single_use() {
        let (mut season, ids) = season_of(&["Ana", "Bruno"]);
        let mut fixture = season.fixture(&ids[..1], &ids[1..]).unwrap();
        fixture.register_goal(ids[0], 3).unwrap();

        fixture.finalize(&mut season).unwrap();
        let err = fixture.finalize(&mut season).unwrap_err();

        assert_eq!(err, LeagueError::AlreadyFinalized);
        let scorer = season.player(ids[0]).unwrap();
        assert_eq!(scorer.goals(), 3);
        assert_eq!(scorer.matches_played(), 1);
    }

    #[test]
    fn goals_cannot_be_registered_after_finalize() {
        let (mut season, ids) = season_of(&["Ana", "Bruno"]);
        let mut fixture = season.fixture(&ids[..1], &ids[1..]).unwrap();
        fixture.finalize(&mut season).unwrap();

        let err = fixture.register_goal(ids[0], 1).unwrap_err();
        assert_eq!(err, LeagueError::AlreadyFinalized);
        assert_eq!(fixture.goals_a(), 0);
    }

    #[test]
    fn empty_rosters_play_out_as_a_goalless_draw() {
        let (mut season, _) = season_of(&[]);
        let mut fixture = season.fixture(&[], &[]).unwrap();

        assert_eq!(fixture.winner(), Winner::Draw);
        assert_eq!(fixture.top_scorer(), None);
        fixture.finalize(&mut season).unwrap();
    }
}
