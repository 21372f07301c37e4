//! Season simulation driver: six players, two rosters, three rounds.
//!
//! Prints the season report to stdout; diagnostics go to stderr behind
//! `RUST_LOG`.

use anyhow::Result;
use league_core::report::{high_scorers_summary, DEFAULT_GOAL_THRESHOLD};
use league_core::sim::{play_round, RngCore};
use league_core::{PlayerId, Season};

const ROUNDS: u32 = 3;

const PLAYER_NAMES: [&str; 6] = [
    "Messi",
    "Ronaldo",
    "Neymar",
    "Mbappé",
    "Lewandowski",
    "Benzema",
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp(None)
        .init();

    let mut rng = rand::thread_rng();
    run_season(&mut rng)
}

fn run_season(rng: &mut dyn RngCore) -> Result<()> {
    let mut season = Season::new();
    let ids: Vec<PlayerId> = PLAYER_NAMES
        .iter()
        .map(|name| season.register_player(*name))
        .collect();
    let (roster_a, roster_b) = ids.split_at(3);

    for round in 1..=ROUNDS {
        println!("\n----- Match {round} -----");

        let report = play_round(&mut season, roster_a, roster_b, round, rng)?;
        for event in &report.events {
            println!("{} scored {} goals", event.name, event.goals);
        }

        println!("\nMatch details:");
        println!("{}", report.details);

        match &report.top_scorer {
            Some(top) => println!(
                "Top scorer of this match: {} with {} goals",
                top.name, top.goals
            ),
            None => println!("No goals were scored in this match"),
        }
    }

    println!("\n----- Final season statistics -----");
    for player in season.players() {
        println!("{player}");
    }

    println!("\n----- Top performers -----");
    println!(
        "{}",
        high_scorers_summary(season.players(), DEFAULT_GOAL_THRESHOLD)
    );

    Ok(())
}
