// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Texas Hold'em CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::io;

use showdown_game::Config;

pub mod terminal;

#[derive(Debug, Parser)]
#[clap(version, about = "Deals Texas Hold'em hands and evaluates the showdown.")]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deals hands and shows the winners (default).
    Play {
        /// Number of players, asked on the terminal if missing.
        #[clap(long, short, value_parser = clap::value_parser!(u8).range(2..=6))]
        players: Option<u8>,
        /// Seed for shuffling the decks, the same seed deals the same hands.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Number of hands to play without asking to continue.
        #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
        hands: Option<u64>,
    },
    /// Evaluates 5 to 7 cards, for example `showdown eval AS KS QS JS TS`.
    Eval {
        /// The cards to evaluate: a rank (2-9, T or 10, J, Q, K, A) followed
        /// by a suit (c, d, h, s or ♣, ♦, ♥, ♠).
        #[clap(required = true, num_args = 5..=7)]
        cards: Vec<String>,
    },
}

/// Logs at info level so an unseeded run shows its seed, `RUST_LOG` overrides.
fn logger() -> env_logger::Builder {
    let mut builder = env_logger::builder();
    builder
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis();
    builder
}

fn main() -> Result<()> {
    logger().parse_default_env().init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play {
        players: None,
        seed: None,
        hands: None,
    });

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match command {
        Command::Play {
            players,
            seed,
            hands,
        } => {
            let players = match players {
                Some(players) => players as usize,
                None => terminal::ask_players(&mut stdin, &mut stdout)?,
            };

            let seed = seed.unwrap_or_else(rand::random);
            info!("Dealing {players} players hands with seed {seed}");

            let config = Config {
                players,
                seed: Some(seed),
            };

            terminal::play(&config, hands.map(|h| h as usize), &mut stdin, &mut stdout)
        }
        Command::Eval { cards } => terminal::eval(&cards, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_shows_seed() {
        assert_eq!(logger().build().filter(), log::LevelFilter::Info);
    }

    #[test]
    fn parse_play_seed() {
        let cli = Cli::parse_from(["showdown", "play", "--seed", "5", "-p", "3"]);
        assert!(matches!(
            cli.command,
            Some(Command::Play {
                players: Some(3),
                seed: Some(5),
                hands: None
            })
        ));

        assert!(Cli::try_parse_from(["showdown", "play", "-p", "7"]).is_err());
    }
}
