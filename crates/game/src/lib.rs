// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Texas Hold'em rounds.
//!
//! A [Round] deals two hole cards to each player and five board cards, then
//! evaluates each player best hand and finds the winners, more than one
//! winner is a split pot:
//!
//! ```
//! # use showdown_game::*;
//! let config = Config { players: 3, seed: Some(42) };
//! let mut round = Round::new(&config).unwrap();
//! let winners = round.play(&mut config.rng()).unwrap();
//! assert!(!winners.is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

pub mod player;
pub use player::Player;

pub mod round;
pub use round::{Config, Round};

// Reexport eval types.
pub use showdown_eval::{Card, Deck, EvaluatedHand, HandRank, Rank, Score, Suit};

/// Game errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The number of players is out of range.
    #[error("invalid number of players {0}, must be between 2 and 6")]
    InvalidPlayers(usize),
    /// The deck has no more cards to deal.
    #[error("no more cards in the deck")]
    DeckExhausted,
    /// Hands evaluation requested before dealing the cards.
    #[error("cards have not been dealt")]
    NotDealt,
    /// Winners requested before evaluating the players hands.
    #[error("players hands have not been evaluated")]
    NotEvaluated,
}
