// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand evaluator.
//!
//! Evaluates five cards hands into a [Score] and finds the best five cards
//! out of a seven cards Texas Hold'em hand (two hole cards and five board
//! cards).
//!
//! Scores are totally ordered, a greater score is a better hand and equal
//! scores are a split pot:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = |s: &str| -> Vec<Card> {
//!     s.split_whitespace().map(|c| c.parse().unwrap()).collect()
//! };
//!
//! let quads = cards("AS AH AD AC KS");
//! let full = cards("KS KH KD QS QH");
//! let quads = evaluate_five(&quads.try_into().unwrap());
//! let full = evaluate_five(&full.try_into().unwrap());
//! assert!(quads > full);
//!
//! let seven = cards("AS AH AD KC KS 2C 3D");
//! let hand = evaluate_seven(&seven.try_into().unwrap());
//! assert_eq!(hand.category(), "Full House");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    EvaluatedHand, HandRank, Score, category_name, evaluate_best, evaluate_five, evaluate_seven,
};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
