// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(ah.to_string(), "A♥");
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! Shuffling always takes the random generator as a parameter, use a seeded
//! generator to get the same deck on every run:
//!
//! ```
//! # use showdown_cards::Deck;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
//! let mut d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
//! assert_eq!(d1.deal(), d2.deal());
//! ```
//!
//! To iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit};

mod deck;
pub use deck::Deck;
