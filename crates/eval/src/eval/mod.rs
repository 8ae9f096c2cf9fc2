// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A five cards hand is classified by the shape of its rank counts (four of a
//! kind is `[4, 1]`, a full house `[3, 2]`, and so on), by a flush test and by
//! a straight test. The result is a [Score] that orders first by [HandRank]
//! and then by the tiebreaker ranks of the category.
//!
//! Seven cards hands are evaluated by scoring all the 21 five cards subsets
//! and keeping the best one, [evaluate_seven] returns an [EvaluatedHand] with
//! the score and the five cards that make it, useful for UIs to show a
//! winning hand.

mod eval5;
pub use eval5::evaluate_five;

mod eval7;
pub use eval7::{EvaluatedHand, evaluate_best, evaluate_seven};

mod score;
pub use score::{HandRank, Score, category_name};
