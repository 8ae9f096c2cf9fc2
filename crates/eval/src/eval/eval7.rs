// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards selection for 6 and 7 cards hands.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::Card;

use super::{HandRank, Score, evaluate_five};

/// Creates the table of the 21 five cards subsets of a seven cards hand.
///
/// Each subset skips two positions `i < j`, subsets are listed in
/// lexicographic order of the positions they keep.
const fn make_subsets() -> [[usize; 5]; 21] {
    let mut t = [[0usize; 5]; 21];
    let mut n = 0;

    let mut i = 6;
    while i > 0 {
        i -= 1;

        let mut j = 7;
        while j > i + 1 {
            j -= 1;

            let mut k = 0;
            let mut pos = 0;
            while pos < 7 {
                if pos != i && pos != j {
                    t[n][k] = pos;
                    k += 1;
                }
                pos += 1;
            }

            n += 1;
        }
    }

    t
}

const SUBSETS: [[usize; 5]; 21] = make_subsets();

/// The result of a hand evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluatedHand {
    score: Score,
    best_five: [Card; 5],
}

impl EvaluatedHand {
    fn new(score: Score, mut best_five: [Card; 5]) -> Self {
        Card::sort_desc(&mut best_five);
        Self { score, best_five }
    }

    /// The hand score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.score.rank()
    }

    /// The hand category name.
    pub fn category(&self) -> &'static str {
        self.score.rank().name()
    }

    /// The five cards that make the score, sorted by descending rank.
    pub fn best_five(&self) -> &[Card; 5] {
        &self.best_five
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category())?;
        for card in &self.best_five {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

/// Evaluates a seven cards hand.
///
/// Scores all the 21 five cards subsets and returns the best one, if more
/// than one subset has the best score the first one found is returned. The
/// hand must not contain duplicate cards, duplicates are not checked.
pub fn evaluate_seven(cards: &[Card; 7]) -> EvaluatedHand {
    let first = SUBSETS[0].map(|pos| cards[pos]);
    let rest = SUBSETS[1..].iter().map(|s| s.map(|pos| cards[pos]));
    select_best(first, rest)
}

/// Evaluates a hand with 5, 6, or 7 cards.
///
/// Returns `None` if the number of cards is out of range.
pub fn evaluate_best(cards: &[Card]) -> Option<EvaluatedHand> {
    match cards.len() {
        5 => {
            let five: [Card; 5] = cards.try_into().ok()?;
            Some(EvaluatedHand::new(evaluate_five(&five), five))
        }
        6 => {
            let mut subsets = (0..6).rev().map(|skip| {
                let mut five = [cards[0]; 5];
                let kept = cards
                    .iter()
                    .enumerate()
                    .filter(|(pos, _)| *pos != skip)
                    .map(|(_, c)| *c);
                five.iter_mut().zip(kept).for_each(|(dst, c)| *dst = c);
                five
            });

            let first = subsets.next()?;
            Some(select_best(first, subsets))
        }
        7 => cards.try_into().ok().map(evaluate_seven),
        _ => None,
    }
}

/// Returns the subset with the greatest score, the first one wins ties.
fn select_best<I>(first: [Card; 5], rest: I) -> EvaluatedHand
where
    I: Iterator<Item = [Card; 5]>,
{
    let mut best_score = evaluate_five(&first);
    let mut best_five = first;

    for five in rest {
        let score = evaluate_five(&five);
        if score > best_score {
            best_score = score;
            best_five = five;
        }
    }

    EvaluatedHand::new(best_score, best_five)
}
