// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and scores.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::Rank;

/// Category names indexed by category - 1.
const HAND_NAMES: [&str; 9] = [
    "High Card",
    "One Pair",
    "Two Pair",
    "Three of a Kind",
    "Straight",
    "Flush",
    "Full House",
    "Four of a Kind",
    "Straight Flush",
];

/// Returns the name for a category in the range 1..=9.
pub fn category_name(category: u8) -> Option<&'static str> {
    category
        .checked_sub(1)
        .and_then(|idx| HAND_NAMES.get(idx as usize))
        .copied()
}

/// The hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// All categories from the weakest to the strongest.
    pub const ALL: [HandRank; 9] = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
    ];

    /// The category number in the range 1..=9.
    pub fn category(&self) -> u8 {
        *self as u8
    }

    /// Returns the hand rank for a category number.
    pub fn from_category(category: u8) -> Option<HandRank> {
        category
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize))
            .copied()
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        HAND_NAMES[*self as usize - 1]
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A five cards hand score.
///
/// Scores compare by hand rank first and then by tiebreaker ranks, element by
/// element. All the scores of the same hand rank have the same number of
/// tiebreakers:
///
/// | Hand rank       | Tiebreakers                       |
/// |-----------------|-----------------------------------|
/// | Straight Flush  | straight high                     |
/// | Four of a Kind  | quads rank, kicker                |
/// | Full House      | trips rank, pair rank             |
/// | Flush           | all five ranks                    |
/// | Straight        | straight high                     |
/// | Three of a Kind | trips rank, two kickers           |
/// | Two Pair        | high pair, low pair, kicker       |
/// | One Pair        | pair rank, three kickers          |
/// | High Card       | all five ranks                    |
///
/// Kickers are in descending order and the wheel straight `A2345` has a
/// five high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score {
    rank: HandRank,
    // Unused slots are Deuce so that they compare equal.
    tiebreakers: [Rank; 5],
    len: u8,
}

impl Score {
    /// Creates a score from a hand rank and its tiebreakers.
    ///
    /// Panics if there are more than five tiebreakers.
    pub fn new(rank: HandRank, tiebreakers: &[Rank]) -> Self {
        assert!(tiebreakers.len() <= 5, "at most 5 tiebreakers");

        let mut ranks = [Rank::Deuce; 5];
        ranks[..tiebreakers.len()].copy_from_slice(tiebreakers);
        Self {
            rank,
            tiebreakers: ranks,
            len: tiebreakers.len() as u8,
        }
    }

    /// The score hand rank.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The score category number in the range 1..=9.
    pub fn category(&self) -> u8 {
        self.rank.category()
    }

    /// The tiebreakers ranks in priority order.
    pub fn tiebreakers(&self) -> &[Rank] {
        &self.tiebreakers[..self.len as usize]
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.rank)?;
        for (idx, rank) in self.tiebreakers().iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{rank}")?;
        }
        write!(f, "]")
    }
}
