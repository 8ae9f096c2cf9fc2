// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand evaluation.
use showdown_cards::{Card, Rank};

use super::{HandRank, Score};

/// The ace-low straight, the only place where the ace ranks below the deuce.
const WHEEL: [Rank; 5] = [Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five, Rank::Ace];

/// Evaluates a five cards hand.
///
/// The hand must not contain duplicate cards, duplicates are not checked.
pub fn evaluate_five(cards: &[Card; 5]) -> Score {
    let mut counts = [0u8; 13];
    for card in cards {
        counts[card.rank() as usize] += 1;
    }

    // Ranks grouped by count, larger groups first and higher ranks first
    // within groups of the same size.
    let mut groups = [(0u8, Rank::Deuce); 5];
    let mut num_groups = 0;
    for rank in Rank::ranks().rev() {
        let count = counts[rank as usize];
        if count > 0 {
            groups[num_groups] = (count, rank);
            num_groups += 1;
        }
    }

    let groups = &mut groups[..num_groups];
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    // The ranks in group order are the tiebreakers for all the categories but
    // straights.
    let mut shape = [0u8; 5];
    let mut ranks = [Rank::Deuce; 5];
    for (idx, (count, rank)) in groups.iter().enumerate() {
        shape[idx] = *count;
        ranks[idx] = *rank;
    }

    let ranks = &ranks[..num_groups];

    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = straight_high(&counts);

    match (straight, flush) {
        (Some(high), true) => Score::new(HandRank::StraightFlush, &[high]),
        _ if shape[0] == 4 => Score::new(HandRank::FourOfAKind, ranks),
        _ if shape[0] == 3 && shape[1] == 2 => Score::new(HandRank::FullHouse, ranks),
        (_, true) => Score::new(HandRank::Flush, ranks),
        (Some(high), false) => Score::new(HandRank::Straight, &[high]),
        _ if shape[0] == 3 => Score::new(HandRank::ThreeOfAKind, ranks),
        _ if shape[0] == 2 && shape[1] == 2 => Score::new(HandRank::TwoPair, ranks),
        _ if shape[0] == 2 => Score::new(HandRank::OnePair, ranks),
        _ => Score::new(HandRank::HighCard, ranks),
    }
}

/// Returns the straight high card given the hand rank counts.
fn straight_high(counts: &[u8; 13]) -> Option<Rank> {
    let mut unique = [Rank::Deuce; 5];
    let mut len = 0;
    for rank in Rank::ranks().filter(|r| counts[*r as usize] > 0) {
        unique[len] = rank;
        len += 1;
    }

    let unique = &unique[..len];

    // There are len - 4 windows of five ranks, none if len < 5.
    unique
        .windows(5)
        .find(|w| w.windows(2).all(|p| p[1].value() == p[0].value() + 1))
        .map(|w| w[4])
        .or_else(|| (unique == WHEEL).then_some(Rank::Five))
}
