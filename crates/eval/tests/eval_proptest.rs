// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Property tests for hands evaluation.
use proptest::prelude::*;
use proptest::sample::subsequence;
use ahash::HashSet;

use showdown_eval::*;

// Distinct cards in random order.
fn hand_strategy(k: usize) -> impl Strategy<Value = Vec<Card>> {
    let deck = Deck::default().into_iter().collect::<Vec<_>>();
    subsequence(deck, k).prop_shuffle()
}

fn seven_strategy() -> impl Strategy<Value = [Card; 7]> {
    hand_strategy(7).prop_map(|cards| cards.try_into().unwrap())
}

fn five_strategy() -> impl Strategy<Value = [Card; 5]> {
    hand_strategy(5).prop_map(|cards| cards.try_into().unwrap())
}

// A permutation of the four suits.
fn suits_strategy() -> impl Strategy<Value = Vec<Suit>> {
    Just(Suit::ALL.to_vec()).prop_shuffle()
}

proptest! {
    #[test]
    fn five_cards_category_in_range(cards in five_strategy()) {
        let score = evaluate_five(&cards);
        prop_assert!((1..=9).contains(&score.category()));
        prop_assert_eq!(category_name(score.category()), Some(score.rank().name()));
        prop_assert_eq!(evaluate_five(&cards), score);
    }

    #[test]
    fn five_cards_order_independent(cards in five_strategy()) {
        let mut rev = cards;
        rev.reverse();
        prop_assert_eq!(evaluate_five(&rev), evaluate_five(&cards));
    }

    #[test]
    fn best_five_is_subset(cards in seven_strategy()) {
        let hand = evaluate_seven(&cards);
        let best = hand.best_five();

        let unique = best.iter().collect::<HashSet<_>>();
        prop_assert_eq!(unique.len(), 5);
        prop_assert!(best.iter().all(|c| cards.contains(c)));
        prop_assert_eq!(evaluate_five(best), hand.score());

        // Sorted by descending rank.
        prop_assert!(best.windows(2).all(|w| w[0].rank() >= w[1].rank()));
    }

    #[test]
    fn best_five_beats_all_subsets(cards in seven_strategy()) {
        let best = evaluate_seven(&cards).score();

        for i in 0..7 {
            for j in (i + 1)..7 {
                let five = cards
                    .iter()
                    .enumerate()
                    .filter(|(pos, _)| *pos != i && *pos != j)
                    .map(|(_, c)| *c)
                    .collect::<Vec<_>>();
                let five: [Card; 5] = five.try_into().unwrap();
                prop_assert!(evaluate_five(&five) <= best);
            }
        }
    }

    #[test]
    fn seven_cards_order_independent(cards in seven_strategy()) {
        let mut rev = cards;
        rev.reverse();
        prop_assert_eq!(evaluate_seven(&rev).score(), evaluate_seven(&cards).score());
        prop_assert_eq!(evaluate_best(&cards), Some(evaluate_seven(&cards)));
    }

    #[test]
    fn suits_relabel_ties(cards in seven_strategy(), suits in suits_strategy()) {
        // Renaming suits doesn't change a hand value.
        let relabeled = cards.map(|c| Card::new(c.rank(), suits[c.suit() as usize]));
        prop_assert_eq!(
            evaluate_seven(&relabeled).score(),
            evaluate_seven(&cards).score()
        );
    }
}
