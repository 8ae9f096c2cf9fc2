// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    ///
    /// The deck order depends only on the given generator, a seeded generator
    /// always produces the same deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the top of the deck, returns `None` if the deck is
    /// empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck, the last card is the top of the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are generated in lexicographic order of the card positions in
    /// the deck.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; 7];
        for (i, p) in pos.iter_mut().enumerate().take(k) {
            *p = i;
        }

        let mut hand = [self.cards[0]; 7];
        loop {
            for (h, &p) in hand.iter_mut().zip(&pos[..k]) {
                *h = self.cards[p];
            }

            f(&hand[..k]);

            // Find the rightmost position that can still move right.
            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                break;
            };

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    /// A deck with all the cards sorted by suit and rank.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
