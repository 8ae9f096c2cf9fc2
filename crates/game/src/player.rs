// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round player types.
use showdown_eval::{Card, EvaluatedHand};

/// A round player state.
#[derive(Debug, Clone)]
pub struct Player {
    /// This player name.
    pub name: String,
    /// This player private cards.
    pub hole_cards: Vec<Card>,
    /// This player best hand after evaluation.
    pub best_hand: Option<EvaluatedHand>,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hole_cards: Vec::with_capacity(2),
            best_hand: None,
        }
    }

    /// Clears the player cards and hand for a new deal.
    pub fn reset(&mut self) {
        self.hole_cards.clear();
        self.best_hand = None;
    }
}
