// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em round dealing and showdown.
use log::debug;
use rand::prelude::*;

use showdown_eval::{Card, Deck, evaluate_seven};

use crate::{GameError, Player};

/// Round config.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of players.
    pub players: usize,
    /// The seed for shuffling the deck, a random seed is used if `None`.
    pub seed: Option<u64>,
}

impl Config {
    /// Creates the random generator for shuffling decks.
    ///
    /// With a seed the generator produces the same sequence of decks on every
    /// run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandState {
    /// Waiting for cards to be dealt.
    WaitForDeal,
    /// Cards have been dealt.
    Dealt,
    /// Players hands have been evaluated.
    Showdown,
}

/// A Texas Hold'em round.
#[derive(Debug)]
pub struct Round {
    players: Vec<Player>,
    deck: Deck,
    board: Vec<Card>,
    hand_state: HandState,
}

impl Round {
    /// Minimum number of players.
    pub const MIN_PLAYERS: usize = 2;
    /// Maximum number of players.
    pub const MAX_PLAYERS: usize = 6;

    /// Number of cards in the flop.
    const FLOP_CARDS: usize = 3;

    /// Creates a round with players named `P1`, `P2`, ...
    pub fn new(config: &Config) -> Result<Self, GameError> {
        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&config.players) {
            return Err(GameError::InvalidPlayers(config.players));
        }

        let players = (1..=config.players)
            .map(|n| Player::new(format!("P{n}")))
            .collect();

        Ok(Self {
            players,
            deck: Deck::default(),
            board: Vec::with_capacity(5),
            hand_state: HandState::WaitForDeal,
        })
    }

    /// The round players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The cards left in the deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Shuffles a new deck with the given generator and deals the cards.
    ///
    /// Each player gets one card at a time until all players have two cards,
    /// then one card is burned before dealing the flop, the turn, and the
    /// river.
    pub fn shuffle_and_deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.deck = Deck::new_and_shuffled(rng);
        self.board.clear();
        self.players.iter_mut().for_each(Player::reset);
        self.hand_state = HandState::WaitForDeal;

        for _ in 0..2 {
            for player in self.players.iter_mut() {
                let card = self.deck.deal().ok_or(GameError::DeckExhausted)?;
                player.hole_cards.push(card);
            }
        }

        for street in [Self::FLOP_CARDS, 1, 1] {
            // Burn one card.
            self.deck.deal().ok_or(GameError::DeckExhausted)?;

            for _ in 0..street {
                let card = self.deck.deal().ok_or(GameError::DeckExhausted)?;
                self.board.push(card);
            }
        }

        self.hand_state = HandState::Dealt;

        debug!(
            "Dealt {} players, {} cards left in the deck",
            self.players.len(),
            self.deck.count()
        );

        Ok(())
    }

    /// Evaluates each player best hand with the board cards.
    pub fn evaluate_players(&mut self) -> Result<(), GameError> {
        if self.hand_state == HandState::WaitForDeal {
            return Err(GameError::NotDealt);
        }

        for player in self.players.iter_mut() {
            let cards = player
                .hole_cards
                .iter()
                .chain(&self.board)
                .copied()
                .collect::<Vec<_>>();
            let cards: &[Card; 7] = cards
                .as_slice()
                .try_into()
                .map_err(|_| GameError::NotDealt)?;

            let hand = evaluate_seven(cards);
            debug!("Player {} has {hand}", player.name);
            player.best_hand = Some(hand);
        }

        self.hand_state = HandState::Showdown;
        Ok(())
    }

    /// Returns the players with the best hand, more than one player is a
    /// split pot.
    pub fn winners(&self) -> Result<Vec<&Player>, GameError> {
        if self.hand_state != HandState::Showdown {
            return Err(GameError::NotEvaluated);
        }

        let best = self
            .players
            .iter()
            .filter_map(|p| p.best_hand.map(|h| h.score()))
            .max()
            .ok_or(GameError::NotEvaluated)?;

        Ok(self
            .players
            .iter()
            .filter(|p| p.best_hand.is_some_and(|h| h.score() == best))
            .collect())
    }

    /// Plays a round: shuffles, deals, evaluates, and returns the winners.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<&Player>, GameError> {
        self.shuffle_and_deal(rng)?;
        self.evaluate_players()?;
        self.winners()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use showdown_eval::HandRank;

    fn config(players: usize, seed: u64) -> Config {
        Config {
            players,
            seed: Some(seed),
        }
    }

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect()
    }

    // A round with the given hole cards and board ready for evaluation.
    fn dealt_round(holes: &[&str], board: &str) -> Round {
        let mut round = Round::new(&config(holes.len(), 0)).unwrap();
        for (player, hole) in round.players.iter_mut().zip(holes) {
            player.hole_cards = cards(hole);
        }

        round.board = cards(board);
        round.hand_state = HandState::Dealt;
        round
    }

    fn names(players: &[&Player]) -> Vec<String> {
        players.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn players_range() {
        assert_eq!(
            Round::new(&config(1, 0)).unwrap_err(),
            GameError::InvalidPlayers(1)
        );
        assert_eq!(
            Round::new(&config(7, 0)).unwrap_err(),
            GameError::InvalidPlayers(7)
        );

        for n in 2..=6 {
            let round = Round::new(&config(n, 0)).unwrap();
            assert_eq!(round.players().len(), n);
            assert_eq!(round.players()[0].name, "P1");
            assert_eq!(round.players()[n - 1].name, format!("P{n}"));
        }
    }

    #[test]
    fn deal_cards() {
        let config = config(4, 1);
        let mut round = Round::new(&config).unwrap();
        round.shuffle_and_deal(&mut config.rng()).unwrap();

        // 2 cards for each player, 5 board cards, and 3 burned cards.
        assert_eq!(round.deck().count(), Deck::SIZE - 4 * 2 - 5 - 3);
        assert_eq!(round.board().len(), 5);

        let mut seen = HashSet::default();
        for player in round.players() {
            assert_eq!(player.hole_cards.len(), 2);
            assert!(player.best_hand.is_none());
            seen.extend(player.hole_cards.iter().copied());
        }

        seen.extend(round.board().iter().copied());
        assert_eq!(seen.len(), 4 * 2 + 5);
        assert!(round.deck().cards().iter().all(|c| !seen.contains(c)));
    }

    #[test]
    fn deal_order() {
        let config = config(3, 7);
        let mut round = Round::new(&config).unwrap();
        round.shuffle_and_deal(&mut config.rng()).unwrap();

        // Same deck, cards are dealt from the end.
        let deck = Deck::new_and_shuffled(&mut config.rng());
        let nth = |t: usize| deck.cards()[Deck::SIZE - 1 - t];

        for (idx, player) in round.players().iter().enumerate() {
            assert_eq!(player.hole_cards, [nth(idx), nth(3 + idx)]);
        }

        // Burn at 6, flop 7..10, burn at 10, turn at 11, burn at 12, river 13.
        assert_eq!(round.board(), [nth(7), nth(8), nth(9), nth(11), nth(13)]);
    }

    #[test]
    fn deal_resets_previous_round() {
        let config = config(2, 3);
        let mut rng = config.rng();
        let mut round = Round::new(&config).unwrap();

        round.play(&mut rng).unwrap();
        round.shuffle_and_deal(&mut rng).unwrap();

        assert_eq!(round.board().len(), 5);
        for player in round.players() {
            assert_eq!(player.hole_cards.len(), 2);
            assert!(player.best_hand.is_none());
        }

        assert_eq!(round.winners().unwrap_err(), GameError::NotEvaluated);
    }

    #[test]
    fn seeded_round_is_deterministic() {
        let config = config(3, 42);

        let mut r1 = Round::new(&config).unwrap();
        let mut r2 = Round::new(&config).unwrap();
        let (mut rng1, mut rng2) = (config.rng(), config.rng());

        for _ in 0..20 {
            let w1 = names(&r1.play(&mut rng1).unwrap());
            let w2 = names(&r2.play(&mut rng2).unwrap());
            assert_eq!(w1, w2);
            assert!(!w1.is_empty());
            assert_eq!(r1.board(), r2.board());
        }
    }

    #[test]
    fn config_rng() {
        let seeded = config(2, 9);
        assert_eq!(seeded.rng().random::<u64>(), seeded.rng().random::<u64>());

        let unseeded = Config {
            players: 2,
            seed: None,
        };
        let d1 = Deck::new_and_shuffled(&mut unseeded.rng());
        let d2 = Deck::new_and_shuffled(&mut unseeded.rng());
        assert_eq!(d1.count(), Deck::SIZE);
        assert_ne!(d1.cards(), d2.cards());
    }

    #[test]
    fn evaluate_before_deal() {
        let mut round = Round::new(&config(2, 0)).unwrap();
        assert_eq!(round.evaluate_players(), Err(GameError::NotDealt));
        assert_eq!(round.winners().unwrap_err(), GameError::NotEvaluated);
    }

    #[test]
    fn single_winner() {
        let mut round = dealt_round(&["AS AH", "3C 4D", "QC QD"], "2C 7D 9H JS KC");
        assert_eq!(round.winners().unwrap_err(), GameError::NotEvaluated);

        round.evaluate_players().unwrap();
        let winners = round.winners().unwrap();
        assert_eq!(names(&winners), ["P1"]);

        let hand = winners[0].best_hand.unwrap();
        assert_eq!(hand.rank(), HandRank::OnePair);
        assert_eq!(hand.category(), "One Pair");

        let p2 = round.players()[1].best_hand.unwrap();
        assert_eq!(p2.rank(), HandRank::HighCard);
    }

    #[test]
    fn split_pot() {
        // The board plays for everyone.
        let mut round = dealt_round(&["2C 3D", "4H 5C", "2D 3H"], "TS JS QS KS AS");
        round.evaluate_players().unwrap();

        let winners = round.winners().unwrap();
        assert_eq!(names(&winners), ["P1", "P2", "P3"]);
        assert!(
            winners
                .iter()
                .all(|p| p.best_hand.unwrap().rank() == HandRank::StraightFlush)
        );
    }

    #[test]
    fn split_pot_between_some_players() {
        // Same straight with different suits, P2 has a lower straight.
        let mut round = dealt_round(&["9C TD", "5C 6D", "9H TS"], "6S 7H 8C 2D 2H");
        round.evaluate_players().unwrap();

        let winners = round.winners().unwrap();
        assert_eq!(names(&winners), ["P1", "P3"]);
        assert_eq!(winners[0].best_hand.unwrap().rank(), HandRank::Straight);
    }
}
