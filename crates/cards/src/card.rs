// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// Error returned when parsing cards from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank text is not one of `23456789TJQKA` (or `10`).
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit text is not one of `cdhs` or `♣♦♥♠`.
    #[error("invalid suit '{0}'")]
    InvalidSuit(String),
    /// The card text is empty or has no suit.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}

/// A Poker card.
///
/// A card packs its rank and suit into a single byte with the following
/// format:
///
/// ```text
///   +--------+
///   |xrrrrss|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// Two cards are equal only if both rank and suit are equal, but cards do not
/// implement [Ord] as poker compares cards by rank only, use [Card::cmp_rank]
/// to order them.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// This card unique id in the range 0..52.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.0 >> 2) as usize]
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.0 & 0x3) as usize]
    }

    /// Compares two cards by rank, ignoring suits.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// Sorts cards by descending rank for display.
    ///
    /// The sort is stable so cards of the same rank keep their relative order.
    pub fn sort_desc(cards: &mut [Card]) {
        cards.sort_by(|a, b| b.cmp_rank(a));
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card from a rank followed by a suit, e.g. `AS`, `td`, `10h`
    /// or `K♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((pos, _)) = s.char_indices().last() else {
            return Err(ParseCardError::InvalidCard(s.to_string()));
        };

        if pos == 0 {
            return Err(ParseCardError::InvalidCard(s.to_string()));
        }

        let (rank, suit) = s.split_at(pos);
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// All ranks from lowest to highest.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank value in the range 0..13.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank with the given value if the value is in 0..13.
    pub fn from_value(value: u8) -> Option<Rank> {
        Self::ALL.get(value as usize).copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
///
/// Suits have no poker value, the derived ordering only exists so that suits
/// can be used as keys in ordered collections.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// All suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s {
            "c" | "C" | "♣" => Suit::Clubs,
            "d" | "D" | "♦" => Suit::Diamonds,
            "h" | "H" | "♥" => Suit::Hearts,
            "s" | "S" | "♠" => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit(s.to_string())),
        };

        Ok(suit)
    }
}
