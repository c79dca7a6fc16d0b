// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! The classifier computes the best category a 5, 6, or 7 cards hand supports
//! using only ranks and suits counts, it doesn't extract the five best cards
//! and doesn't compare kickers, useful for computing odds and other stats.
use std::fmt;

use crate::{Card, Suit};

/// A hand category, from the weakest to the strongest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
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
    /// Ace high straight flush.
    RoyalFlush,
}

/// Categories names indexed by the category value.
const NAMES: [&str; HandRank::COUNT] = [
    "High card",
    "Pair",
    "Two pair",
    "Three of a kind",
    "Straight",
    "Flush",
    "Full house",
    "Four of a kind",
    "Straight flush",
    "Royal flush",
];

/// Rank bits for a five cards run starting from the ten.
const ROYAL_START: u16 = 1 << 10;

impl HandRank {
    /// The number of hand categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category index in `0..HandRank::COUNT`.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        NAMES[self.index()]
    }

    /// Evaluates a hand and returns the strongest category it supports.
    ///
    /// Panics if the number of cards is not 5 <= n <= 7, the cards are
    /// expected to be distinct.
    pub fn eval(cards: &[Card]) -> HandRank {
        assert!((5..=7).contains(&cards.len()), "5 <= cards <= 7");

        let mut rank_counts = [0u8; 15];
        let mut suit_counts = [0u8; Suit::COUNT];
        let mut suit_ranks = [0u16; Suit::COUNT];
        let mut ranks = 0u16;

        for c in cards {
            let bit = 1 << c.rank().value();
            rank_counts[c.rank().value() as usize] += 1;
            suit_counts[c.suit().index()] += 1;
            suit_ranks[c.suit().index()] |= bit;
            ranks |= bit;
        }

        // Four of a kind and a straight flush cannot be in the same 7 cards
        // hand so we can return as soon as we find four cards.
        let mut threes = 0;
        let mut pairs = 0;
        for &count in &rank_counts {
            match count {
                4 => return HandRank::FourOfAKind,
                3 => threes += 1,
                2 => pairs += 1,
                _ => {}
            }
        }

        let flush_suit = suit_counts.iter().position(|&count| count >= 5);
        let straights = straight_starts(ranks);

        if let Some(suit) = flush_suit {
            let flush_straights = straights & straight_starts(suit_ranks[suit]);
            if flush_straights & ROYAL_START != 0 {
                return HandRank::RoyalFlush;
            } else if flush_straights != 0 {
                return HandRank::StraightFlush;
            }
        }

        if threes > 0 && (pairs > 0 || threes > 1) {
            HandRank::FullHouse
        } else if flush_suit.is_some() {
            HandRank::Flush
        } else if straights != 0 {
            HandRank::Straight
        } else if threes > 0 {
            HandRank::ThreeOfAKind
        } else if pairs >= 2 {
            HandRank::TwoPair
        } else if pairs == 1 {
            HandRank::OnePair
        } else {
            HandRank::HighCard
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returns a mask with bit `s` set for each five cards run starting at rank `s`.
///
/// The `ranks` mask has bit `r` set for each rank value `r` in a hand, an ace
/// also counts as rank 1 for the five high straight.
#[inline]
fn straight_starts(ranks: u16) -> u16 {
    let ace = 1 << 14;
    let r = if ranks & ace != 0 { ranks | 0b10 } else { ranks };
    r & (r >> 1) & (r >> 2) & (r >> 3) & (r >> 4)
}
