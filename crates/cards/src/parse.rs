// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards text notation parsing.
//!
//! A card is written as `<rank><suit>` where rank is a number in `2..=14`
//! (usually `2` to `10`) or one of the `t`, `j`, `q`, `k`, `a` letters and the
//! suit is one of `s`, `c`, `h`, `d`, letters are case insensitive.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when parsing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The card text doesn't follow the cards notation.
    #[error("Invalid card '{0}'")]
    InvalidCard(String),
    /// The numeric rank is outside the `2..=14` range.
    #[error("Invalid rank {0}")]
    InvalidRank(u8),
}

impl TryFrom<u8> for Rank {
    type Error = ParseCardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ranks()
            .find(|r| *r as u8 == value)
            .ok_or(ParseCardError::InvalidRank(value))
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCardError::InvalidCard(s.to_string());

        if !matches!(s.chars().count(), 2 | 3) {
            return Err(invalid());
        }

        let mut chars = s.chars();
        let suit = chars.next_back().ok_or_else(invalid)?;
        let rank = parse_rank(chars.as_str()).ok_or_else(invalid)?;
        let suit = parse_suit(suit).ok_or_else(invalid)?;

        Ok(Card::new(rank, suit))
    }
}

impl Card {
    /// Parses a whitespace separated list of cards.
    ///
    /// Fails on the first card that is not valid.
    pub fn parse_many(text: &str) -> Result<Vec<Card>, ParseCardError> {
        text.split_whitespace().map(str::parse).collect()
    }
}

fn parse_rank(token: &str) -> Option<Rank> {
    if token.len() == 1 {
        let face = match token.as_bytes()[0].to_ascii_lowercase() {
            b't' => Some(Rank::Ten),
            b'j' => Some(Rank::Jack),
            b'q' => Some(Rank::Queen),
            b'k' => Some(Rank::King),
            b'a' => Some(Rank::Ace),
            _ => None,
        };

        if face.is_some() {
            return face;
        }
    }

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    token
        .parse::<u8>()
        .ok()
        .and_then(|n| Rank::try_from(n).ok())
}

fn parse_suit(c: char) -> Option<Suit> {
    match c.to_ascii_lowercase() {
        's' => Some(Suit::Spades),
        'c' => Some(Suit::Clubs),
        'h' => Some(Suit::Hearts),
        'd' => Some(Suit::Diamonds),
        _ => None,
    }
}
