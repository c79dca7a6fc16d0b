// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holeodds playing cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use holeodds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "10d".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to sample 10 random 5-cards boards from a deck without the
//! player hole cards:
//!
//! ```
//! # use holeodds_cards::{Card, Deck};
//! let hole = Card::parse_many("Ah Kd").unwrap();
//! let deck = Deck::without(&hole);
//! assert_eq!(deck.count(), 50);
//!
//! let mut counter = 0;
//! deck.sample(10, 5, |board| {
//!     assert_eq!(board.len(), 5);
//!     assert!(board.iter().all(|c| !hole.contains(c)));
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling with a given number of
//! tasks, each task folds its samples into a private accumulator created by the
//! `init` closure and the accumulators are returned to the caller:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_sample() {
//! # use holeodds_cards::{Card, Deck};
//! // Count 1000 boards sampled by 4 tasks.
//! let counts = Deck::default().par_sample(4, 1000, None, 5, |_task_id| 0usize, |n: &mut usize, board: &[Card]| {
//!     assert_eq!(board.len(), 5);
//!     *n += 1;
//! });
//! assert_eq!(counts.len(), 4);
//! assert_eq!(counts.iter().sum::<usize>(), 1000);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod parse;
pub use parse::ParseCardError;
