// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holeodds Poker hand classifier and odds simulation.
//!
//! The [HandRank::eval] classifier returns the strongest category a 5, 6, or
//! 7 cards hand supports, from high card to royal flush:
//!
//! ```
//! # use holeodds_eval::*;
//! let hand = Card::parse_many("As Ks Qs Js 10s 2h 3d").unwrap();
//! assert_eq!(HandRank::eval(&hand), HandRank::RoyalFlush);
//! ```
//!
//! A [Simulation] samples random boards for two hole cards and returns a
//! [Histogram] of the categories that can be used to compute the odds:
//!
//! ```
//! # use holeodds_eval::*;
//! let hole = Card::parse_many("Ah Kh").unwrap();
//! let sim = Simulation::new([hole[0], hole[1]]);
//! let hist = sim.run(1_000);
//! assert_eq!(hist.total(), 1_000);
//!
//! let odds = hist.odds();
//! assert_eq!(odds[0].cumulative(), 1.0);
//! ```
//!
//! The **`parallel`** feature enables [Simulation::par_run] to split the
//! rounds between parallel tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::HandRank;

pub mod odds;
pub use odds::{Histogram, Odds, Simulation};

// Reexport cards types.
pub use holeodds_cards::{Card, Deck, ParseCardError, Rank, Suit};
