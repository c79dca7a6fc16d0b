// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories odds simulation.
//!
//! A [Simulation] samples random boards for a player hole cards, classifies
//! each 7 cards hand, and counts the categories in a [Histogram] that can be
//! turned into per category [Odds].
use log::debug;
use rand::prelude::*;

use crate::{Card, Deck, HandRank};

/// Counts of hand categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; HandRank::COUNT],
}

impl Histogram {
    /// Adds one hand to the category counter.
    #[inline]
    pub fn record(&mut self, rank: HandRank) {
        self.counts[rank.index()] += 1;
    }

    /// The number of hands for a category.
    pub fn count(&self, rank: HandRank) -> u64 {
        self.counts[rank.index()]
    }

    /// The total number of hands.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Adds the counts of another histogram to this one.
    pub fn merge(&mut self, other: &Histogram) {
        self.counts
            .iter_mut()
            .zip(other.counts)
            .for_each(|(l, r)| *l += r);
    }

    /// Returns the odds for each category from the weakest to the strongest.
    pub fn odds(&self) -> Vec<Odds> {
        let total = self.total();
        let mut remaining = total;

        HandRank::ranks()
            .map(|rank| {
                let count = self.count(rank);
                let odds = Odds {
                    rank,
                    count,
                    cumulative_count: remaining,
                    total,
                };

                remaining -= count;
                odds
            })
            .collect()
    }
}

/// The odds for a hand category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Odds {
    /// The hand category.
    pub rank: HandRank,
    /// The number of hands in this category.
    pub count: u64,
    /// The number of hands in this and all the stronger categories.
    pub cumulative_count: u64,
    /// The total number of hands.
    pub total: u64,
}

impl Odds {
    /// The fraction of hands in this category.
    pub fn frequency(&self) -> f64 {
        ratio(self.count, self.total)
    }

    /// The fraction of hands in this or a stronger category.
    pub fn cumulative(&self) -> f64 {
        ratio(self.cumulative_count, self.total)
    }

    /// The X in "1 in X" hands for this category, 0 if there are no hands.
    pub fn one_in(&self) -> f64 {
        ratio(self.total, self.count)
    }

    /// The X in "1 in X" hands for this or a stronger category.
    pub fn cumulative_one_in(&self) -> f64 {
        ratio(self.total, self.cumulative_count)
    }
}

fn ratio(n: u64, d: u64) -> f64 {
    if d == 0 { 0.0 } else { n as f64 / d as f64 }
}

/// Simulates boards for a player hole cards.
#[derive(Debug, Clone)]
pub struct Simulation {
    hole: [Card; 2],
    deck: Deck,
}

impl Simulation {
    /// The default number of simulated boards.
    pub const DEFAULT_ROUNDS: usize = 200_000;

    /// The number of community cards.
    pub const BOARD_SIZE: usize = 5;

    /// Creates a simulation for the given hole cards.
    ///
    /// Panics if the two cards are the same card.
    pub fn new(hole: [Card; 2]) -> Self {
        assert_ne!(hole[0], hole[1]);

        // Remove the hole cards from the deck so that we don't sample them.
        let deck = Deck::without(&hole);
        Self { hole, deck }
    }

    /// The player hole cards.
    pub fn hole(&self) -> [Card; 2] {
        self.hole
    }

    /// The deck boards are sampled from.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Runs `rounds` boards and returns the categories histogram.
    pub fn run(&self, rounds: usize) -> Histogram {
        self.run_with_rng(&mut rand::rng(), rounds)
    }

    /// Runs `rounds` boards using the given random generator.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R, rounds: usize) -> Histogram {
        debug!("Simulating {rounds} boards for {} {}", self.hole[0], self.hole[1]);

        let mut hist = Histogram::default();
        let mut hand = self.hand();

        self.deck
            .sample_with_rng(rng, rounds, Self::BOARD_SIZE, |board| {
                hand[2..].copy_from_slice(board);
                hist.record(HandRank::eval(&hand));
            });

        hist
    }

    /// Runs `rounds` boards split between `num_tasks` parallel tasks.
    ///
    /// Each task counts categories in its own histogram, the histograms are
    /// merged when all tasks are done. Given a seed the result is the same for
    /// the same number of tasks.
    #[cfg(feature = "parallel")]
    pub fn par_run(&self, num_tasks: usize, rounds: usize, seed: Option<u64>) -> Histogram {
        let init = |task_id: usize| {
            debug!("Starting simulation task {task_id}");
            (Histogram::default(), self.hand())
        };

        let tasks = self.deck.par_sample(
            num_tasks,
            rounds,
            seed,
            Self::BOARD_SIZE,
            init,
            |acc: &mut (Histogram, [Card; 7]), board: &[Card]| {
                let (hist, hand) = acc;
                hand[2..].copy_from_slice(board);
                hist.record(HandRank::eval(&hand[..]));
            },
        );

        debug!("Merging {} task histograms", tasks.len());

        tasks
            .into_iter()
            .fold(Histogram::default(), |mut acc, (hist, _)| {
                acc.merge(&hist);
                acc
            })
    }

    /// A 7 cards hand with the hole cards in the first two positions.
    fn hand(&self) -> [Card; 7] {
        let mut hand = [self.hole[0]; 7];
        hand[..2].copy_from_slice(&self.hole);
        hand
    }
}
