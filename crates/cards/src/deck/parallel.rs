// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand sampling.
use rand::{SeedableRng, rngs::SmallRng};
use std::{panic, thread};

use super::{Card, Deck};

/// Returns the number of samples for a task so that the total number of
/// samples is split evenly with the remainder going to the first tasks.
fn task_samples(samples: usize, num_tasks: usize, task_id: usize) -> usize {
    samples / num_tasks + usize::from(task_id < samples % num_tasks)
}

impl Deck {
    /// Samples `samples` k-cards hands from `num_tasks` parallel tasks.
    ///
    /// Each task creates its own accumulator calling `init` with the task id
    /// (0..num_tasks) and then calls `f` with the accumulator and each sampled
    /// hand, the accumulators are returned in task order once all tasks are
    /// done. If a `seed` is given each task uses a random generator seeded from
    /// it and its id so that runs are reproducible.
    ///
    /// Panics if num_tasks is zero.
    pub fn par_sample<T, I, F>(
        &self,
        num_tasks: usize,
        samples: usize,
        seed: Option<u64>,
        k: usize,
        init: I,
        f: F,
    ) -> Vec<T>
    where
        T: Send,
        I: Fn(usize) -> T + Sync,
        F: Fn(&mut T, &[Card]) + Sync,
    {
        assert!(num_tasks > 0);

        thread::scope(|s| {
            let handles = (0..num_tasks)
                .map(|task_id| {
                    let (init, f) = (&init, &f);
                    s.spawn(move || {
                        let mut rng = match seed {
                            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                            None => SmallRng::from_os_rng(),
                        };

                        let mut acc = init(task_id);
                        let samples = task_samples(samples, num_tasks, task_id);
                        self.sample_with_rng(&mut rng, samples, k, |hand| f(&mut acc, hand));
                        acc
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_task_samples() {
        assert_eq!(task_samples(200_000, 4, 0), 50_000);
        assert_eq!(task_samples(200_000, 4, 3), 50_000);

        let split = (0..3).map(|t| task_samples(10, 3, t)).collect::<Vec<_>>();
        assert_eq!(split, vec![4, 3, 3]);

        let split = (0..8).map(|t| task_samples(5, 8, t)).collect::<Vec<_>>();
        assert_eq!(split.iter().sum::<usize>(), 5);
        assert_eq!(split[7], 0);
    }

    #[test]
    fn par_sample_counts() {
        let deck = Deck::default();
        let counts = deck.par_sample(3, 1_000, None, 5, |_| 0usize, |n: &mut usize, hand: &[Card]| {
            assert_eq!(hand.len(), 5);
            *n += 1;
        });

        assert_eq!(counts, vec![334, 333, 333]);
    }

    #[test]
    fn par_sample_task_ids() {
        let ids = Deck::default().par_sample(4, 4, None, 2, |task_id| task_id, |_, _| {});
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn par_sample_distinct_cards() {
        let hole = Card::parse_many("As Ad").unwrap();
        let deck = Deck::without(&hole);

        let res = deck.par_sample(4, 4_000, Some(1), 5, |_| true, |ok: &mut bool, hand: &[Card]| {
            let unique = hand.iter().collect::<HashSet<_>>();
            *ok &= unique.len() == 5 && hand.iter().all(|c| !hole.contains(c));
        });

        assert!(res.into_iter().all(|ok| ok));
    }

    #[test]
    fn par_sample_seeded() {
        let deck = Deck::default();
        let run = || {
            deck.par_sample(2, 100, Some(42), 5, |_| Vec::new(), |hands: &mut Vec<Vec<Card>>, hand: &[Card]| {
                hands.push(hand.to_vec());
            })
        };

        assert_eq!(run(), run());
    }
}
