// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
//
// High card        23294460    17.4119%
// Pair             58627800    43.8225%
// Two pair         31433400    23.4955%
// Three of a kind  6461620      4.8299%
// Straight         6180020      4.6194%
// Flush            4047644      3.0255%
// Full house       3473184      2.5961%
// Four of a kind   224848       0.1681%
// Straight flush   37260        0.0279%
// Royal flush      4324         0.0032%
// ```

use std::time::Instant;

use holeodds_eval::*;

fn main() {
    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut hist = Histogram::default();

    Deck::default().for_each(7, |hand| {
        hist.record(HandRank::eval(hand));
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = hist.total();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for odds in hist.odds() {
        println!(
            "{:<16} {:<12} {:>7.4}%",
            odds.rank,
            odds.count,
            100.0 * odds.frequency()
        );
    }
}
