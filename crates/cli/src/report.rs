// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds table output.
use std::io::{self, Write};

use holeodds_eval::Histogram;

/// Writes the odds table for the given hole cards histogram.
///
/// Each line reports a category frequency and "1 in X" odds followed by the
/// same values for the category and all the stronger ones.
pub fn write<W: Write>(w: &mut W, hole: &str, hist: &Histogram) -> io::Result<()> {
    writeln!(w, "Hole: {hole}\n")?;

    for odds in hist.odds() {
        writeln!(
            w,
            "{:<16} \t {:.4}% \t 1 in {:.1} \t {:.2}% cumulative \t 1 in {:.1}",
            odds.rank,
            100.0 * odds.frequency(),
            odds.one_in(),
            100.0 * odds.cumulative(),
            odds.cumulative_one_in(),
        )?;
    }

    Ok(())
}
