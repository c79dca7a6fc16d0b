// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holeodds CLI, estimates the final hand category odds for two hole cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::info;
use std::{io, num::NonZeroUsize, thread, time::Instant};

use holeodds_eval::{Card, Simulation};

pub mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// The two hole cards (for example: Ah 10d).
    #[clap(required = true, num_args = 1..)]
    cards: Vec<String>,
    /// Number of parallel simulation tasks, defaults to the number of CPUs.
    #[clap(long, short, value_parser = clap::value_parser!(u8).range(1..=64))]
    tasks: Option<u8>,
    /// Seed the random generators to get reproducible results.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Only log warnings and errors.
    #[clap(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    // Parse all cards before running the simulation.
    let input = cli.cards.join(" ");
    let hole = parse_hole(&input)?;

    let tasks = cli.tasks.map(usize::from).unwrap_or_else(|| {
        thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    });

    let rounds = Simulation::DEFAULT_ROUNDS;
    info!("Simulating {rounds} boards for {} {} with {tasks} tasks", hole[0], hole[1]);

    let now = Instant::now();
    let hist = Simulation::new(hole).par_run(tasks, rounds, cli.seed);
    info!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());

    report::write(&mut io::stdout().lock(), &input, &hist)?;

    Ok(())
}

/// Parses the whitespace separated hole cards.
fn parse_hole(input: &str) -> Result<[Card; 2]> {
    let cards = Card::parse_many(input)?;

    let &[c1, c2] = cards.as_slice() else {
        bail!("Expected 2 hole cards got {}", cards.len());
    };

    if c1 == c2 {
        bail!("Duplicated hole card '{c1}'");
    }

    Ok([c1, c2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use holeodds_eval::{Rank, Suit};

    #[test]
    fn parse_hole_cards() {
        let hole = parse_hole("Ah 10d").unwrap();
        assert_eq!(hole[0], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(hole[1], Card::new(Rank::Ten, Suit::Diamonds));

        let hole = parse_hole(" qs  2C ").unwrap();
        assert_eq!(hole[0], Card::new(Rank::Queen, Suit::Spades));
        assert_eq!(hole[1], Card::new(Rank::Deuce, Suit::Clubs));
    }

    #[test]
    fn parse_hole_errors() {
        let err = parse_hole("Ah 1d").unwrap_err();
        assert_eq!(err.to_string(), "Invalid card '1d'");

        let err = parse_hole("Ah").unwrap_err();
        assert_eq!(err.to_string(), "Expected 2 hole cards got 1");

        let err = parse_hole("Ah Kd Qc").unwrap_err();
        assert_eq!(err.to_string(), "Expected 2 hole cards got 3");

        let err = parse_hole("Ah ah").unwrap_err();
        assert_eq!(err.to_string(), "Duplicated hole card 'AH'");
    }

    #[test]
    fn cli_args() {
        let cli = Cli::try_parse_from(["holeodds", "Ah", "Kd", "-t", "2", "--seed", "7"]).unwrap();
        assert_eq!(cli.cards, vec!["Ah", "Kd"]);
        assert_eq!(cli.tasks, Some(2));
        assert_eq!(cli.seed, Some(7));
        assert!(!cli.quiet);

        let cli = Cli::try_parse_from(["holeodds", "Ah Kd", "-q"]).unwrap();
        assert_eq!(cli.cards.join(" "), "Ah Kd");
        assert!(cli.quiet);

        assert!(Cli::try_parse_from(["holeodds"]).is_err());
        assert!(Cli::try_parse_from(["holeodds", "Ah", "Kd", "-t", "0"]).is_err());
    }
}
