// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands classifier CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;
use std::io;

pub mod dealer;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of standard decks in the pool.
    #[clap(long, short, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=100))]
    decks: u16,
    /// Number of cards in each hand.
    #[clap(long, short = 'n', default_value_t = 15, value_parser = clap::value_parser!(u16).range(5..=52))]
    hand_size: u16,
    /// The shuffle seed.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Classify the given cards instead of dealing, i.e. "AS KS QS JS TS".
    #[clap(long)]
    hand: Option<String>,
    /// Do not print the hands cards.
    #[clap(long, short)]
    quiet: bool,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(hand) = cli.hand {
        let cards = dealer::parse_hand(&hand)?;
        dealer::print_hand(&cards, cli.quiet, &mut io::stdout().lock())?;
        return Ok(());
    }

    let config = dealer::Config {
        decks: cli.decks as usize,
        hand_size: cli.hand_size as usize,
        seed: cli.seed,
        quiet: cli.quiet,
    };

    dealer::run(&config)?;
    Ok(())
}
