// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deals hands from a multi-deck pool and prints their category.
use ahash::AHashMap;
use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::{prelude::*, rngs::StdRng};
use std::io::{self, Write};

use pokerhand_eval::{Card, Deck, HandCategory, classify, high_card};

/// The dealer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of standard decks in the pool.
    pub decks: usize,
    /// Number of cards in each hand.
    pub hand_size: usize,
    /// The shuffle seed, a random seed is used if not set.
    pub seed: Option<u64>,
    /// Do not print the hands cards.
    pub quiet: bool,
}

/// Number of hands for each category.
pub type Tally = AHashMap<HandCategory, usize>;

/// Deals hands until the pool runs out of cards and prints each hand to stdout.
pub fn run(config: &Config) -> Result<Tally> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let tally = deal_hands(config, &mut rng, &mut io::stdout().lock())?;

    for category in HandCategory::categories().rev() {
        let count = tally.get(&category).copied().unwrap_or_default();
        info!("{category:<16} {count}");
    }

    Ok(tally)
}

/// Deals and prints hands with the given rng.
pub fn deal_hands<R: Rng, W: Write>(config: &Config, rng: &mut R, out: &mut W) -> Result<Tally> {
    if config.hand_size == 0 {
        bail!("The hand size must be at least one card");
    }

    let mut deck = Deck::new_and_shuffled(config.decks, rng);
    debug!(
        "Dealing {} cards hands from {} decks ({} cards)",
        config.hand_size,
        config.decks,
        deck.count()
    );

    let mut tally = Tally::default();
    while let Some(hand) = deck.deal_hand(config.hand_size) {
        let category = print_hand(&hand, config.quiet, out)?;
        *tally.entry(category).or_default() += 1;
    }

    debug!("{} cards left in the pool", deck.count());
    Ok(tally)
}

/// Prints a hand cards, its category and its high card.
pub fn print_hand<W: Write>(hand: &[Card], quiet: bool, out: &mut W) -> Result<HandCategory> {
    let category = classify(hand)?;
    let high = high_card(hand).map_or("No Card", |r| r.name());

    if !quiet {
        for card in hand {
            writeln!(out, "{}", card.name())?;
        }
    }

    writeln!(out, "This hand is a: {category}")?;
    writeln!(out, "High card: {high}")?;
    writeln!(out)?;

    Ok(category)
}

/// Parses a list of cards separated by spaces or commas, i.e. "AS KS QS JS TS".
pub fn parse_hand(s: &str) -> Result<Vec<Card>> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|c| !c.is_empty())
        .map(|c| c.parse::<Card>().with_context(|| format!("Cannot parse hand '{s}'")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerhand_eval::{Rank, Suit};

    fn config(decks: usize, hand_size: usize) -> Config {
        Config {
            decks,
            hand_size,
            seed: None,
            quiet: false,
        }
    }

    fn card_lines(out: &str) -> usize {
        out.lines()
            .filter(|l| !l.is_empty())
            .filter(|l| !l.starts_with("This hand is a: ") && !l.starts_with("High card: "))
            .count()
    }

    fn deal(config: &Config, seed: u64) -> (Tally, String) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut out = Vec::new();
        let tally = deal_hands(config, &mut rng, &mut out).unwrap();
        (tally, String::from_utf8(out).unwrap())
    }

    #[test]
    fn deals_until_pool_is_short() {
        let config = config(10, 15);
        let (tally, out) = deal(&config, 1);

        // 520 cards make 34 hands with 10 cards left.
        assert_eq!(tally.values().sum::<usize>(), 34);
        assert_eq!(out.matches("This hand is a: ").count(), 34);
        assert_eq!(out.matches("High card: ").count(), 34);
        assert_eq!(card_lines(&out), 34 * 15);
    }

    #[test]
    fn seeded_deals_repeat() {
        let config = config(2, 7);
        assert_eq!(deal(&config, 99), deal(&config, 99));
    }

    #[test]
    fn quiet_hides_cards() {
        let config = Config {
            quiet: true,
            ..config(1, 5)
        };

        let (tally, out) = deal(&config, 3);
        assert_eq!(tally.values().sum::<usize>(), 10);
        assert_eq!(card_lines(&out), 0);
    }

    #[test]
    fn empty_hand_size() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(deal_hands(&config(1, 0), &mut rng, &mut io::sink()).is_err());
    }

    #[test]
    fn print_given_hand() {
        let hand = parse_hand("TS, JS QS,KS  AS").unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(hand[0], Card::new(Rank::Ten, Suit::Spades));

        let mut out = Vec::new();
        let category = print_hand(&hand, false, &mut out).unwrap();
        assert_eq!(category, HandCategory::RoyalFlush);

        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Ten of Spades");
        assert_eq!(lines[4], "Ace of Spades");
        assert_eq!(lines[5], "This hand is a: Royal Flush");
        assert_eq!(lines[6], "High card: Ace");
    }

    #[test]
    fn bad_hands() {
        assert!(parse_hand("AS KX").is_err());
        assert!(print_hand(&[], false, &mut io::sink()).is_err());
    }
}
