// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokerhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "TD".parse::<Card>().unwrap();
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(td.name(), "Ten of Diamonds");
//! ```
//!
//! and a [Deck] type, a pool of one or more standard decks for shuffling and
//! dealing cards.
//!
//! For example to deal 15 cards hands out of a 10 decks pool:
//!
//! ```
//! # use pokerhand_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(10, &mut rand::rng());
//! let mut hands = 0;
//! while let Some(hand) = deck.deal_hand(15) {
//!     assert_eq!(hand.len(), 15);
//!     hands += 1;
//! }
//! assert_eq!(hands, 34);
//! assert_eq!(deck.count(), 10);
//! ```
//!
//! or to iterate through all 5 cards hands of a single deck:
//!
//! ```no_run
//! # use pokerhand_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod cards;
pub use cards::{Card, CardError, Rank, Suit};

mod deck;
pub use deck::Deck;
