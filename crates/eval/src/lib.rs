// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! Classifies a collection of cards of any size into the best Poker hand
//! category it contains and finds its high card. Hands may come from a
//! multi-deck pool so ranks can appear more than four times.
//!
//! To classify a hand use [classify], and [high_card()] to get its highest
//! rank:
//!
//! ```
//! # use pokerhand_eval::*;
//! let hand = ["TS", "JS", "QS", "KS", "AS"]
//!     .iter()
//!     .map(|c| c.parse())
//!     .collect::<Result<Vec<Card>, _>>()
//!     .unwrap();
//!
//! assert_eq!(classify(&hand), Ok(HandCategory::RoyalFlush));
//! assert_eq!(high_card(&hand), Some(Rank::Ace));
//! ```
//!
//! The [HandSignals] type exposes the output of each detector used to pick
//! the category:
//!
//! ```
//! # use pokerhand_eval::*;
//! let mut deck = Deck::new(2);
//! let hand = deck.deal_hand(15).unwrap();
//! let signals = HandSignals::analyze(&hand);
//! assert!(signals.largest_rank_count >= 2);
//! assert_eq!(signals.category(), classify(&hand).unwrap());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use log::trace;

use counts::HandCounts;

pub mod category;
pub use category::HandCategory;

pub mod counts;
pub mod error;
pub use error::EvalError;

pub mod flush;
pub mod hand;
pub use hand::HandSignals;

pub mod high_card;
pub mod ordering;
pub mod straight;

// Reexport cards types.
pub use pokerhand_cards::{Card, CardError, Deck, Rank, Suit};

/// Classifies the cards into the strongest Poker hand category they contain.
///
/// Returns [EvalError::EmptyHand] if there are no cards.
pub fn classify(cards: &[Card]) -> Result<HandCategory, EvalError> {
    let counts = HandCounts::new(cards);
    if counts.is_empty() {
        return Err(EvalError::EmptyHand);
    }

    let signals = HandSignals::with_counts(cards, &counts);
    let category = signals.category();
    trace!("{} cards {signals:?} => {category}", counts.len());

    Ok(category)
}

/// Returns the highest rank in the cards with the Ace above the King, `None`
/// if there are no cards.
pub fn high_card(cards: &[Card]) -> Option<Rank> {
    high_card::highest_rank(&HandCounts::new(cards))
}
