// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deterministic cards ordering.
use crate::Card;

/// Returns the cards sorted by suit and then by rank, Ace lowest.
pub fn sort_cards(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by_key(|c| (c.suit(), c.rank()));
    sorted
}
