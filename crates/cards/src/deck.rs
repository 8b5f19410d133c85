// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Multi-deck cards pool.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A pool of cards made of one or more standard decks.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a standard deck.
    pub const SIZE: usize = 52;

    /// Creates an unshuffled pool with `num_decks` standard decks.
    pub fn new(num_decks: usize) -> Self {
        let mut cards = Vec::with_capacity(num_decks * Self::SIZE);
        for _ in 0..num_decks {
            cards.extend(Suit::suits().flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s))));
        }

        Self { cards }
    }

    /// Creates a new shuffled pool with `num_decks` standard decks.
    pub fn new_and_shuffled<R: Rng>(num_decks: usize, rng: &mut R) -> Self {
        let mut deck = Self::new(num_decks);
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the pool.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the pool, returns `None` if the pool is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `n` cards, returns `None` and leaves the pool untouched if there
    /// are less than `n` cards left.
    pub fn deal_hand(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }

        let start = self.cards.len() - n;
        let mut hand = self.cards.split_off(start);
        // Same order as dealing one card at a time.
        hand.reverse();
        Some(hand)
    }

    /// Returns a card to the pool.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Checks if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the pool.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes all copies of a card from the pool.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Algorithm T from TAOCP 4a, indices in lexicographic order.
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can still move right.
            let Some(j) = (0..k).rev().find(|&j| idx[j] < n - k + j) else {
                break;
            };

            idx[j] += 1;
            hand[j] = self.cards[idx[j]];
            for i in (j + 1)..k {
                idx[i] = idx[i - 1] + 1;
                hand[i] = self.cards[idx[i]];
            }
        }
    }
}

impl Default for Deck {
    /// A single unshuffled deck.
    fn default() -> Self {
        Self::new(1)
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
