// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit frequency tables.
use crate::{Card, Rank, Suit};

/// How many cards of each rank and suit are in a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandCounts {
    ranks: [usize; Rank::COUNT],
    suits: [usize; Suit::COUNT],
    aces: [bool; Suit::COUNT],
}

impl HandCounts {
    /// Counts the ranks and suits of the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = Self::default();
        for card in cards {
            counts.ranks[rank_index(card.rank())] += 1;
            counts.suits[card.suit().index()] += 1;
            if card.rank() == Rank::Ace {
                counts.aces[card.suit().index()] = true;
            }
        }

        counts
    }

    /// Number of cards with the given rank.
    #[inline]
    pub fn rank(&self, rank: Rank) -> usize {
        self.ranks[rank_index(rank)]
    }

    /// Number of cards with the given suit.
    #[inline]
    pub fn suit(&self, suit: Suit) -> usize {
        self.suits[suit.index()]
    }

    /// Checks if there is an Ace of the given suit.
    #[inline]
    pub fn has_ace(&self, suit: Suit) -> bool {
        self.aces[suit.index()]
    }

    /// The total number of cards.
    pub fn len(&self) -> usize {
        self.ranks.iter().sum()
    }

    /// Checks if the counts are for an empty hand.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline]
fn rank_index(rank: Rank) -> usize {
    rank.value() as usize - 1
}
