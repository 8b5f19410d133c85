// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flush, straight flush and royal flush detection.
use crate::{Card, Rank, Suit, counts::HandCounts, straight::HAND_LEN};

/// Checks if there are at least five cards of the same suit.
pub fn has_flush(counts: &HandCounts) -> bool {
    Suit::suits().any(|s| counts.suit(s) >= HAND_LEN)
}

/// Runs of consecutive cards of the same suit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuitedRuns {
    /// Ace, King, Queen, Jack and Ten of the same suit.
    pub royal_flush: bool,
    /// Five consecutive cards of the same suit.
    pub straight_flush: bool,
}

impl SuitedRuns {
    /// Walks the cards sorted by suit and rank from the top looking for five
    /// consecutive cards of the same suit.
    ///
    /// Duplicate cards from a multi-deck pool are skipped. A King to Ten run
    /// with the Ace of the same suit in the hand is a royal flush and ends the
    /// walk.
    pub fn new(sorted: &[Card], counts: &HandCounts) -> Self {
        let mut runs = Self::default();
        let mut prev: Option<Card> = None;
        let mut run = 0;

        for &card in sorted.iter().rev() {
            match prev {
                Some(p) if p == card => continue,
                Some(p) if p.suit() == card.suit() && p.rank().below() == Some(card.rank()) => {
                    run += 1;
                }
                _ => run = 1,
            }

            prev = Some(card);

            if run == HAND_LEN - 1 && card.rank() == Rank::Ten && counts.has_ace(card.suit()) {
                runs.royal_flush = true;
                break;
            }

            if run == HAND_LEN {
                runs.straight_flush = true;
            }
        }

        runs
    }
}
