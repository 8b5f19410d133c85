// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straight detection and rank multiplicities.
use crate::{Rank, counts::HandCounts};

/// The number of cards in a Poker hand.
pub const HAND_LEN: usize = 5;

/// The result of a scan over the ranks of a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankScan {
    /// The high rank of the highest straight.
    pub straight: Option<Rank>,
    /// The largest number of cards sharing a rank.
    pub largest_rank_count: usize,
    /// The second largest number of cards sharing a rank.
    pub second_largest_rank_count: usize,
}

impl RankScan {
    /// Scans ranks from the top looking for a run of five present ranks, and
    /// tracks the two largest rank counts in the same pass.
    ///
    /// An Ace is both above the King and below the Deuce, a run starting at
    /// an Ace is Ace high.
    pub fn new(counts: &HandCounts) -> Self {
        let mut scan = Self::default();
        let mut run = 0;
        let mut run_high = None;

        for (pos, rank) in Rank::straight_order().enumerate() {
            let count = counts.rank(rank);

            // The Ace above the King is counted below the Deuce.
            if pos > 0 {
                scan.track_count(count);
            }

            if scan.straight.is_some() {
                continue;
            }

            if count == 0 {
                run = 0;
                continue;
            }

            if run == 0 {
                run_high = Some(rank);
            }

            run += 1;
            if run == HAND_LEN {
                scan.straight = run_high;
            }
        }

        scan
    }

    fn track_count(&mut self, count: usize) {
        if count >= self.largest_rank_count {
            self.second_largest_rank_count = self.largest_rank_count;
            self.largest_rank_count = count;
        } else if count > self.second_largest_rank_count {
            self.second_largest_rank_count = count;
        }
    }
}
