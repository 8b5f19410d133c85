// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! High card resolution.
use crate::{Rank, counts::HandCounts};

/// Returns the highest rank in the hand with the Ace above the King, or
/// `None` for an empty hand.
pub fn highest_rank(counts: &HandCounts) -> Option<Rank> {
    Rank::ranks()
        .filter(|&r| counts.rank(r) > 0)
        .max_by_key(Rank::high_value)
}
