// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification.
//!
//! A hand is analyzed once into [HandSignals], the output of each detector,
//! and the signals are mapped to a [HandCategory] by checking the categories
//! from the strongest to the weakest, the first match wins.
use crate::{
    Card, HandCategory, Rank,
    counts::HandCounts,
    flush::{SuitedRuns, has_flush},
    ordering::sort_cards,
    straight::RankScan,
};

/// The detectors output for a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandSignals {
    /// The high rank of the highest straight.
    pub straight: Option<Rank>,
    /// There are five or more cards of the same suit.
    pub flush: bool,
    /// The largest number of cards sharing a rank.
    pub largest_rank_count: usize,
    /// The second largest number of cards sharing a rank.
    pub second_largest_rank_count: usize,
    /// There are five consecutive cards of the same suit.
    pub straight_flush: bool,
    /// There are Ace to Ten of the same suit.
    pub royal_flush: bool,
}

impl HandSignals {
    /// Runs all detectors over the given cards.
    pub fn analyze(cards: &[Card]) -> Self {
        Self::with_counts(cards, &HandCounts::new(cards))
    }

    /// Runs all detectors over the given cards and their precomputed counts.
    pub fn with_counts(cards: &[Card], counts: &HandCounts) -> Self {
        let scan = RankScan::new(counts);
        let flush = has_flush(counts);

        // A straight flush needs both a straight and a flush.
        let runs = if scan.straight.is_some() && flush {
            SuitedRuns::new(&sort_cards(cards), counts)
        } else {
            SuitedRuns::default()
        };

        Self {
            straight: scan.straight,
            flush,
            largest_rank_count: scan.largest_rank_count,
            second_largest_rank_count: scan.second_largest_rank_count,
            straight_flush: runs.straight_flush,
            royal_flush: runs.royal_flush,
        }
    }

    /// Maps the signals to the strongest matching category.
    pub fn category(&self) -> HandCategory {
        let (largest, second) = (self.largest_rank_count, self.second_largest_rank_count);

        if self.royal_flush {
            HandCategory::RoyalFlush
        } else if self.straight_flush {
            HandCategory::StraightFlush
        } else if largest >= 4 {
            HandCategory::FourOfAKind
        } else if largest == 3 && second == 2 {
            HandCategory::FullHouse
        } else if self.flush {
            HandCategory::Flush
        } else if self.straight.is_some() {
            HandCategory::Straight
        } else if largest == 3 {
            HandCategory::ThreeOfAKind
        } else if largest == 2 && second == 2 {
            HandCategory::TwoPair
        } else if largest == 2 {
            HandCategory::Pair
        } else {
            HandCategory::HighCard
        }
    }
}
