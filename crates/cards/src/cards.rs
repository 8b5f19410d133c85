// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors converting raw values into cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A rank value outside 1..=13.
    #[error("invalid rank value {0}, expected 1..=13")]
    InvalidRank(u8),
    /// An unknown suit symbol.
    #[error("invalid suit symbol '{0}', expected one of H, D, S, C")]
    InvalidSuit(char),
    /// A card string that cannot be parsed.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}

/// A Poker card.
///
/// A card is a plain rank and suit pair, cards dealt from a multi-deck pool
/// can compare equal.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The card long name, i.e. "Ace of Hearts".
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the short notation, i.e. "AH", "TS", "10c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidCard(s.to_string());

        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars.next_back().ok_or_else(invalid)?;
        let rank = match chars.as_str().to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(invalid()),
        };

        let suit = Suit::try_from(suit).map_err(|_| invalid())?;
        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
///
/// Ranks are ordered by face value with the Ace lowest, the Ace high value
/// is given by [Rank::high_value].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace
    Ace = 1,
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks from Ace to King.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> + ExactSizeIterator {
        use Rank::*;
        [
            Ace, Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
        .into_iter()
    }

    /// Returns the positions a run of cards can occupy from top to bottom.
    ///
    /// The Ace appears both above the King and below the Deuce.
    pub fn straight_order() -> impl Iterator<Item = Rank> {
        std::iter::once(Rank::Ace).chain(Rank::ranks().rev())
    }

    /// The face value, Ace is 1 and King is 13.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The value used to compare cards, the Ace is above the King.
    pub fn high_value(&self) -> u8 {
        match self {
            Rank::Ace => 14,
            r => r.value(),
        }
    }

    /// The rank one step down a run, the Ace is below the Deuce.
    pub fn below(&self) -> Option<Rank> {
        match self {
            Rank::Ace => None,
            r => Rank::try_from(r.value() - 1).ok(),
        }
    }

    /// The rank name, i.e. "Queen".
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Deuce => "Two",
            Rank::Trey => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let rank = match value {
            1 => Rank::Ace,
            2 => Rank::Deuce,
            3 => Rank::Trey,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            v => return Err(CardError::InvalidRank(v)),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Ace => 'A',
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// The derived order is only used to group cards, it has no Poker meaning.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Spades suit.
    Spades,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> + ExactSizeIterator {
        [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs].into_iter()
    }

    /// The suit position in 0..4, used to index per suit tables.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The suit name, i.e. "Spades".
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'S' => Ok(Suit::Spades),
            'C' => Ok(Suit::Clubs),
            _ => Err(CardError::InvalidSuit(c)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");
        assert_eq!(format!("{c:?}"), "Card(KD)");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "AC");
        assert_eq!(c.name(), "Ace of Clubs");

        let c = Card::new(Rank::Deuce, Suit::Hearts);
        assert_eq!(c.name(), "Two of Hearts");
    }

    #[test]
    fn card_parse() {
        assert_eq!("AH".parse(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!("ts".parse(), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!("10C".parse(), Ok(Card::new(Rank::Ten, Suit::Clubs)));
        assert_eq!(" 7d ".parse(), Ok(Card::new(Rank::Seven, Suit::Diamonds)));

        // Every card parses back from its short notation.
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse(), Ok(card));
            }
        }

        assert!(matches!("".parse::<Card>(), Err(CardError::InvalidCard(_))));
        assert!(matches!("H".parse::<Card>(), Err(CardError::InvalidCard(_))));
        assert!(matches!("1H".parse::<Card>(), Err(CardError::InvalidCard(_))));
        assert!(matches!("AX".parse::<Card>(), Err(CardError::InvalidCard(_))));
        assert!(matches!("AKH".parse::<Card>(), Err(CardError::InvalidCard(_))));
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::ranks().count(), Rank::COUNT);
        for (idx, rank) in Rank::ranks().enumerate() {
            assert_eq!(rank.value() as usize, idx + 1);
            assert_eq!(Rank::try_from(rank.value()), Ok(rank));
        }

        assert_eq!(Rank::try_from(0), Err(CardError::InvalidRank(0)));
        assert_eq!(Rank::try_from(14), Err(CardError::InvalidRank(14)));

        // Ace is low by value and high for comparison.
        assert!(Rank::Ace < Rank::Deuce);
        assert_eq!(Rank::Ace.high_value(), 14);
        assert_eq!(Rank::King.high_value(), 13);
        assert!(Rank::ranks().all(|r| r == Rank::Ace || r.high_value() == r.value()));
    }

    #[test]
    fn rank_runs() {
        assert_eq!(Rank::King.below(), Some(Rank::Queen));
        assert_eq!(Rank::Deuce.below(), Some(Rank::Ace));
        assert_eq!(Rank::Ace.below(), None);

        let order = Rank::straight_order().collect::<Vec<_>>();
        assert_eq!(order.len(), 14);
        assert_eq!(order.first(), Some(&Rank::Ace));
        assert_eq!(order[1], Rank::King);
        assert_eq!(order[12], Rank::Deuce);
        assert_eq!(order.last(), Some(&Rank::Ace));
    }

    #[test]
    fn suit_symbols() {
        assert_eq!(Suit::suits().count(), Suit::COUNT);
        for (idx, suit) in Suit::suits().enumerate() {
            assert_eq!(suit.index(), idx);
            let symbol = suit.to_string().chars().next().unwrap();
            assert_eq!(Suit::try_from(symbol), Ok(suit));
            assert_eq!(Suit::try_from(symbol.to_ascii_lowercase()), Ok(suit));
        }

        assert_eq!(Suit::try_from('x'), Err(CardError::InvalidSuit('x')));
        assert_eq!(Suit::Hearts.name(), "Hearts");
    }
}
