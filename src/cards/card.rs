//! Playing cards: rank, suit, and the card value itself.
//!
//! Ranks run `3 < 4 < ... < K < A < 2`. Suits run
//! `♠ < ♣ < ♦ < ♥` and only break ties when sorting a hand;
//! they never affect a combination's strength.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Card rank, declared in increasing strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Rank {
    /// All ranks from weakest to strongest.
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Numeric strength: 3 for a Three up to 15 for a Two.
    ///
    /// Used both as combination strength and as the score of a card
    /// left in hand.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 3
    }

    /// Face label (`"3"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`, `"2"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        }
    }
}

/// Card suit, declared in increasing sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Club,
    Diamond,
    Heart,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Diamond, Suit::Heart];

    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
        }
    }
}

/// A single playing card.
///
/// Ordering is by rank first, then suit, which is the canonical hand order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// The card that must open every game.
    pub const THREE_OF_SPADES: Card = Card::new(Rank::Three, Suit::Spade);

    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Rank strength of this card (see [`Rank::value`]).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.glyph())
    }
}

/// Error parsing the text notation of a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("empty card notation")]
    Empty,

    #[error("unknown rank in {0:?}")]
    UnknownRank(String),

    #[error("unknown suit in {0:?}")]
    UnknownSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse `"3S"`, `"10h"`, `"A♦"` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(ParseCardError::Empty)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];

        let suit = match suit_char.to_ascii_uppercase() {
            'S' | '♠' => Suit::Spade,
            'C' | '♣' => Suit::Club,
            'D' | '♦' => Suit::Diamond,
            'H' | '♥' => Suit::Heart,
            _ => return Err(ParseCardError::UnknownSuit(s.to_string())),
        };

        let rank = Rank::ALL
            .iter()
            .copied()
            .find(|r| r.label().eq_ignore_ascii_case(rank_part))
            .ok_or_else(|| ParseCardError::UnknownRank(s.to_string()))?;

        Ok(Card::new(rank, suit))
    }
}

/// Parse a whitespace-separated list of cards.
///
/// ```
/// use big_two::cards::{parse_cards, Card};
///
/// let cards = parse_cards("3S 4s 10♥").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[0], Card::THREE_OF_SPADES);
/// assert_eq!(cards[2].to_string(), "10♥");
/// ```
pub fn parse_cards(notation: &str) -> Result<Vec<Card>, ParseCardError> {
    notation.split_whitespace().map(str::parse).collect()
}
