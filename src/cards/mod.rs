//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: ordered enums (`3 < ... < A < 2`, `♠ < ♣ < ♦ < ♥`)
//! - `Card`: immutable (rank, suit) value with text notation
//! - `Deck`: the shuffled 52-card pile owned by a game

pub mod card;
pub mod deck;

pub use card::{parse_cards, Card, ParseCardError, Rank, Suit};
pub use deck::Deck;
