//! Combination classification.
//!
//! A play is a set of 1, 2, 3 or 5 cards. `classify` turns it into a
//! `Combination`: a kind plus a strength that is only ever compared
//! against another combination of the same kind.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Rank};

/// Cards of a single play. Never more than five.
pub type PlayCards = SmallVec<[Card; 5]>;

/// Combination kind.
///
/// Declared in precedence order among five-card kinds. Kinds of
/// different cardinality are never compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComboKind {
    Single,
    Pair,
    Triple,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl ComboKind {
    /// Number of cards a combination of this kind holds.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            ComboKind::Single => 1,
            ComboKind::Pair => 2,
            ComboKind::Triple => 3,
            _ => 5,
        }
    }
}

impl std::fmt::Display for ComboKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ComboKind::Single => "single",
            ComboKind::Pair => "pair",
            ComboKind::Triple => "triple",
            ComboKind::Straight => "straight",
            ComboKind::Flush => "flush",
            ComboKind::FullHouse => "full house",
            ComboKind::FourOfAKind => "four of a kind",
            ComboKind::StraightFlush => "straight flush",
        };
        f.write_str(name)
    }
}

/// A classified play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    pub kind: ComboKind,
    /// Rank value the combination is compared by (3..=15).
    pub strength: u8,
    /// The cards, in canonical (rank, suit) order.
    pub cards: PlayCards,
}

impl Combination {
    /// Whether this combination beats `other`: same kind, strictly stronger.
    #[must_use]
    pub fn beats(&self, other: &Combination) -> bool {
        self.kind == other.kind && self.strength > other.strength
    }

    /// Sum of the rank values of the cards.
    #[must_use]
    pub fn rank_sum(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.value())).sum()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [", self.kind)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// Classify a set of cards.
///
/// Returns `None` for the empty set, for cardinalities other than
/// 1, 2, 3 and 5, and for shapes that are not a combination.
/// Input order never matters.
///
/// ```
/// use big_two::cards::parse_cards;
/// use big_two::rules::{classify, ComboKind};
///
/// let full_house = classify(&parse_cards("9S 9H 9D 4C 4S").unwrap()).unwrap();
/// assert_eq!(full_house.kind, ComboKind::FullHouse);
/// assert_eq!(full_house.strength, 9);
///
/// assert!(classify(&parse_cards("9S 4H").unwrap()).is_none());
/// ```
#[must_use]
pub fn classify(cards: &[Card]) -> Option<Combination> {
    let mut sorted: PlayCards = cards.iter().copied().collect();
    sorted.sort_unstable();

    let (kind, strength) = match sorted.len() {
        1 => (ComboKind::Single, sorted[0].value()),
        2 if sorted[0].rank == sorted[1].rank => (ComboKind::Pair, sorted[0].value()),
        3 if sorted.iter().all(|c| c.rank == sorted[0].rank) => {
            (ComboKind::Triple, sorted[0].value())
        }
        5 => classify_five(&sorted)?,
        _ => return None,
    };

    Some(Combination {
        kind,
        strength,
        cards: sorted,
    })
}

/// Five-card shapes. `sorted` is in ascending rank order.
fn classify_five(sorted: &[Card]) -> Option<(ComboKind, u8)> {
    let mut counts: FxHashMap<Rank, usize> = FxHashMap::default();
    for card in sorted {
        *counts.entry(card.rank).or_insert(0) += 1;
    }

    let mut shape: SmallVec<[usize; 5]> = counts.values().copied().collect();
    shape.sort_unstable();

    let is_flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let is_straight = sorted
        .windows(2)
        .all(|w| w[0].value() + 1 == w[1].value());
    let highest = sorted[4].value();

    // Rank held by the most cards (the quad or the triple).
    let dominant = || {
        counts
            .iter()
            .max_by_key(|&(_, &n)| n)
            .map(|(rank, _)| rank.value())
    };

    if is_straight && is_flush {
        Some((ComboKind::StraightFlush, highest))
    } else if shape.as_slice() == [1, 4] {
        Some((ComboKind::FourOfAKind, dominant()?))
    } else if shape.as_slice() == [2, 3] {
        Some((ComboKind::FullHouse, dominant()?))
    } else if is_flush {
        Some((ComboKind::Flush, highest))
    } else if is_straight {
        Some((ComboKind::Straight, highest))
    } else {
        None
    }
}
