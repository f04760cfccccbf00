//! Play legality against the table.

use serde::{Deserialize, Serialize};

use super::combination::{classify, ComboKind, Combination};
use crate::cards::Card;
use crate::core::PlayViolation;

/// The last accepted combination of the current round.
///
/// `None` means the table is clear: the next play may be any combination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    combination: Option<Combination>,
}

impl TableState {
    /// A table holding `combination`.
    #[must_use]
    pub fn holding(combination: Combination) -> Self {
        Self {
            combination: Some(combination),
        }
    }

    #[must_use]
    pub fn combination(&self) -> Option<&Combination> {
        self.combination.as_ref()
    }

    #[must_use]
    pub fn kind(&self) -> Option<ComboKind> {
        self.combination.as_ref().map(|c| c.kind)
    }

    /// Strength of the table combination, 0 when clear.
    #[must_use]
    pub fn strength(&self) -> u8 {
        self.combination.as_ref().map_or(0, |c| c.strength)
    }

    /// Cards on the table, empty when clear.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match &self.combination {
            Some(c) => c.cards.as_slice(),
            None => &[],
        }
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.combination.is_none()
    }

    pub fn set(&mut self, combination: Combination) {
        self.combination = Some(combination);
    }

    pub fn clear(&mut self) {
        self.combination = None;
    }
}

/// Check a candidate play and classify it.
///
/// Checks run in this order:
/// 1. the cards must classify;
/// 2. an armed wild play outside the opening play is always legal;
/// 3. the opening play must contain the 3♠;
/// 4. a clear table accepts any combination;
/// 5. otherwise the kind must match and the strength must be strictly greater.
pub fn check_play(
    cards: &[Card],
    table: &TableState,
    first_play: bool,
    wild_play: bool,
) -> Result<Combination, PlayViolation> {
    let candidate = classify(cards).ok_or(PlayViolation::Unclassifiable)?;

    if wild_play && !first_play {
        return Ok(candidate);
    }

    if first_play && !candidate.contains(Card::THREE_OF_SPADES) {
        return Err(PlayViolation::MissingThreeOfSpades);
    }

    let Some(current) = table.combination() else {
        return Ok(candidate);
    };

    if candidate.kind != current.kind {
        return Err(PlayViolation::KindMismatch {
            table: current.kind,
            candidate: candidate.kind,
        });
    }

    if candidate.strength <= current.strength {
        return Err(PlayViolation::NotStronger {
            table: current.strength,
            candidate: candidate.strength,
        });
    }

    Ok(candidate)
}

/// Boolean form of [`check_play`].
#[must_use]
pub fn is_legal(cards: &[Card], table: &TableState, first_play: bool, wild_play: bool) -> bool {
    check_play(cards, table, first_play, wild_play).is_ok()
}
