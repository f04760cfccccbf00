//! Events and outcomes reported by state-changing calls.
//!
//! Every `play`/`pass` returns an `Outcome` listing what happened, in
//! order: the action itself, then any skipped seats, table clears, round
//! advances and skill grants that the turn advance triggered.

use serde::{Deserialize, Serialize};

use crate::core::{Seat, SeatMap};
use crate::rules::Combination;
use crate::skills::SkillKind;

/// Final standing of one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Cards left in hand.
    pub cards_left: usize,
    /// Sum of rank values left in hand. Lower is better.
    pub points: u32,
}

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Played { seat: Seat, combination: Combination },
    Passed { seat: Seat },
    /// A skip-pending seat was passed over and counted as a pass.
    TurnSkipped { seat: Seat },
    TableCleared,
    RoundAdvanced { round: u32 },
    /// A skill round handed out skills. Seats missing from the list got none.
    SkillsGranted { grants: Vec<(Seat, SkillKind)> },
    GameWon { winner: Seat, scores: SeatMap<Score> },
}

/// Where the state machine stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for `seat` to play, pass or use a skill.
    AwaitingPlay(Seat),
    /// Skills are being handed out. Only held inside a single call.
    SkillGrant,
    /// Someone emptied their hand.
    RoundOver { winner: Seat },
}

/// Result of a state-changing call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub events: Vec<GameEvent>,
    /// Phase after the call.
    pub phase: Phase,
}

impl Outcome {
    /// Winner, if this call ended the game.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.events.iter().find_map(|e| match e {
            GameEvent::GameWon { winner, .. } => Some(*winner),
            _ => None,
        })
    }

    #[must_use]
    pub fn table_cleared(&self) -> bool {
        self.events.iter().any(|e| matches!(e, GameEvent::TableCleared))
    }
}

/// A seat's hand as seen by another seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandView<'a> {
    Visible(&'a [crate::cards::Card]),
    Hidden { card_count: usize },
}

impl HandView<'_> {
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            HandView::Visible(cards) => cards.len(),
            HandView::Hidden { card_count } => *card_count,
        }
    }
}
