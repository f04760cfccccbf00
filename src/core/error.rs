//! Rejection reasons.
//!
//! Every rejection is local and recoverable: the engine checks everything
//! before it mutates, so a rejected call leaves the game untouched.

use thiserror::Error;

use super::player::Seat;
use crate::rules::ComboKind;
use crate::skills::SkillKind;

/// Why a candidate play is illegal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayViolation {
    #[error("cards do not form a combination")]
    Unclassifiable,

    #[error("the opening play must include the 3♠")]
    MissingThreeOfSpades,

    #[error("table holds a {table}, cannot answer with a {candidate}")]
    KindMismatch { table: ComboKind, candidate: ComboKind },

    #[error("strength {candidate} does not beat {table}")]
    NotStronger { table: u8, candidate: u8 },

    #[error("cards are not in the player's hand")]
    CardsNotHeld,

    #[error("the same card is named more than once")]
    DuplicateCards,
}

/// Why the engine refused an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("illegal play: {0}")]
    IllegalPlay(#[from] PlayViolation),

    #[error("{seat} cannot act, it is {current}'s turn")]
    NotYourTurn { seat: Seat, current: Seat },

    #[error("{seat} holds no {skill} skill")]
    SkillNotHeld { seat: Seat, skill: SkillKind },

    #[error("{0} needs a target seat")]
    TargetRequired(SkillKind),

    #[error("{seat} cannot target {target}")]
    InvalidTarget { seat: Seat, target: Seat },

    #[error("the game is over")]
    GameOver,

    #[error("invalid deal: {0}")]
    InvalidDeal(String),
}

/// Why an [`EngineConfig`](super::EngineConfig) cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("skill round interval must be positive")]
    ZeroSkillRoundInterval,

    #[error("skills per round must be 1-{max}, got {count}")]
    SkillsPerRound { count: usize, max: usize },

    #[error("skill probability must be within 0-1, got {0}")]
    SkillProbability(f64),
}
