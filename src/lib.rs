//! # big_two
//!
//! A four-player Big Two rule engine with randomly granted skills.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every rejected action leaves the game
//!    untouched. Rejections are values (`RejectReason`), never panics.
//!
//! 2. **One rulebook**: humans and the AI go through the same `check_play`.
//!
//! 3. **Deterministic**: all randomness comes from seeded `GameRng`
//!    streams, so a seed reproduces a game exactly.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, actions, errors
//! - `cards`: cards, notation and the deck
//! - `rules`: combination classification and play legality
//! - `skills`: the skill catalog
//! - `effects`: skill resolution
//! - `game`: the turn/round state machine and the `BigTwoGame` session
//! - `ai`: greedy play search and skill-usage policies

pub mod ai;
pub mod cards;
pub mod core;
pub mod effects;
pub mod game;
pub mod rules;
pub mod skills;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, EngineConfig, GameRng, PlayViolation, RejectReason, Seat,
    SeatConfig, SeatMap, SkillStrategy, SEAT_COUNT,
};

pub use crate::cards::{parse_cards, Card, Deck, ParseCardError, Rank, Suit};

pub use crate::rules::{
    check_play, classify, is_legal, ComboKind, Combination, PlayCards, TableState,
};

pub use crate::skills::{Skill, SkillKind, CATALOG};

pub use crate::effects::{NoEffectReason, SkillEffect, SkillResolver};

pub use crate::game::{
    AiTurn, BigTwoGame, GameEvent, GameState, HandView, Outcome, Phase, Player, Score, SkillUse,
};

pub use crate::ai::{find_best_play, SkillPolicy};

/// Everything a front end usually needs.
pub mod prelude {
    pub use crate::cards::{parse_cards, Card};
    pub use crate::core::{EngineConfig, RejectReason, Seat, SkillStrategy};
    pub use crate::effects::SkillEffect;
    pub use crate::game::{BigTwoGame, GameEvent, HandView, Outcome, Phase};
    pub use crate::rules::{ComboKind, Combination};
    pub use crate::skills::SkillKind;
}
