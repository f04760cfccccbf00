//! The game session and its state machine.
//!
//! ## Key Types
//!
//! - `BigTwoGame`: validated entry point for plays, passes and skills
//! - `GameState`: players, deck, table and counters
//! - `Player`: one seat's hand, skills and status flags
//! - `Outcome` / `GameEvent`: what a call changed

pub mod engine;
pub mod event;
pub mod player;
pub mod state;

pub use engine::{AiTurn, BigTwoGame, SkillUse};
pub use event::{GameEvent, HandView, Outcome, Phase, Score};
pub use player::Player;
pub use state::{GameState, HAND_SIZE, PASSES_TO_CLEAR};
