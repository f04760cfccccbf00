//! Core engine types: seats, RNG, configuration, actions, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{EngineConfig, SeatConfig, SkillStrategy};
pub use error::{ConfigError, PlayViolation, RejectReason};
pub use player::{Seat, SeatMap, SEAT_COUNT};
pub use rng::GameRng;
