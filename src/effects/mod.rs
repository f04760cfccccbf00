//! Skill effects.
//!
//! `SkillResolver` applies a skill to a `GameState` and reports the result
//! as a `SkillEffect`:
//! - Shield interception runs first. A shielded target absorbs one
//!   blockable skill and loses the shield.
//! - Effects that cannot apply (too few cards, empty deck) resolve as
//!   `SkillEffect::NoEffect` rather than failing.

mod resolver;

pub use resolver::{NoEffectReason, SkillEffect, SkillResolver, SWAP_COUNT};
