//! AI decision making.
//!
//! - `find_best_play`: greedy single-ply play search over the hand
//! - `SkillPolicy`: whether to spend a held skill before playing
//!
//! The AI goes through the same legality check as a human seat and has
//! no access to hidden hands.

pub mod policy;
pub mod search;

pub use policy::{
    choose_target, policy_for, Posture, RandomSkillPolicy, SituationalSkillPolicy, SkillPolicy,
};
pub use search::{enumerate_candidates, find_best_play};
