//! Skills: the catalog of special abilities handed out in skill rounds.

mod catalog;

pub use catalog::{Skill, SkillKind, CATALOG};
