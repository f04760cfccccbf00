//! Engine configuration.
//!
//! `EngineConfig` collects everything a table is set up with: the master
//! seed, who sits where, how often skill rounds come around and how the
//! AI decides to spend its skills.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{Seat, SEAT_COUNT};
use crate::skills::CATALOG;

/// Who sits in a seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub is_human: bool,
}

impl SeatConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_human: true,
        }
    }

    pub fn ai(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_human: false,
        }
    }
}

/// How AI seats decide whether to use a held skill.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SkillStrategy {
    /// Use a random held skill with fixed probability before each play.
    Random { probability: f64 },
    /// Weigh each held skill against hand sizes and table posture.
    Situational,
}

impl Default for SkillStrategy {
    fn default() -> Self {
        SkillStrategy::Random { probability: 0.6 }
    }
}

/// Table configuration.
///
/// Fields are only reachable through the `with_*` builders, which assert
/// their ranges, and deserialization, which runs the same checks through
/// [`EngineConfig::validate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEngineConfig")]
pub struct EngineConfig {
    /// Master seed. Every new game forks a fresh stream from it.
    seed: u64,

    /// Seat names and human flags, by seat index.
    seats: [SeatConfig; SEAT_COUNT],

    /// A skill round fires whenever the round counter reaches a positive
    /// multiple of this value.
    skill_round_interval: u32,

    /// Distinct skills drawn from the catalog for each skill round.
    /// Fewer than one per seat leaves the last seats without a skill.
    skills_per_round: usize,

    /// AI skill usage policy.
    skill_strategy: SkillStrategy,
}

/// Unchecked wire form of [`EngineConfig`].
#[derive(Deserialize)]
struct RawEngineConfig {
    seed: u64,
    seats: [SeatConfig; SEAT_COUNT],
    skill_round_interval: u32,
    skills_per_round: usize,
    skill_strategy: SkillStrategy,
}

impl TryFrom<RawEngineConfig> for EngineConfig {
    type Error = ConfigError;

    fn try_from(raw: RawEngineConfig) -> Result<Self, Self::Error> {
        let config = Self {
            seed: raw.seed,
            seats: raw.seats,
            skill_round_interval: raw.skill_round_interval,
            skills_per_round: raw.skills_per_round,
            skill_strategy: raw.skill_strategy,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            seats: [
                SeatConfig::human("You"),
                SeatConfig::ai("AI Player 1"),
                SeatConfig::ai("AI Player 2"),
                SeatConfig::ai("AI Player 3"),
            ],
            skill_round_interval: 4,
            skills_per_round: 4,
            skill_strategy: SkillStrategy::default(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn seat(&self, seat: Seat) -> &SeatConfig {
        &self.seats[seat.index()]
    }

    #[must_use]
    pub fn skill_round_interval(&self) -> u32 {
        self.skill_round_interval
    }

    #[must_use]
    pub fn skills_per_round(&self) -> usize {
        self.skills_per_round
    }

    #[must_use]
    pub fn skill_strategy(&self) -> SkillStrategy {
        self.skill_strategy
    }

    /// Check every field against the ranges the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.skill_round_interval == 0 {
            return Err(ConfigError::ZeroSkillRoundInterval);
        }
        if !(1..=CATALOG.len()).contains(&self.skills_per_round) {
            return Err(ConfigError::SkillsPerRound {
                count: self.skills_per_round,
                max: CATALOG.len(),
            });
        }
        if let SkillStrategy::Random { probability } = self.skill_strategy {
            if !(0.0..=1.0).contains(&probability) {
                return Err(ConfigError::SkillProbability(probability));
            }
        }
        Ok(())
    }

    /// Set the master seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the configuration of one seat.
    #[must_use]
    pub fn with_seat(mut self, seat: Seat, config: SeatConfig) -> Self {
        self.seats[seat.index()] = config;
        self
    }

    /// Make every seat an AI seat (simulations, tests).
    #[must_use]
    pub fn all_ai(mut self) -> Self {
        for seat in &mut self.seats {
            seat.is_human = false;
        }
        self
    }

    /// Set how many rounds pass between skill rounds.
    #[must_use]
    pub fn with_skill_round_interval(mut self, interval: u32) -> Self {
        assert!(interval > 0, "Skill round interval must be positive");
        self.skill_round_interval = interval;
        self
    }

    /// Set how many distinct skills a skill round draws.
    #[must_use]
    pub fn with_skills_per_round(mut self, count: usize) -> Self {
        assert!(
            (1..=CATALOG.len()).contains(&count),
            "Skills per round must be 1-{}",
            CATALOG.len()
        );
        self.skills_per_round = count;
        self
    }

    /// Set the AI skill policy.
    #[must_use]
    pub fn with_skill_strategy(mut self, strategy: SkillStrategy) -> Self {
        if let SkillStrategy::Random { probability } = strategy {
            assert!(
                (0.0..=1.0).contains(&probability),
                "Skill probability must be within 0-1"
            );
        }
        self.skill_strategy = strategy;
        self
    }
}
