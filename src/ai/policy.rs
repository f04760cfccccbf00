//! Skill-usage policies for AI seats.
//!
//! Before searching for a play, an AI seat asks its `SkillPolicy` whether
//! to spend one of its held skills first. Targets for aimed skills are
//! drawn uniformly from the other three seats.

use crate::core::{GameRng, Seat, SkillStrategy};
use crate::game::GameState;
use crate::skills::SkillKind;

/// Decides whether an AI seat uses a skill before playing.
pub trait SkillPolicy: Send + Sync {
    /// Pick a held skill for `seat` to use now, or `None` to skip straight
    /// to the play search.
    fn choose_skill(&self, state: &GameState, seat: Seat, rng: &mut GameRng) -> Option<SkillKind>;
}

/// Build the policy for a configured strategy.
#[must_use]
pub fn policy_for(strategy: SkillStrategy) -> Box<dyn SkillPolicy> {
    match strategy {
        SkillStrategy::Random { probability } => Box::new(RandomSkillPolicy { probability }),
        SkillStrategy::Situational => Box::new(SituationalSkillPolicy),
    }
}

/// Uniform target among the seats other than `actor`.
pub fn choose_target(actor: Seat, rng: &mut GameRng) -> Seat {
    let others: Vec<Seat> = actor.others().collect();
    let pick = rng.gen_range_usize(0..others.len());
    others[pick]
}

/// With a fixed probability, use one held skill chosen at random.
#[derive(Clone, Copy, Debug)]
pub struct RandomSkillPolicy {
    pub probability: f64,
}

impl Default for RandomSkillPolicy {
    fn default() -> Self {
        Self { probability: 0.6 }
    }
}

impl SkillPolicy for RandomSkillPolicy {
    fn choose_skill(&self, state: &GameState, seat: Seat, rng: &mut GameRng) -> Option<SkillKind> {
        let skills = state.players[seat].skills();
        if skills.is_empty() || !rng.gen_bool(self.probability) {
            return None;
        }
        rng.choose(skills).map(|s| s.kind)
    }
}

/// How a seat is doing relative to the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Posture {
    /// Three cards or fewer: close to winning.
    Aggressive,
    /// Well behind the average hand size.
    Defensive,
    Balanced,
}

impl Posture {
    #[must_use]
    pub fn assess(state: &GameState, seat: Seat) -> Self {
        let own = state.players[seat].card_count() as f64;
        let total: usize = state.players.values().map(|p| p.card_count()).sum();
        let average = total as f64 / state.players.values().count() as f64;

        if own <= 3.0 {
            Posture::Aggressive
        } else if own > average + 2.0 {
            Posture::Defensive
        } else {
            Posture::Balanced
        }
    }

    /// Base chance of using a skill this turn.
    #[must_use]
    pub fn base_probability(self) -> f64 {
        match self {
            Posture::Aggressive => 0.3,
            Posture::Defensive => 0.4,
            Posture::Balanced => 0.2,
        }
    }
}

/// Weighs each held skill against the state of the table.
///
/// Shields are raised when holding many cards, the sniper is saved for an
/// opponent close to going out, and wild plays are kept for the endgame.
#[derive(Clone, Copy, Debug, Default)]
pub struct SituationalSkillPolicy;

impl SituationalSkillPolicy {
    fn wants(state: &GameState, seat: Seat, kind: SkillKind, base: f64, rng: &mut GameRng) -> bool {
        let own = state.players[seat].card_count();
        match kind {
            SkillKind::Shield => own > 8 && rng.gen_bool(base),
            SkillKind::ForceDiscardHighest => {
                let fewest = seat
                    .others()
                    .map(|s| state.players[s].card_count())
                    .min()
                    .unwrap_or(0);
                fewest <= 5 && rng.gen_bool(base)
            }
            SkillKind::SkipTurn => rng.gen_bool(base * 0.7),
            SkillKind::WildPlay => own <= 4 && rng.gen_bool(base * 1.5),
            _ => rng.gen_bool(base),
        }
    }
}

impl SkillPolicy for SituationalSkillPolicy {
    fn choose_skill(&self, state: &GameState, seat: Seat, rng: &mut GameRng) -> Option<SkillKind> {
        let base = Posture::assess(state, seat).base_probability();
        state.players[seat]
            .skills()
            .iter()
            .map(|s| s.kind)
            .find(|&kind| Self::wants(state, seat, kind, base, rng))
    }
}
