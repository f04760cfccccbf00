//! The game session: the entry point a front end talks to.
//!
//! `BigTwoGame` wraps a `GameState` and does all the checking. Every
//! action is validated in full before anything is mutated, so a rejected
//! call leaves the game exactly as it was.
//!
//! ## Example
//!
//! ```
//! use big_two::prelude::*;
//!
//! let mut game = BigTwoGame::new(EngineConfig::default().all_ai().with_seed(7));
//!
//! let mut turns = 0;
//! while game.winner().is_none() && turns < 1000 {
//!     game.play_ai_turn().unwrap();
//!     turns += 1;
//! }
//! assert!(game.state().is_conserved());
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::event::{HandView, Outcome, Phase, Score};
use super::player::Player;
use super::state::GameState;
use crate::ai::{choose_target, find_best_play, policy_for, SkillPolicy};
use crate::cards::Card;
use crate::core::{
    Action, ActionRecord, EngineConfig, GameRng, PlayViolation, RejectReason, Seat, SeatMap,
    SEAT_COUNT,
};
use crate::effects::{SkillEffect, SkillResolver};
use crate::rules::{check_play, Combination, TableState};
use crate::skills::{Skill, SkillKind};

/// A skill an AI seat spent at the start of its turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillUse {
    pub skill: SkillKind,
    pub target: Option<Seat>,
    pub effect: SkillEffect,
}

/// Everything an AI seat did on one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTurn {
    pub seat: Seat,
    pub skill: Option<SkillUse>,
    /// Result of the play or pass that ended the turn.
    pub outcome: Outcome,
}

/// A four-seat Big Two game with skills.
pub struct BigTwoGame {
    config: EngineConfig,
    master_rng: GameRng,
    state: GameState,
    /// Separate stream for AI rolls and targets.
    ai_rng: GameRng,
    policy: Box<dyn SkillPolicy>,
}

impl BigTwoGame {
    /// Set up a table and deal the first game.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut master_rng = GameRng::new(config.seed());
        let game_rng = master_rng.fork();
        let ai_rng = game_rng.for_context("ai");
        let state = GameState::deal(&config, game_rng);
        let policy = policy_for(config.skill_strategy());

        Self {
            config,
            master_rng,
            state,
            ai_rng,
            policy,
        }
    }

    /// Set up a table with a fixed deal instead of a shuffle.
    pub fn from_deal(
        config: EngineConfig,
        hands: [Vec<Card>; SEAT_COUNT],
        deck: Vec<Card>,
    ) -> Result<Self, RejectReason> {
        let mut master_rng = GameRng::new(config.seed());
        let game_rng = master_rng.fork();
        let ai_rng = game_rng.for_context("ai");
        let state = GameState::from_deal(&config, hands, deck, game_rng)?;
        let policy = policy_for(config.skill_strategy());

        Ok(Self {
            config,
            master_rng,
            state,
            ai_rng,
            policy,
        })
    }

    /// Replace the policy AI seats use for skills.
    #[must_use]
    pub fn with_policy(mut self, policy: Box<dyn SkillPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Reshuffle and deal a fresh game at the same table.
    pub fn new_game(&mut self) -> &GameState {
        let game_rng = self.master_rng.fork();
        self.ai_rng = game_rng.for_context("ai");
        self.state = GameState::deal(&self.config, game_rng);
        &self.state
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access to the state, for setting up scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.state.current
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.state.players[seat]
    }

    #[must_use]
    pub fn granted_skills_of(&self, seat: Seat) -> &[Skill] {
        self.state.players[seat].skills()
    }

    #[must_use]
    pub fn table_state(&self) -> &TableState {
        &self.state.table
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn pass_count(&self) -> u8 {
        self.state.pass_count
    }

    #[must_use]
    pub fn rounds_until_skill_round(&self) -> u32 {
        self.state.rounds_until_skill_round()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.state.winner
    }

    #[must_use]
    pub fn scores(&self) -> SeatMap<Score> {
        self.state.scores()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.state.history
    }

    /// `seat`'s hand as `viewer` is allowed to see it.
    ///
    /// A seat always sees its own hand. Other hands show only their size
    /// unless the viewer has peeked at them since its last play or pass.
    #[must_use]
    pub fn hand_of(&self, viewer: Seat, seat: Seat) -> HandView<'_> {
        let player = &self.state.players[seat];
        if viewer == seat || self.state.players[viewer].can_see(seat) {
            HandView::Visible(player.hand())
        } else {
            HandView::Hidden {
                card_count: player.card_count(),
            }
        }
    }

    /// Whether the current seat could play `cards` right now.
    #[must_use]
    pub fn legal_play(&self, cards: &[Card]) -> bool {
        self.validate_play(self.state.current, cards).is_ok()
    }

    /// The play the AI search would make for `seat` against the current table.
    #[must_use]
    pub fn suggest_play(&self, seat: Seat) -> Option<Combination> {
        let player = &self.state.players[seat];
        find_best_play(
            player.hand(),
            &self.state.table,
            self.state.first_play_pending,
            player.wild_play,
        )
    }

    // === Actions ===

    /// Play `cards` from `seat`'s hand.
    pub fn play(&mut self, seat: Seat, cards: &[Card]) -> Result<Outcome, RejectReason> {
        let combination = self.validate_play(seat, cards)?;

        let mut events = Vec::new();
        self.state.record(seat, Action::Play(combination.cards.clone()));
        self.state.apply_play(seat, combination, &mut events);
        debug_assert!(self.state.is_conserved(), "play broke card conservation");

        Ok(Outcome {
            events,
            phase: self.state.phase(),
        })
    }

    /// Pass the turn.
    pub fn pass(&mut self, seat: Seat) -> Result<Outcome, RejectReason> {
        self.ensure_turn(seat)?;

        let mut events = Vec::new();
        self.state.record(seat, Action::Pass);
        self.state.apply_pass(seat, &mut events);

        Ok(Outcome {
            events,
            phase: self.state.phase(),
        })
    }

    /// Spend one held instance of `skill`.
    ///
    /// Aimed skills need a target other than the user. The target of an
    /// unaimed skill is ignored. Using a skill does not end the turn.
    pub fn use_skill(
        &mut self,
        seat: Seat,
        skill: SkillKind,
        target: Option<Seat>,
    ) -> Result<SkillEffect, RejectReason> {
        self.ensure_turn(seat)?;

        if !self.state.players[seat].has_skill(skill) {
            return Err(RejectReason::SkillNotHeld { seat, skill });
        }

        let target = if skill.is_targeted() {
            match target {
                None => return Err(RejectReason::TargetRequired(skill)),
                Some(t) if t == seat => return Err(RejectReason::InvalidTarget { seat, target: t }),
                Some(t) => Some(t),
            }
        } else {
            None
        };

        self.state.players[seat].take_skill(skill);
        self.state.record(seat, Action::UseSkill { skill, target });
        let effect = SkillResolver::resolve(&mut self.state, skill, seat, target);

        info!(%seat, %skill, %effect, "skill used");
        Ok(effect)
    }

    /// Let the AI act for the current seat: maybe use a skill, then play
    /// the best legal combination or pass.
    pub fn play_ai_turn(&mut self) -> Result<AiTurn, RejectReason> {
        if self.state.is_over() {
            return Err(RejectReason::GameOver);
        }
        let seat = self.state.current;

        let mut skill_use = None;
        if let Some(skill) = self.policy.choose_skill(&self.state, seat, &mut self.ai_rng) {
            let target = skill.is_targeted().then(|| choose_target(seat, &mut self.ai_rng));
            let effect = self.use_skill(seat, skill, target)?;
            skill_use = Some(SkillUse { skill, target, effect });
        }

        let outcome = match self.suggest_play(seat) {
            Some(combination) => self.play(seat, &combination.cards)?,
            None => self.pass(seat)?,
        };
        debug!(%seat, used_skill = skill_use.is_some(), "ai turn");

        Ok(AiTurn {
            seat,
            skill: skill_use,
            outcome,
        })
    }

    // === Validation ===

    fn ensure_turn(&self, seat: Seat) -> Result<(), RejectReason> {
        if self.state.is_over() {
            return Err(RejectReason::GameOver);
        }
        if seat != self.state.current {
            return Err(RejectReason::NotYourTurn {
                seat,
                current: self.state.current,
            });
        }
        Ok(())
    }

    fn validate_play(&self, seat: Seat, cards: &[Card]) -> Result<Combination, RejectReason> {
        self.ensure_turn(seat)?;

        let distinct: FxHashSet<Card> = cards.iter().copied().collect();
        if distinct.len() != cards.len() {
            return Err(PlayViolation::DuplicateCards.into());
        }

        let player = &self.state.players[seat];
        if !player.holds_all(cards) {
            return Err(PlayViolation::CardsNotHeld.into());
        }

        let combination = check_play(
            cards,
            &self.state.table,
            self.state.first_play_pending,
            player.wild_play,
        )?;
        Ok(combination)
    }
}

impl std::fmt::Debug for BigTwoGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BigTwoGame")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
