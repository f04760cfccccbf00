//! Game state and the turn/round state machine.
//!
//! `GameState` owns everything a single game needs: the four players,
//! the deck, the discard pile, the table, the counters and the RNG.
//!
//! ## Turn flow
//!
//! - An accepted play replaces the table combination and resets the pass
//!   counter. Emptying a hand ends the game.
//! - A pass bumps the pass counter. The third consecutive pass clears the
//!   table and advances the round.
//! - After every play or pass the turn moves to the next seat. Coming back
//!   around to the starter seat (once the opening play is made) also
//!   advances the round. A seat with a pending skip is passed over and
//!   counted as a pass.
//! - Whenever the round counter lands on a positive multiple of the skill
//!   round interval, each seat is handed one skill from a freshly drawn batch.
//!
//! ## Card conservation
//!
//! Played and discarded cards go to the discard pile; the table keeps a
//! copy of the last combination. Hands + deck + discard always hold exactly
//! the cards that were dealt.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::event::{GameEvent, Phase, Score};
use super::player::Player;
use crate::cards::{Card, Deck};
use crate::core::{
    Action, ActionRecord, EngineConfig, GameRng, RejectReason, Seat, SeatMap, SEAT_COUNT,
};
use crate::rules::{Combination, TableState};
use crate::skills::{Skill, CATALOG};

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 13;

/// Consecutive passes that clear the table.
pub const PASSES_TO_CLEAR: u8 = 3;

/// Full state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub players: SeatMap<Player>,
    pub deck: Deck,
    /// Played and force-discarded cards.
    pub discard: Vec<Card>,
    pub table: TableState,

    /// Seat whose turn it is.
    pub current: Seat,
    /// Seat that held the 3♠ and opened the game.
    pub starter: Seat,
    /// Consecutive passes since the last play, in `0..PASSES_TO_CLEAR`.
    pub pass_count: u8,
    pub round: u32,
    /// True until the opening play (with the 3♠) has been made.
    pub first_play_pending: bool,
    /// Set while a skill round is handing out skills.
    pub skill_phase: bool,
    pub winner: Option<Seat>,

    /// Accepted actions, oldest first.
    pub history: Vector<ActionRecord>,

    /// Deterministic RNG for shuffles, skill draws and skill effects.
    pub rng: GameRng,

    skill_round_interval: u32,
    skills_per_round: usize,
    card_total: usize,
}

impl GameState {
    /// Shuffle a fresh deck and deal 13 cards to every seat, one at a time.
    #[must_use]
    pub fn deal(config: &EngineConfig, mut rng: GameRng) -> Self {
        let mut deck = Deck::shuffled(&mut rng);
        let mut players = SeatMap::new(|seat| Player::new(config.seat(seat)));

        for _ in 0..HAND_SIZE {
            for seat in Seat::all() {
                if let Some(card) = deck.draw() {
                    players[seat].add_card(card);
                }
            }
        }

        // A full deck always puts the 3♠ in some hand.
        let starter = Seat::all()
            .find(|&s| players[s].has_card(Card::THREE_OF_SPADES))
            .unwrap_or(Seat::new(0));

        let state = Self::assemble(config, players, deck, starter, rng);
        info!(starter = %state.starter, seed = state.rng.seed(), "dealt new game");
        state
    }

    /// Build a game from a fixed deal.
    ///
    /// Exactly one hand must hold the 3♠, and no card may appear twice
    /// across the hands and the deck.
    pub fn from_deal(
        config: &EngineConfig,
        hands: [Vec<Card>; SEAT_COUNT],
        deck: Vec<Card>,
        rng: GameRng,
    ) -> Result<Self, RejectReason> {
        let mut seen = FxHashSet::default();
        for &card in hands.iter().flatten().chain(deck.iter()) {
            if !seen.insert(card) {
                return Err(RejectReason::InvalidDeal(format!("{card} dealt twice")));
            }
        }

        let holders: Vec<Seat> = Seat::all()
            .filter(|s| hands[s.index()].contains(&Card::THREE_OF_SPADES))
            .collect();
        let &[starter] = holders.as_slice() else {
            return Err(RejectReason::InvalidDeal(
                "exactly one seat must hold the 3♠".to_string(),
            ));
        };

        let hands = SeatMap::from_array(hands);
        let players = SeatMap::new(|seat| {
            let mut player = Player::new(config.seat(seat));
            for &card in &hands[seat] {
                player.add_card(card);
            }
            player
        });

        Ok(Self::assemble(config, players, Deck::from_cards(deck), starter, rng))
    }

    fn assemble(
        config: &EngineConfig,
        players: SeatMap<Player>,
        deck: Deck,
        starter: Seat,
        rng: GameRng,
    ) -> Self {
        let card_total = players.values().map(Player::card_count).sum::<usize>() + deck.len();
        Self {
            players,
            deck,
            discard: Vec::new(),
            table: TableState::default(),
            current: starter,
            starter,
            pass_count: 0,
            round: 0,
            first_play_pending: true,
            skill_phase: false,
            winner: None,
            history: Vector::new(),
            rng,
            skill_round_interval: config.skill_round_interval(),
            skills_per_round: config.skills_per_round(),
            card_total,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.winner {
            Some(winner) => Phase::RoundOver { winner },
            None if self.skill_phase => Phase::SkillGrant,
            None => Phase::AwaitingPlay(self.current),
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Cards left and rank-value points for every seat.
    #[must_use]
    pub fn scores(&self) -> SeatMap<Score> {
        self.players.map(|_, p| Score {
            cards_left: p.card_count(),
            points: p.remaining_value(),
        })
    }

    /// Rounds left before the next skill round.
    #[must_use]
    pub fn rounds_until_skill_round(&self) -> u32 {
        let interval = self.skill_round_interval;
        interval - ((self.round + 1) % interval)
    }

    /// Every card in a hand, the deck or the discard pile.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.players
            .values()
            .flat_map(|p| p.hand().iter().copied())
            .chain(self.deck.cards().iter().copied())
            .chain(self.discard.iter().copied())
            .collect()
    }

    /// Whether hands + deck + discard still hold exactly the dealt cards.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let all = self.all_cards();
        let distinct: FxHashSet<Card> = all.iter().copied().collect();
        all.len() == self.card_total && distinct.len() == self.card_total
    }

    // === Transitions ===

    pub(crate) fn record(&mut self, seat: Seat, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord {
            seat,
            action,
            round: self.round,
            sequence,
        });
    }

    /// Apply a validated play by `seat`.
    pub(crate) fn apply_play(
        &mut self,
        seat: Seat,
        combination: Combination,
        events: &mut Vec<GameEvent>,
    ) {
        let player = &mut self.players[seat];
        let removed = player.remove_cards(&combination.cards);
        debug_assert!(removed, "validated play must come from the hand");
        player.wild_play = false;
        player.forget_revealed();

        debug!(%seat, kind = %combination.kind, strength = combination.strength, "play accepted");

        self.discard.extend(combination.cards.iter().copied());
        self.table.set(combination.clone());
        self.pass_count = 0;
        self.first_play_pending = false;
        events.push(GameEvent::Played { seat, combination });

        if self.players[seat].card_count() == 0 {
            let scores = self.scores();
            self.winner = Some(seat);
            info!(winner = %seat, round = self.round, "game won");
            events.push(GameEvent::GameWon { winner: seat, scores });
        } else {
            self.advance_turn(events);
        }
    }

    /// Apply a pass by `seat`.
    pub(crate) fn apply_pass(&mut self, seat: Seat, events: &mut Vec<GameEvent>) {
        self.players[seat].forget_revealed();
        debug!(%seat, passes = self.pass_count + 1, "pass");
        events.push(GameEvent::Passed { seat });
        self.register_pass(events);
        self.advance_turn(events);
    }

    fn register_pass(&mut self, events: &mut Vec<GameEvent>) {
        self.pass_count += 1;
        if self.pass_count >= PASSES_TO_CLEAR {
            self.table.clear();
            self.pass_count = 0;
            debug!("table cleared");
            events.push(GameEvent::TableCleared);
            self.advance_round(events);
        }
    }

    /// Move the turn to the next seat that is allowed to act.
    fn advance_turn(&mut self, events: &mut Vec<GameEvent>) {
        loop {
            self.current = self.current.next();

            if self.current == self.starter && !self.first_play_pending {
                self.advance_round(events);
            }

            let player = &mut self.players[self.current];
            if !player.skip_pending {
                break;
            }
            player.skip_pending = false;
            debug!(seat = %self.current, "turn skipped");
            events.push(GameEvent::TurnSkipped { seat: self.current });
            self.register_pass(events);
        }
    }

    fn advance_round(&mut self, events: &mut Vec<GameEvent>) {
        self.round += 1;
        events.push(GameEvent::RoundAdvanced { round: self.round });
        self.check_skill_round(events);
    }

    /// Hand out skills if the round counter just reached a skill round.
    fn check_skill_round(&mut self, events: &mut Vec<GameEvent>) {
        if self.first_play_pending || self.skill_phase {
            return;
        }
        if self.round == 0 || self.round % self.skill_round_interval != 0 {
            return;
        }

        self.skill_phase = true;

        let mut batch: Vec<Skill> = self
            .rng
            .sample_indices(CATALOG.len(), self.skills_per_round)
            .into_iter()
            .map(|i| CATALOG[i])
            .collect();

        let mut grants = Vec::with_capacity(SEAT_COUNT);
        for seat in Seat::all() {
            if batch.is_empty() {
                break;
            }
            let pick = self.rng.gen_range_usize(0..batch.len());
            let skill = batch.remove(pick);
            self.players[seat].grant_skill(skill);
            grants.push((seat, skill.kind));
        }

        debug!(round = self.round, granted = grants.len(), "skill round");
        events.push(GameEvent::SkillsGranted { grants });
        self.skill_phase = false;
    }
}
