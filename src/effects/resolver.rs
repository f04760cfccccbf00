//! Skill resolution: applying a skill's effect to game state.
//!
//! The resolver assumes the caller has already checked turn order,
//! ownership and target validity, and has already consumed the skill
//! instance. It only mutates state and reports what happened.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::{GameRng, Seat, SEAT_COUNT};
use crate::game::{GameState, Player};
use crate::skills::SkillKind;

/// Why a skill resolved without changing anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoEffectReason {
    /// Swap or chaos found a hand with too few cards.
    InsufficientCards,
    /// Nothing left in the deck to draw.
    EmptyDeck,
    /// The target had no cards to discard.
    EmptyHand,
    /// A targeted skill was resolved without a target.
    NoTarget,
}

/// What a resolved skill did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillEffect {
    /// The target's shield absorbed the skill. The shield is gone.
    Blocked { target: Seat, skill: SkillKind },
    Discarded { target: Seat, card: Card },
    ShieldRaised { seat: Seat },
    /// Snapshot of the target's hand at the time of the peek.
    Peeked { target: Seat, cards: Vec<Card> },
    Swapped {
        actor: Seat,
        target: Seat,
        /// Cards that went from the actor to the target.
        given: Vec<Card>,
        /// Cards that went from the target to the actor.
        received: Vec<Card>,
    },
    SkipQueued { target: Seat },
    /// Each entry is (giver, card); the card went to the giver's next seat.
    ChaosPassed { passes: Vec<(Seat, Card)> },
    Drew { seat: Seat, card: Card },
    WildPlayArmed { seat: Seat },
    NoEffect { reason: NoEffectReason },
}

impl SkillEffect {
    /// Whether the effect changed any state.
    #[must_use]
    pub fn changed_state(&self) -> bool {
        !matches!(self, SkillEffect::NoEffect { .. } | SkillEffect::Peeked { .. })
    }
}

impl std::fmt::Display for SkillEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillEffect::Blocked { target, skill } => {
                write!(f, "{target} blocked {skill} with a shield")
            }
            SkillEffect::Discarded { target, card } => write!(f, "{target} discarded {card}"),
            SkillEffect::ShieldRaised { seat } => write!(f, "{seat} raised a shield"),
            SkillEffect::Peeked { target, cards } => {
                write!(f, "peeked at {target}:")?;
                for card in cards {
                    write!(f, " {card}")?;
                }
                Ok(())
            }
            SkillEffect::Swapped { actor, target, .. } => {
                write!(f, "{actor} swapped two cards with {target}")
            }
            SkillEffect::SkipQueued { target } => write!(f, "{target} will skip their next turn"),
            SkillEffect::ChaosPassed { .. } => f.write_str("every seat passed a card to the next"),
            SkillEffect::Drew { seat, card } => write!(f, "{seat} drew {card}"),
            SkillEffect::WildPlayArmed { seat } => write!(f, "{seat} armed a wild play"),
            SkillEffect::NoEffect { reason } => write!(f, "no effect ({reason:?})"),
        }
    }
}

/// Cards exchanged by a swap.
pub const SWAP_COUNT: usize = 2;

/// Applies skill effects to game state.
pub struct SkillResolver;

impl SkillResolver {
    /// Resolve `kind` used by `actor` against an optional `target`.
    pub fn resolve(
        state: &mut GameState,
        kind: SkillKind,
        actor: Seat,
        target: Option<Seat>,
    ) -> SkillEffect {
        if let Some(target) = target {
            if kind.is_blockable() && state.players[target].shielded {
                state.players[target].shielded = false;
                debug!(%actor, %target, skill = %kind, "skill blocked by shield");
                return SkillEffect::Blocked { target, skill: kind };
            }
        }

        let effect = match (kind, target) {
            (SkillKind::Shield, _) => {
                state.players[actor].shielded = true;
                SkillEffect::ShieldRaised { seat: actor }
            }
            (SkillKind::ChaosPassAround, _) => Self::chaos(state),
            (SkillKind::DrawLowestFromDeck, _) => match state.deck.take_lowest() {
                Some(card) => {
                    state.players[actor].add_card(card);
                    SkillEffect::Drew { seat: actor, card }
                }
                None => SkillEffect::NoEffect { reason: NoEffectReason::EmptyDeck },
            },
            (SkillKind::WildPlay, _) => {
                state.players[actor].wild_play = true;
                SkillEffect::WildPlayArmed { seat: actor }
            }

            (_, None) => SkillEffect::NoEffect { reason: NoEffectReason::NoTarget },

            (SkillKind::ForceDiscardHighest, Some(target)) => {
                let player = &mut state.players[target];
                match player.highest_card() {
                    Some(card) => {
                        player.remove_cards(&[card]);
                        state.discard.push(card);
                        SkillEffect::Discarded { target, card }
                    }
                    None => SkillEffect::NoEffect { reason: NoEffectReason::EmptyHand },
                }
            }
            (SkillKind::PeekHand, Some(target)) => {
                state.players[actor].reveal(target);
                SkillEffect::Peeked {
                    target,
                    cards: state.players[target].hand().to_vec(),
                }
            }
            (SkillKind::SwapTwoCards, Some(target)) => Self::swap(state, actor, target),
            (SkillKind::SkipTurn, Some(target)) => {
                state.players[target].skip_pending = true;
                SkillEffect::SkipQueued { target }
            }
        };

        debug!(%actor, skill = %kind, %effect, "skill resolved");
        debug_assert!(state.is_conserved(), "skill {kind} broke card conservation");
        effect
    }

    fn swap(state: &mut GameState, actor: Seat, target: Seat) -> SkillEffect {
        if state.players[actor].card_count() < SWAP_COUNT
            || state.players[target].card_count() < SWAP_COUNT
        {
            return SkillEffect::NoEffect { reason: NoEffectReason::InsufficientCards };
        }

        let given = take_random(&mut state.players[actor], &mut state.rng, SWAP_COUNT);
        let received = take_random(&mut state.players[target], &mut state.rng, SWAP_COUNT);

        for &card in &given {
            state.players[target].add_card(card);
        }
        for &card in &received {
            state.players[actor].add_card(card);
        }

        SkillEffect::Swapped { actor, target, given, received }
    }

    fn chaos(state: &mut GameState) -> SkillEffect {
        if state.players.values().any(|p| p.card_count() == 0) {
            return SkillEffect::NoEffect { reason: NoEffectReason::InsufficientCards };
        }

        // Every seat picks before anyone receives.
        let mut passes = Vec::with_capacity(SEAT_COUNT);
        for seat in Seat::all() {
            let picked = take_random(&mut state.players[seat], &mut state.rng, 1);
            passes.extend(picked.into_iter().map(|card| (seat, card)));
        }

        for &(giver, card) in &passes {
            state.players[giver.next()].add_card(card);
        }

        SkillEffect::ChaosPassed { passes }
    }
}

/// Remove `count` distinct cards chosen uniformly at random from `player`'s hand.
fn take_random(player: &mut Player, rng: &mut GameRng, count: usize) -> Vec<Card> {
    let mut indices = rng.sample_indices(player.card_count(), count);
    // Highest index first so earlier removals don't shift later ones.
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices.into_iter().map(|i| player.take_at(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::core::EngineConfig;

    fn setup_state(hands: [&str; SEAT_COUNT], deck: &str) -> GameState {
        let hands = hands.map(|h| parse_cards(h).unwrap());
        GameState::from_deal(
            &EngineConfig::default(),
            hands,
            parse_cards(deck).unwrap(),
            GameRng::new(42),
        )
        .unwrap()
    }

    fn seat(i: u8) -> Seat {
        Seat::new(i)
    }

    #[test]
    fn test_force_discard_highest() {
        let mut state = setup_state(["3S 4S", "5C 2H 9D", "6S", "7S"], "");

        let effect = SkillResolver::resolve(
            &mut state,
            SkillKind::ForceDiscardHighest,
            seat(0),
            Some(seat(1)),
        );

        let two_hearts = "2H".parse().unwrap();
        assert_eq!(effect, SkillEffect::Discarded { target: seat(1), card: two_hearts });
        assert_eq!(state.players[seat(1)].hand(), parse_cards("5C 9D").unwrap().as_slice());
        assert_eq!(state.discard, vec![two_hearts]);
        assert!(state.is_conserved());
    }

    #[test]
    fn test_force_discard_breaks_rank_tie_by_lowest_suit() {
        let mut state = setup_state(["3S 4S", "5C 2S 2H 9D", "6S", "7S"], "");

        let effect = SkillResolver::resolve(
            &mut state,
            SkillKind::ForceDiscardHighest,
            seat(0),
            Some(seat(1)),
        );

        let two_spades = "2S".parse().unwrap();
        assert_eq!(effect, SkillEffect::Discarded { target: seat(1), card: two_spades });
        assert_eq!(state.players[seat(1)].hand(), parse_cards("5C 9D 2H").unwrap().as_slice());
        assert_eq!(state.discard, vec![two_spades]);
    }

    #[test]
    fn test_force_discard_can_empty_hand() {
        let mut state = setup_state(["3S 4S", "KH", "6S", "7S"], "");

        SkillResolver::resolve(&mut state, SkillKind::ForceDiscardHighest, seat(0), Some(seat(1)));
        assert_eq!(state.players[seat(1)].card_count(), 0);
        assert!(state.winner.is_none());

        let effect = SkillResolver::resolve(
            &mut state,
            SkillKind::ForceDiscardHighest,
            seat(0),
            Some(seat(1)),
        );
        assert_eq!(effect, SkillEffect::NoEffect { reason: NoEffectReason::EmptyHand });
    }

    #[test]
    fn test_shield_blocks_discard() {
        let mut state = setup_state(["3S 4S", "5C 2H 9D", "6S", "7S"], "");
        state.players[seat(1)].shielded = true;
        let before = state.clone();

        let effect = SkillResolver::resolve(
            &mut state,
            SkillKind::ForceDiscardHighest,
            seat(0),
            Some(seat(1)),
        );

        assert_eq!(
            effect,
            SkillEffect::Blocked { target: seat(1), skill: SkillKind::ForceDiscardHighest }
        );
        assert!(!state.players[seat(1)].shielded);
        assert_eq!(state.players[seat(1)].hand(), before.players[seat(1)].hand());
        assert_eq!(state.players[seat(0)], before.players[seat(0)]);
        assert!(state.discard.is_empty());
    }

    #[test]
    fn test_shield_blocks_skip_and_swap_once() {
        let mut state = setup_state(["3S 4S", "5C 2H 9D", "6S", "7S"], "");
        state.players[seat(2)].shielded = true;

        let first = SkillResolver::resolve(&mut state, SkillKind::SkipTurn, seat(0), Some(seat(2)));
        assert!(matches!(first, SkillEffect::Blocked { .. }));
        assert!(!state.players[seat(2)].skip_pending);

        let second = SkillResolver::resolve(
            &mut state,
            SkillKind::SkipTurn,
            seat(0),
            Some(seat(2)),
        );
        assert_eq!(second, SkillEffect::SkipQueued { target: seat(2) });
        assert!(state.players[seat(2)].skip_pending);
    }

    #[test]
    fn test_shield_does_not_stop_peek() {
        let mut state = setup_state(["3S 4S", "5C 2H 9D", "6S", "7S"], "");
        state.players[seat(1)].shielded = true;

        let effect = SkillResolver::resolve(
            &mut state,
            SkillKind::PeekHand,
            seat(0),
            Some(seat(1)),
        );

        assert_eq!(
            effect,
            SkillEffect::Peeked { target: seat(1), cards: parse_cards("5C 9D 2H").unwrap() }
        );
        assert!(state.players[seat(1)].shielded);
        assert!(state.players[seat(0)].can_see(seat(1)));
        assert!(!effect.changed_state());
    }

    #[test]
    fn test_raise_shield() {
        let mut state = setup_state(["3S", "5C", "6S", "7S"], "");
        let effect = SkillResolver::resolve(&mut state, SkillKind::Shield, seat(3), None);
        assert_eq!(effect, SkillEffect::ShieldRaised { seat: seat(3) });
        assert!(state.players[seat(3)].shielded);
    }

    #[test]
    fn test_swap_exchanges_two_cards() {
        let mut state = setup_state(["3S 4S 5S", "6C 7C 8C 9C", "JS", "QS"], "");

        let effect = SkillResolver::resolve(
            &mut state,
            SkillKind::SwapTwoCards,
            seat(0),
            Some(seat(1)),
        );

        let SkillEffect::Swapped { given, received, .. } = effect else {
            panic!("expected a swap, got {effect:?}");
        };
        assert_eq!(given.len(), 2);
        assert_eq!(received.len(), 2);
        assert_eq!(state.players[seat(0)].card_count(), 3);
        assert_eq!(state.players[seat(1)].card_count(), 4);
        assert!(state.players[seat(1)].holds_all(&given));
        assert!(state.players[seat(0)].holds_all(&received));
        assert!(given.iter().all(|c| c.rank <= crate::cards::Rank::Five));
        assert!(state.is_conserved());
    }

    #[test]
    fn test_swap_needs_two_cards_each() {
        let mut state = setup_state(["3S 4S 5S", "6C", "JS", "QS"], "");
        let before = state.clone();

        let effect = SkillResolver::resolve(
            &mut state,
            SkillKind::SwapTwoCards,
            seat(0),
            Some(seat(1)),
        );

        assert_eq!(effect, SkillEffect::NoEffect { reason: NoEffectReason::InsufficientCards });
        assert_eq!(state.players[seat(0)], before.players[seat(0)]);
        assert_eq!(state.players[seat(1)], before.players[seat(1)]);
    }

    #[test]
    fn test_chaos_passes_to_next_seat() {
        let mut state = setup_state(["3S 4S", "6C 7C", "JS QS", "KH AH"], "");
        let sizes: Vec<usize> = state.players.values().map(Player::card_count).collect();

        let effect = SkillResolver::resolve(&mut state, SkillKind::ChaosPassAround, seat(0), None);

        let SkillEffect::ChaosPassed { passes } = effect else {
            panic!("expected chaos, got {effect:?}");
        };
        assert_eq!(passes.len(), SEAT_COUNT);
        for (giver, card) in passes {
            assert!(state.players[giver.next()].has_card(card));
            assert!(!state.players[giver].has_card(card));
        }
        let after: Vec<usize> = state.players.values().map(Player::card_count).collect();
        assert_eq!(sizes, after);
        assert!(state.is_conserved());
    }

    #[test]
    fn test_chaos_needs_every_seat_holding() {
        let mut state = setup_state(["3S 4S", "6C 7C", "", "KH AH"], "");
        let effect = SkillResolver::resolve(&mut state, SkillKind::ChaosPassAround, seat(0), None);
        assert_eq!(effect, SkillEffect::NoEffect { reason: NoEffectReason::InsufficientCards });
        assert_eq!(state.players[seat(0)].card_count(), 2);
    }

    #[test]
    fn test_draw_lowest() {
        let mut state = setup_state(["3S", "6C", "JS", "KH"], "9D 5H 2S 5C");

        let effect = SkillResolver::resolve(
            &mut state,
            SkillKind::DrawLowestFromDeck,
            seat(2),
            None,
        );

        let five_hearts = "5H".parse().unwrap();
        assert_eq!(effect, SkillEffect::Drew { seat: seat(2), card: five_hearts });
        assert!(state.players[seat(2)].has_card(five_hearts));
        assert_eq!(state.deck.len(), 3);
        assert!(state.is_conserved());
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut state = setup_state(["3S", "6C", "JS", "KH"], "");
        let effect = SkillResolver::resolve(
            &mut state,
            SkillKind::DrawLowestFromDeck,
            seat(2),
            None,
        );
        assert_eq!(effect, SkillEffect::NoEffect { reason: NoEffectReason::EmptyDeck });
        assert_eq!(state.players[seat(2)].card_count(), 1);
    }

    #[test]
    fn test_wild_play_arms_flag() {
        let mut state = setup_state(["3S", "6C", "JS", "KH"], "");
        let effect = SkillResolver::resolve(&mut state, SkillKind::WildPlay, seat(1), None);
        assert_eq!(effect, SkillEffect::WildPlayArmed { seat: seat(1) });
        assert!(state.players[seat(1)].wild_play);
    }

    #[test]
    fn test_targeted_without_target() {
        let mut state = setup_state(["3S", "6C", "JS", "KH"], "");
        let effect = SkillResolver::resolve(&mut state, SkillKind::SkipTurn, seat(1), None);
        assert_eq!(effect, SkillEffect::NoEffect { reason: NoEffectReason::NoTarget });
    }
}
