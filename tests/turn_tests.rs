//! Turn and round state machine tests.
//!
//! Games are dealt from fixed hands so every transition is predictable.

use big_two::cards::{parse_cards, Card};
use big_two::core::{EngineConfig, Seat};
use big_two::game::{BigTwoGame, GameEvent, Phase};
use big_two::rules::classify;
use big_two::skills::{Skill, SkillKind};
use rustc_hash::FxHashSet;

fn cards(notation: &str) -> Vec<Card> {
    parse_cards(notation).unwrap()
}

fn seat(i: u8) -> Seat {
    Seat::new(i)
}

/// Seat 0 opens; every seat has plenty of cards so nobody goes out.
fn rigged_with(config: EngineConfig) -> BigTwoGame {
    let hands = [
        cards("3S 4S 5S 6S 7S"),
        cards("3C 4C 5C 6C 7C"),
        cards("3D 4D 5D 6D 7D"),
        cards("3H 4H 5H 6H 7H"),
    ];
    BigTwoGame::from_deal(config, hands, vec![]).unwrap()
}

fn rigged() -> BigTwoGame {
    rigged_with(EngineConfig::default())
}

fn skill_grants(events: &[GameEvent]) -> Option<&Vec<(Seat, SkillKind)>> {
    events.iter().find_map(|e| match e {
        GameEvent::SkillsGranted { grants } => Some(grants),
        _ => None,
    })
}

// =============================================================================
// Opening
// =============================================================================

#[test]
fn test_holder_of_three_of_spades_starts() {
    let hands = [
        cards("4S 5S"),
        cards("6S 7S"),
        cards("3S 8S"),
        cards("9S 10S"),
    ];
    let game = BigTwoGame::from_deal(EngineConfig::default(), hands, vec![]).unwrap();

    assert_eq!(game.current_seat(), seat(2));
    assert_eq!(game.phase(), Phase::AwaitingPlay(seat(2)));
    assert!(game.state().first_play_pending);
}

#[test]
fn test_pass_allowed_before_opening() {
    let mut game = rigged();

    game.pass(seat(0)).unwrap();

    assert_eq!(game.current_seat(), seat(1));
    assert!(game.state().first_play_pending);
    assert_eq!(game.pass_count(), 1);
}

// =============================================================================
// Passing
// =============================================================================

#[test]
fn test_three_passes_clear_table() {
    let mut game = rigged();
    game.play(seat(0), &cards("3S")).unwrap();

    game.pass(seat(1)).unwrap();
    game.pass(seat(2)).unwrap();
    assert_eq!(game.pass_count(), 2);
    assert!(!game.table_state().is_clear());

    let outcome = game.pass(seat(3)).unwrap();

    assert!(outcome.table_cleared());
    assert!(game.table_state().is_clear());
    assert_eq!(game.table_state().strength(), 0);
    assert!(game.table_state().cards().is_empty());
    assert_eq!(game.pass_count(), 0);
    // One round for the clear, one for coming back around to the starter.
    assert_eq!(game.round_number(), 2);
    assert_eq!(game.current_seat(), seat(0));
}

#[test]
fn test_play_resets_pass_counter() {
    let mut game = rigged();
    game.play(seat(0), &cards("3S")).unwrap();
    game.pass(seat(1)).unwrap();
    game.pass(seat(2)).unwrap();

    game.play(seat(3), &cards("7H")).unwrap();

    assert_eq!(game.pass_count(), 0);
    assert_eq!(game.table_state().strength(), 7);
}

#[test]
fn test_cleared_table_accepts_weaker_play() {
    let mut game = rigged();
    game.play(seat(0), &cards("3S")).unwrap();
    game.play(seat(1), &cards("5C")).unwrap();
    game.pass(seat(2)).unwrap();
    game.pass(seat(3)).unwrap();
    assert!(!game.legal_play(&cards("4S")));

    game.pass(seat(0)).unwrap();

    // Seat 1 leads the fresh table and may go lower than its own 5.
    assert_eq!(game.current_seat(), seat(1));
    assert!(game.legal_play(&cards("3C")));
    game.play(seat(1), &cards("3C")).unwrap();
    assert_eq!(game.table_state().strength(), 3);
}

// =============================================================================
// Rotation
// =============================================================================

#[test]
fn test_full_rotation_advances_round() {
    let mut game = rigged();

    game.play(seat(0), &cards("3S")).unwrap();
    game.play(seat(1), &cards("4C")).unwrap();
    game.play(seat(2), &cards("5D")).unwrap();
    assert_eq!(game.round_number(), 0);

    let outcome = game.play(seat(3), &cards("6H")).unwrap();

    assert!(outcome.events.contains(&GameEvent::RoundAdvanced { round: 1 }));
    assert_eq!(game.round_number(), 1);
    assert_eq!(game.current_seat(), seat(0));
}

#[test]
fn test_rotation_before_opening_does_not_count() {
    let mut game = rigged();
    game.pass(seat(0)).unwrap();
    game.pass(seat(1)).unwrap();
    game.pass(seat(2)).unwrap();
    game.pass(seat(3)).unwrap();

    // The third pass cleared an empty table; coming back to seat 0 does
    // not count while the opening play is still pending.
    assert_eq!(game.round_number(), 1);
    assert_eq!(game.current_seat(), seat(0));
}

// =============================================================================
// Skips
// =============================================================================

#[test]
fn test_skipped_seat_never_acts() {
    let mut game = rigged();
    game.state_mut().players[seat(0)].grant_skill(Skill::new(SkillKind::SkipTurn));
    game.use_skill(seat(0), SkillKind::SkipTurn, Some(seat(1))).unwrap();

    let outcome = game.play(seat(0), &cards("3S")).unwrap();

    assert!(outcome.events.contains(&GameEvent::TurnSkipped { seat: seat(1) }));
    assert_eq!(game.current_seat(), seat(2));
    assert_eq!(game.pass_count(), 1);
    assert!(!game.player(seat(1)).skip_pending);
}

#[test]
fn test_skip_can_complete_a_clear() {
    let mut game = rigged();
    game.state_mut().players[seat(0)].grant_skill(Skill::new(SkillKind::SkipTurn));
    game.use_skill(seat(0), SkillKind::SkipTurn, Some(seat(3))).unwrap();
    game.play(seat(0), &cards("3S")).unwrap();
    game.pass(seat(1)).unwrap();

    let outcome = game.pass(seat(2)).unwrap();

    assert!(outcome.events.contains(&GameEvent::TurnSkipped { seat: seat(3) }));
    assert!(outcome.table_cleared());
    assert!(game.table_state().is_clear());
    assert_eq!(game.current_seat(), seat(0));
}

// =============================================================================
// Skill rounds
// =============================================================================

#[test]
fn test_skill_round_grants_one_skill_per_seat() {
    let mut game = rigged();
    game.play(seat(0), &cards("3S")).unwrap();
    game.state_mut().round = 3;
    game.pass(seat(1)).unwrap();
    game.pass(seat(2)).unwrap();

    let outcome = game.pass(seat(3)).unwrap();

    let grants = skill_grants(&outcome.events).expect("skill round should fire at round 4");
    assert_eq!(grants.len(), 4);
    let kinds: FxHashSet<SkillKind> = grants.iter().map(|(_, k)| *k).collect();
    assert_eq!(kinds.len(), 4, "a batch holds distinct skills");
    for s in Seat::all() {
        assert_eq!(game.granted_skills_of(s).len(), 1);
    }
    // Coming back around to the starter moved on to round 5 without a second grant.
    assert_eq!(game.round_number(), 5);
    assert!(!game.state().skill_phase);
}

#[test]
fn test_skill_round_batch_exhaustion() {
    let mut game = rigged_with(EngineConfig::default().with_skills_per_round(2));
    game.play(seat(0), &cards("3S")).unwrap();
    game.state_mut().round = 3;
    game.pass(seat(1)).unwrap();
    game.pass(seat(2)).unwrap();

    let outcome = game.pass(seat(3)).unwrap();

    let grants = skill_grants(&outcome.events).unwrap();
    let granted: Vec<Seat> = grants.iter().map(|(s, _)| *s).collect();
    assert_eq!(granted, vec![seat(0), seat(1)]);
    assert_eq!(game.granted_skills_of(seat(0)).len(), 1);
    assert_eq!(game.granted_skills_of(seat(1)).len(), 1);
    assert!(game.granted_skills_of(seat(2)).is_empty());
    assert!(game.granted_skills_of(seat(3)).is_empty());
}

#[test]
fn test_no_skill_round_before_opening() {
    let mut game = rigged();
    game.state_mut().round = 3;
    game.pass(seat(0)).unwrap();
    game.pass(seat(1)).unwrap();

    let outcome = game.pass(seat(2)).unwrap();

    assert_eq!(game.round_number(), 4);
    assert!(skill_grants(&outcome.events).is_none());
    assert!(Seat::all().all(|s| game.granted_skills_of(s).is_empty()));
}

#[test]
fn test_custom_interval() {
    let mut game = rigged_with(EngineConfig::default().with_skill_round_interval(2));
    assert_eq!(game.rounds_until_skill_round(), 1);

    game.play(seat(0), &cards("3S")).unwrap();
    game.play(seat(1), &cards("4C")).unwrap();
    game.play(seat(2), &cards("5D")).unwrap();
    game.play(seat(3), &cards("6H")).unwrap();
    assert_eq!(game.round_number(), 1);
    assert_eq!(game.rounds_until_skill_round(), 2);

    game.play(seat(0), &cards("7S")).unwrap();
    game.pass(seat(1)).unwrap();
    game.pass(seat(2)).unwrap();
    let outcome = game.pass(seat(3)).unwrap();

    // Clear to round 2 (skill round), then back to the starter for round 3.
    assert!(skill_grants(&outcome.events).is_some());
    assert_eq!(game.round_number(), 3);
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_history_records_accepted_actions_only() {
    let mut game = rigged();
    let _ = game.play(seat(1), &cards("3C"));
    let _ = game.play(seat(0), &cards("4S"));
    game.play(seat(0), &cards("3S")).unwrap();
    game.pass(seat(1)).unwrap();

    let history = game.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].seat, seat(0));
    assert_eq!(history[0].sequence, 0);
    assert_eq!(history[1].seat, seat(1));
    assert_eq!(history[1].sequence, 1);
    assert_eq!(
        history[0].action,
        big_two::core::Action::Play(classify(&cards("3S")).unwrap().cards)
    );
}
