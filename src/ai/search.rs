//! Greedy single-ply play search.
//!
//! Candidates are enumerated from the hand, filtered through the same
//! `check_play` the engine uses for humans, and ranked by a fixed
//! preference: most cards first, then the lowest total rank value.

use tracing::trace;

use crate::cards::Card;
use crate::rules::{check_play, Combination, PlayCards, TableState};

/// Size of the largest combination.
const FIVE: usize = 5;

/// Every play shape the search considers for `hand`.
///
/// In order: each single, each same-rank pair, the first three cards of
/// each rank held three or more times, and (for hands of five or more)
/// every 5-card subset. Five-card subsets are not pre-filtered; the
/// legality check discards the ones that don't classify.
#[must_use]
pub fn enumerate_candidates(hand: &[Card]) -> Vec<PlayCards> {
    let mut candidates: Vec<PlayCards> =
        hand.iter().map(|&c| PlayCards::from_slice(&[c])).collect();

    for (i, &a) in hand.iter().enumerate() {
        for &b in &hand[i + 1..] {
            if a.rank == b.rank {
                candidates.push(PlayCards::from_slice(&[a, b]));
            }
        }
    }

    let mut seen_ranks = Vec::new();
    for &card in hand {
        if seen_ranks.contains(&card.rank) {
            continue;
        }
        seen_ranks.push(card.rank);
        let same: PlayCards =
            hand.iter().copied().filter(|c| c.rank == card.rank).take(3).collect();
        if same.len() == 3 {
            candidates.push(same);
        }
    }

    if hand.len() >= FIVE {
        for_each_subset(hand.len(), FIVE, |indices| {
            candidates.push(indices.iter().map(|&i| hand[i]).collect());
        });
    }

    candidates
}

/// Best legal play from `hand`, or `None` if the seat has to pass.
///
/// Prefers the play with the most cards; among those, the lowest total
/// rank value. Ties go to the earliest candidate.
#[must_use]
pub fn find_best_play(
    hand: &[Card],
    table: &TableState,
    first_play: bool,
    wild_play: bool,
) -> Option<Combination> {
    let candidates = enumerate_candidates(hand);
    let considered = candidates.len();

    let best = candidates
        .iter()
        .filter_map(|cards| check_play(cards, table, first_play, wild_play).ok())
        .min_by_key(|combo| (std::cmp::Reverse(combo.cards.len()), combo.rank_sum()));

    trace!(considered, found = best.is_some(), "play search");
    best
}

/// Call `f` with every sorted `k`-subset of `0..n`, in lexicographic order.
fn for_each_subset(n: usize, k: usize, mut f: impl FnMut(&[usize])) {
    if k > n {
        return;
    }
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        f(&indices);

        // Rightmost index that can still move up.
        let Some(pos) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
            return;
        };
        indices[pos] += 1;
        for i in pos + 1..k {
            indices[i] = indices[i - 1] + 1;
        }
    }
}
