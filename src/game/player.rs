//! Per-seat player state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{Seat, SeatConfig};
use crate::skills::{Skill, SkillKind};

/// A player at the table.
///
/// The hand is always kept in canonical (rank, suit) order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub is_human: bool,
    hand: Vec<Card>,
    skills: Vec<Skill>,
    /// Negates the next blockable skill aimed at this player.
    pub shielded: bool,
    /// This player's next turn is skipped.
    pub skip_pending: bool,
    /// The next play by this player bypasses the table.
    pub wild_play: bool,
    /// Seats whose hands this player may currently see.
    revealed: SmallVec<[Seat; 3]>,
}

impl Player {
    #[must_use]
    pub fn new(config: &SeatConfig) -> Self {
        Self {
            name: config.name.clone(),
            is_human: config.is_human,
            hand: Vec::new(),
            skills: Vec::new(),
            shielded: false,
            skip_pending: false,
            wild_play: false,
            revealed: SmallVec::new(),
        }
    }

    // === Hand ===

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.hand.binary_search(&card).is_ok()
    }

    #[must_use]
    pub fn holds_all(&self, cards: &[Card]) -> bool {
        cards.iter().all(|&c| self.has_card(c))
    }

    /// Add a card, keeping the hand sorted.
    pub fn add_card(&mut self, card: Card) {
        let pos = self.hand.binary_search(&card).unwrap_or_else(|pos| pos);
        self.hand.insert(pos, card);
    }

    /// Remove the given cards.
    ///
    /// All-or-nothing: returns false and leaves the hand alone if any card
    /// is missing.
    pub fn remove_cards(&mut self, cards: &[Card]) -> bool {
        if !self.holds_all(cards) {
            return false;
        }
        self.hand.retain(|c| !cards.contains(c));
        true
    }

    /// Remove and return the card at `index` in hand order.
    pub(crate) fn take_at(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    /// First card of the highest rank in hand.
    ///
    /// Ties within the top rank go to the lowest suit.
    #[must_use]
    pub fn highest_card(&self) -> Option<Card> {
        let top = self.hand.last()?.rank;
        self.hand.iter().copied().find(|c| c.rank == top)
    }

    /// Sum of the rank values left in hand.
    #[must_use]
    pub fn remaining_value(&self) -> u32 {
        self.hand.iter().map(|c| u32::from(c.value())).sum()
    }

    // === Skills ===

    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    #[must_use]
    pub fn has_skill(&self, kind: SkillKind) -> bool {
        self.skills.iter().any(|s| s.kind == kind)
    }

    pub fn grant_skill(&mut self, skill: Skill) {
        self.skills.push(skill);
    }

    /// Remove one held instance of `kind`.
    pub fn take_skill(&mut self, kind: SkillKind) -> Option<Skill> {
        let pos = self.skills.iter().position(|s| s.kind == kind)?;
        Some(self.skills.remove(pos))
    }

    // === Visibility ===

    /// Whether this player may see `seat`'s hand through a peek.
    #[must_use]
    pub fn can_see(&self, seat: Seat) -> bool {
        self.revealed.contains(&seat)
    }

    pub(crate) fn reveal(&mut self, seat: Seat) {
        if !self.revealed.contains(&seat) {
            self.revealed.push(seat);
        }
    }

    pub(crate) fn forget_revealed(&mut self) {
        self.revealed.clear();
    }
}
