//! Actions a seat can take, and the history record of each one.
//!
//! ```
//! use big_two::cards::parse_cards;
//! use big_two::core::Action;
//! use big_two::skills::SkillKind;
//!
//! let play = Action::play(&parse_cards("3S 3C").unwrap());
//! assert_eq!(play.card_count(), 2);
//!
//! let pass = Action::Pass;
//! assert_eq!(pass.card_count(), 0);
//!
//! let skill = Action::UseSkill { skill: SkillKind::Shield, target: None };
//! assert!(!skill.is_play());
//! ```

use serde::{Deserialize, Serialize};

use super::player::Seat;
use crate::cards::Card;
use crate::rules::PlayCards;
use crate::skills::SkillKind;

/// A seat's action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put cards on the table.
    Play(PlayCards),
    /// Decline to beat the table.
    Pass,
    /// Spend one held skill.
    UseSkill {
        skill: SkillKind,
        target: Option<Seat>,
    },
}

impl Action {
    #[must_use]
    pub fn play(cards: &[Card]) -> Self {
        Action::Play(PlayCards::from_slice(cards))
    }

    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Action::Play(_))
    }

    /// Number of cards played (0 for non-play actions).
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            Action::Play(cards) => cards.len(),
            _ => 0,
        }
    }
}

/// Record of an accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat that acted.
    pub seat: Seat,
    /// The action taken.
    pub action: Action,
    /// Round counter when the action was taken.
    pub round: u32,
    /// Position in the game's history (0-based).
    pub sequence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn test_action_serialization() {
        let action = Action::play(&parse_cards("9S 9H").unwrap());
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }

    #[test]
    fn test_record_serialization() {
        let record = ActionRecord {
            seat: Seat::new(2),
            action: Action::UseSkill {
                skill: SkillKind::SkipTurn,
                target: Some(Seat::new(3)),
            },
            round: 4,
            sequence: 17,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
