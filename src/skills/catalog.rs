//! The fixed skill catalog.
//!
//! The catalog is read-only static data. Granting a skill copies a
//! `Skill` value into a player's inventory, so consuming one instance
//! never touches the catalog or another player's copy.

use serde::{Deserialize, Serialize};

/// What a skill does when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    ForceDiscardHighest,
    Shield,
    PeekHand,
    SwapTwoCards,
    SkipTurn,
    ChaosPassAround,
    DrawLowestFromDeck,
    WildPlay,
}

impl SkillKind {
    /// Whether the skill is aimed at another seat.
    #[must_use]
    pub const fn is_targeted(self) -> bool {
        matches!(
            self,
            SkillKind::ForceDiscardHighest
                | SkillKind::PeekHand
                | SkillKind::SwapTwoCards
                | SkillKind::SkipTurn
        )
    }

    /// Whether a shield on the target negates the skill.
    #[must_use]
    pub const fn is_blockable(self) -> bool {
        matches!(
            self,
            SkillKind::ForceDiscardHighest | SkillKind::SkipTurn | SkillKind::SwapTwoCards
        )
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SkillKind::ForceDiscardHighest => "Sniper",
            SkillKind::Shield => "Shield",
            SkillKind::PeekHand => "Peek",
            SkillKind::SwapTwoCards => "Swap",
            SkillKind::SkipTurn => "Skip",
            SkillKind::ChaosPassAround => "Chaos",
            SkillKind::DrawLowestFromDeck => "Draw Lucky",
            SkillKind::WildPlay => "Wild Play",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            SkillKind::ForceDiscardHighest => "Force target player to discard their highest card",
            SkillKind::Shield => "Protect yourself from the next negative effect",
            SkillKind::PeekHand => "View another player's cards",
            SkillKind::SwapTwoCards => "Swap 2 random cards with target player",
            SkillKind::SkipTurn => "Skip target player's next turn",
            SkillKind::ChaosPassAround => "All players pass 1 random card to the next player",
            SkillKind::DrawLowestFromDeck => "Draw the lowest card from the deck",
            SkillKind::WildPlay => "Play any combination regardless of the table",
        }
    }
}

impl std::fmt::Display for SkillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A skill instance held by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub kind: SkillKind,
    /// Effect magnitude. No catalog entry uses one yet.
    pub magnitude: Option<u32>,
}

impl Skill {
    #[must_use]
    pub const fn new(kind: SkillKind) -> Self {
        Self {
            kind,
            magnitude: None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.kind.description()
    }
}

/// Every skill that can be granted.
pub const CATALOG: [Skill; 8] = [
    Skill::new(SkillKind::ForceDiscardHighest),
    Skill::new(SkillKind::Shield),
    Skill::new(SkillKind::PeekHand),
    Skill::new(SkillKind::SwapTwoCards),
    Skill::new(SkillKind::SkipTurn),
    Skill::new(SkillKind::ChaosPassAround),
    Skill::new(SkillKind::DrawLowestFromDeck),
    Skill::new(SkillKind::WildPlay),
];
