//! References to things on the board.
//!
//! A `Target` names a creature on a field, a permanent in a permanent row, or
//! (for Extractio) a card in a deck. It is only a reference: it is resolved
//! against the board each time it is used and may dangle after the board
//! changes.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Which part of a player's board a target points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetArea {
    /// A creature on the field. `slot` is the field position.
    Creature,
    /// A permanent. `slot` is the permanent slot.
    Permanent,
    /// A card in the deck. `slot` holds the card id.
    Deck,
}

/// A board reference plus the attack slot used when it attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    /// Owner of the referenced thing.
    pub player: PlayerId,
    /// Field position, permanent slot or card id, depending on `area`.
    pub slot: usize,
    /// Area of the board.
    pub area: TargetArea,
    /// Attack slot (0, 1 or the synthetic repeat 2). Ignored unless attacking.
    pub attack: u8,
}

impl Target {
    /// A creature on `player`'s field.
    #[must_use]
    pub const fn creature(player: PlayerId, slot: usize) -> Self {
        Self {
            player,
            slot,
            area: TargetArea::Creature,
            attack: 0,
        }
    }

    /// A permanent (or the dragon standing on it).
    #[must_use]
    pub const fn permanent(player: PlayerId, slot: usize) -> Self {
        Self {
            player,
            slot,
            area: TargetArea::Permanent,
            attack: 0,
        }
    }

    /// A card in `player`'s deck.
    #[must_use]
    pub const fn card(player: PlayerId, card: usize) -> Self {
        Self {
            player,
            slot: card,
            area: TargetArea::Deck,
            attack: 0,
        }
    }

    /// Use the given attack slot.
    #[must_use]
    pub const fn with_attack(mut self, attack: u8) -> Self {
        self.attack = attack;
        self
    }

    /// The permanent slot this target addresses, if it addresses one.
    #[must_use]
    pub const fn perm_slot(&self) -> Option<PermSlot> {
        match self.area {
            TargetArea::Permanent => Some(PermSlot::new(self.player, self.slot)),
            _ => None,
        }
    }

    /// Whether this is a field creature.
    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.area == TargetArea::Creature
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.area {
            TargetArea::Creature => write!(f, "{} creature {}", self.player, self.slot),
            TargetArea::Permanent => write!(f, "{} permanent {}", self.player, self.slot),
            TargetArea::Deck => write!(f, "{} deck card {}", self.player, self.slot),
        }
    }
}

/// Address of a permanent slot. Orders by player, then slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PermSlot {
    /// Owner.
    pub player: PlayerId,
    /// Slot in `0..permanent_capacity`.
    pub slot: usize,
}

impl PermSlot {
    /// Create a slot address.
    #[must_use]
    pub const fn new(player: PlayerId, slot: usize) -> Self {
        Self { player, slot }
    }

    /// The target pointing at this slot.
    #[must_use]
    pub const fn target(self) -> Target {
        Target::permanent(self.player, self.slot)
    }
}
