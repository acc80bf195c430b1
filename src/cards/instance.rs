//! Creature instances - runtime creature state.
//!
//! A `Wizard` is a creature in play: on a field, or (for a dragon) standing on
//! its Dragonius permanent. It tracks HP, the two per-turn buffs and the one
//! permanent that may be attached to it.

use serde::{Deserialize, Serialize};

use super::definition::{Attack, CardDefinition, CardId};
use super::names::CardName;
use crate::error::TargetError;
use crate::rules::constants::{ARMORIUS_REDUCTION, DRAGONIUS_DAMAGE, DRAGONIUS_HP, RESISTANCE_REDUCTION, VITALIUS_MAX_HP_BONUS};

/// Slot of the synthetic repeat attack.
pub const REPEAT_ATTACK_SLOT: u8 = 2;

/// A creature in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wizard {
    /// Card this creature was played from.
    pub card: CardId,

    /// Known card name, if any.
    pub name: Option<CardName>,

    /// Current HP, always within `0..=max_hp`.
    pub hp: i64,

    /// The two attacks.
    pub attacks: [Attack; 2],

    /// Immune to damage until its owner's next turn.
    pub protected: bool,

    /// Takes one less damage until its owner's next turn.
    pub resistance: bool,

    /// Permanent currently bound to this creature.
    pub attached: Option<CardName>,
}

impl Wizard {
    /// Fresh creature from a wizard definition.
    #[must_use]
    pub fn from_definition(card: &CardDefinition) -> Self {
        Self {
            card: card.id,
            name: CardName::from_id(card.id),
            hp: card.hp,
            attacks: card.attacks.clone(),
            protected: false,
            resistance: false,
            attached: None,
        }
    }

    /// The dragon summoned by a Dragonius permanent.
    #[must_use]
    pub fn dragon() -> Self {
        Self {
            card: CardName::Dragonius.id(),
            name: Some(CardName::Dragonius),
            hp: DRAGONIUS_HP,
            attacks: [Attack::new("Dragon Breath", DRAGONIUS_DAMAGE), Attack::default()],
            protected: false,
            resistance: false,
            attached: None,
        }
    }

    /// Whether this is a Dragonius dragon.
    #[must_use]
    pub fn is_dragon(&self) -> bool {
        self.name == Some(CardName::Dragonius)
    }

    /// HP above zero.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// HP ceiling given the match's base maximum.
    #[must_use]
    pub fn max_hp(&self, base: i64) -> i64 {
        if self.attached == Some(CardName::Vitalius) {
            base + VITALIUS_MAX_HP_BONUS
        } else {
            base
        }
    }

    /// Attack in `slot`. Slot 2 repeats attack 0 without its effect.
    pub fn attack(&self, slot: u8) -> Result<Attack, TargetError> {
        match slot {
            0 | 1 => Ok(self.attacks[slot as usize].clone()),
            REPEAT_ATTACK_SLOT => Ok(self.attacks[0].plain()),
            _ => Err(TargetError::InvalidAttackSlot(slot)),
        }
    }

    /// Damage left after protection, resistance and armor.
    ///
    /// Only positive amounts are reduced; healing passes through. The result
    /// can go below zero (resistance and armor on a 1-damage hit).
    #[must_use]
    pub fn mitigate(&self, amount: i64) -> i64 {
        if amount <= 0 {
            return amount;
        }
        if self.protected {
            return 0;
        }
        let mut amount = amount;
        if self.resistance {
            amount -= RESISTANCE_REDUCTION;
        }
        if self.attached == Some(CardName::Armorius) {
            amount -= ARMORIUS_REDUCTION;
        }
        amount
    }

    /// Subtract `amount` from HP, clamped to `0..=max_hp`. Returns whether
    /// this took the creature from alive to dead.
    pub fn adjust_hp(&mut self, amount: i64, base_max: i64) -> bool {
        let was_alive = self.is_alive();
        self.hp = (self.hp - amount).clamp(0, self.max_hp(base_max));
        was_alive && self.hp == 0
    }

    /// Drop the this-turn buffs.
    pub fn clear_turn_buffs(&mut self) {
        self.protected = false;
        self.resistance = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{AttackEffect, CardCatalog};

    fn librarian() -> Wizard {
        let catalog = CardCatalog::standard();
        Wizard::from_definition(catalog.get(CardName::Librarian.id()).unwrap())
    }

    #[test]
    fn test_from_definition() {
        let w = librarian();

        assert_eq!(w.name, Some(CardName::Librarian));
        assert_eq!(w.hp, 8);
        assert!(w.is_alive());
        assert!(!w.is_dragon());
    }

    #[test]
    fn test_attack_slots() {
        let w = librarian();

        assert_eq!(w.attack(0).unwrap().effect(), AttackEffect::DrawOne);
        assert_eq!(w.attack(1).unwrap().effect(), AttackEffect::DamagePerCardInHand);
        assert_eq!(w.attack(2).unwrap().effect(), AttackEffect::Plain);
        assert_eq!(w.attack(2).unwrap().damage, 2);
        assert_eq!(w.attack(3), Err(TargetError::InvalidAttackSlot(3)));
    }

    #[test]
    fn test_mitigation() {
        let mut w = librarian();
        assert_eq!(w.mitigate(3), 3);

        w.resistance = true;
        assert_eq!(w.mitigate(3), 2);

        w.attached = Some(CardName::Armorius);
        assert_eq!(w.mitigate(3), 1);
        assert_eq!(w.mitigate(1), -1);
        assert_eq!(w.mitigate(-2), -2);

        w.protected = true;
        assert_eq!(w.mitigate(8), 0);
        assert_eq!(w.mitigate(-2), -2);
    }

    #[test]
    fn test_adjust_hp_clamps() {
        let mut w = librarian();

        assert!(!w.adjust_hp(-5, 8));
        assert_eq!(w.hp, 8);

        w.attached = Some(CardName::Vitalius);
        w.adjust_hp(-5, 8);
        assert_eq!(w.hp, 10);

        assert!(w.adjust_hp(20, 8));
        assert_eq!(w.hp, 0);
        assert!(!w.adjust_hp(1, 8));
    }

    #[test]
    fn test_dragon() {
        let d = Wizard::dragon();

        assert!(d.is_dragon());
        assert_eq!(d.hp, 3);
        assert_eq!(d.attacks[0].damage, 3);
    }
}
