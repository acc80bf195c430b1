//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type: the
//! Librarian always starts with 8 HP and the same two attacks, Pyrus Balio
//! always costs 1. Runtime state (current HP, buffs, attachments) lives in
//! `Wizard` and `Permanent`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Ids are 1-based and follow catalog order. Hands and decks store these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Kind of card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    /// A creature that goes on the field.
    #[serde(rename = "wizard")]
    Wizard,
    /// A lasting spell placed in a permanent slot.
    #[serde(rename = "perm")]
    Permanent,
    /// A one-shot spell.
    #[serde(rename = "instant")]
    Instant,
}

/// Behavior attached to an attack, keyed by the attack's name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackEffect {
    /// Damage only.
    #[default]
    Plain,
    /// Attacker's owner draws a card.
    DrawOne,
    /// Attacker's owner gains one mana at their next turn start.
    GainBonusMana,
    /// Allies become immune to damage this turn.
    GuardAllies,
    /// Allies take one less damage this turn.
    ResistAllies,
    /// Attacker's owner pays one less for their next card.
    DiscountNextSpell,
    /// Allies take recoil damage.
    RecoilAllies,
    /// Attacker returns to its owner's hand.
    Vanish,
    /// Attacker takes recoil, then returns to hand if it survived.
    VanishWithRecoil,
    /// The defender's neighbours are also hit.
    SplashAdjacent,
    /// Every creature of every other player is hit.
    SplashAll,
    /// Follow up by removing a permanent.
    RemovePermanent,
    /// Follow up by sacrificing self to fully heal an ally.
    Revive,
    /// Follow up with a second, plain attack.
    AttackAgain,
    /// Attack again after every kill.
    Frenzy,
    /// Extra damage per card in hand.
    DamagePerCardInHand,
    /// Double damage when every ally is dead.
    DoubleIfAlliesDead,
    /// Ignores protection, resistance and armor.
    Bypass,
}

impl AttackEffect {
    /// Effect for an attack name. Unknown names deal damage only.
    ///
    /// ```
    /// use wizard_duel::cards::AttackEffect;
    ///
    /// assert_eq!(AttackEffect::from_name("splash"), AttackEffect::SplashAdjacent);
    /// assert_eq!(AttackEffect::from_name("Fireball"), AttackEffect::Plain);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "draw1" => Self::DrawOne,
            "moreMana" => Self::GainBonusMana,
            "protect" => Self::GuardAllies,
            "reduce" => Self::ResistAllies,
            "nextDiscount" => Self::DiscountNextSpell,
            "hurtAllies" => Self::RecoilAllies,
            "disappear" => Self::Vanish,
            "disappear2" => Self::VanishWithRecoil,
            "splash" => Self::SplashAdjacent,
            "megaSplash" => Self::SplashAll,
            "removePerm" => Self::RemovePermanent,
            "revive" => Self::Revive,
            "attackTwice" => Self::AttackAgain,
            "frenzy" => Self::Frenzy,
            "dmgPerCard" => Self::DamagePerCardInHand,
            "double" => Self::DoubleIfAlliesDead,
            "bypass" => Self::Bypass,
            _ => Self::Plain,
        }
    }

    /// Whether the attack leaves a follow-up prompt.
    #[must_use]
    pub fn awaits_followup(self) -> bool {
        matches!(self, Self::RemovePermanent | Self::Revive | Self::AttackAgain)
    }
}

/// One of a creature's attacks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "AttackData", into = "AttackData")]
pub struct Attack {
    /// Attack name. Also selects the effect.
    pub name: String,
    /// Listed damage. Negative values heal.
    pub damage: i64,
    /// Card text.
    pub description: String,
    effect: AttackEffect,
}

impl Attack {
    /// Create an attack; the effect is derived from `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, damage: i64) -> Self {
        let name = name.into();
        Self {
            effect: AttackEffect::from_name(&name),
            name,
            damage,
            description: String::new(),
        }
    }

    /// Set the card text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Copy of this attack with the effect stripped.
    #[must_use]
    pub fn plain(&self) -> Self {
        Self {
            effect: AttackEffect::Plain,
            ..self.clone()
        }
    }

    /// The attack's side effect.
    #[must_use]
    pub fn effect(&self) -> AttackEffect {
        self.effect
    }
}

/// Wire shape of an attack in card data files.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct AttackData {
    #[serde(default)]
    name: String,
    #[serde(default)]
    dmg: i64,
    #[serde(default)]
    desc: String,
}

impl From<AttackData> for Attack {
    fn from(data: AttackData) -> Self {
        Attack::new(data.name, data.dmg).with_description(data.desc)
    }
}

impl From<Attack> for AttackData {
    fn from(attack: Attack) -> Self {
        Self {
            name: attack.name,
            dmg: attack.damage,
            desc: attack.description,
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use wizard_duel::cards::{Attack, CardCategory, CardDefinition, CardId};
///
/// let angel = CardDefinition::wizard(CardId::new(5), "Angel", 8)
///     .with_attacks(Attack::new("heal", -2), Attack::new("revive", 0));
///
/// assert_eq!(angel.category, CardCategory::Wizard);
/// assert_eq!(angel.attacks[0].damage, -2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CardData", into = "CardData")]
pub struct CardDefinition {
    /// Catalog id. Not part of card data files; assigned by position.
    pub id: CardId,

    /// Card name as printed.
    pub name: String,

    /// Card kind.
    pub category: CardCategory,

    /// Starting HP for wizards, mana cost for everything else.
    pub hp: i64,

    /// Card text.
    pub description: String,

    /// The two attacks. Empty for spells.
    pub attacks: [Attack; 2],
}

impl CardDefinition {
    fn new(id: CardId, name: impl Into<String>, category: CardCategory, hp: i64) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            hp,
            description: String::new(),
            attacks: Default::default(),
        }
    }

    /// A wizard with the given starting HP.
    #[must_use]
    pub fn wizard(id: CardId, name: impl Into<String>, hp: i64) -> Self {
        Self::new(id, name, CardCategory::Wizard, hp)
    }

    /// A permanent with the given cost.
    #[must_use]
    pub fn permanent(id: CardId, name: impl Into<String>, cost: i64) -> Self {
        Self::new(id, name, CardCategory::Permanent, cost)
    }

    /// An instant with the given cost.
    #[must_use]
    pub fn instant(id: CardId, name: impl Into<String>, cost: i64) -> Self {
        Self::new(id, name, CardCategory::Instant, cost)
    }

    /// Set both attacks.
    #[must_use]
    pub fn with_attacks(mut self, first: Attack, second: Attack) -> Self {
        self.attacks = [first, second];
        self
    }

    /// Set the card text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mana cost. Zero for wizards.
    #[must_use]
    pub fn cost(&self) -> i64 {
        match self.category {
            CardCategory::Wizard => 0,
            _ => self.hp,
        }
    }
}

/// Wire shape of a card in card data files.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CardData {
    #[serde(rename = "type")]
    category: CardCategory,
    name: String,
    #[serde(default)]
    desc: String,
    hp: i64,
    #[serde(default)]
    atk1: Attack,
    #[serde(default)]
    atk2: Attack,
}

impl From<CardData> for CardDefinition {
    fn from(data: CardData) -> Self {
        Self {
            id: CardId::default(),
            name: data.name,
            category: data.category,
            hp: data.hp,
            description: data.desc,
            attacks: [data.atk1, data.atk2],
        }
    }
}

impl From<CardDefinition> for CardData {
    fn from(card: CardDefinition) -> Self {
        let [atk1, atk2] = card.attacks;
        Self {
            category: card.category,
            name: card.name,
            desc: card.description,
            hp: card.hp,
            atk1,
            atk2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_attack_effect_from_name() {
        assert_eq!(Attack::new("draw1", 2).effect(), AttackEffect::DrawOne);
        assert_eq!(Attack::new("frenzy", 4).effect(), AttackEffect::Frenzy);
        assert_eq!(Attack::new("Dragon Breath", 3).effect(), AttackEffect::Plain);
        assert!(AttackEffect::Revive.awaits_followup());
        assert!(!AttackEffect::Frenzy.awaits_followup());
    }

    #[test]
    fn test_plain_copy() {
        let attack = Attack::new("attackTwice", 1).plain();

        assert_eq!(attack.name, "attackTwice");
        assert_eq!(attack.damage, 1);
        assert_eq!(attack.effect(), AttackEffect::Plain);
    }

    #[test]
    fn test_cost() {
        let pyrus = CardDefinition::instant(CardId::new(11), "PyrusBalio", 1);
        let angel = CardDefinition::wizard(CardId::new(5), "Angel", 8);

        assert_eq!(pyrus.cost(), 1);
        assert_eq!(angel.cost(), 0);
    }

    #[test]
    fn test_card_data_shape() {
        let json = r#"{
            "type": "wizard",
            "name": "Pyromancer",
            "desc": "Burns things",
            "hp": 8,
            "atk1": {"name": "splash", "dmg": 1, "desc": "Hits neighbours"},
            "atk2": {"name": "megaSplash", "dmg": 0, "desc": "Hits everyone"}
        }"#;
        let card: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(card.category, CardCategory::Wizard);
        assert_eq!(card.hp, 8);
        assert_eq!(card.attacks[0].effect(), AttackEffect::SplashAdjacent);
        assert_eq!(card.attacks[1].description, "Hits everyone");
        assert_eq!(card.id, CardId::default());
    }

    #[test]
    fn test_spell_without_attacks() {
        let json = r#"{"type": "instant", "name": "Dralio", "desc": "Draw two", "hp": 1}"#;
        let card: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(card.category, CardCategory::Instant);
        assert_eq!(card.attacks[0], Attack::default());
    }
}
