//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition of a match. It is built
//! once, before any match exists, and then shared read-only (as an `Arc`)
//! by every `GameState` created from it.

use rustc_hash::FxHashMap;

use super::definition::{Attack, CardCategory, CardDefinition, CardId};
use super::names::CardName;
use crate::error::CatalogError;

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use wizard_duel::cards::{CardCatalog, CardName};
///
/// let catalog = CardCatalog::standard();
///
/// let found = catalog.get(CardName::Pyromancer.id()).unwrap();
/// assert_eq!(found.name, "Pyromancer");
/// assert_eq!(catalog.len(), 27);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    order: Vec<CardId>,
}

impl CardCatalog {
    /// Build a catalog from definitions. Ids are reassigned 1..=n in order.
    #[must_use]
    pub fn from_definitions(definitions: Vec<CardDefinition>) -> Self {
        let mut catalog = Self::default();
        for (i, mut card) in definitions.into_iter().enumerate() {
            card.id = CardId::new(i as u32 + 1);
            catalog.order.push(card.id);
            catalog.cards.insert(card.id, card);
        }
        catalog
    }

    /// Parse a JSON array of cards in card data file shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<CardDefinition> = serde_json::from_str(json)?;
        if definitions.is_empty() {
            return Err(CatalogError::Empty);
        }
        let catalog = Self::from_definitions(definitions);
        log::debug!("loaded {} card definitions", catalog.len());
        Ok(catalog)
    }

    /// Serialize back to a JSON array in catalog order.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.iter().collect::<Vec<_>>())?)
    }

    /// The built-in 27-card catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_definitions(standard_definitions())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Find cards by category, in id order.
    pub fn find_by_category(&self, category: CardCategory) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |c| c.category == category)
    }
}

fn wizard(name: CardName, first: Attack, second: Attack, desc: &str) -> CardDefinition {
    CardDefinition::wizard(name.id(), name.as_str(), 8)
        .with_attacks(first, second)
        .with_description(desc)
}

fn permanent(name: CardName, cost: i64, desc: &str) -> CardDefinition {
    CardDefinition::permanent(name.id(), name.as_str(), cost).with_description(desc)
}

fn instant(name: CardName, cost: i64, desc: &str) -> CardDefinition {
    CardDefinition::instant(name.id(), name.as_str(), cost).with_description(desc)
}

fn standard_definitions() -> Vec<CardDefinition> {
    use CardName::*;

    vec![
        wizard(
            Librarian,
            Attack::new("draw1", 2).with_description("Deal 2 and draw a card"),
            Attack::new("dmgPerCard", 0).with_description("Deal 1 for every 2 cards in hand"),
            "Keeper of the great library",
        ),
        wizard(
            Magician,
            Attack::new("disappear", 2).with_description("Deal 2 and return to hand"),
            Attack::new("disappear2", 4).with_description("Deal 4, take 2 and return to hand"),
            "Now you see me",
        ),
        wizard(
            Shieldmancer,
            Attack::new("protect", 1).with_description("Deal 1, allies take no damage this turn"),
            Attack::new("reduce", 1).with_description("Deal 1, allies take 1 less damage this turn"),
            "Stands in front",
        ),
        wizard(
            MindMage,
            Attack::new("bypass", 2).with_description("Deal 2, ignoring every defense"),
            Attack::new("removePerm", 3).with_description("Deal 3, then remove a permanent"),
            "Reads every mind",
        ),
        wizard(
            Angel,
            Attack::new("heal", -2).with_description("Heal 2"),
            Attack::new("revive", 0).with_description("Sacrifice self to fully heal an ally"),
            "Heaven sent",
        ),
        wizard(
            Pyromancer,
            Attack::new("splash", 1).with_description("Deal 1 to the target and its neighbours"),
            Attack::new("megaSplash", 0).with_description("Deal 1 to every enemy creature"),
            "Likes fire",
        ),
        wizard(
            Bloodeater,
            Attack::new("attackTwice", 1).with_description("Deal 1, then attack again"),
            Attack::new("frenzy", 4).with_description("Deal 4, attack again after every kill"),
            "Always hungry",
        ),
        wizard(
            Conjurer,
            Attack::new("moreMana", 1).with_description("Deal 1, gain 1 mana next turn"),
            Attack::new("nextDiscount", 1).with_description("Deal 1, next card costs 1 less"),
            "Mana from nothing",
        ),
        wizard(
            Mortician,
            Attack::new("hurtAllies", 2).with_description("Deal 2, allies take 1"),
            Attack::new("double", 3).with_description("Deal 3, doubled when every ally is dead"),
            "Friend of the dead",
        ),
        instant(Protectio, 1, "A creature takes no damage this turn"),
        instant(PyrusBalio, 1, "Deal 1 to a creature"),
        permanent(Mortius, 2, "When the bearer dies, its killer takes 2"),
        permanent(Enhancius, 2, "The bearer deals 1 more damage"),
        permanent(Dragonius, 3, "Summon a dragon"),
        instant(Cancelio, 2, "Remove a permanent"),
        permanent(Conjorius, 2, "Gain 1 mana whenever a creature dies"),
        instant(AngeliDustio, 1, "Heal a creature by 2"),
        permanent(Vitalius, 2, "The bearer gains 2 max HP and heals 2"),
        instant(Dralio, 1, "Draw two cards"),
        permanent(Librarius, 3, "Draw an extra card every turn"),
        permanent(Aquarius, 2, "Raise your mana ceiling by 1"),
        permanent(Bubublius, 2, "The bearer cannot be targeted by spells"),
        permanent(Meteorus, 2, "Once per turn deal 1 to a random creature"),
        permanent(Armorius, 2, "The bearer takes 1 less damage"),
        instant(DracusPyrio, 4, "Deal 7 to a creature"),
        instant(Retrievio, 1, "Return a permanent to your hand"),
        instant(Extractio, 2, "Draw a chosen card from your deck"),
    ]
}
