//! Permanent registry.
//!
//! Permanents live in per-player rows of fixed capacity, addressed by
//! `PermSlot`. A new permanent takes the lowest free slot of its owner's row,
//! so slots may be sparse after removals. Dragons are stored alongside, keyed
//! by the slot of the Dragonius that summoned them.
//!
//! Both maps are `im::OrdMap`: cloning a match is cheap, and iteration is
//! ordered by player then slot.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardName, Wizard};
use crate::core::{PermSlot, PlayerId, Target};

/// A lasting spell in a permanent slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permanent {
    /// Card this permanent was played from.
    pub card: CardId,

    /// Which permanent this is.
    pub name: CardName,

    /// Mana cost paid for it.
    pub cost: i64,

    /// Used its activated ability (or dragon attack) this turn.
    pub activated: bool,

    /// Creature this permanent is bound to, for attachments.
    pub attached_to: Option<Target>,
}

impl Permanent {
    /// A fresh, unattached permanent.
    #[must_use]
    pub fn new(card: CardId, name: CardName, cost: i64) -> Self {
        Self {
            card,
            name,
            cost,
            activated: false,
            attached_to: None,
        }
    }
}

/// Every permanent on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermanentRegistry {
    entries: OrdMap<PermSlot, Permanent>,
    dragons: OrdMap<PermSlot, Wizard>,
    capacity: usize,
}

impl PermanentRegistry {
    /// An empty registry with `capacity` slots per player.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: OrdMap::new(),
            dragons: OrdMap::new(),
            capacity,
        }
    }

    /// Slots per player.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lowest free slot of `player`'s row.
    #[must_use]
    pub fn free_slot(&self, player: PlayerId) -> Option<PermSlot> {
        (0..self.capacity)
            .map(|slot| PermSlot::new(player, slot))
            .find(|slot| !self.entries.contains_key(slot))
    }

    /// Place a permanent in the lowest free slot. A Dragonius also summons
    /// its dragon. Returns `None` when the row is full.
    pub fn insert(&mut self, player: PlayerId, permanent: Permanent) -> Option<PermSlot> {
        let slot = self.free_slot(player)?;
        if permanent.name == CardName::Dragonius {
            self.dragons.insert(slot, Wizard::dragon());
        }
        log::debug!("{} placed in slot {} of {}", permanent.name, slot.slot, player);
        self.entries.insert(slot, permanent);
        Some(slot)
    }

    /// Remove a permanent and its dragon, if any.
    pub fn remove(&mut self, slot: PermSlot) -> Option<Permanent> {
        self.dragons.remove(&slot);
        self.entries.remove(&slot)
    }

    /// Permanent in `slot`.
    #[must_use]
    pub fn get(&self, slot: PermSlot) -> Option<&Permanent> {
        self.entries.get(&slot)
    }

    /// Mutable permanent in `slot`.
    pub fn get_mut(&mut self, slot: PermSlot) -> Option<&mut Permanent> {
        self.entries.get_mut(&slot)
    }

    /// Whether `slot` is occupied.
    #[must_use]
    pub fn contains(&self, slot: PermSlot) -> bool {
        self.entries.contains_key(&slot)
    }

    /// Dragon standing on `slot`.
    #[must_use]
    pub fn dragon(&self, slot: PermSlot) -> Option<&Wizard> {
        self.dragons.get(&slot)
    }

    /// Mutable dragon standing on `slot`.
    pub fn dragon_mut(&mut self, slot: PermSlot) -> Option<&mut Wizard> {
        self.dragons.get_mut(&slot)
    }

    /// All permanents, ordered by player then slot.
    pub fn iter(&self) -> impl Iterator<Item = (&PermSlot, &Permanent)> {
        self.entries.iter()
    }

    /// Occupied slots of `player`, ascending.
    #[must_use]
    pub fn sorted_slots(&self, player: PlayerId) -> Vec<PermSlot> {
        self.entries
            .keys()
            .filter(|slot| slot.player == player)
            .copied()
            .collect()
    }

    /// Number of `name` permanents `player` controls.
    #[must_use]
    pub fn count_of(&self, player: PlayerId, name: CardName) -> usize {
        self.entries
            .iter()
            .filter(|(slot, p)| slot.player == player && p.name == name)
            .count()
    }

    /// Number of `name` permanents on the whole board.
    #[must_use]
    pub fn count_all(&self, name: CardName) -> usize {
        self.entries.values().filter(|p| p.name == name).count()
    }

    /// Number of permanents `player` controls.
    #[must_use]
    pub fn len_of(&self, player: PlayerId) -> usize {
        self.entries.keys().filter(|slot| slot.player == player).count()
    }

    /// Total permanents on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No permanents on the board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear every activation flag.
    pub fn reset_activations(&mut self) {
        let used: Vec<PermSlot> = self
            .entries
            .iter()
            .filter(|(_, p)| p.activated)
            .map(|(slot, _)| *slot)
            .collect();
        for slot in used {
            if let Some(permanent) = self.entries.get_mut(&slot) {
                permanent.activated = false;
            }
        }
    }

    /// Slots of permanents attached to `target`.
    #[must_use]
    pub fn attached_to(&self, target: &Target) -> Vec<PermSlot> {
        self.entries
            .iter()
            .filter(|(_, p)| p.attached_to.as_ref() == Some(target))
            .map(|(slot, _)| *slot)
            .collect()
    }

    /// Release every permanent bound to `target`.
    pub fn detach_all(&mut self, target: &Target) {
        for slot in self.attached_to(target) {
            if let Some(permanent) = self.entries.get_mut(&slot) {
                permanent.attached_to = None;
            }
        }
    }

    /// Follow a field removal: attachments on the removed creature are
    /// released, attachments on later slots shift down by one.
    pub fn creature_removed(&mut self, player: PlayerId, removed: usize) {
        let affected: Vec<PermSlot> = self
            .entries
            .iter()
            .filter(|(_, p)| {
                p.attached_to
                    .map_or(false, |t| t.is_creature() && t.player == player && t.slot >= removed)
            })
            .map(|(slot, _)| *slot)
            .collect();
        for slot in affected {
            if let Some(permanent) = self.entries.get_mut(&slot) {
                permanent.attached_to = match permanent.attached_to {
                    Some(t) if t.slot > removed => Some(Target { slot: t.slot - 1, ..t }),
                    _ => None,
                };
            }
        }
    }
}
