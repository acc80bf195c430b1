//! Combatant lookup and damage.
//!
//! A combatant is a field creature or a dragon. Damage goes through two
//! layers: `apply_damage` mitigates positive amounts (protection, resistance,
//! armor) and then hands over to `apply_raw_damage`, which clamps HP and pays
//! out Conjorius on a kill. Negative amounts heal.

use crate::cards::{CardName, Wizard};
use crate::core::{GameState, PermSlot, PlayerId, RandomSource, Target, TargetArea};
use crate::error::{GameResult, TargetError};

impl<R: RandomSource> GameState<R> {
    /// Resolve a combatant reference.
    pub fn combatant(&self, target: Target) -> GameResult<&Wizard> {
        self.check_player(target.player)?;
        match target.area {
            TargetArea::Creature => self.board.fields[target.player]
                .get(target.slot)
                .ok_or_else(|| slot_out_of_range(target).into()),
            TargetArea::Permanent => {
                let slot = PermSlot::new(target.player, target.slot);
                self.check_dragon_slot(slot)?;
                Ok(self
                    .board
                    .permanents
                    .dragon(slot)
                    .ok_or(TargetError::NotACombatant)?)
            }
            TargetArea::Deck => Err(TargetError::CategoryMismatch.into()),
        }
    }

    pub(crate) fn combatant_mut(&mut self, target: Target) -> GameResult<&mut Wizard> {
        self.check_player(target.player)?;
        match target.area {
            TargetArea::Creature => self.board.fields[target.player]
                .get_mut(target.slot)
                .ok_or_else(|| slot_out_of_range(target).into()),
            TargetArea::Permanent => {
                let slot = PermSlot::new(target.player, target.slot);
                self.check_dragon_slot(slot)?;
                Ok(self
                    .board
                    .permanents
                    .dragon_mut(slot)
                    .ok_or(TargetError::NotACombatant)?)
            }
            TargetArea::Deck => Err(TargetError::CategoryMismatch.into()),
        }
    }

    pub(crate) fn check_dragon_slot(&self, slot: PermSlot) -> GameResult<()> {
        let permanent = self
            .board
            .permanents
            .get(slot)
            .ok_or(TargetError::PermanentNotFound { player: slot.player, slot: slot.slot })?;
        if permanent.name != CardName::Dragonius {
            return Err(TargetError::NotACombatant.into());
        }
        Ok(())
    }

    /// Deal damage after mitigation. Returns whether the combatant died.
    pub fn apply_damage(&mut self, target: Target, amount: i64) -> GameResult<bool> {
        let amount = self.combatant(target)?.mitigate(amount);
        self.apply_raw_damage(target, amount)
    }

    /// Deal damage with no mitigation. HP is clamped to `0..=max_hp`.
    ///
    /// When this takes a combatant from alive to dead, every player gains
    /// one bonus mana per Conjorius they control.
    pub fn apply_raw_damage(&mut self, target: Target, amount: i64) -> GameResult<bool> {
        let base_max = self.config().max_hp;
        let died = self.combatant_mut(target)?.adjust_hp(amount, base_max);
        if died {
            log::info!("{} died", target);
            self.credit_conjorius();
        }
        Ok(died)
    }

    fn credit_conjorius(&mut self) {
        for player in PlayerId::all(self.player_count()) {
            let count = self.board.permanents.count_of(player, CardName::Conjorius);
            if count > 0 {
                log::info!("Conjorius gave {} mana to {}", count, player);
                self.board.players[player].bonus_mana += count as i64;
            }
        }
    }

    /// Other occupied field slots of a creature's owner.
    pub(crate) fn allies(&self, of: Target) -> Vec<Target> {
        if of.area != TargetArea::Creature || !self.board.players.contains(of.player) {
            return Vec::new();
        }
        (0..self.board.fields[of.player].len())
            .filter(|&slot| slot != of.slot)
            .map(|slot| Target::creature(of.player, slot))
            .collect()
    }

    /// Take a creature off its field. Attachments bound to it are released
    /// and attachments on later slots follow their creature.
    pub(crate) fn remove_from_field(&mut self, target: Target) -> GameResult<Wizard> {
        self.combatant(target)?;
        if target.area != TargetArea::Creature {
            return Err(TargetError::CategoryMismatch.into());
        }
        let wizard = self.board.fields[target.player].remove(target.slot);
        self.board.permanents.creature_removed(target.player, target.slot);
        Ok(wizard)
    }
}

fn slot_out_of_range(target: Target) -> TargetError {
    TargetError::SlotOutOfRange { player: target.player, slot: target.slot }
}
