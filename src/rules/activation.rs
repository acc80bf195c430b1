//! Activated permanents and permanent removal.

use crate::cards::CardName;
use crate::core::{GameState, PermSlot, PlayerId, RandomSource, Target};
use crate::error::{GameError, GameResult, TargetError};
use crate::rules::constants::{METEORUS_DAMAGE, VITALIUS_MAX_HP_BONUS};
use crate::rules::Await;

impl<R: RandomSource> GameState<R> {
    /// Use a permanent's once-per-turn ability.
    ///
    /// Meteorus hits a random live creature on any field. Dragonius readies
    /// its dragon's breath. The permanent is marked used only on success.
    pub fn activate_permanent(&mut self, slot: PermSlot) -> GameResult<()> {
        self.check_player(slot.player)?;
        let permanent = self
            .permanent(slot)
            .ok_or(TargetError::PermanentNotFound { player: slot.player, slot: slot.slot })?;
        if permanent.activated {
            return Err(GameError::AlreadyActivated);
        }
        let (name, card) = (permanent.name, permanent.card);

        self.atomically(|game| {
            match name {
                CardName::Meteorus => game.meteor_strike()?,
                CardName::Dragonius => game.arm(Await::DragonBreath { dragon: slot }),
                _ => return Err(GameError::NotActivatable(card)),
            }
            if let Some(permanent) = game.board.permanents.get_mut(slot) {
                permanent.activated = true;
            }
            Ok(())
        })
    }

    fn meteor_strike(&mut self) -> GameResult<()> {
        let live: Vec<Target> = PlayerId::all(self.player_count())
            .flat_map(|player| {
                self.board.fields[player]
                    .iter()
                    .enumerate()
                    .filter(|(_, w)| w.is_alive())
                    .map(move |(slot, _)| Target::creature(player, slot))
            })
            .collect();
        if live.is_empty() {
            return Err(TargetError::NoLiveTargets.into());
        }
        let target = live[self.rng.pick(live.len())];
        log::info!("a meteor fell on {}", target);
        self.apply_damage(target, METEORUS_DAMAGE)?;
        Ok(())
    }

    /// Take a permanent off the board.
    ///
    /// Its dragon goes with it, and so does any attachment bound to that
    /// dragon. An attachment releases its creature; losing Vitalius also
    /// takes back the bonus HP.
    pub fn remove_permanent(&mut self, slot: PermSlot) -> GameResult<()> {
        self.check_player(slot.player)?;
        let permanent = self
            .board
            .permanents
            .remove(slot)
            .ok_or(TargetError::PermanentNotFound { player: slot.player, slot: slot.slot })?;
        log::info!("{} was removed from {}", permanent.name, slot.player);
        self.board.permanents.detach_all(&slot.target());

        if let Some(target) = permanent.attached_to {
            if self.combatant(target).is_ok() {
                self.combatant_mut(target)?.attached = None;
                if permanent.name == CardName::Vitalius {
                    self.apply_raw_damage(target, VITALIUS_MAX_HP_BONUS)?;
                }
            }
        }
        Ok(())
    }
}
