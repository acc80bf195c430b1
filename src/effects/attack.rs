//! Attack side effects.
//!
//! Each `AttackEffect` runs either before damage is dealt or after it.
//! Effects that are not listed in a phase do nothing there.

use crate::cards::{AttackEffect, CardName};
use crate::core::{GameState, PlayerId, RandomSource, Target};
use crate::error::GameResult;
use crate::rules::constants::{ALLY_RECOIL, DISAPPEAR_RECOIL, SPLASH_ALL_DAMAGE};
use crate::rules::Await;

impl<R: RandomSource> GameState<R> {
    pub(crate) fn before_damage(&mut self, effect: AttackEffect, attacker: Target) -> GameResult<()> {
        let owner = attacker.player;
        match effect {
            AttackEffect::DrawOne => {
                self.draw_cards(owner, 1);
            }
            AttackEffect::GainBonusMana => {
                log::info!("{} is conjuring more mana", owner);
                self.player_mut(owner)?.bonus_mana += 1;
            }
            AttackEffect::GuardAllies => {
                log::info!("{} is protecting its allies", attacker);
                for ally in self.allies(attacker) {
                    self.combatant_mut(ally)?.protected = true;
                }
            }
            AttackEffect::ResistAllies => {
                log::info!("the allies of {} gained resistance", attacker);
                for ally in self.allies(attacker) {
                    self.combatant_mut(ally)?.resistance = true;
                }
            }
            AttackEffect::DiscountNextSpell => {
                log::info!("{} conjures mana for the next spell", owner);
                self.player_mut(owner)?.discount_next_spell = true;
            }
            AttackEffect::RecoilAllies => {
                for ally in self.allies(attacker) {
                    log::info!("{} accidentally hit {}", attacker, ally);
                    self.apply_damage(ally, ALLY_RECOIL)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub(crate) fn after_damage(&mut self, effect: AttackEffect, attacker: Target, defender: Target) -> GameResult<()> {
        match effect {
            AttackEffect::Vanish => {
                let hp = self.combatant(attacker)?.hp;
                self.vanish(attacker, hp)?;
            }
            AttackEffect::VanishWithRecoil => {
                let hp = self.combatant(attacker)?.hp - DISAPPEAR_RECOIL;
                if hp > 0 {
                    self.vanish(attacker, hp)?;
                } else {
                    log::info!("{} hurt itself too badly to vanish", attacker);
                    self.combatant_mut(attacker)?.hp = 0;
                }
            }
            AttackEffect::SplashAdjacent => {
                if defender.is_creature() {
                    let first = self.combatant(attacker)?.attacks[0].clone();
                    let damage = self.base_damage(attacker, &first)?;
                    for neighbour in self.allies(defender) {
                        log::info!("{} also hit {}", attacker, neighbour);
                        self.apply_damage(neighbour, damage)?;
                    }
                }
            }
            AttackEffect::SplashAll => {
                log::info!("{} also hit every other wizard", attacker);
                for player in PlayerId::all(self.player_count()).filter(|&p| p != attacker.player) {
                    for slot in 0..self.board.fields[player].len() {
                        self.apply_damage(Target::creature(player, slot), SPLASH_ALL_DAMAGE)?;
                    }
                }
            }
            AttackEffect::RemovePermanent | AttackEffect::Revive | AttackEffect::AttackAgain => {
                log::info!("{} prepares a follow-up", attacker);
                self.arm(Await::AttackFollowup { attacker });
            }
            _ => {}
        }
        Ok(())
    }

    /// Return a creature to its owner's hand, banking its HP for the next
    /// Magician that player plays.
    fn vanish(&mut self, creature: Target, hp: i64) -> GameResult<()> {
        let wizard = self.remove_from_field(creature)?;
        let owner = self.player_mut(creature.player)?;
        owner.banked_hp = Some(hp);
        owner.hand.push(wizard.card);
        log::info!("{} disappeared", creature);
        Ok(())
    }
}
