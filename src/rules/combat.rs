//! Attacks.
//!
//! An attack runs in a fixed order:
//!
//! 1. Resolve both combatants
//! 2. Dragons only arm their breath and stop
//! 3. Pre-damage effect
//! 4. Base damage, then mitigated damage (raw for bypass, which ends here)
//! 5. On a kill: Frenzy re-arms, Mortius strikes back
//! 6. Post-damage effect

use crate::cards::{Attack, AttackEffect, CardName};
use crate::core::{GameState, RandomSource, Target};
use crate::error::{GameError, GameResult, TargetError};
use crate::rules::constants::{CARDS_PER_DAMAGE, DRAGONIUS_DAMAGE, ENHANCIUS_BONUS, MORTIUS_DAMAGE};
use crate::rules::Await;

impl<R: RandomSource> GameState<R> {
    /// Attack `defender` with `attacker`'s attack in slot `attacker.attack`.
    ///
    /// Any creature may attack any combatant, including its own allies and
    /// itself.
    pub fn attack(&mut self, attacker: Target, defender: Target) -> GameResult<()> {
        self.atomically(|game| game.resolve_attack(attacker, defender))
    }

    pub(crate) fn resolve_attack(&mut self, attacker: Target, defender: Target) -> GameResult<()> {
        let is_dragon = self.combatant(attacker)?.is_dragon();
        self.combatant(defender)?;

        if is_dragon {
            return self.ready_dragon(attacker);
        }

        let attack = self.combatant(attacker)?.attack(attacker.attack)?;
        let effect = attack.effect();
        self.before_damage(effect, attacker)?;

        let damage = self.base_damage(attacker, &attack)?;
        if effect == AttackEffect::Bypass {
            log::info!("{} struck {} through every defense", attacker, defender);
            self.apply_raw_damage(defender, damage)?;
            return Ok(());
        }

        let was_alive = self.combatant(defender)?.is_alive();
        self.apply_damage(defender, damage)?;
        log::info!("{} attacked {} with {}", attacker, defender, attack.name);

        let target = self.combatant(defender)?;
        if was_alive && !target.is_alive() {
            let avenged = target.attached == Some(CardName::Mortius);
            if effect == AttackEffect::Frenzy {
                log::info!("{} can attack again", attacker);
                self.arm(Await::AttackFollowup { attacker });
            }
            if avenged {
                log::info!("Mortius struck back at {}", attacker);
                self.apply_damage(attacker, MORTIUS_DAMAGE)?;
            }
        }

        self.after_damage(effect, attacker, defender)
    }

    fn ready_dragon(&mut self, attacker: Target) -> GameResult<()> {
        let slot = attacker.perm_slot().ok_or(TargetError::NotACombatant)?;
        let permanent = self
            .board
            .permanents
            .get_mut(slot)
            .ok_or(TargetError::PermanentNotFound { player: slot.player, slot: slot.slot })?;
        if permanent.activated {
            return Err(GameError::AlreadyActivated);
        }
        permanent.activated = true;
        self.arm(Await::DragonBreath { dragon: slot });
        Ok(())
    }

    /// Damage an attack deals before mitigation.
    ///
    /// Damage-per-card counts the hand of the player whose turn it is, not
    /// the attacker's owner.
    pub fn base_damage(&self, attacker: Target, attack: &Attack) -> GameResult<i64> {
        let unit = self.combatant(attacker)?;
        if unit.is_dragon() {
            return Ok(DRAGONIUS_DAMAGE);
        }

        let mut damage = attack.damage;
        if unit.attached == Some(CardName::Enhancius) {
            damage += ENHANCIUS_BONUS;
        }
        match attack.effect() {
            AttackEffect::DamagePerCardInHand => {
                let hand = self.board.players[self.board.current_player].hand.len() as i64;
                damage += hand / CARDS_PER_DAMAGE;
            }
            AttackEffect::DoubleIfAlliesDead => {
                let fallen = self
                    .allies(attacker)
                    .into_iter()
                    .all(|ally| self.combatant(ally).map_or(true, |w| !w.is_alive()));
                if fallen {
                    log::info!("{} draws on the blood of its allies", attacker);
                    damage *= 2;
                }
            }
            _ => {}
        }
        Ok(damage)
    }
}
