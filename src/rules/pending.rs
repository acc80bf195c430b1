//! The pending-target prompt.
//!
//! Some plays and attacks need a second input: a spell's target, where an
//! attachment goes, what a follow-up attack hits. The match holds at most one
//! such prompt. Arming a new one replaces the old one, and other operations
//! are not blocked while a prompt is pending.
//!
//! ## Clearing
//!
//! - Spells clear the prompt when they resolve. A failed spell keeps it, so
//!   the player can pick another target. Cancelio is the exception and always
//!   clears.
//! - Attachments always clear, even when the target was rejected.
//! - Removing a permanent and a second attack always clear, whatever they
//!   hit.
//! - Frenzy keeps the prompt after each kill.
//! - Dragon breath clears once its dragon has left play.

use serde::{Deserialize, Serialize};

use crate::cards::{AttackEffect, CardName, REPEAT_ATTACK_SLOT};
use crate::core::{GameState, PermSlot, PlayerId, RandomSource, Target, TargetArea};
use crate::error::{GameError, GameResult};
use crate::rules::constants::DRAGONIUS_DAMAGE;

/// What the match is waiting for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Await {
    /// Nothing pending.
    #[default]
    Idle,
    /// A target for the attacker's follow-up.
    AttackFollowup {
        /// The creature whose attack asked for it, with its attack slot.
        attacker: Target,
    },
    /// A target for a dragon's breath.
    DragonBreath {
        /// The dragon's permanent slot.
        dragon: PermSlot,
    },
    /// A target for an instant.
    SpellTarget {
        /// The instant.
        spell: CardName,
        /// Who played it.
        caster: PlayerId,
    },
    /// A creature for a freshly played attachment.
    Attachment {
        /// The attachment.
        spell: CardName,
        /// Where it was placed.
        perm: PermSlot,
    },
}

impl Await {
    /// Nothing pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Answer the pending prompt.
    pub fn resolve_target(&mut self, target: Target) -> GameResult<()> {
        let target = Target { attack: 0, ..target };
        match self.board.awaiting.clone() {
            Await::Idle => Err(GameError::NotAwaitingTarget),
            Await::SpellTarget { spell, caster } => {
                let result = self.atomically(|game| game.cast(spell, caster, target));
                if result.is_ok() || spell == CardName::Cancelio {
                    self.clear_await();
                }
                result
            }
            Await::Attachment { spell, perm } => {
                let result = self.atomically(|game| game.attach(spell, perm, target));
                self.clear_await();
                result
            }
            Await::DragonBreath { dragon } => {
                if let Err(err) = self.check_dragon_slot(dragon) {
                    self.clear_await();
                    return Err(err);
                }
                if target.area != TargetArea::Creature {
                    return Err(GameError::UnexpectedTarget);
                }
                self.atomically(|game| {
                    game.combatant(target)?;
                    game.clear_await();
                    log::info!("the dragon of {} breathed on {}", dragon.player, target);
                    game.apply_damage(target, DRAGONIUS_DAMAGE)?;
                    Ok(())
                })
            }
            Await::AttackFollowup { attacker } => self.follow_up(attacker, target),
        }
    }

    fn follow_up(&mut self, attacker: Target, target: Target) -> GameResult<()> {
        let effect = self.combatant(attacker)?.attack(attacker.attack)?.effect();
        let expected = match effect {
            AttackEffect::RemovePermanent => TargetArea::Permanent,
            _ => TargetArea::Creature,
        };
        if target.area != expected {
            return Err(GameError::UnexpectedTarget);
        }

        match effect {
            AttackEffect::RemovePermanent => {
                let result = self.atomically(|game| {
                    game.check_player(target.player)?;
                    game.remove_permanent(PermSlot::new(target.player, target.slot))
                });
                self.clear_await();
                result
            }
            AttackEffect::Revive => self.atomically(|game| {
                game.combatant(target)?;
                let full = game.config().max_hp;
                game.combatant_mut(attacker)?.hp = 0;
                game.combatant_mut(target)?.hp = full;
                log::info!("{} gave its life to heal {}", attacker, target);
                game.clear_await();
                Ok(())
            }),
            AttackEffect::AttackAgain => {
                let result = self.attack(attacker.with_attack(REPEAT_ATTACK_SLOT), target);
                self.clear_await();
                result
            }
            AttackEffect::Frenzy => self.atomically(|game| {
                let was_alive = game.combatant(target)?.is_alive();
                game.resolve_attack(attacker, target)?;
                let killed = was_alive && !game.combatant(target)?.is_alive();
                if !killed {
                    game.clear_await();
                }
                Ok(())
            }),
            _ => {
                self.clear_await();
                Ok(())
            }
        }
    }

    pub(crate) fn arm(&mut self, awaiting: Await) {
        log::debug!("awaiting {:?}", awaiting);
        self.board.awaiting = awaiting;
    }

    pub(crate) fn clear_await(&mut self) {
        if !self.board.awaiting.is_idle() {
            log::debug!("prompt cleared");
        }
        self.board.awaiting = Await::Idle;
    }
}
