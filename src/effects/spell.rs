//! Instants and attachments.
//!
//! Both resolve against the target chosen for the pending prompt. A creature
//! carrying Bubublius cannot be chosen by either.

use crate::cards::{CardId, CardName};
use crate::core::{GameState, PermSlot, PlayerId, RandomSource, Target, TargetArea};
use crate::error::{GameError, GameResult, TargetError};
use crate::rules::constants::{ANGELI_DUSTIO_HEAL, DRACUS_PYRIO_DAMAGE, PYRUS_BALIO_DAMAGE, VITALIUS_HEAL};

impl<R: RandomSource> GameState<R> {
    /// Resolve an instant played by `caster` against `target`.
    pub(crate) fn cast(&mut self, spell: CardName, caster: PlayerId, target: Target) -> GameResult<()> {
        match spell {
            CardName::PyrusBalio => {
                self.spell_target(target)?;
                log::info!("a fireball hit {}", target);
                self.apply_damage(target, PYRUS_BALIO_DAMAGE)?;
            }
            CardName::DracusPyrio => {
                self.spell_target(target)?;
                log::info!("a dragon's fire engulfed {}", target);
                self.apply_damage(target, DRACUS_PYRIO_DAMAGE)?;
            }
            CardName::Protectio => {
                self.spell_target(target)?;
                log::info!("{} is protected", target);
                self.combatant_mut(target)?.protected = true;
            }
            CardName::AngeliDustio => {
                self.spell_target(target)?;
                log::info!("angel dust healed {}", target);
                self.apply_damage(target, -ANGELI_DUSTIO_HEAL)?;
            }
            CardName::Cancelio => {
                let slot = target.perm_slot().ok_or(TargetError::CategoryMismatch)?;
                log::info!("cancelling permanent {} of {}", slot.slot, slot.player);
                self.remove_permanent(slot)?;
            }
            CardName::Retrievio => {
                let slot = target.perm_slot().ok_or(TargetError::CategoryMismatch)?;
                let card = self
                    .permanent(slot)
                    .map(|p| p.card)
                    .ok_or(TargetError::PermanentNotFound { player: slot.player, slot: slot.slot })?;
                self.remove_permanent(slot)?;
                self.player_mut(caster)?.hand.push(card);
                log::info!("{} retrieved {}", caster, card);
            }
            CardName::Extractio => self.extract(caster, target)?,
            other => {
                return Err(GameError::ImplementationError(format!("{} is not a targeted instant", other)));
            }
        }
        Ok(())
    }

    /// Pull a named card out of the caster's deck into their hand.
    fn extract(&mut self, caster: PlayerId, target: Target) -> GameResult<()> {
        if target.area != TargetArea::Deck {
            return Err(TargetError::CategoryMismatch.into());
        }
        let card = u32::try_from(target.slot)
            .map(CardId::new)
            .map_err(|_| TargetError::SlotOutOfRange { player: target.player, slot: target.slot })?;
        let deck = &mut self.player_mut(caster)?.deck;
        let position = deck
            .iter()
            .position(|&c| c == card)
            .ok_or(TargetError::CardNotInDeck(card))?;
        let top = deck.len() - 1;
        deck.swap(position, top);
        self.draw(caster)?;
        log::info!("{} extracted {} from their deck", caster, card);
        Ok(())
    }

    /// A combatant that spells may choose.
    fn spell_target(&self, target: Target) -> GameResult<()> {
        if self.combatant(target)?.attached == Some(CardName::Bubublius) {
            log::info!("the bubble around {} blocked the spell", target);
            return Err(GameError::SpellBlocked);
        }
        Ok(())
    }

    /// Bind the attachment in `perm` to `target`.
    ///
    /// A creature carries one attachment at a time; binding a new one
    /// releases the old one from it.
    pub(crate) fn attach(&mut self, spell: CardName, perm: PermSlot, target: Target) -> GameResult<()> {
        self.spell_target(target)?;
        if self.permanent(perm).is_none() {
            return Err(TargetError::PermanentNotFound { player: perm.player, slot: perm.slot }.into());
        }

        self.board.permanents.detach_all(&target);
        let base_max = self.config().max_hp;
        let wizard = self.combatant_mut(target)?;
        wizard.attached = Some(spell);
        let max = wizard.max_hp(base_max);
        wizard.hp = wizard.hp.min(max);
        if let Some(permanent) = self.board.permanents.get_mut(perm) {
            permanent.attached_to = Some(target);
        }
        log::info!("{} attached to {}", spell, target);

        if spell == CardName::Vitalius {
            self.apply_raw_damage(target, -VITALIUS_HEAL)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardChoice;

    fn game_with(names: &[CardName]) -> GameState {
        let mut game = GameState::for_testing(2).unwrap();
        for name in names {
            game.play(PlayerId::new(0), CardChoice::Card(name.id())).unwrap();
        }
        game
    }

    fn cast_on(game: &mut GameState, spell: CardName, target: Target) -> GameResult<()> {
        game.play(PlayerId::new(0), CardChoice::Card(spell.id()))?;
        game.resolve_target(target)
    }

    #[test]
    fn test_damage_spells() {
        let mut game = game_with(&[CardName::Librarian]);
        let t = Target::creature(PlayerId::new(0), 0);

        cast_on(&mut game, CardName::PyrusBalio, t).unwrap();
        assert_eq!(game.combatant(t).unwrap().hp, 7);
        game.give_card(PlayerId::new(0), CardName::Dralio.id()).unwrap();
        cast_on(&mut game, CardName::DracusPyrio, t).unwrap();
        assert_eq!(game.combatant(t).unwrap().hp, 0);
        assert!(game.awaiting().is_idle());
    }

    #[test]
    fn test_protectio_and_angeli_dustio() {
        let mut game = game_with(&[CardName::Librarian]);
        let t = Target::creature(PlayerId::new(0), 0);
        game.apply_damage(t, 5).unwrap();

        cast_on(&mut game, CardName::AngeliDustio, t).unwrap();
        assert_eq!(game.combatant(t).unwrap().hp, 5);
        cast_on(&mut game, CardName::Protectio, t).unwrap();
        cast_on(&mut game, CardName::PyrusBalio, t).unwrap();
        assert_eq!(game.combatant(t).unwrap().hp, 5);
    }

    #[test]
    fn test_bubublius_blocks_spells() {
        let mut game = game_with(&[CardName::Librarian, CardName::Bubublius]);
        let p0 = PlayerId::new(0);
        let t = Target::creature(p0, 0);
        game.resolve_target(t).unwrap();

        assert_eq!(cast_on(&mut game, CardName::PyrusBalio, t), Err(GameError::SpellBlocked));
        assert_eq!(game.combatant(t).unwrap().hp, 8);
    }

    #[test]
    fn test_vitalius_raises_max_and_heals() {
        let mut game = game_with(&[CardName::Librarian, CardName::Vitalius]);
        let t = Target::creature(PlayerId::new(0), 0);

        game.resolve_target(t).unwrap();
        assert_eq!(game.combatant(t).unwrap().hp, 10);

        let slot = PermSlot::new(PlayerId::new(0), 0);
        game.remove_permanent(slot).unwrap();
        assert_eq!(game.combatant(t).unwrap().hp, 8);
        assert_eq!(game.combatant(t).unwrap().attached, None);
    }

    #[test]
    fn test_new_attachment_replaces_old() {
        let mut game = game_with(&[CardName::Librarian, CardName::Armorius]);
        let p0 = PlayerId::new(0);
        let t = Target::creature(p0, 0);
        game.resolve_target(t).unwrap();
        game.play(p0, CardChoice::Card(CardName::Enhancius.id())).unwrap();
        game.resolve_target(t).unwrap();

        assert_eq!(game.combatant(t).unwrap().attached, Some(CardName::Enhancius));
        assert_eq!(game.permanent(PermSlot::new(p0, 0)).unwrap().attached_to, None);
        assert_eq!(game.permanent(PermSlot::new(p0, 1)).unwrap().attached_to, Some(t));
    }

    #[test]
    fn test_reattach_after_removal() {
        let mut game = game_with(&[CardName::Librarian, CardName::Armorius]);
        let p0 = PlayerId::new(0);
        let t = Target::creature(p0, 0);
        let slot = PermSlot::new(p0, 0);
        game.resolve_target(t).unwrap();
        game.remove_permanent(slot).unwrap();
        assert_eq!(game.combatant(t).unwrap().attached, None);

        game.play(p0, CardChoice::Card(CardName::Enhancius.id())).unwrap();
        game.resolve_target(t).unwrap();

        assert_eq!(game.combatant(t).unwrap().attached, Some(CardName::Enhancius));
        let permanent = game.permanent(slot).unwrap();
        assert_eq!(permanent.name, CardName::Enhancius);
        assert_eq!(permanent.attached_to, Some(t));
    }

    #[test]
    fn test_rejected_attachment_clears_prompt() {
        let mut game = game_with(&[CardName::Armorius]);

        assert!(game.resolve_target(Target::creature(PlayerId::new(0), 0)).is_err());
        assert!(game.awaiting().is_idle());
        assert!(game.permanent(PermSlot::new(PlayerId::new(0), 0)).is_some());
    }

    #[test]
    fn test_cancelio_and_retrievio() {
        let mut game = game_with(&[CardName::Aquarius, CardName::Meteorus]);
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        game.play(p1, CardChoice::Card(CardName::Cancelio.id())).unwrap();
        game.resolve_target(Target::permanent(p0, 0)).unwrap();
        assert!(game.permanent(PermSlot::new(p0, 0)).is_none());

        game.play(p1, CardChoice::Card(CardName::Retrievio.id())).unwrap();
        game.resolve_target(Target::permanent(p0, 1)).unwrap();
        assert!(game.permanent(PermSlot::new(p0, 1)).is_none());
        assert_eq!(game.hand(p1).unwrap(), &[CardName::Meteorus.id()]);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_extractio_rejects_oversized_ids() {
        let mut game = GameState::for_testing(2).unwrap();
        let p0 = PlayerId::new(0);
        game.set_deck(p0, vec![CardName::Angel.id()]).unwrap();
        let slot = (1usize << 32) + CardName::Angel.id().raw() as usize;

        let err = cast_on(&mut game, CardName::Extractio, Target::card(p0, slot)).unwrap_err();

        assert_eq!(err, GameError::TargetInvalid(TargetError::SlotOutOfRange { player: p0, slot }));
        assert!(game.hand(p0).unwrap().is_empty());
        assert_eq!(game.deck_size(p0).unwrap(), 1);
    }

    #[test]
    fn test_extractio() {
        let mut game = GameState::for_testing(2).unwrap();
        let p0 = PlayerId::new(0);
        let deck = vec![CardName::Angel.id(), CardName::Dralio.id(), CardName::Aquarius.id()];
        game.set_deck(p0, deck).unwrap();

        cast_on(&mut game, CardName::Extractio, Target::card(p0, CardName::Angel.id().raw() as usize)).unwrap();

        assert_eq!(game.hand(p0).unwrap(), &[CardName::Angel.id()]);
        assert_eq!(game.player(p0).unwrap().deck, vec![CardName::Aquarius.id(), CardName::Dralio.id()]);

        game.play(p0, CardChoice::Card(CardName::Extractio.id())).unwrap();
        let missing = Target::card(p0, CardId::new(9).raw() as usize);
        assert_eq!(
            game.resolve_target(missing),
            Err(GameError::TargetInvalid(TargetError::CardNotInDeck(CardId::new(9))))
        );
        assert_eq!(
            game.resolve_target(Target::creature(p0, 0)),
            Err(GameError::TargetInvalid(TargetError::CategoryMismatch))
        );
    }
}
