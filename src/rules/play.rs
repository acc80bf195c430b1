//! Playing cards.
//!
//! Wizards go to the field, permanents to the first free permanent slot and
//! instants straight to resolution. Costs are charged before anything is
//! placed, and a played card leaves the hand only when the whole play
//! succeeds.

use crate::cards::{CardCategory, CardDefinition, CardId, CardName, Wizard};
use crate::core::{CardChoice, GameState, PlayerId, RandomSource};
use crate::error::{GameError, GameResult};
use crate::permanents::Permanent;
use crate::rules::constants::DRALIO_DRAWS;
use crate::rules::Await;

impl<R: RandomSource> GameState<R> {
    /// Play a card for `player`, from their hand or created outright.
    pub fn play(&mut self, player: PlayerId, choice: CardChoice) -> GameResult<()> {
        self.check_player(player)?;
        let card = match choice {
            CardChoice::Card(card) => card,
            CardChoice::Hand(index) => self
                .hand(player)?
                .get(index)
                .copied()
                .ok_or(GameError::InvalidHandIndex(index))?,
        };

        self.atomically(|game| {
            game.play_card(player, card)?;
            if let CardChoice::Hand(index) = choice {
                game.player_mut(player)?.hand.swap_remove(index);
            }
            Ok(())
        })
    }

    pub(crate) fn play_card(&mut self, player: PlayerId, card: CardId) -> GameResult<()> {
        let definition = self.catalog().get(card).cloned().ok_or(GameError::UnknownCard(card))?;
        match definition.category {
            CardCategory::Wizard => self.play_wizard(player, &definition),
            CardCategory::Permanent => self.play_permanent(player, &definition),
            CardCategory::Instant => self.play_instant(player, &definition),
        }
    }

    fn play_wizard(&mut self, player: PlayerId, definition: &CardDefinition) -> GameResult<()> {
        if self.field(player)?.len() >= self.config().field_capacity {
            return Err(GameError::FieldFull);
        }
        let mut wizard = Wizard::from_definition(definition);
        if wizard.name == Some(CardName::Magician) {
            let banked = self.player_mut(player)?.banked_hp.take();
            if let Some(hp) = banked {
                wizard.hp = hp.min(wizard.max_hp(self.config().max_hp));
                log::info!("the Magician reappears with {} HP", wizard.hp);
            }
        }
        self.board.fields[player].push(wizard);
        log::info!("{} summoned {}", player, definition.name);
        Ok(())
    }

    fn play_permanent(&mut self, player: PlayerId, definition: &CardDefinition) -> GameResult<()> {
        let name = CardName::from_id(definition.id)
            .filter(|n| n.is_attachment() || n.is_passive() || *n == CardName::Dragonius)
            .ok_or_else(|| unplayable(definition))?;
        if self.board.permanents.free_slot(player).is_none() {
            return Err(GameError::MaxPermanentsReached);
        }
        self.spend(player, definition.cost())?;

        let permanent = Permanent::new(definition.id, name, definition.cost());
        let slot = self
            .board
            .permanents
            .insert(player, permanent)
            .ok_or(GameError::MaxPermanentsReached)?;
        log::info!("{} cast {}", player, name);

        if name.is_attachment() {
            self.arm(Await::Attachment { spell: name, perm: slot });
        }
        Ok(())
    }

    fn play_instant(&mut self, player: PlayerId, definition: &CardDefinition) -> GameResult<()> {
        let name = CardName::from_id(definition.id)
            .filter(|n| n.awaits_target() || *n == CardName::Dralio)
            .ok_or_else(|| unplayable(definition))?;
        match name {
            CardName::DracusPyrio if self.hand(player)?.is_empty() => return Err(GameError::EmptyHand),
            CardName::Dralio if self.deck_size(player)? < DRALIO_DRAWS => return Err(GameError::DeckEmpty),
            _ => {}
        }
        self.spend(player, definition.cost())?;
        log::info!("{} cast {}", player, name);

        if name == CardName::Dralio {
            for _ in 0..DRALIO_DRAWS {
                self.draw(player)?;
            }
        } else {
            self.arm(Await::SpellTarget { spell: name, caster: player });
        }
        Ok(())
    }
}

fn unplayable(definition: &CardDefinition) -> GameError {
    GameError::ImplementationError(format!("no rules for {:?} {}", definition.category, definition.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::cards::CardCatalog;
    use crate::core::{GameConfig, PermSlot, Target};

    fn live_game() -> GameState {
        let mut game = GameState::new(GameConfig::new(2), Arc::new(CardCatalog::standard())).unwrap();
        game.start_first_turn();
        game
    }

    #[test]
    fn test_field_full() {
        let mut game = GameState::for_testing(2).unwrap();
        let p0 = PlayerId::new(0);
        for _ in 0..3 {
            game.play(p0, CardChoice::Card(CardName::Librarian.id())).unwrap();
        }

        assert_eq!(game.play(p0, CardChoice::Card(CardName::Angel.id())), Err(GameError::FieldFull));
    }

    #[test]
    fn test_hand_play_removes_card_on_success_only() {
        let mut game = live_game();
        let p0 = PlayerId::new(0);
        game.give_card(p0, CardName::Librarian.id()).unwrap();
        game.give_card(p0, CardName::DracusPyrio.id()).unwrap();

        assert!(matches!(game.play(p0, CardChoice::Hand(1)), Err(GameError::InsufficientMana { .. })));
        assert_eq!(game.hand(p0).unwrap().len(), 2);

        game.play(p0, CardChoice::Hand(0)).unwrap();
        assert_eq!(game.hand(p0).unwrap(), &[CardName::DracusPyrio.id()]);
        assert_eq!(game.play(p0, CardChoice::Hand(4)), Err(GameError::InvalidHandIndex(4)));
    }

    #[test]
    fn test_permanent_costs_mana() {
        let mut game = live_game();
        let p0 = PlayerId::new(0);
        game.set_mana(3);

        game.play(p0, CardChoice::Card(CardName::Aquarius.id())).unwrap();
        assert_eq!(game.mana(), 1);
        let err = game.play(p0, CardChoice::Card(CardName::Aquarius.id())).unwrap_err();
        assert_eq!(err, GameError::InsufficientMana { needed: 2, available: 1 });
        assert_eq!(game.sorted_permanents()[0], vec![PermSlot::new(p0, 0)]);
    }

    #[test]
    fn test_max_permanents() {
        let mut game = GameState::for_testing(2).unwrap();
        let p0 = PlayerId::new(0);
        for _ in 0..7 {
            game.play(p0, CardChoice::Card(CardName::Conjorius.id())).unwrap();
        }

        assert_eq!(
            game.play(p0, CardChoice::Card(CardName::Conjorius.id())),
            Err(GameError::MaxPermanentsReached)
        );
    }

    #[test]
    fn test_magician_uses_banked_hp_once() {
        let mut game = GameState::for_testing(2).unwrap();
        let p0 = PlayerId::new(0);
        game.player_mut(p0).unwrap().banked_hp = Some(3);

        game.play(p0, CardChoice::Card(CardName::Magician.id())).unwrap();
        game.play(p0, CardChoice::Card(CardName::Magician.id())).unwrap();

        let hp: Vec<i64> = game.field(p0).unwrap().iter().map(|w| w.hp).collect();
        assert_eq!(hp, vec![3, 8]);
        assert_eq!(game.player(p0).unwrap().banked_hp, None);
    }

    #[test]
    fn test_dralio_draws_two() {
        let mut game = GameState::for_testing(2).unwrap();
        let p0 = PlayerId::new(0);
        game.set_deck(p0, vec![CardName::Angel.id()]).unwrap();
        assert_eq!(game.play(p0, CardChoice::Card(CardName::Dralio.id())), Err(GameError::DeckEmpty));

        game.set_deck(p0, vec![CardName::Angel.id(), CardName::Aquarius.id()]).unwrap();
        game.give_card(p0, CardName::Dralio.id()).unwrap();
        game.play(p0, CardChoice::Hand(0)).unwrap();

        let mut hand = game.hand(p0).unwrap().to_vec();
        hand.sort();
        assert_eq!(hand, vec![CardName::Angel.id(), CardName::Aquarius.id()]);
        assert!(game.awaiting().is_idle());
    }

    #[test]
    fn test_dracus_pyrio_needs_a_hand() {
        let mut game = GameState::for_testing(2).unwrap();
        let p0 = PlayerId::new(0);

        assert_eq!(game.play(p0, CardChoice::Card(CardName::DracusPyrio.id())), Err(GameError::EmptyHand));
        assert!(game.awaiting().is_idle());
    }

    #[test]
    fn test_attachment_arms_prompt() {
        let mut game = GameState::for_testing(2).unwrap();
        let p0 = PlayerId::new(0);

        game.play(p0, CardChoice::Card(CardName::Mortius.id())).unwrap();
        assert_eq!(
            game.awaiting(),
            &Await::Attachment { spell: CardName::Mortius, perm: PermSlot::new(p0, 0) }
        );
    }

    #[test]
    fn test_dragonius_summons_dragon() {
        let mut game = GameState::for_testing(2).unwrap();
        let p1 = PlayerId::new(1);

        game.play(p1, CardChoice::Card(CardName::Dragonius.id())).unwrap();
        let dragon = game.combatant(Target::permanent(p1, 0)).unwrap();
        assert!(dragon.is_dragon());
        assert_eq!(dragon.hp, 3);
    }

    #[test]
    fn test_unknown_card() {
        let mut game = GameState::for_testing(2).unwrap();

        assert_eq!(
            game.play(PlayerId::new(0), CardChoice::Card(CardId::new(40))),
            Err(GameError::UnknownCard(CardId::new(40)))
        );
        assert_eq!(
            game.play(PlayerId::new(7), CardChoice::Card(CardName::Angel.id())),
            Err(GameError::InvalidPlayerId(7))
        );
    }
}
