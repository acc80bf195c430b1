//! Turn lifecycle, mana and drawing.
//!
//! ## Turn start
//!
//! The current player's pool is refilled from their mana cap, which then
//! grows by one up to the ceiling (raised by each Aquarius they control).
//! Bonus mana earned since their last turn is added and reset. Buffs on
//! their creatures expire, and they draw one card plus one per Librarius.
//!
//! Testing mode skips the regular draw and never charges mana.

use crate::cards::{CardCategory, CardId, CardName};
use crate::core::{GameState, PlayerId, RandomSource};
use crate::error::{GameError, GameResult};
use crate::rules::constants::SPELL_DISCOUNT;

impl<R: RandomSource> GameState<R> {
    /// Set up a match from one deck per seat and start the first turn.
    ///
    /// Each deck is sorted, its leading wizards (up to field capacity) are
    /// played straight to the field, the rest are shuffled and each seat
    /// draws an opening hand.
    pub fn begin(&mut self, decks: Vec<Vec<CardId>>) -> GameResult<()> {
        if decks.len() != self.player_count() {
            return Err(GameError::InvalidPlayerCount(decks.len()));
        }
        self.atomically(|game| {
            let capacity = game.config().field_capacity;
            let opening = game.config().opening_hand;
            for (player, mut deck) in PlayerId::all(game.player_count()).zip(decks) {
                deck.sort();
                let leading = deck
                    .iter()
                    .take(capacity)
                    .take_while(|&&card| {
                        game.catalog().get(card).map(|d| d.category) == Some(CardCategory::Wizard)
                    })
                    .count();
                for card in deck.drain(..leading) {
                    game.play_card(player, card)?;
                }

                game.rng.shuffle_cards(&mut deck);
                game.set_deck(player, deck)?;
                game.draw_cards(player, opening);
            }
            game.start_turn();
            Ok(())
        })
    }

    pub(crate) fn start_turn(&mut self) {
        self.note_turn_started();
        let current = self.board.current_player;
        let aquarius = self.board.permanents.count_of(current, CardName::Aquarius) as i64;
        let ceiling = self.config().mana_ceiling + aquarius;

        let player = &mut self.board.players[current];
        let mut mana = player.mana_cap;
        if player.mana_cap < ceiling {
            player.mana_cap += 1;
        }
        mana += player.bonus_mana;
        player.bonus_mana = 0;
        self.board.mana = mana;

        for wizard in self.board.fields[current].iter_mut() {
            wizard.clear_turn_buffs();
        }
        log::info!("{}'s turn with {} mana", current, mana);

        if !self.config().testing {
            self.draw_cards(current, 1);
        }
        let librarius = self.board.permanents.count_of(current, CardName::Librarius);
        if librarius > 0 {
            log::info!("Librarius draws {} extra for {}", librarius, current);
            self.draw_cards(current, librarius);
        }
    }

    /// Pass the turn to the next seat.
    pub fn end_turn(&mut self) {
        log::info!("{} ended their turn", self.board.current_player);
        self.board.current_player = self.board.current_player.next(self.player_count());
        self.board.permanents.reset_activations();
        self.start_turn();
    }

    /// Overwrite the current pool.
    pub fn set_mana(&mut self, amount: i64) {
        self.board.mana = amount;
    }

    /// Charge `cost` from the pool, applying a pending discount.
    pub(crate) fn spend(&mut self, player: PlayerId, cost: i64) -> GameResult<()> {
        if self.config().testing {
            return Ok(());
        }
        let discounted = self.player(player)?.discount_next_spell;
        let cost = if discounted { (cost - SPELL_DISCOUNT).max(0) } else { cost };
        if self.board.mana < cost {
            return Err(GameError::InsufficientMana { needed: cost, available: self.board.mana });
        }
        self.board.mana -= cost;
        self.player_mut(player)?.discount_next_spell = false;
        Ok(())
    }

    /// Draw the top card of a seat's deck.
    pub fn draw(&mut self, player: PlayerId) -> GameResult<CardId> {
        let card = self.player_mut(player)?.draw().ok_or(GameError::DeckEmpty)?;
        log::debug!("{} drew {}", player, card);
        Ok(card)
    }

    /// Draw up to `count` cards, stopping at an empty deck. Returns how many
    /// were drawn.
    pub(crate) fn draw_cards(&mut self, player: PlayerId, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count && self.draw(player).is_ok() {
            drawn += 1;
        }
        if drawn < count {
            log::warn!("{} could only draw {} of {} cards", player, drawn, count);
        } else {
            log::info!("{} drew {} card(s)", player, drawn);
        }
        drawn
    }
}
