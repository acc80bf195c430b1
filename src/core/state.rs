//! Match state.
//!
//! ## Board
//!
//! Everything the rules read and write: players, fields, permanents, the
//! mana pool and the pending-target slot. A `Board` is a plain value; the
//! persistent maps inside make cloning it cheap.
//!
//! ## GameState
//!
//! A board plus what a running match needs around it:
//! - Configuration and the shared card catalog
//! - The injected random source
//! - Action history
//!
//! Rules are implemented as methods on `GameState` in the `rules` and
//! `effects` modules. Every operation is atomic: if it returns `Err`, the
//! board is exactly as it was before the call, apart from the documented
//! cases where a failed target resolution still clears the prompt.

use std::hash::Hasher;
use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::{GameRng, RandomSource};
use super::target::PermSlot;
use crate::cards::{CardCatalog, CardId, Wizard};
use crate::error::{GameError, GameResult};
use crate::permanents::{Permanent, PermanentRegistry};
use crate::rules::Await;

/// A player's field.
pub type Field = SmallVec<[Wizard; 3]>;

/// The rules-visible part of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// One record per seat.
    pub players: PlayerMap<Player>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Creatures in play, per seat, in play order.
    pub fields: PlayerMap<Field>,

    /// Permanents and dragons.
    pub permanents: PermanentRegistry,

    /// The current player's mana pool.
    pub mana: i64,

    /// Pending prompt.
    pub awaiting: Await,
}

impl Board {
    /// Empty board for a configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            players: PlayerMap::new(config.player_count, |id| Player::new(id, config.starting_mana_cap)),
            current_player: PlayerId::new(0),
            fields: PlayerMap::with_default(config.player_count),
            permanents: PermanentRegistry::new(config.permanent_capacity),
            mana: 0,
            awaiting: Await::Idle,
        }
    }
}

/// A running match.
#[derive(Clone, Debug)]
pub struct GameState<R: RandomSource = GameRng> {
    config: GameConfig,
    catalog: Arc<CardCatalog>,
    pub(crate) board: Board,
    pub(crate) rng: R,
    history: Vector<ActionRecord>,
    turn: u32,
    sequence: u32,
}

impl GameState<GameRng> {
    /// Create a match seeded from `config.seed`. The first turn has not
    /// started; call `begin` with decks, or `start_first_turn`.
    pub fn new(config: GameConfig, catalog: Arc<CardCatalog>) -> GameResult<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, catalog, rng)
    }

    /// Testing match on the standard catalog with the first turn started.
    ///
    /// Mana is never charged and turns start without a draw.
    ///
    /// ```
    /// use wizard_duel::core::{GameState, PlayerId};
    ///
    /// let game = GameState::for_testing(2).unwrap();
    /// assert_eq!(game.current_player(), PlayerId::new(0));
    /// assert_eq!(game.mana(), 1);
    /// ```
    pub fn for_testing(player_count: usize) -> GameResult<Self> {
        let mut game = Self::new(GameConfig::testing(player_count), Arc::new(CardCatalog::standard()))?;
        game.start_first_turn();
        Ok(game)
    }

    /// Clone the match onto a forked random stream.
    ///
    /// Takes `&mut self` because forking advances the fork counter. The
    /// branch shares the catalog and history.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        Self {
            config: self.config.clone(),
            catalog: Arc::clone(&self.catalog),
            board: self.board.clone(),
            rng: self.rng.fork(),
            history: self.history.clone(),
            turn: self.turn,
            sequence: self.sequence,
        }
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a match with an injected random source.
    pub fn with_rng(config: GameConfig, catalog: Arc<CardCatalog>, rng: R) -> GameResult<Self> {
        config.validate()?;
        Ok(Self {
            board: Board::new(&config),
            config,
            catalog,
            rng,
            history: Vector::new(),
            turn: 0,
            sequence: 0,
        })
    }

    /// Start the first turn without any setup.
    pub fn start_first_turn(&mut self) {
        self.start_turn();
    }

    // === Read accessors ===

    /// Match configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shared card catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// The rules-visible state.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.board.players.player_count()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.board.current_player
    }

    /// The current player's mana pool.
    #[must_use]
    pub fn mana(&self) -> i64 {
        self.board.mana
    }

    /// Pending prompt.
    #[must_use]
    pub fn awaiting(&self) -> &Await {
        &self.board.awaiting
    }

    /// A seat's record.
    pub fn player(&self, player: PlayerId) -> GameResult<&Player> {
        self.board
            .players
            .get(player)
            .ok_or(GameError::InvalidPlayerId(player.0))
    }

    /// A seat's field, in play order.
    pub fn field(&self, player: PlayerId) -> GameResult<&[Wizard]> {
        self.board
            .fields
            .get(player)
            .map(|f| f.as_slice())
            .ok_or(GameError::InvalidPlayerId(player.0))
    }

    /// A seat's hand.
    pub fn hand(&self, player: PlayerId) -> GameResult<&[CardId]> {
        Ok(&self.player(player)?.hand)
    }

    /// Cards left in a seat's deck.
    pub fn deck_size(&self, player: PlayerId) -> GameResult<usize> {
        Ok(self.player(player)?.deck.len())
    }

    /// Permanent in a slot.
    #[must_use]
    pub fn permanent(&self, slot: PermSlot) -> Option<&Permanent> {
        self.board.permanents.get(slot)
    }

    /// Dragon standing on a slot.
    #[must_use]
    pub fn dragon(&self, slot: PermSlot) -> Option<&Wizard> {
        self.board.permanents.dragon(slot)
    }

    /// Occupied permanent slots, one ascending list per seat.
    #[must_use]
    pub fn sorted_permanents(&self) -> Vec<Vec<PermSlot>> {
        PlayerId::all(self.player_count())
            .map(|p| self.board.permanents.sorted_slots(p))
            .collect()
    }

    /// Successfully applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Turns started so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Digest of the board. Equal boards give equal digests.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        // A `Board` always serializes: every sequence and map in it has a known
        // length, and the default bincode options set no size limit.
        if let Ok(bytes) = bincode::serialize(&self.board) {
            hasher.write(&bytes);
        }
        hasher.finish()
    }

    // === Setup helpers ===

    /// Replace a seat's deck. The last card is the top.
    pub fn set_deck(&mut self, player: PlayerId, deck: Vec<CardId>) -> GameResult<()> {
        self.player_mut(player)?.deck = deck;
        Ok(())
    }

    /// Put a card straight into a seat's hand.
    pub fn give_card(&mut self, player: PlayerId, card: CardId) -> GameResult<()> {
        if !self.catalog.contains(card) {
            return Err(GameError::UnknownCard(card));
        }
        self.player_mut(player)?.hand.push(card);
        Ok(())
    }

    // === Action dispatch ===

    /// Apply an action and record it on success.
    pub fn apply(&mut self, action: Action) -> GameResult<()> {
        let actor = self.board.current_player;
        match &action {
            Action::Play { player, choice } => self.play(*player, *choice)?,
            Action::Attack { attacker, defender } => self.attack(*attacker, *defender)?,
            Action::ResolveTarget(target) => self.resolve_target(*target)?,
            Action::ActivatePermanent(slot) => self.activate_permanent(*slot)?,
            Action::EndTurn => self.end_turn(),
            Action::SetMana(amount) => self.set_mana(*amount),
            Action::Draw(player) => {
                self.draw(*player)?;
            }
        }
        log::debug!("{} applied by {}", action.name(), actor);
        let record = ActionRecord::new(actor, action, self.turn, self.sequence);
        self.history.push_back(record);
        self.sequence += 1;
        Ok(())
    }

    // === Internal helpers ===

    pub(crate) fn check_player(&self, player: PlayerId) -> GameResult<()> {
        if self.board.players.contains(player) {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerId(player.0))
        }
    }

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> GameResult<&mut Player> {
        self.board
            .players
            .get_mut(player)
            .ok_or(GameError::InvalidPlayerId(player.0))
    }

    pub(crate) fn note_turn_started(&mut self) {
        self.turn += 1;
        self.sequence = 0;
    }

    /// Run `op`, restoring the board and the random stream if it fails.
    pub(crate) fn atomically<T>(&mut self, op: impl FnOnce(&mut Self) -> GameResult<T>) -> GameResult<T> {
        let board = self.board.clone();
        let rng = self.rng.clone();
        let result = op(self);
        if result.is_err() {
            self.board = board;
            self.rng = rng;
        }
        result
    }
}
