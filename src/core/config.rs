//! Match configuration.
//!
//! Hosts configure a match at startup by providing a `GameConfig`. The
//! defaults describe the standard game; tests usually start from
//! `GameConfig::testing(n)` which disables both mana spending and the
//! automatic turn-start draw.

use serde::{Deserialize, Serialize};

use super::player::{MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{GameError, GameResult};

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (2-5).
    pub player_count: usize,

    /// Seed for the match RNG.
    pub seed: u64,

    /// Testing mode: no mana is charged and no card is drawn at turn start.
    pub testing: bool,

    /// Highest mana cap a player reaches without Aquarius.
    pub mana_ceiling: i64,

    /// Mana cap every player starts with.
    pub starting_mana_cap: i64,

    /// Cards drawn by each player during match setup.
    pub opening_hand: usize,

    /// Creatures a player may have on the field.
    pub field_capacity: usize,

    /// Permanent slots per player.
    pub permanent_capacity: usize,

    /// Maximum HP of a creature before Vitalius.
    pub max_hp: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            seed: 0,
            testing: false,
            mana_ceiling: 6,
            starting_mana_cap: 1,
            opening_hand: 5,
            field_capacity: 3,
            permanent_capacity: 7,
            max_hp: 8,
        }
    }
}

impl GameConfig {
    /// Standard configuration for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Configuration with testing mode enabled.
    #[must_use]
    pub fn testing(player_count: usize) -> Self {
        Self::new(player_count).with_testing(true)
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Toggle testing mode.
    #[must_use]
    pub fn with_testing(mut self, testing: bool) -> Self {
        self.testing = testing;
        self
    }

    /// Set the base mana ceiling.
    #[must_use]
    pub fn with_mana_ceiling(mut self, ceiling: i64) -> Self {
        self.mana_ceiling = ceiling;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, cards: usize) -> Self {
        self.opening_hand = cards;
        self
    }

    /// Check that the configuration describes a playable match.
    pub fn validate(&self) -> GameResult<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }
        if self.field_capacity == 0 || self.permanent_capacity == 0 {
            return Err(GameError::InvalidConfig("field and permanent capacity must be positive".into()));
        }
        if self.max_hp <= 0 || self.starting_mana_cap < 0 || self.mana_ceiling < self.starting_mana_cap {
            return Err(GameError::InvalidConfig("hp and mana limits are inconsistent".into()));
        }
        Ok(())
    }
}
