//! Core match types: players, targets, state, actions, RNG, configuration.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;
pub mod target;

pub use action::{Action, ActionRecord, CardChoice};
pub use config::GameConfig;
pub use player::{Player, PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use state::{Board, Field, GameState};
pub use target::{PermSlot, Target, TargetArea};
