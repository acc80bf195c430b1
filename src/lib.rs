//! # wizard-duel
//!
//! A deterministic rules engine for a turn-based wizard card battle for
//! two to five players.
//!
//! ## Design Principles
//!
//! 1. **Atomic Operations**: A call that fails leaves the board untouched.
//!    Callers can probe moves freely.
//!
//! 2. **N-Player First**: Every seat is addressed by `PlayerId`, and
//!    per-seat data lives in `PlayerMap`.
//!
//! 3. **Injected Randomness**: Shuffles and random targets go through a
//!    `RandomSource`, so a seed replays a match exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Permanents and history use `im-rs`, so
//!   snapshotting a board for rollback or search is cheap.
//!
//! - **Single Prompt**: Plays that need a second input arm one pending
//!   prompt, answered by `GameState::resolve_target`.
//!
//! ## Modules
//!
//! - `core`: Players, targets, state, actions, RNG, configuration
//! - `cards`: Card definitions, names, catalog and creatures
//! - `permanents`: The permanent registry
//! - `rules`: Turns, plays, attacks, damage and the pending prompt
//! - `effects`: Attack side effects, instants and attachments
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use wizard_duel::{CardChoice, CardName, GameState, PlayerId, Target};
//!
//! let mut game = GameState::for_testing(2).unwrap();
//! let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
//! game.play(p0, CardChoice::Card(CardName::Mortician.id())).unwrap();
//! game.play(p1, CardChoice::Card(CardName::Librarian.id())).unwrap();
//!
//! game.attack(Target::creature(p0, 0), Target::creature(p1, 0)).unwrap();
//! assert_eq!(game.field(p1).unwrap()[0].hp, 6);
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod permanents;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Board, CardChoice, GameConfig, GameRng, GameRngState, GameState,
    PermSlot, Player, PlayerId, PlayerMap, RandomSource, Target, TargetArea,
};

pub use crate::cards::{
    Attack, AttackEffect, CardCatalog, CardCategory, CardDefinition, CardId, CardName, Wizard,
};

pub use crate::error::{CatalogError, GameError, GameResult, TargetError};

pub use crate::permanents::{Permanent, PermanentRegistry};

pub use crate::rules::Await;
