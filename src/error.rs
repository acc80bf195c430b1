//! Error types returned by engine operations.
//!
//! Every operation returns `GameResult<T>`. Errors are values: the engine
//! never panics on bad input, and a failed operation leaves the state as it
//! was (with the documented await-clearing exceptions in `rules::pending`).

use thiserror::Error;

use crate::cards::CardId;
use crate::core::PlayerId;

/// Result alias for engine operations.
pub type GameResult<T> = std::result::Result<T, GameError>;

/// Reasons a target reference could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TargetError {
    /// The target names the wrong kind of thing (e.g. a deck for an attack).
    #[error("target category does not match")]
    CategoryMismatch,

    /// No creature occupies the requested field slot.
    #[error("no creature in slot {slot} of {player}")]
    SlotOutOfRange {
        /// Owner of the field.
        player: PlayerId,
        /// Requested slot.
        slot: usize,
    },

    /// No permanent occupies the requested permanent slot.
    #[error("no permanent in slot {slot} of {player}")]
    PermanentNotFound {
        /// Owner of the permanent row.
        player: PlayerId,
        /// Requested slot.
        slot: usize,
    },

    /// A permanent that cannot fight was used as a combatant.
    #[error("permanent is not a valid combat target")]
    NotACombatant,

    /// The attack slot does not exist on the attacker.
    #[error("invalid attack slot {0}")]
    InvalidAttackSlot(u8),

    /// The requested card is not in the player's deck.
    #[error("{0} is not in the deck")]
    CardNotInDeck(CardId),

    /// A random-target effect found nothing alive to hit.
    #[error("no live creatures to target")]
    NoLiveTargets,
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Player index outside the match's player count.
    #[error("invalid player id {0}")]
    InvalidPlayerId(u8),

    /// Match created with an unsupported number of players.
    #[error("invalid number of players: {0}")]
    InvalidPlayerCount(usize),

    /// Capacities or limits in the configuration cannot describe a match.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A target reference did not resolve.
    #[error("invalid target: {0}")]
    TargetInvalid(#[from] TargetError),

    /// The field already holds the maximum number of creatures.
    #[error("field is at max capacity")]
    FieldFull,

    /// Every permanent slot of the player is occupied.
    #[error("max number of permanents reached")]
    MaxPermanentsReached,

    /// The mana pool cannot pay for the card.
    #[error("not enough mana: need {needed}, have {available}")]
    InsufficientMana {
        /// Cost after discounts.
        needed: i64,
        /// Mana in the pool.
        available: i64,
    },

    /// Tried to draw from an empty deck.
    #[error("deck empty")]
    DeckEmpty,

    /// `resolve_target` without a pending action.
    #[error("not awaiting a target")]
    NotAwaitingTarget,

    /// The supplied target does not fit the pending action.
    #[error("unexpected target")]
    UnexpectedTarget,

    /// The creature is shielded from spells.
    #[error("target is shielded from spells")]
    SpellBlocked,

    /// A card the catalog knows about has no rules implementation.
    #[error("not implemented: {0}")]
    ImplementationError(String),

    /// The permanent was already used this turn.
    #[error("permanent already activated this turn")]
    AlreadyActivated,

    /// The permanent has no activated ability.
    #[error("{0} cannot be activated")]
    NotActivatable(CardId),

    /// Hand index out of bounds.
    #[error("no card at hand index {0}")]
    InvalidHandIndex(usize),

    /// The card requires cards in hand to be played.
    #[error("cannot play this card with an empty hand")]
    EmptyHand,

    /// The catalog has no entry for the id.
    #[error("unknown card {0}")]
    UnknownCard(CardId),
}

/// Errors raised while loading a card catalog.
///
/// Catalog loading happens once at startup, before any match exists.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON is malformed.
    #[error("couldn't parse card data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog contains no cards.
    #[error("card catalog is empty")]
    Empty,
}
