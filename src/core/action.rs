//! Boundary operations as data.
//!
//! Every call a host can make against a match has an `Action` form. Applying
//! actions through `GameState::apply` records them in the match history, so
//! a match can be replayed from its seed and action list.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::target::{PermSlot, Target};
use crate::cards::CardId;

/// How a card to play is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardChoice {
    /// Play the card at this index of the player's hand. The card leaves the
    /// hand only if the play succeeds.
    Hand(usize),
    /// Conjure a card directly by id, without using the hand.
    Card(CardId),
}

/// A single operation against a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play a card for a player.
    Play {
        /// Who plays the card.
        player: PlayerId,
        /// Which card.
        choice: CardChoice,
    },
    /// Attack with one combatant against another.
    Attack {
        /// Attacking creature or dragon, with its attack slot.
        attacker: Target,
        /// Defending creature or dragon.
        defender: Target,
    },
    /// Answer the pending target prompt.
    ResolveTarget(Target),
    /// Use a permanent's activated ability.
    ActivatePermanent(PermSlot),
    /// Pass the turn.
    EndTurn,
    /// Overwrite the mana pool.
    SetMana(i64),
    /// Draw one card for a player.
    Draw(PlayerId),
}

impl Action {
    /// Short action name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Play { .. } => "play",
            Self::Attack { .. } => "attack",
            Self::ResolveTarget(_) => "target",
            Self::ActivatePermanent(_) => "activate",
            Self::EndTurn => "end turn",
            Self::SetMana(_) => "set mana",
            Self::Draw(_) => "draw",
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
