//! Seat identification and per-seat storage.
//!
//! ## PlayerId
//!
//! Zero-based seat index. A match seats 2 to 5 players.
//!
//! ## PlayerMap
//!
//! One value per seat, backed by a `Vec` and indexed by `PlayerId`. Hands,
//! fields and player records are all stored this way.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::CardId;

/// Fewest players a match can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match can seat.
pub const MAX_PLAYERS: usize = 5;

/// Seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    ///
    /// ```
    /// use wizard_duel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over every seat of a match with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat storage with O(1) access.
///
/// ## Example
///
/// ```
/// use wizard_duel::core::{PlayerId, PlayerMap};
///
/// let mut hand_sizes: PlayerMap<usize> = PlayerMap::new(3, |_| 5);
/// hand_sizes[PlayerId::new(1)] += 1;
///
/// assert_eq!(hand_sizes[PlayerId::new(0)], 5);
/// assert_eq!(hand_sizes[PlayerId::new(1)], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one value per seat from a factory.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a map with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Whether the seat exists in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Checked access.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Checked mutable access.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over the values in seat order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

/// A seat's cards and per-player counters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Seat.
    pub id: PlayerId,

    /// Cards in hand, in draw order.
    pub hand: Vec<CardId>,

    /// Draw pile. The last element is the top.
    pub deck: Vec<CardId>,

    /// Pool size at the start of this player's next turn.
    pub mana_cap: i64,

    /// Extra mana added at the start of this player's next turn.
    pub bonus_mana: i64,

    /// The next mana-costing card costs one less.
    pub discount_next_spell: bool,

    /// HP a vanished Magician returns with.
    pub banked_hp: Option<i64>,
}

impl Player {
    /// Empty hand and deck with the given starting cap.
    #[must_use]
    pub fn new(id: PlayerId, mana_cap: i64) -> Self {
        Self {
            id,
            hand: Vec::new(),
            deck: Vec::new(),
            mana_cap,
            bonus_mana: 0,
            discount_next_spell: false,
            banked_hp: None,
        }
    }

    /// Move the top card of the deck into the hand.
    pub fn draw(&mut self) -> Option<CardId> {
        let card = self.deck.pop()?;
        self.hand.push(card);
        Some(card)
    }
}

/// Unchecked indexing. Callers validate the seat first.
impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
