//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! Resource balances and the cards a player has in play.
//! Reaction strategies only read a `Player`; balances change through the
//! deferred queue's apply step.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::resource::{Resource, ResourceStock};
use crate::cards::{CardName, CardResource, PlayedCard};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use placement_rules::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use placement_rules::core::{PlayerId, PlayerMap};
///
/// let mut steel: PlayerMap<i64> = PlayerMap::with_value(2, 0);
/// steel[PlayerId::new(1)] += 1;
/// assert_eq!(steel[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether `player` has an entry.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's mutable game data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name used when rendering log messages.
    pub name: String,

    /// Current resource balances.
    pub stock: ResourceStock,

    /// Cards in play, in the order they were played.
    pub played_cards: Vec<PlayedCard>,
}

impl Player {
    /// Create a player with a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a card to the player's tableau.
    pub fn play_card(&mut self, card: PlayedCard) {
        self.played_cards.push(card);
    }

    /// Whether a card's passive effect is currently active for this player.
    ///
    /// A played card's effect is in force for as long as it stays in play.
    #[must_use]
    pub fn card_is_in_effect(&self, name: CardName) -> bool {
        self.played_cards.iter().any(|c| c.name == name)
    }

    /// Cards in play that accumulate `resource`, in play order.
    pub fn cards_accumulating(&self, resource: CardResource) -> impl Iterator<Item = &PlayedCard> {
        self.played_cards
            .iter()
            .filter(move |c| c.resource_type == Some(resource))
    }

    /// Whether any card in play accumulates `resource`.
    #[must_use]
    pub fn has_card_accumulating(&self, resource: CardResource) -> bool {
        self.cards_accumulating(resource).next().is_some()
    }

    /// Find a played card by name.
    pub fn played_card_mut(&mut self, name: CardName) -> Option<&mut PlayedCard> {
        self.played_cards.iter_mut().find(|c| c.name == name)
    }

    /// Find a played card by name.
    #[must_use]
    pub fn played_card(&self, name: CardName) -> Option<&PlayedCard> {
        self.played_cards.iter().find(|c| c.name == name)
    }

    /// Current balance of a standard resource.
    #[must_use]
    pub fn resource(&self, resource: Resource) -> i64 {
        self.stock.get(resource)
    }
}
