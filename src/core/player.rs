//! Player identification and the ordered roster.
//!
//! ## PlayerId
//!
//! Type-safe 0-based player index. Displays as the 1-based seat label
//! ("Player 1" for `PlayerId(0)`), which is also the default name.
//!
//! ## Roster
//!
//! Ordered players backed by a `SmallVec` sized for the largest table (8),
//! so a full roster never touches the heap for its slots.
//! Indexing by `PlayerId` panics on an out-of-range id.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Largest roster any preset allows.
pub const MAX_TABLE_SIZE: usize = 8;

/// Player identifier (0-based).
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

    /// The 1-based seat number shown to users.
    #[must_use]
    pub const fn seat(self) -> usize {
        self.0 as usize + 1
    }

    /// Convert a 1-based seat number back to an id.
    ///
    /// ```
    /// use life_counter::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_seat(1), Some(PlayerId::new(0)));
    /// assert_eq!(PlayerId::from_seat(0), None);
    /// ```
    #[must_use]
    pub fn from_seat(seat: usize) -> Option<Self> {
        let index = seat.checked_sub(1)?;
        u8::try_from(index).ok().map(Self)
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Default display name for this seat.
    #[must_use]
    pub fn default_name(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.seat())
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display label. Not required to be unique, may be empty.
    pub name: String,

    /// Life total. Never clamped; zero or below means eliminated.
    pub life: i64,

    /// Step used by the custom +/- controls.
    pub custom_amount: i64,
}

impl Player {
    /// Create a player.
    pub fn new(name: impl Into<String>, life: i64, custom_amount: i64) -> Self {
        Self {
            name: name.into(),
            life,
            custom_amount,
        }
    }

    /// Still in the game (life above zero).
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// Ordered players. Order is display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: SmallVec<[Player; MAX_TABLE_SIZE]>,
}

impl Roster {
    /// Create a roster with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> Player) -> Self {
        assert!(player_count <= 255, "At most 255 players supported");

        let players = PlayerId::all(player_count).map(factory).collect();
        Self { players }
    }

    /// Get the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True when no seats exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether `player` names a seat in this roster.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.players.len()
    }

    /// Get a player, or `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player.index())
    }

    /// Append a player and return its id.
    pub fn push(&mut self, player: Player) -> PlayerId {
        let id = PlayerId(self.players.len() as u8);
        self.players.push(player);
        id
    }

    /// Iterate over (PlayerId, &Player) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    /// Life totals in seat order.
    #[must_use]
    pub fn lives(&self) -> Vec<i64> {
        self.players.iter().map(|p| p.life).collect()
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.players[player.index()]
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.players[player.index()]
    }
}
