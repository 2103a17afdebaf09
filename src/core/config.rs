//! Session configuration.
//!
//! Two presets cover the shipped variants:
//! - `SessionConfig::duel()`: fixed two-player table, game over is advisory
//! - `SessionConfig::multiplayer()`: 1-8 players, four by default, game over
//!   locks further life changes
//!
//! Everything else is tuned through the `with_*` builders.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, Roster, MAX_TABLE_SIZE};

/// Life every player starts with.
pub const DEFAULT_STARTING_LIFE: i64 = 20;

/// Default step for the custom +/- controls.
pub const DEFAULT_CUSTOM_AMOUNT: i64 = 5;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seats created on launch and on reset.
    pub default_players: usize,

    /// Smallest roster allowed.
    pub min_players: usize,

    /// Largest roster `add_player` may grow to.
    pub max_players: usize,

    /// Starting life for every seat.
    pub starting_life: i64,

    /// Starting custom amount for every seat.
    pub default_custom_amount: i64,

    /// Reject life changes once exactly one player is left alive.
    pub lock_when_over: bool,
}

impl SessionConfig {
    /// Create a configuration with a fixed roster of `player_count`.
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(
            player_count <= MAX_TABLE_SIZE,
            "At most {} players supported",
            MAX_TABLE_SIZE
        );

        Self {
            default_players: player_count,
            min_players: player_count,
            max_players: player_count,
            starting_life: DEFAULT_STARTING_LIFE,
            default_custom_amount: DEFAULT_CUSTOM_AMOUNT,
            lock_when_over: false,
        }
    }

    /// Two players, no roster growth, advisory game over.
    pub fn duel() -> Self {
        Self::new(2)
    }

    /// Four players by default, growable to eight, terminal game over.
    pub fn multiplayer() -> Self {
        Self::new(4)
            .with_player_range(1, MAX_TABLE_SIZE)
            .with_lock_when_over(true)
    }

    /// Set the number of seats created on launch and reset.
    #[must_use]
    pub fn with_default_players(mut self, count: usize) -> Self {
        assert!(
            (self.min_players..=self.max_players).contains(&count),
            "Default player count must be within {}..={}",
            self.min_players,
            self.max_players
        );
        self.default_players = count;
        self
    }

    /// Set the allowed roster range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min > 0, "Must have at least 1 player");
        assert!(min <= max, "Minimum player count exceeds maximum");
        assert!(max <= MAX_TABLE_SIZE, "At most {} players supported", MAX_TABLE_SIZE);
        self.min_players = min;
        self.max_players = max;
        self.default_players = self.default_players.clamp(min, max);
        self
    }

    /// Set starting life.
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Set the starting custom amount.
    #[must_use]
    pub fn with_custom_amount(mut self, amount: i64) -> Self {
        self.default_custom_amount = amount;
        self
    }

    /// Make game over terminal (or advisory).
    #[must_use]
    pub fn with_lock_when_over(mut self, lock: bool) -> Self {
        self.lock_when_over = lock;
        self
    }

    /// A fresh player for `seat` with this configuration's defaults.
    #[must_use]
    pub fn new_player(&self, seat: PlayerId) -> Player {
        Player::new(seat.default_name(), self.starting_life, self.default_custom_amount)
    }

    /// The roster a new or reset session starts with.
    #[must_use]
    pub fn default_roster(&self) -> Roster {
        Roster::new(self.default_players, |seat| self.new_player(seat))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::multiplayer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duel_preset() {
        let config = SessionConfig::duel();

        assert_eq!(config.default_players, 2);
        assert_eq!(config.min_players, 2);
        assert_eq!(config.max_players, 2);
        assert!(!config.lock_when_over);
    }

    #[test]
    fn test_multiplayer_preset() {
        let config = SessionConfig::multiplayer();

        assert_eq!(config.default_players, 4);
        assert_eq!(config.min_players, 1);
        assert_eq!(config.max_players, 8);
        assert_eq!(config.starting_life, 20);
        assert_eq!(config.default_custom_amount, 5);
        assert!(config.lock_when_over);
        assert_eq!(SessionConfig::default(), config);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::multiplayer()
            .with_default_players(6)
            .with_starting_life(40)
            .with_custom_amount(3)
            .with_lock_when_over(false);

        assert_eq!(config.default_players, 6);
        assert_eq!(config.starting_life, 40);
        assert_eq!(config.default_custom_amount, 3);
        assert!(!config.lock_when_over);
    }

    #[test]
    fn test_default_roster() {
        let roster = SessionConfig::multiplayer().with_starting_life(30).default_roster();

        assert_eq!(roster.len(), 4);
        for (id, player) in roster.iter() {
            assert_eq!(player.name, format!("Player {}", id.seat()));
            assert_eq!(player.life, 30);
            assert_eq!(player.custom_amount, 5);
        }
    }

    #[test]
    fn test_player_range_clamps_default() {
        let config = SessionConfig::new(2).with_player_range(3, 5);
        assert_eq!(config.default_players, 3);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_zero_players() {
        SessionConfig::new(0);
    }

    #[test]
    #[should_panic(expected = "At most 8 players supported")]
    fn test_too_many_players() {
        SessionConfig::new(9);
    }

    #[test]
    #[should_panic(expected = "Default player count must be within")]
    fn test_default_outside_range() {
        let _ = SessionConfig::duel().with_default_players(3);
    }
}
