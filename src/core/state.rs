//! The session: roster, history and progression.
//!
//! ## Session
//!
//! Single owner of all game state. The front end reads its fields and
//! dispatches actions; it never holds game logic of its own.
//!
//! - Roster (names, life totals, custom amounts)
//! - History of life changes (append-only)
//! - `started` flag, set by the first life change
//!
//! Game status is never cached. `status()` recomputes it from the life
//! totals on every call (see `rules::outcome`).
//!
//! The history uses an `im::Vector`, so cloning a session for display or
//! snapshotting is O(1) in the history length.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::action::Step;
use super::config::SessionConfig;
use super::error::{LifeError, Result};
use super::event::{EventId, GameEvent};
use super::player::{Player, PlayerId, Roster};
use crate::rules::outcome::{self, GameStatus};

/// Complete state of one play session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    config: SessionConfig,
    roster: Roster,
    history: Vector<GameEvent>,
    started: bool,
    next_event: EventId,
}

impl Session {
    /// Create a session with the configuration's default roster.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let roster = config.default_roster();
        Self {
            config,
            roster,
            history: Vector::new(),
            started: false,
            next_event: EventId::new(0),
        }
    }

    /// Two-player session.
    #[must_use]
    pub fn duel() -> Self {
        Self::new(SessionConfig::duel())
    }

    /// Four-player session, growable to eight.
    #[must_use]
    pub fn multiplayer() -> Self {
        Self::new(SessionConfig::multiplayer())
    }

    // === Reading ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Get a player. Panics if `player` is not seated.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.roster[player]
    }

    /// Iterate over (PlayerId, &Player) pairs in seat order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.roster.iter()
    }

    /// Ordered life-change history.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// True once any life total has changed.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Current progression, recomputed from the life totals.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        outcome::status(self)
    }

    /// Exactly one player left alive at a multi-player table.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// The sole survivor, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status().winner()
    }

    /// Players with life above zero, in seat order.
    #[must_use]
    pub fn alive_players(&self) -> Vec<PlayerId> {
        outcome::alive_players(&self.roster)
    }

    /// Players at or below zero, in seat order.
    #[must_use]
    pub fn losers(&self) -> Vec<PlayerId> {
        self.roster
            .iter()
            .filter(|(_, p)| !p.is_alive())
            .map(|(id, _)| id)
            .collect()
    }

    /// Whether the Add Player control is enabled.
    #[must_use]
    pub fn can_add_player(&self) -> bool {
        self.check_add_player().is_ok()
    }

    /// Whether the life buttons accept presses.
    #[must_use]
    pub fn can_adjust_life(&self) -> bool {
        !(self.config.lock_when_over && self.is_over())
    }

    // === Mutation ===

    /// Apply `delta` to a player's life and record it.
    ///
    /// Life is not clamped; negative totals are valid. Marks the session
    /// started. Panics if `player` is not seated.
    ///
    /// Fails with `GameOver` (and changes nothing) when the game is over and
    /// the configuration locks finished games.
    pub fn adjust_life(&mut self, player: PlayerId, delta: i64, label: impl Into<String>) -> Result<&GameEvent> {
        if !self.can_adjust_life() {
            warn!(%player, delta, "life change rejected: game over");
            return Err(LifeError::GameOver);
        }

        let seat = &mut self.roster[player];
        seat.life = seat.life.saturating_add(delta);
        let event = GameEvent::life_change(self.next_event, player, &seat.name, delta, label);
        debug!(%player, delta, life = seat.life, "life changed");

        self.next_event = self.next_event.next();
        self.started = true;
        self.history.push_back(event);

        if let GameStatus::Over { winner } = self.status() {
            info!(winner = %self.roster[winner].name, "game over");
        }

        // Just pushed.
        Ok(&self.history[self.history.len() - 1])
    }

    /// Press one of the life buttons, resolved against the player's
    /// current custom amount.
    pub fn press(&mut self, player: PlayerId, step: Step) -> Result<&GameEvent> {
        let (delta, label) = step.resolve(self.roster[player].custom_amount);
        self.adjust_life(player, delta, label)
    }

    /// Set the custom step size. Zero and negative values are accepted.
    pub fn set_custom_amount(&mut self, player: PlayerId, amount: i64) {
        debug!(%player, amount, "custom amount set");
        self.roster[player].custom_amount = amount;
    }

    /// Set the custom step size from text entry.
    ///
    /// On parse failure the previous amount is kept and an error returned.
    pub fn set_custom_amount_text(&mut self, player: PlayerId, text: &str) -> Result<i64> {
        let amount = parse_amount(text)?;
        self.set_custom_amount(player, amount);
        Ok(amount)
    }

    /// Replace a player's display name. Empty names are accepted.
    ///
    /// Past history entries keep the name they were recorded with.
    pub fn rename_player(&mut self, player: PlayerId, name: impl Into<String>) {
        let name = name.into();
        debug!(%player, name = %name, "player renamed");
        self.roster[player].name = name;
    }

    /// Append a default player.
    ///
    /// Rejected (as a no-op) once the roster is full or the game has started.
    pub fn add_player(&mut self) -> Result<PlayerId> {
        if let Err(err) = self.check_add_player() {
            warn!(%err, "add player rejected");
            return Err(err);
        }

        let seat = PlayerId::new(self.roster.len() as u8);
        let id = self.roster.push(self.config.new_player(seat));
        info!(player = %id, count = self.roster.len(), "player added");
        Ok(id)
    }

    /// Restore the default roster and clear history and progression.
    ///
    /// Event ids keep counting so they stay unique for the process lifetime.
    pub fn reset(&mut self) {
        self.roster = self.config.default_roster();
        self.history = Vector::new();
        self.started = false;
        info!(players = self.roster.len(), "session reset");
    }

    fn check_add_player(&self) -> Result<()> {
        if self.started {
            return Err(LifeError::AlreadyStarted);
        }
        if self.roster.len() >= self.config.max_players {
            return Err(LifeError::RosterFull {
                max: self.config.max_players,
            });
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// Parse a custom amount as typed: optional sign, decimal digits,
/// surrounding whitespace ignored.
pub fn parse_amount(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| LifeError::InvalidAmount(text.to_string()))
}
