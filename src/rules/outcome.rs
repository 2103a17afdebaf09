//! Derived game status and loss banners.
//!
//! Nothing here is stored. Every predicate is recomputed from the current
//! life totals, which keeps the duel and multiplayer variants on one policy.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roster, Session};

/// Progression of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No life total has changed yet. The roster may still grow.
    NotStarted,
    /// Life changes have happened and more than one player is alive
    /// (or nobody is).
    InProgress,
    /// Exactly one player is alive at a table of two or more.
    Over { winner: PlayerId },
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }

    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Over { winner } => Some(winner),
            _ => None,
        }
    }

    /// The finished result, if any.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        self.winner().map(GameResult::Winner)
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single survivor.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// Two-player loss banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelBanner {
    /// Both players at or below zero.
    BothLose,
    /// One player at or below zero.
    Loses(PlayerId),
    /// Nobody has lost.
    None,
}

/// Players with life above zero, in seat order.
#[must_use]
pub fn alive_players(roster: &Roster) -> Vec<PlayerId> {
    roster
        .iter()
        .filter(|(_, p)| p.is_alive())
        .map(|(id, _)| id)
        .collect()
}

/// Game over iff exactly one player is alive and the table has more
/// than one seat. Returns the survivor.
#[must_use]
pub fn sole_survivor(roster: &Roster) -> Option<PlayerId> {
    if roster.len() < 2 {
        return None;
    }
    match alive_players(roster).as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}

/// Current status of a session.
#[must_use]
pub fn status(session: &Session) -> GameStatus {
    if !session.is_started() {
        return GameStatus::NotStarted;
    }
    match sole_survivor(session.roster()) {
        Some(winner) => GameStatus::Over { winner },
        None => GameStatus::InProgress,
    }
}

/// Loss banner for a two-player table, from the first two seats.
///
/// Panics if the roster has fewer than two players.
#[must_use]
pub fn duel_banner(roster: &Roster) -> DuelBanner {
    let (a, b) = (PlayerId::new(0), PlayerId::new(1));
    match (roster[a].is_alive(), roster[b].is_alive()) {
        (false, false) => DuelBanner::BothLose,
        (false, true) => DuelBanner::Loses(a),
        (true, false) => DuelBanner::Loses(b),
        (true, true) => DuelBanner::None,
    }
}

/// Message shown for a duel banner.
#[must_use]
pub fn duel_message(session: &Session) -> Option<String> {
    match duel_banner(session.roster()) {
        DuelBanner::BothLose => Some("Both players lose!".to_string()),
        DuelBanner::Loses(p) => Some(format!("{} loses!", session.player(p).name)),
        DuelBanner::None => None,
    }
}

/// Banner lines for a multiplayer table: one "LOSES!" per eliminated
/// player, then the winner line once the game is over.
#[must_use]
pub fn banner_lines(session: &Session) -> Vec<String> {
    let mut lines: Vec<String> = session
        .losers()
        .into_iter()
        .map(|p| format!("{} LOSES!", session.player(p).name))
        .collect();

    if let Some(winner) = session.winner() {
        lines.push(format!("{} WINS! Game Over!", session.player(winner).name));
    }

    lines
}
