//! Rejections at the action boundary.
//!
//! None of these leave a session half-updated: a rejected action is a no-op.

use thiserror::Error;

use super::player::PlayerId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("{player} does not exist (roster has {count} players)")]
    UnknownPlayer { player: PlayerId, count: usize },

    #[error("roster is full ({max} players)")]
    RosterFull { max: usize },

    #[error("players cannot be added once life totals have changed")]
    AlreadyStarted,

    #[error("the game is over; reset to play again")]
    GameOver,

    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = LifeError::UnknownPlayer {
            player: PlayerId::new(4),
            count: 2,
        };
        assert_eq!(err.to_string(), "Player 5 does not exist (roster has 2 players)");
        assert_eq!(LifeError::RosterFull { max: 8 }.to_string(), "roster is full (8 players)");
        assert_eq!(
            LifeError::InvalidAmount("abc".into()).to_string(),
            "invalid amount: \"abc\""
        );
    }
}
