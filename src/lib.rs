//! # life-counter
//!
//! Per-player life tracking for tabletop games.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `Session` holds every piece of game state. Views read
//!    it and dispatch typed `Action`s; they never mutate it directly.
//!
//! 2. **Recompute, don't cache**: alive players, game over and the loss
//!    banners are derived from the life totals on every read.
//!
//! 3. **Configuration over variants**: the two-player and multiplayer
//!    tables are presets of `SessionConfig`, not separate code paths.
//!
//! ## Modules
//!
//! - `core`: players, roster, configuration, actions, events, session
//! - `rules`: derived status, banners and action dispatch
//! - `cli`: terminal front end (argument parsing, commands, rendering)

pub mod cli;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, EventId, GameEvent, LifeError, Player, PlayerId, Result, Roster, Session,
    SessionConfig, Step,
};

pub use crate::rules::{apply_action, Applied, Controls, DuelBanner, GameResult, GameStatus};
