//! Core types: players, configuration, actions, events, session state.
//!
//! `Session` is the single owner of game state. Everything else in this
//! module is the data it is built from.

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod state;

pub use action::{Action, Step};
pub use config::{SessionConfig, DEFAULT_CUSTOM_AMOUNT, DEFAULT_STARTING_LIFE};
pub use error::{LifeError, Result};
pub use event::{EventId, GameEvent};
pub use player::{Player, PlayerId, Roster, MAX_TABLE_SIZE};
pub use state::{parse_amount, Session};
