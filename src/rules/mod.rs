//! Game rules over a session.
//!
//! - `outcome`: derived status, winner and loss banners
//! - `engine`: typed action dispatch and control enablement
//!
//! The session stores only raw state; everything here is recomputed from it.

pub mod engine;
pub mod outcome;

pub use engine::{apply_action, check_action, is_legal, Applied, Controls};
pub use outcome::{
    alive_players, banner_lines, duel_banner, duel_message, sole_survivor, status, DuelBanner,
    GameResult, GameStatus,
};
