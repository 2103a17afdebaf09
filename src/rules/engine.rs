//! Action dispatch boundary.
//!
//! The front end emits typed `Action`s; `apply_action` validates the seat,
//! then calls the matching `Session` operation. An unknown seat is reported
//! as `LifeError::UnknownPlayer` here instead of panicking inside the
//! session.
//!
//! `Controls` mirrors which controls a view should enable.

use tracing::warn;

use crate::core::{Action, GameEvent, LifeError, PlayerId, Result, Session};

/// What an applied action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// A life total changed; carries the recorded event.
    LifeChanged(GameEvent),
    /// A custom amount was set.
    CustomAmountSet { player: PlayerId, amount: i64 },
    /// A player was renamed.
    Renamed(PlayerId),
    /// A player was appended.
    PlayerAdded(PlayerId),
    /// The session was restored to defaults.
    Reset,
}

/// Enabled state of the session controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    /// Add Player.
    pub add_player: bool,
    /// The four life buttons on every player card.
    pub adjust_life: bool,
    /// Reset is always available.
    pub reset: bool,
}

impl Controls {
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        Self {
            add_player: session.can_add_player(),
            adjust_life: session.can_adjust_life(),
            reset: true,
        }
    }
}

/// Check an action against the session without applying it.
pub fn check_action(session: &Session, action: &Action) -> Result<()> {
    if let Some(player) = action.player() {
        if !session.roster().contains(player) {
            return Err(LifeError::UnknownPlayer {
                player,
                count: session.player_count(),
            });
        }
    }

    let controls = Controls::for_session(session);
    match action {
        Action::AddPlayer if !controls.add_player => Err(add_player_rejection(session)),
        _ if action.changes_life() && !controls.adjust_life => Err(LifeError::GameOver),
        _ => Ok(()),
    }
}

/// Whether `action` would be accepted right now.
#[must_use]
pub fn is_legal(session: &Session, action: &Action) -> bool {
    check_action(session, action).is_ok()
}

/// Validate and apply an action.
///
/// A rejected action leaves the session unchanged.
pub fn apply_action(session: &mut Session, action: Action) -> Result<Applied> {
    if let Err(err) = check_action(session, &action) {
        warn!(%err, ?action, "action rejected");
        return Err(err);
    }

    let applied = match action {
        Action::AdjustLife { player, delta, label } => {
            Applied::LifeChanged(session.adjust_life(player, delta, label)?.clone())
        }
        Action::Press { player, step } => Applied::LifeChanged(session.press(player, step)?.clone()),
        Action::SetCustomAmount { player, amount } => {
            session.set_custom_amount(player, amount);
            Applied::CustomAmountSet { player, amount }
        }
        Action::Rename { player, name } => {
            session.rename_player(player, name);
            Applied::Renamed(player)
        }
        Action::AddPlayer => Applied::PlayerAdded(session.add_player()?),
        Action::Reset => {
            session.reset();
            Applied::Reset
        }
    };

    Ok(applied)
}

fn add_player_rejection(session: &Session) -> LifeError {
    if session.is_started() {
        LifeError::AlreadyStarted
    } else {
        LifeError::RosterFull {
            max: session.config().max_players,
        }
    }
}
