//! Typed user actions.
//!
//! The front end never mutates a session directly. It builds an `Action`
//! and hands it to `rules::apply_action`, which validates the seat and
//! calls the matching `Session` operation.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// One of the four life buttons on a player card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Plus1,
    Minus1,
    /// `+custom_amount`
    CustomUp,
    /// `-custom_amount`
    CustomDown,
}

impl Step {
    /// Resolve to `(delta, label)` for a player whose custom amount is `custom`.
    ///
    /// Labels keep the button's literal text, so a negative custom amount
    /// yields `"+-3"` for `CustomUp`.
    ///
    /// ```
    /// use life_counter::core::Step;
    ///
    /// assert_eq!(Step::Minus1.resolve(5), (-1, "-1".to_string()));
    /// assert_eq!(Step::CustomUp.resolve(5), (5, "+5".to_string()));
    /// assert_eq!(Step::CustomDown.resolve(-3), (3, "--3".to_string()));
    /// ```
    #[must_use]
    pub fn resolve(self, custom: i64) -> (i64, String) {
        match self {
            Step::Plus1 => (1, "+1".to_string()),
            Step::Minus1 => (-1, "-1".to_string()),
            Step::CustomUp => (custom, format!("+{}", custom)),
            Step::CustomDown => (custom.wrapping_neg(), format!("-{}", custom)),
        }
    }
}

/// A complete user action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Raw life change with a free-form label.
    AdjustLife {
        player: PlayerId,
        delta: i64,
        label: String,
    },
    /// A button press resolved against the player's custom amount.
    Press { player: PlayerId, step: Step },
    /// Set the custom step size.
    SetCustomAmount { player: PlayerId, amount: i64 },
    /// Replace the display name.
    Rename { player: PlayerId, name: String },
    /// Append a default player.
    AddPlayer,
    /// Restore the default session.
    Reset,
}

impl Action {
    /// The seat this action targets, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Action::AdjustLife { player, .. }
            | Action::Press { player, .. }
            | Action::SetCustomAmount { player, .. }
            | Action::Rename { player, .. } => Some(*player),
            Action::AddPlayer | Action::Reset => None,
        }
    }

    /// Whether applying this action changes a life total.
    #[must_use]
    pub fn changes_life(&self) -> bool {
        matches!(self, Action::AdjustLife { .. } | Action::Press { .. })
    }
}
