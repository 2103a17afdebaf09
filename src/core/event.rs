//! Life-change events and their history entries.
//!
//! Every life adjustment produces one `GameEvent`. The description is
//! rendered once at creation so later renames never rewrite history.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Unique identifier for a history entry.
///
/// Allocated in sequence by the session and never reused, including
/// across resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl EventId {
    /// Create a new event ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The id after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event({})", self.0)
    }
}

/// One recorded life change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Identity for display lists.
    pub id: EventId,

    /// Whose life changed.
    pub player: PlayerId,

    /// Signed change applied.
    pub delta: i64,

    /// Label of the control that fired it ("+1", "-5", ...).
    pub label: String,

    /// Human-readable snapshot, e.g. `Player 2 lost 3 life. (-3)`.
    pub description: String,
}

impl GameEvent {
    /// Create an event, rendering the description from the player's
    /// name at this moment.
    pub fn life_change(
        id: EventId,
        player: PlayerId,
        name: &str,
        delta: i64,
        label: impl Into<String>,
    ) -> Self {
        let label = label.into();
        let description = describe(name, delta, &label);
        Self {
            id,
            player,
            delta,
            label,
            description,
        }
    }

    /// True for a positive change.
    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.delta > 0
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

/// Zero counts as a loss: only a strictly positive delta reads "gained".
fn describe(name: &str, delta: i64, label: &str) -> String {
    let verb = if delta > 0 { "gained" } else { "lost" };
    format!("{} {} {} life. ({})", name, verb, delta.unsigned_abs(), label)
}
