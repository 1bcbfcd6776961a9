//! Rejection reasons for player actions.

use crate::state::{GameStatus, Position};

/// Why a player action was not accepted. A rejected action leaves the game
/// state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionRejected {
    #[error("actions are only accepted while running (status: {status})")]
    NotRunning { status: GameStatus },

    #[error("destination {destination} is blocked")]
    Blocked { destination: Position },

    #[error("no pulse charges and no usable medkit")]
    NoPulseCharges,
}

impl ActionRejected {
    /// Status-bar text for the rejection.
    pub const fn as_message(&self) -> &'static str {
        match self {
            Self::NotRunning { .. } => "Game is not running",
            Self::Blocked { .. } => "Blocked path",
            Self::NoPulseCharges => "No pulse charges",
        }
    }

    /// Returns a static identifier for this rejection, for logs and tests.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotRunning { .. } => "not_running",
            Self::Blocked { .. } => "blocked",
            Self::NoPulseCharges => "no_pulse_charges",
        }
    }
}
