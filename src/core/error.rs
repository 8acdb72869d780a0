//! Engine error types.
//!
//! Every rule violation is reported as an `EngineError` value. None of them
//! are fatal: the caller's snapshot is left exactly as it was and the game
//! can continue with another command.

use thiserror::Error;

use crate::rules::Verdict;

/// Errors produced while building a game or applying a command.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Index out of range, non-numeric, or missing for a command that needs one.
    #[error("Invalid card index: {index}")]
    InvalidCardIndex { index: String },

    #[error("Insufficient money to buy {card}. This card costs {cost} but you only have {available}")]
    InsufficientMoney {
        card: String,
        cost: u32,
        available: u32,
    },

    #[error("No supplements left")]
    InsufficientSupplement,

    /// Both the deck and the discard pile were empty when a draw was needed.
    #[error("Cannot draw from empty {zone} with nothing to reshuffle")]
    EmptyZone { zone: &'static str },

    #[error("Unrecognized action: {action}")]
    InvalidAction { action: String },

    #[error("Invalid card: {reason}")]
    InvalidCard { reason: String },

    #[error("Invalid rules configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A money or attack total would not fit its accumulator.
    #[error("Playing this would overflow the {stat} total")]
    Overflow { stat: &'static str },

    #[error("The game is over: {}", verdict.message())]
    GameOver { verdict: Verdict },

    /// A snapshot could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn invalid_index(index: impl ToString) -> Self {
        Self::InvalidCardIndex {
            index: index.to_string(),
        }
    }

    pub fn invalid_action(action: impl Into<String>) -> Self {
        Self::InvalidAction {
            action: action.into(),
        }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}
