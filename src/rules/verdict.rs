//! End-of-game evaluation.
//!
//! `evaluate_end` is a pure function of the snapshot. The caller runs it
//! after every command; nothing in the game state records that a game has
//! ended.

use serde::{Deserialize, Serialize};

use crate::core::{Game, Seat};

/// Outcome of a game, or `InProgress` while it continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    InProgress,
    /// The opponent's health reached zero.
    HumanWins,
    /// The human's health reached zero.
    OpponentWins,
    /// The market ran out with the human ahead on health.
    PlayerWinsOnHealth,
    /// The market ran out with the opponent ahead on health.
    OpponentWinsOnHealth,
    /// The market ran out with equal health.
    Draw,
}

impl Verdict {
    /// Whether the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Self::InProgress
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(self) -> Option<Seat> {
        match self {
            Self::HumanWins | Self::PlayerWinsOnHealth => Some(Seat::Human),
            Self::OpponentWins | Self::OpponentWinsOnHealth => Some(Seat::Opponent),
            Self::InProgress | Self::Draw => None,
        }
    }

    /// Human-readable result line.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InProgress => "The game is still ongoing",
            Self::HumanWins => "Player wins",
            Self::OpponentWins | Self::OpponentWinsOnHealth => "Computer wins",
            Self::PlayerWinsOnHealth => "Player wins on Health",
            Self::Draw => "The game ends in a draw",
        }
    }
}

/// Where the turn state machine stands, as seen by the caller.
///
/// The opponent's turn runs inside `end_turn` and is never observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    AwaitingHumanAction,
    GameOver(Verdict),
}

/// Derive the verdict from the current state.
///
/// Order of checks:
/// 1. Human health ≤ 0: the opponent wins, even if the opponent is also
///    at or below zero.
/// 2. Opponent health ≤ 0: the human wins.
/// 3. Market exhausted: higher health wins, equal health draws.
#[must_use]
pub fn evaluate_end(game: &Game) -> Verdict {
    let human = game.human.health;
    let opponent = game.opponent.health;

    if human <= 0 {
        Verdict::OpponentWins
    } else if opponent <= 0 {
        Verdict::HumanWins
    } else if game.market.is_exhausted() {
        match human.cmp(&opponent) {
            std::cmp::Ordering::Greater => Verdict::PlayerWinsOnHealth,
            std::cmp::Ordering::Less => Verdict::OpponentWinsOnHealth,
            std::cmp::Ordering::Equal => Verdict::Draw,
        }
    } else {
        Verdict::InProgress
    }
}

/// Derive the turn phase from the current state.
#[must_use]
pub fn phase(game: &Game) -> TurnPhase {
    match evaluate_end(game) {
        Verdict::InProgress => TurnPhase::AwaitingHumanAction,
        verdict => TurnPhase::GameOver(verdict),
    }
}
