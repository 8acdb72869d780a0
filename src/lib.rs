//! # market-duel
//!
//! A two-player deckbuilding engine: one human against a scripted opponent,
//! both buying from a shared market that slowly runs dry.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: There is no resident game. Every operation takes a
//!    `Game` snapshot and returns the next one.
//!
//! 2. **Atomic Commands**: A rejected command leaves the snapshot exactly as
//!    it was. Rule violations are `EngineError` values, never panics.
//!
//! 3. **Deterministic Shuffles**: The RNG position travels with the snapshot,
//!    so a reloaded game keeps shuffling the same way.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Zones use `im::Vector`, so copying a
//!   snapshot before applying a command is cheap.
//!
//! - **Policies Behind Traits**: The rules (`RulesEngine`), the opponent
//!   (`OpponentPolicy`) and the shuffle (`Shuffler`) can each be swapped.
//!
//! ## Modules
//!
//! - `core`: Players, game state, commands, RNG, configuration, errors
//! - `cards`: Card records and the standard card set
//! - `zones`: Card zones and the shared market
//! - `rules`: Turn engine, opponent policy, verdict, status projection
//! - `api`: `new_game`, `apply_command`, `project_status`, `evaluate_end`

pub mod api;
pub mod cards;
pub mod core;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Command, EngineError, EngineResult, Game, GameBuilder, GameRng, GameRngState, Personality,
    Player, RulesConfig, Seat, Shuffler,
};

pub use crate::cards::Card;

pub use crate::zones::{Market, MarketSlot, Zone};

pub use crate::rules::{
    DuelRules, GreedyBuyer, OpponentPolicy, OpponentReport, RulesEngine, StatusView, TurnPhase,
    Verdict,
};

pub use crate::api::{apply_command, evaluate_end, new_game, project_status, CommandResult};
