//! Core engine types: players, state, commands, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Command;
pub use config::{Personality, RulesConfig};
pub use error::{EngineError, EngineResult};
pub use player::{Player, Seat};
pub use rng::{GameRng, GameRngState, Shuffler};
pub use state::{Game, GameBuilder};
